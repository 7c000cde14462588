/*!
Operators in transition normal form.

An operator is a collection of [entries](OperatorEntry) together with a non-negative cost.
Each entry names a variable, the value required of that variable for the operator to apply (the
precondition), and the value the variable holds afterwards (the effect).

An entry whose precondition equals its effect only reads the variable --- such prevail conditions
constrain applicability but do not *change* the variable, which matters for
[additivity](crate::procedures::additivity).
*/

use crate::structures::variable::{Value, Variable};

/// The cost of applying an operator.
pub type Cost = u32;

/// A precondition/effect pair for a single variable of an operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OperatorEntry {
    /// The variable the entry touches.
    pub variable: Variable,

    /// The value required of the variable for the operator to apply.
    pub precondition: Value,

    /// The value the variable holds after the operator is applied.
    pub effect: Value,
}

impl OperatorEntry {
    /// True if the entry changes its variable, false if it only reads it.
    pub fn is_change(&self) -> bool {
        self.precondition != self.effect
    }
}

/// An operator: entries over distinct variables, and a cost.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Operator {
    /// The entries of the operator, at most one per variable.
    pub entries: Vec<OperatorEntry>,

    /// The cost of applying the operator.
    pub cost: Cost,
}

impl Operator {
    pub fn new(entries: Vec<OperatorEntry>, cost: Cost) -> Self {
        Operator { entries, cost }
    }

    /// True if some entry of the operator changes a variable.
    pub fn changes_some_variable(&self) -> bool {
        self.entries.iter().any(OperatorEntry::is_change)
    }
}
