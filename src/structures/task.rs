/*!
Tasks in transition normal form.

A task is a vector of per-variable domain sizes, a collection of [operators](super::operator),
and a goal state assigning a value to every variable.

The library assumes tasks are well-formed, and [validate](TnfTask::validate) makes the
assumption checkable: a malformed task is reported as an error at construction rather than
silently folded into a distance table.
[TaskBuilder](crate::builder::TaskBuilder) performs the same checks incrementally.
*/

use crate::{
    structures::{
        operator::Operator,
        state::State,
        variable::{DomainSize, Variable},
    },
    types::err::{ErrorKind, TaskError},
};

/// A planning task in transition normal form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TnfTask {
    /// The domain size of each variable, indexed by variable.
    pub domain_sizes: Vec<DomainSize>,

    /// The operators of the task.
    pub operators: Vec<Operator>,

    /// The goal state, a full assignment.
    pub goal: State,
}

impl TnfTask {
    /// A task from parts, checked against the TNF invariants.
    pub fn new(
        domain_sizes: Vec<DomainSize>,
        operators: Vec<Operator>,
        goal: State,
    ) -> Result<Self, ErrorKind> {
        let task = TnfTask {
            domain_sizes,
            operators,
            goal,
        };
        task.validate()?;
        Ok(task)
    }

    /// A count of the variables of the task.
    pub fn num_variables(&self) -> usize {
        self.domain_sizes.len()
    }

    /// Checks the TNF invariants:
    /// - The goal assigns an in-domain value to every variable.
    /// - Every operator entry names a known variable, with in-domain precondition and effect
    ///   values, and no operator touches a variable twice.
    pub fn validate(&self) -> Result<(), ErrorKind> {
        if self.goal.len() != self.domain_sizes.len() {
            return Err(TaskError::GoalLength.into());
        }

        for (variable, &value) in self.goal.iter().enumerate() {
            if value >= self.domain_sizes[variable] {
                return Err(TaskError::GoalValueOutOfRange(variable as Variable).into());
            }
        }

        for operator in &self.operators {
            for (position, entry) in operator.entries.iter().enumerate() {
                let Some(&domain_size) = self.domain_sizes.get(entry.variable as usize) else {
                    return Err(TaskError::UnknownVariable(entry.variable).into());
                };

                if entry.precondition >= domain_size || entry.effect >= domain_size {
                    return Err(TaskError::EntryValueOutOfRange(entry.variable).into());
                }

                if operator.entries[..position]
                    .iter()
                    .any(|prior| prior.variable == entry.variable)
                {
                    return Err(TaskError::DuplicateEntryVariable(entry.variable).into());
                }
            }
        }

        Ok(())
    }
}
