//! Tools for building a task.
//!
//! The builder checks the transition normal form invariants as parts arrive, so a malformed
//! task is reported at the point of the mistake rather than folded into a distance table.
//! Checks follow [TnfTask::validate]; a finished task always validates.

use crate::{
    structures::{
        operator::{Cost, Operator, OperatorEntry},
        task::TnfTask,
        variable::{DomainSize, Value, Variable},
    },
    types::err::{BuildError, ErrorKind, TaskError},
};

/// Incremental construction of a [TnfTask].
///
/// ```rust
/// # use canonical_pdb::builder::TaskBuilder;
/// let mut builder = TaskBuilder::new();
///
/// let position = builder.fresh_variable(3).unwrap();
/// let loaded = builder.fresh_variable(2).unwrap();
///
/// // Drive from location 0 to location 1, with the package loaded.
/// builder.add_operator([(position, 0, 1), (loaded, 1, 1)], 4).unwrap();
///
/// builder.set_goal(position, 1).unwrap();
/// assert!(builder.clone().finish().is_err()); // no goal value for `loaded` yet
///
/// builder.set_goal(loaded, 0).unwrap();
/// assert!(builder.finish().is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TaskBuilder {
    domain_sizes: Vec<DomainSize>,
    operators: Vec<Operator>,
    goal: Vec<Option<Value>>,
}

impl TaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh variable with `domain_size` values, [0..`domain_size`).
    pub fn fresh_variable(&mut self, domain_size: DomainSize) -> Result<Variable, ErrorKind> {
        if domain_size == 0 {
            return Err(BuildError::EmptyDomain.into());
        }

        let variable = self.domain_sizes.len() as Variable;
        self.domain_sizes.push(domain_size);
        self.goal.push(None);

        Ok(variable)
    }

    /// Adds an operator, given as (variable, precondition, effect) entries and a cost.
    ///
    /// Every named variable must be fresh from the builder, every value must be in the
    /// variable's domain, and no variable may be named twice.
    pub fn add_operator<E>(&mut self, entries: E, cost: Cost) -> Result<(), ErrorKind>
    where
        E: IntoIterator<Item = (Variable, Value, Value)>,
    {
        let mut operator_entries: Vec<OperatorEntry> = Vec::new();

        for (variable, precondition, effect) in entries {
            let Some(&domain_size) = self.domain_sizes.get(variable as usize) else {
                return Err(TaskError::UnknownVariable(variable).into());
            };

            if precondition >= domain_size || effect >= domain_size {
                return Err(TaskError::EntryValueOutOfRange(variable).into());
            }

            if operator_entries.iter().any(|prior| prior.variable == variable) {
                return Err(TaskError::DuplicateEntryVariable(variable).into());
            }

            operator_entries.push(OperatorEntry {
                variable,
                precondition,
                effect,
            });
        }

        self.operators.push(Operator::new(operator_entries, cost));

        Ok(())
    }

    /// Sets the goal value of `variable`.
    pub fn set_goal(&mut self, variable: Variable, value: Value) -> Result<(), ErrorKind> {
        let Some(&domain_size) = self.domain_sizes.get(variable as usize) else {
            return Err(TaskError::UnknownVariable(variable).into());
        };

        if value >= domain_size {
            return Err(TaskError::GoalValueOutOfRange(variable).into());
        }

        self.goal[variable as usize] = Some(value);

        Ok(())
    }

    /// Finalizes the task.
    ///
    /// Transition normal form requires a full goal assignment, so every variable must have
    /// received a goal value.
    pub fn finish(self) -> Result<TnfTask, ErrorKind> {
        let mut goal = Vec::with_capacity(self.goal.len());

        for (variable, value) in self.goal.iter().enumerate() {
            match value {
                Some(value) => goal.push(*value),
                None => return Err(BuildError::IncompleteGoal(variable as Variable).into()),
            }
        }

        Ok(TnfTask {
            domain_sizes: self.domain_sizes,
            operators: self.operators,
            goal,
        })
    }
}
