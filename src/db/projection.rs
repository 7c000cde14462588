/*!
The projection of a task to a pattern, with perfect hashing of abstract states.

An abstract state assigns a value to each pattern variable, so the abstract state space is the
product of the pattern variables' domains and can be combinatorially large even for small
patterns.
No structure over abstract states is materialized.
Instead, a projection fixes a bijection between abstract states and dense indices in
[0, [num_states](Projection::num_states)) through mixed-radix hashing: index *i* encodes the
abstract state whose value at pattern position *p* is `(i / multiplier[p]) % domain[p]`.

[rank_state](Projection::rank_state) and [unrank_state](Projection::unrank_state) are mutual
inverses over the index range, and [project_state](Projection::project_state) is total: every
full state of the task projects to some valid abstract index.

# The projected task

The projection also restricts the task itself: domain sizes and the goal are restricted to the
pattern, and each operator keeps the entries whose variable lies in the pattern, with variables
remapped to pattern positions.

An operator whose restriction changes no pattern variable is a self-loop in the abstraction.
Applying it backward yields the state it was applied to, at a non-negative added cost, so it
cannot improve any recorded distance and is elided from the projected operator set by default.
[Config::retain_vacuous_operators](crate::config::Config) keeps such operators instead, omitting
only those with no surviving entry and zero cost.
*/

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{
        operator::{Operator, OperatorEntry},
        pattern::Pattern,
        state::State,
        task::TnfTask,
        variable::{Value, Variable},
    },
    types::err::{ErrorKind, PatternError},
};

/// The abstraction induced by a pattern: ranking, projection, and the projected task.
#[derive(Clone, Debug)]
pub struct Projection {
    /// The pattern, sorted and duplicate free.
    pattern: Pattern,

    /// The mixed-radix multiplier of each pattern position.
    multipliers: Vec<usize>,

    /// A count of the abstract states, the product of the pattern's domain sizes.
    num_states: usize,

    /// The task restricted to the pattern, with variables remapped to pattern positions.
    projected_task: TnfTask,
}

impl Projection {
    /// The projection of `task` to `pattern`.
    ///
    /// The pattern is normalized (sorted, duplicates removed) and checked: it must be non-empty
    /// and name only variables of the task, and the abstract state space must be indexable.
    pub fn new(task: &TnfTask, pattern: &Pattern, config: &Config) -> Result<Self, ErrorKind> {
        let mut pattern = pattern.clone();
        pattern.sort_unstable();
        pattern.dedup();

        if pattern.is_empty() {
            return Err(PatternError::Empty.into());
        }

        for &variable in &pattern {
            if (variable as usize) >= task.num_variables() {
                return Err(PatternError::UnknownVariable(variable).into());
            }
        }

        let mut multipliers = Vec::with_capacity(pattern.len());
        let mut num_states: usize = 1;
        for &variable in &pattern {
            multipliers.push(num_states);
            num_states = num_states
                .checked_mul(task.domain_sizes[variable as usize] as usize)
                .ok_or(PatternError::TooManyStates)?;
        }

        let projected_task = project_task(task, &pattern, config);

        log::debug!(
            target: targets::PROJECTION,
            "Pattern {:?}: {} abstract states, {} of {} operators kept",
            pattern,
            num_states,
            projected_task.operators.len(),
            task.operators.len(),
        );

        Ok(Projection {
            pattern,
            multipliers,
            num_states,
            projected_task,
        })
    }

    /// The pattern of the projection, sorted and duplicate free.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// A count of the abstract states of the projection.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The task restricted to the pattern.
    ///
    /// Variables of the projected task are pattern positions: variable *p* of the projected task
    /// is `pattern()[p]` in the original task.
    pub fn projected_task(&self) -> &TnfTask {
        &self.projected_task
    }

    /// Restricts a full state of the original task to the pattern.
    pub fn project_state(&self, state: &[Value]) -> State {
        self.pattern
            .iter()
            .map(|&variable| state[variable as usize])
            .collect()
    }

    /// The index of an abstract state.
    pub fn rank_state(&self, state: &[Value]) -> usize {
        state
            .iter()
            .zip(&self.multipliers)
            .map(|(&value, &multiplier)| value as usize * multiplier)
            .sum()
    }

    /// The abstract state at `index`.
    ///
    /// Inverse to [rank_state](Projection::rank_state) over [0, [num_states](Projection::num_states)).
    pub fn unrank_state(&self, index: usize) -> State {
        self.multipliers
            .iter()
            .zip(&self.projected_task.domain_sizes)
            .map(|(&multiplier, &domain_size)| ((index / multiplier) % domain_size as usize) as Value)
            .collect()
    }
}

/// The restriction of `task` to `pattern`, with variables remapped to pattern positions.
///
/// `pattern` is sorted and duplicate free.
fn project_task(task: &TnfTask, pattern: &Pattern, config: &Config) -> TnfTask {
    let domain_sizes = pattern
        .iter()
        .map(|&variable| task.domain_sizes[variable as usize])
        .collect();

    let goal = pattern
        .iter()
        .map(|&variable| task.goal[variable as usize])
        .collect();

    let mut operators = Vec::new();
    for operator in &task.operators {
        let entries: Vec<OperatorEntry> = operator
            .entries
            .iter()
            .filter_map(|entry| {
                pattern
                    .binary_search(&entry.variable)
                    .ok()
                    .map(|position| OperatorEntry {
                        variable: position as Variable,
                        precondition: entry.precondition,
                        effect: entry.effect,
                    })
            })
            .collect();

        let restriction = Operator::new(entries, operator.cost);

        let keep = if config.retain_vacuous_operators {
            !restriction.entries.is_empty() || restriction.cost > 0
        } else {
            restriction.changes_some_variable()
        };

        if keep {
            operators.push(restriction);
        }
    }

    TnfTask {
        domain_sizes,
        operators,
        goal,
    }
}
