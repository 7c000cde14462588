//! Backward regression search over an abstract state space.
//!
//! # Overview
//!
//! [goal_distances] computes the exact goal distance of every abstract state of a
//! [projection](crate::db::projection) by a uniform cost search *from* the abstract goal,
//! with the roles of precondition and effect swapped.
//!
//! As the projected task is in transition normal form, the swap is sufficient to turn the search
//! into a regression: an operator is backward-applicable to a state *s* whenever *s* assigns
//! every entry's variable its effect value, and applying the operator backward yields the
//! predecessor in which each such variable holds its precondition value instead.
//! So the cost-minimal backward path from the goal to *s* is a cost-minimal forward path from
//! *s* to the goal.
//!
//! The search runs on state indices rather than states --- [rank](crate::db::projection::Projection::rank_state)
//! to go from a state to its index, [unrank](crate::db::projection::Projection::unrank_state)
//! for the reverse --- since the abstract state space is combinatorial and only a distance table
//! indexed by rank is wanted.
//! Predecessors are generated on the fly from the projected operators; no adjacency structure is
//! built.
//!
//! Roughly, the loop is:
//!
//! ```rust,ignore
//! queue.push((0, goal_index));
//!
//! while let Some((distance, index)) = queue.pop_min() {
//!     if distance is stale for index { continue }
//!
//!     for operator in projected operators {
//!         if let Some(predecessor) = backward_apply(operator, unrank(index)) {
//!             relax rank(predecessor) to distance + operator.cost
//!         }
//!     }
//! }
//! ```
//!
//! The queue admits duplicate entries per state; an entry whose distance exceeds the recorded
//! distance of its state is stale and discarded on pop (lazy deletion).
//! Entries are ordered by distance and then by state index, so pop order --- and with it the
//! table --- is deterministic for a fixed projection.
//!
//! The search terminates as the abstract state space is finite and every push strictly improves
//! a recorded distance.
//! On termination every settled distance is exact, and every state never settled keeps
//! [Unreachable](Distance::Unreachable).

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    db::projection::Projection,
    misc::log::targets::{self},
    structures::{
        distance::Distance,
        operator::{Cost, Operator},
        state::State,
        variable::Value,
    },
};

/// An entry in the queue is a pair (d, i) where d is a tentative goal distance of the abstract
/// state with index i.
type QueueEntry = (Cost, usize);

/// The goal distance of every abstract state of `projection`, indexed by rank.
pub fn goal_distances(projection: &Projection) -> Vec<Distance> {
    let task = projection.projected_task();

    let mut distances = vec![Distance::Unreachable; projection.num_states()];

    let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();

    let goal_index = projection.rank_state(&task.goal);
    distances[goal_index] = Distance::Finite(0);
    queue.push(Reverse((0, goal_index)));

    while let Some(Reverse((current_distance, current_index))) = queue.pop() {
        if Distance::Finite(current_distance) > distances[current_index] {
            continue;
        }

        let current_state = projection.unrank_state(current_index);

        for operator in &task.operators {
            let Some(predecessor) = backward_apply(operator, &current_state) else {
                continue;
            };

            let predecessor_index = projection.rank_state(&predecessor);
            let new_distance = current_distance.saturating_add(operator.cost);

            if Distance::Finite(new_distance) < distances[predecessor_index] {
                log::trace!(
                    target: targets::REGRESSION,
                    "State {predecessor_index} to distance {new_distance}",
                );
                distances[predecessor_index] = Distance::Finite(new_distance);
                queue.push(Reverse((new_distance, predecessor_index)));
            }
        }
    }

    distances
}

/// The predecessor obtained by applying `operator` backward to `state`, if the operator is
/// backward-applicable.
///
/// The operator is backward-applicable whenever `state` assigns every entry's variable its
/// effect value; the predecessor assigns each such variable its precondition value instead.
pub fn backward_apply(operator: &Operator, state: &[Value]) -> Option<State> {
    for entry in &operator.entries {
        if state[entry.variable as usize] != entry.effect {
            return None;
        }
    }

    let mut predecessor = state.to_vec();
    for entry in &operator.entries {
        predecessor[entry.variable as usize] = entry.precondition;
    }

    Some(predecessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::operator::OperatorEntry;

    #[test]
    fn backward_application() {
        let operator = Operator::new(
            vec![
                OperatorEntry {
                    variable: 0,
                    precondition: 0,
                    effect: 1,
                },
                OperatorEntry {
                    variable: 1,
                    precondition: 2,
                    effect: 2,
                },
            ],
            1,
        );

        assert_eq!(backward_apply(&operator, &[1, 2]), Some(vec![0, 2]));
        assert_eq!(backward_apply(&operator, &[0, 2]), None);
        assert_eq!(backward_apply(&operator, &[1, 0]), None);
    }
}
