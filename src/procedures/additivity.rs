//! Additivity of patterns, and the compatibility graph of a pattern collection.
//!
//! Two patterns are *additive* if no single operator changes a variable of both.
//! Distances under the two abstractions then account for the costs of disjoint operator
//! applications, so their sum never counts one application twice and remains an admissible
//! estimate.
//!
//! Only entries whose precondition differs from their effect count: an entry which merely reads
//! a variable (a prevail condition) does not let the operator move either abstraction.
//!
//! The relation is symmetric and irreflexive, and is recorded as an undirected graph over
//! pattern indices --- the *compatibility graph* --- whose
//! [maximal cliques](crate::generic::max_cliques) are the groups the
//! [canonical collection](crate::canonical) sums over.

use crate::{
    misc::log::targets::{self},
    structures::{operator::Operator, pattern::Pattern, task::TnfTask},
};

/// True if some entry of `operator` changes a variable of `pattern`, false otherwise.
pub fn affects_pattern(operator: &Operator, pattern: &Pattern) -> bool {
    operator
        .entries
        .iter()
        .any(|entry| entry.is_change() && pattern.contains(&entry.variable))
}

/// The compatibility graph of a pattern collection, as per-vertex adjacency lists.
///
/// The outer vector has one entry for each pattern, representing the vertices of the graph.
/// Each such entry lists the other vertices whose pattern is additive with the vertex's own,
/// so every edge is readable from either endpoint.
///
/// The scan over operators stops at the first operator affecting both patterns of a pair.
pub fn compatibility_graph(patterns: &[Pattern], task: &TnfTask) -> Vec<Vec<usize>> {
    let mut graph: Vec<Vec<usize>> = vec![Vec::new(); patterns.len()];

    for i in 0..patterns.len() {
        for j in (i + 1)..patterns.len() {
            let additive = !task.operators.iter().any(|operator| {
                affects_pattern(operator, &patterns[i]) && affects_pattern(operator, &patterns[j])
            });

            if additive {
                graph[i].push(j);
                graph[j].push(i);
            }
        }
    }

    log::debug!(
        target: targets::ADDITIVITY,
        "{} patterns, {} additive pairs",
        patterns.len(),
        graph.iter().map(Vec::len).sum::<usize>() / 2,
    );

    graph
}
