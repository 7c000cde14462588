/*!
The canonical collection --- one pattern database per pattern, and the maximal additive cliques.

A collection owns a [pattern database](crate::db::pdb) for each pattern of a sequence, in
sequence order, together with every maximal clique of the
[compatibility graph](crate::procedures::additivity) over the same indices.
Everything is computed at construction; queries only read.

The canonical heuristic value of a state is the maximum over the cliques of the summed
per-pattern distances within the clique.
As every pair within a clique is additive, each sum is admissible, and the maximum over all
maximal cliques dominates every individual database's value and every sum over a subset of a
clique.

# Example

```rust
# use canonical_pdb::builder::TaskBuilder;
# use canonical_pdb::canonical::CanonicalPatternDatabases;
# use canonical_pdb::config::Config;
# use canonical_pdb::structures::distance::Distance;
let mut builder = TaskBuilder::new();
let x = builder.fresh_variable(2).unwrap();
let y = builder.fresh_variable(2).unwrap();

// A single operator changes both variables, so the two patterns are not additive.
builder.add_operator([(x, 0, 1), (y, 0, 1)], 1).unwrap();
builder.set_goal(x, 1).unwrap();
builder.set_goal(y, 1).unwrap();
let task = builder.finish().unwrap();

let collection =
    CanonicalPatternDatabases::new(&task, &[vec![x], vec![y]], &Config::default()).unwrap();

assert_eq!(collection.cliques(), &[vec![0], vec![1]]);
assert_eq!(collection.compute_heuristic(&[0, 0]), Distance::Finite(1));
```
*/

use crate::{
    config::Config,
    db::pdb::PatternDatabase,
    generic::max_cliques,
    misc::log::targets::{self},
    procedures::additivity,
    structures::{distance::Distance, pattern::Pattern, task::TnfTask, variable::Value},
    types::err::ErrorKind,
};

/// A canonical collection of pattern databases.
#[derive(Clone, Debug)]
pub struct CanonicalPatternDatabases {
    /// One database per pattern, in pattern order.
    pdbs: Vec<PatternDatabase>,

    /// Every maximal clique of the compatibility graph, over database indices.
    cliques: Vec<Vec<usize>>,
}

impl CanonicalPatternDatabases {
    /// Builds a database for each pattern, the compatibility graph of the patterns, and the
    /// graph's maximal cliques.
    pub fn new(task: &TnfTask, patterns: &[Pattern], config: &Config) -> Result<Self, ErrorKind> {
        Self::with_enumerator(task, patterns, config, max_cliques::max_cliques)
    }

    /// As [new](CanonicalPatternDatabases::new), with the clique enumerator supplied by the
    /// caller.
    ///
    /// The enumerator must return *every* maximal clique of the graph --- singletons for
    /// isolated vertices included, as a vertex trivially forms a clique of size one.
    /// An enumerator which drops cliques weakens the heuristic; one which returns non-maximal
    /// cliques only adds dominated sums.
    pub fn with_enumerator(
        task: &TnfTask,
        patterns: &[Pattern],
        config: &Config,
        enumerator: impl Fn(&[Vec<usize>]) -> Vec<Vec<usize>>,
    ) -> Result<Self, ErrorKind> {
        let mut pdbs = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            pdbs.push(PatternDatabase::new(task, pattern, config)?);
        }

        let graph = additivity::compatibility_graph(patterns, task);
        let cliques = enumerator(&graph);

        log::debug!(
            target: targets::CANONICAL,
            "{} patterns, {} maximal additive cliques",
            pdbs.len(),
            cliques.len(),
        );

        Ok(CanonicalPatternDatabases { pdbs, cliques })
    }

    /// The canonical heuristic value of `state`, a full state of the original task.
    ///
    /// A single database reporting [Unreachable](Distance::Unreachable) proves the state
    /// unsolvable, and the query returns immediately --- in particular, no sum involving the
    /// unreachable value is formed.
    pub fn compute_heuristic(&self, state: &[Value]) -> Distance {
        // Values are looked up once per database, as a database may occur in several cliques.
        let mut values = Vec::with_capacity(self.pdbs.len());
        for pdb in &self.pdbs {
            match pdb.lookup_distance(state) {
                Distance::Unreachable => return Distance::Unreachable,
                finite => values.push(finite),
            }
        }

        let mut h = Distance::Finite(0);
        for clique in &self.cliques {
            let clique_value = clique
                .iter()
                .fold(Distance::Finite(0), |sum, &index| sum + values[index]);

            if clique_value > h {
                h = clique_value;
            }
        }

        h
    }

    /// The databases of the collection, in pattern order.
    pub fn pdbs(&self) -> &[PatternDatabase] {
        &self.pdbs
    }

    /// The maximal additive cliques, over database indices.
    pub fn cliques(&self) -> &[Vec<usize>] {
        &self.cliques
    }
}
