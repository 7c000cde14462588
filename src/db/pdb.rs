/*!
The pattern database --- exact abstract goal distances for one pattern.

A pattern database owns the [projection](crate::db::projection) for its pattern and a table with
one [distance](crate::structures::distance) per abstract state, indexed by rank.
The table is filled once, at construction, by the
[regression search](crate::procedures::regression), and never mutated afterwards.

Lookups project the queried full state, rank the result, and read the table.
As the table is immutable and lookups take `&self`, any number of readers may query a database
concurrently.
*/

use crate::{
    config::Config,
    db::projection::Projection,
    misc::log::targets::{self},
    procedures::regression,
    structures::{distance::Distance, pattern::Pattern, task::TnfTask, variable::Value},
    types::err::ErrorKind,
};

/// A pattern database: the projection for a pattern and the goal distance of every abstract
/// state.
#[derive(Clone, Debug)]
pub struct PatternDatabase {
    projection: Projection,
    distances: Vec<Distance>,
}

impl PatternDatabase {
    /// Builds the database for `pattern` by exhausting the regression search on the projected
    /// task.
    ///
    /// Every abstract state the search does not settle is unreachable: the pattern alone proves
    /// the original task unsolvable from any concrete state projecting to it.
    pub fn new(task: &TnfTask, pattern: &Pattern, config: &Config) -> Result<Self, ErrorKind> {
        let projection = Projection::new(task, pattern, config)?;
        let distances = regression::goal_distances(&projection);

        log::debug!(
            target: targets::REGRESSION,
            "Pattern {:?}: {} of {} abstract states reachable",
            projection.pattern(),
            distances.iter().filter(|distance| distance.is_finite()).count(),
            distances.len(),
        );

        Ok(PatternDatabase {
            projection,
            distances,
        })
    }

    /// The exact goal distance of `state` within the abstraction.
    ///
    /// `state` is a full state of the original task.
    pub fn lookup_distance(&self, state: &[Value]) -> Distance {
        let abstract_state = self.projection.project_state(state);
        let index = self.projection.rank_state(&abstract_state);
        self.distances[index]
    }

    /// The pattern of the database.
    pub fn pattern(&self) -> &Pattern {
        self.projection.pattern()
    }

    /// The projection of the database.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// The distance table, indexed by abstract state rank.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }
}
