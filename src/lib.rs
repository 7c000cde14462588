//! A library for computing admissible pattern database heuristics for classical planning tasks.
//!
//! canonical_pdb computes, for a planning task in transition normal form (TNF) and a collection of
//! patterns (subsets of the task's variables), the exact goal distance of every abstract state
//! under the projection to each pattern, and combines the per-pattern distances into the
//! *canonical* heuristic: the maximum, over all maximal groups of pairwise additive patterns, of
//! the summed per-pattern values.
//!
//! The canonical value dominates every individual pattern database value and every sum over a
//! subset of an additive group, while remaining admissible, and so is safe for use with optimal
//! search algorithms such as A*.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [canonical collection](canonical).
//!
//! Collections are built from a [task](structures::task) and a sequence of
//! [patterns](structures::pattern), with a [configuration](config).
//! Tasks may be built programmatically through the [builder], with fail-fast validation of the
//! TNF invariants.
//!
//! Internally, and at a high-level, a collection is a handful of write-once structures:
//! - For each pattern, a [pattern database](db::pdb) stores the exact abstract goal distances,
//!   computed by a [backward regression search](procedures::regression) over a
//!   [perfectly-hashed](db::projection) abstract state space.
//! - The [additivity analysis](procedures::additivity) records which pairs of patterns no single
//!   operator affects together, as a compatibility graph.
//! - The [maximal cliques](generic::max_cliques) of that graph are the groups whose values may be
//!   summed.
//!
//! Everything is computed once, at construction.
//! Queries through [compute_heuristic](canonical::CanonicalPatternDatabases::compute_heuristic)
//! read the tables without mutation, so a collection may be shared read-only across search
//! threads.
//!
//! Useful starting points, then, may be:
//! - The [regression search](procedures::regression) to inspect how distance tables are filled.
//! - The [canonical module](canonical) to inspect how per-pattern values combine.
//! - The [structures] to familiarise yourself with the abstract elements of a task (variables,
//!   operators, distances, etc.).
//!
//! # Example
//!
//! Two variables, each moved to its goal value by its own operator.
//! No operator changes both variables, so the patterns are additive and their distances sum.
//!
//! ```rust
//! # use canonical_pdb::builder::TaskBuilder;
//! # use canonical_pdb::canonical::CanonicalPatternDatabases;
//! # use canonical_pdb::config::Config;
//! # use canonical_pdb::structures::distance::Distance;
//! let mut builder = TaskBuilder::new();
//! let x = builder.fresh_variable(2).unwrap();
//! let y = builder.fresh_variable(2).unwrap();
//!
//! builder.add_operator([(x, 0, 1)], 1).unwrap();
//! builder.add_operator([(y, 0, 1)], 1).unwrap();
//!
//! builder.set_goal(x, 1).unwrap();
//! builder.set_goal(y, 1).unwrap();
//!
//! let task = builder.finish().unwrap();
//!
//! let patterns = vec![vec![x], vec![y]];
//! let collection =
//!     CanonicalPatternDatabases::new(&task, &patterns, &Config::default()).unwrap();
//!
//! assert_eq!(collection.compute_heuristic(&[0, 0]), Distance::Finite(2));
//! assert_eq!(collection.compute_heuristic(&task.goal), Distance::Finite(0));
//! ```
//!
//! # Unreachability
//!
//! An abstract state from which the abstract goal cannot be reached witnesses unsolvability of
//! every concrete state projecting to it.
//! This is a value, not a fault: distances are [Distance](structures::distance::Distance)s, with
//! a dedicated [Unreachable](structures::distance::Distance::Unreachable) variant which absorbs
//! addition and compares greater than every finite distance.
//! A query short-circuits to unreachable as soon as a single pattern reports it.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the regression search](procedures::regression) can be filtered with
//!   `RUST_LOG=regression …` or,
//! - A summary of the additivity analysis without per-pair detail can be found with
//!   `RUST_LOG=additivity=debug …`

pub mod builder;
pub mod canonical;
pub mod config;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
