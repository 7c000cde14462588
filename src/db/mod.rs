//! Databases built once from a task and read for the lifetime of a collection.
//!
//!   - [The projection](crate::db::projection)
//!     + The abstraction induced by a pattern: a bijection between abstract states and dense
//!       indices (rank/unrank), the restriction of full states to the pattern, and the task
//!       projected to the pattern.
//!   - [The pattern database](crate::db::pdb)
//!     + The exact goal distance of every abstract state, indexed by rank.
//!       Filled by the [regression search](crate::procedures::regression) at construction and
//!       immutable afterwards.

pub mod pdb;
pub mod projection;

pub use pdb::PatternDatabase;
pub use projection::Projection;
