/*!
Patterns --- subsets of a task's variables.

A pattern fixes an abstraction of a task: the projection which forgets every variable outside the
pattern.
Patterns are represented as vectors of variables.
[Projection](crate::db::projection::Projection) construction normalizes a pattern by sorting and
removing duplicates, and rejects empty patterns and patterns naming unknown variables.

Which patterns to use is outside the scope of the library; a caller supplies them.
*/

use crate::structures::variable::Variable;

/// A pattern: a subset of a task's variables.
pub type Pattern = Vec<Variable>;
