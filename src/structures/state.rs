/*!
States, as vectors of values.

The canonical representation of a state is a vector *s* of [values](crate::structures::variable)
such that *s*\[v\] is the value assigned to variable (or pattern position) *v*.

A state over all variables of a task is a 'full' state, while a state over the variables of a
pattern is an 'abstract' state.
Both share the representation; which one is meant is fixed by context, and by the length of the
vector.
*/

use crate::structures::variable::Value;

/// A state, full or abstract.
pub type State = Vec<Value>;
