/*!
(The internal representation of) a variable, and the values of its domain.

Each variable is a u32 *v* identifying a position in the task's domain size vector, so the
variables of a task with *n* variables are [0..*n*).
This representation allows variables to be used as the indices of a structure, e.g. `state[v]`,
without taking too much space.

Values are likewise u32s, with the domain of a variable with *d* values being [0..*d*).

# Notes
- A full state assigns a value to every variable of a task, and is indexed by variable.
- An abstract state assigns a value to every variable of a pattern, and is indexed by the
  position of the variable in the pattern.
*/

/// A variable of a task.
pub type Variable = u32;

/// A value from the domain of some variable.
pub type Value = u32;

/// A count of the values in the domain of a variable.
pub type DomainSize = u32;
