/*!
Goal distances within an abstraction.

A distance is either finite --- the minimum summed operator cost of reaching the abstract goal
--- or [unreachable](Distance::Unreachable).
An unreachable abstract state witnesses unsolvability of every concrete state projecting to it.

Unreachability is a dedicated variant rather than a maximum finite value.
With this, addition over distances absorbs unreachability and saturates on finite overflow, so
summing the values of an additive group cannot wrap.

```rust
# use canonical_pdb::structures::distance::Distance;
assert!(Distance::Finite(3) < Distance::Finite(5));
assert!(Distance::Finite(u32::MAX) < Distance::Unreachable);
assert_eq!(Distance::Finite(3) + Distance::Finite(5), Distance::Finite(8));
assert_eq!(Distance::Finite(3) + Distance::Unreachable, Distance::Unreachable);
```
*/

use crate::structures::operator::Cost;

/// The goal distance of an abstract state.
///
/// The derived order places [Unreachable](Distance::Unreachable) above every finite distance.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// The minimum summed operator cost of reaching the abstract goal.
    Finite(Cost),

    /// No path to the abstract goal exists.
    Unreachable,
}

impl Distance {
    /// True if the distance is finite, false otherwise.
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite cost, if there is one.
    pub fn finite(self) -> Option<Cost> {
        match self {
            Distance::Finite(cost) => Some(cost),
            Distance::Unreachable => None,
        }
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Unreachable,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{cost}"),
            Distance::Unreachable => write!(f, "∞"),
        }
    }
}
