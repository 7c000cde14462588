/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [projections](crate::db::projection)
    pub const PROJECTION: &str = "projection";

    /// Logs related to the [regression search](crate::procedures::regression)
    pub const REGRESSION: &str = "regression";

    /// Logs related to the [additivity analysis](crate::procedures::additivity)
    pub const ADDITIVITY: &str = "additivity";

    /// Logs related to the [canonical collection](crate::canonical)
    pub const CANONICAL: &str = "canonical";
}
