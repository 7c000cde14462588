/*!
Configuration of pattern database construction.

A configuration is read when a [projection](crate::db::projection::Projection) is built and is
not consulted afterwards; two collections built with the same configuration from the same inputs
are identical.
*/

/// The primary configuration structure.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Retain operators whose restriction to a pattern changes no pattern variable.
    ///
    /// Such operators are cost-bearing self-loops in the abstraction: backward application
    /// yields the state itself at a non-negative added cost, which never improves a recorded
    /// distance.
    /// By default they are elided from the projected operator set; retaining them keeps every
    /// operator with at least one surviving entry or a positive cost.
    pub retain_vacuous_operators: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retain_vacuous_operators: false,
        }
    }
}
