use crate::constraints::ConstraintError;
use thiserror::Error;

/// Invalid [`SolverConfig`](super::SolverConfig) values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Hour {0} is outside 0..=23")]
    HourOutOfRange(u32),

    #[error("Hour window {first}..={last} is empty")]
    EmptyHourWindow { first: u32, last: u32 },
}

/// Errors returned by the solver.
///
/// An unsatisfiable problem is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CspError {
    #[error("Invalid solver configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid constraint: {0}")]
    Constraint(#[from] ConstraintError),
}
