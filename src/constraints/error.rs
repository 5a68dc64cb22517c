use thiserror::Error;

/// Errors raised when a constraint is used outside its contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unary constraint on meeting {0} has no reverse")]
    UnaryHasNoReverse(usize),

    #[error("Constraint on meeting {0} compares against a fixed value and has no reverse")]
    FixedValueHasNoReverse(usize),

    #[error("Cannot create arc from unary constraint on meeting {0}")]
    UnaryArc(usize),

    #[error("Cannot create arc from constraint on meeting {0}: right-hand side is a fixed value")]
    FixedValueArc(usize),
}
