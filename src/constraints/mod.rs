pub mod constraint;
pub mod error;
pub mod relation;

pub use constraint::{BinaryConstraint, Constraint, Operand, UnaryConstraint};
pub use error::ConstraintError;
pub use relation::{Relation, UnaryPredicate};
