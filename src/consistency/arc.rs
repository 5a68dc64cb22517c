//! Directed arcs derived from binary constraints.

use crate::constraints::{BinaryConstraint, Constraint, ConstraintError, Operand};
use crate::Variable;
use chrono::NaiveDateTime;
use std::fmt;

/// A directed `(tail → head)` view of a binary constraint between two meetings.
///
/// `tail` is the constraint's left variable and `head` its right variable.
/// Two arcs are equal when their constraint, tail and head all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    constraint: BinaryConstraint,
    tail: Variable,
    head: Variable,
}

impl Arc {
    /// Creates the arc `L_VAL → R_VAL` of `constraint`.
    ///
    /// # Errors
    ///
    /// - `UnaryArc` for unary constraints
    /// - `FixedValueArc` for binary constraints against a fixed time
    pub fn new(constraint: &Constraint) -> Result<Self, ConstraintError> {
        match constraint {
            Constraint::Unary(c) => Err(ConstraintError::UnaryArc(c.variable())),
            Constraint::Binary(c) => Self::from_binary(*c),
        }
    }

    fn from_binary(constraint: BinaryConstraint) -> Result<Self, ConstraintError> {
        match constraint.right() {
            Operand::Variable(head) => Ok(Self {
                constraint,
                tail: constraint.left(),
                head,
            }),
            Operand::Value(_) => Err(ConstraintError::FixedValueArc(constraint.left())),
        }
    }

    /// The forward and reverse arcs of `constraint`, the reverse one built
    /// from the inverse constraint.
    ///
    /// # Errors
    ///
    /// Same as [`Arc::new`].
    pub fn pair(constraint: &Constraint) -> Result<(Self, Self), ConstraintError> {
        let forward = Self::new(constraint)?;
        let reverse = Self::new(&constraint.reverse()?)?;
        Ok((forward, reverse))
    }

    pub const fn constraint(&self) -> BinaryConstraint {
        self.constraint
    }

    pub const fn tail(&self) -> Variable {
        self.tail
    }

    pub const fn head(&self) -> Variable {
        self.head
    }

    /// True if `head_value` supports `tail_value` along this arc.
    pub fn is_supported(&self, tail_value: NaiveDateTime, head_value: NaiveDateTime) -> bool {
        self.constraint.relation().holds(tail_value, head_value)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc[{}, ({} -> {})]",
            Constraint::Binary(self.constraint),
            self.tail,
            self.head
        )
    }
}
