//! Unary and binary constraints over meeting variables.

use super::error::ConstraintError;
use super::relation::{Relation, UnaryPredicate};
use crate::Variable;
use chrono::NaiveDateTime;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right-hand side of a binary constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operand {
    /// Another meeting, resolved to its assigned time.
    Variable(Variable),
    /// A fixed time.
    Value(NaiveDateTime),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "m{v}"),
            Self::Value(t) => write!(f, "{t}"),
        }
    }
}

/// Constraint restricting the time of a single meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryConstraint {
    variable: Variable,
    predicate: UnaryPredicate,
}

impl UnaryConstraint {
    pub const fn new(variable: Variable, predicate: UnaryPredicate) -> Self {
        Self {
            variable,
            predicate,
        }
    }

    pub const fn variable(&self) -> Variable {
        self.variable
    }

    pub const fn predicate(&self) -> UnaryPredicate {
        self.predicate
    }
}

/// Constraint relating a meeting to another meeting or to a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryConstraint {
    left: Variable,
    relation: Relation,
    right: Operand,
}

impl BinaryConstraint {
    pub const fn new(left: Variable, relation: Relation, right: Operand) -> Self {
        Self {
            left,
            relation,
            right,
        }
    }

    pub const fn left(&self) -> Variable {
        self.left
    }

    pub const fn relation(&self) -> Relation {
        self.relation
    }

    pub const fn right(&self) -> Operand {
        self.right
    }

    /// The same constraint seen from the right-hand variable.
    ///
    /// # Errors
    ///
    /// Returns `FixedValueHasNoReverse` when the right-hand side is a fixed time.
    pub fn reverse(&self) -> Result<Self, ConstraintError> {
        match self.right {
            Operand::Variable(right) => Ok(Self::new(
                right,
                self.relation.reverse(),
                Operand::Variable(self.left),
            )),
            Operand::Value(_) => Err(ConstraintError::FixedValueHasNoReverse(self.left)),
        }
    }
}

/// A constraint of arity one or two.
///
/// The left variable (`L_VAL`) is always a meeting index; the right side
/// (`R_VAL`) exists only for binary constraints and is either another
/// meeting or a fixed time.
///
/// # Example
///
/// ```
/// use meeting_csp::constraints::{Constraint, Relation};
///
/// let c = Constraint::binary(0, Relation::Before, 1);
/// assert_eq!(c.arity(), 2);
/// assert_eq!(c.reverse().unwrap(), Constraint::binary(1, Relation::After, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Constraint {
    Unary(UnaryConstraint),
    Binary(BinaryConstraint),
}

impl Constraint {
    pub const fn unary(variable: Variable, predicate: UnaryPredicate) -> Self {
        Self::Unary(UnaryConstraint::new(variable, predicate))
    }

    /// Binary constraint between two meetings: `left relation right`.
    pub const fn binary(left: Variable, relation: Relation, right: Variable) -> Self {
        Self::Binary(BinaryConstraint::new(
            left,
            relation,
            Operand::Variable(right),
        ))
    }

    /// Binary constraint between a meeting and a fixed time: `left relation value`.
    pub const fn against_value(left: Variable, relation: Relation, value: NaiveDateTime) -> Self {
        Self::Binary(BinaryConstraint::new(left, relation, Operand::Value(value)))
    }

    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// The primary variable (`L_VAL`).
    pub const fn left(&self) -> Variable {
        match self {
            Self::Unary(c) => c.variable(),
            Self::Binary(c) => c.left(),
        }
    }

    /// The right-hand side (`R_VAL`); `None` for unary constraints.
    pub const fn right(&self) -> Option<Operand> {
        match self {
            Self::Unary(_) => None,
            Self::Binary(c) => Some(c.right()),
        }
    }

    /// The right-hand variable, if this constraint links two meetings.
    pub const fn right_variable(&self) -> Option<Variable> {
        match self.right() {
            Some(Operand::Variable(v)) => Some(v),
            _ => None,
        }
    }

    /// Evaluates the constraint on concrete values.
    ///
    /// Unary constraints ignore `right`. A binary constraint against a fixed
    /// time uses that time and ignores `right` as well. A binary constraint
    /// between two meetings is not yet decidable when `right` is `None` and
    /// reports itself satisfied.
    pub fn is_satisfied_by_values(
        &self,
        left: NaiveDateTime,
        right: Option<NaiveDateTime>,
    ) -> bool {
        match self {
            Self::Unary(c) => c.predicate().holds(left),
            Self::Binary(c) => match (c.right(), right) {
                (Operand::Value(fixed), _) => c.relation().holds(left, fixed),
                (Operand::Variable(_), Some(value)) => c.relation().holds(left, value),
                (Operand::Variable(_), None) => true,
            },
        }
    }

    /// The inverse constraint, with `L_VAL`/`R_VAL` swapped and the relation
    /// adjusted so the meaning is preserved.
    ///
    /// # Errors
    ///
    /// - `UnaryHasNoReverse` for unary constraints
    /// - `FixedValueHasNoReverse` for binary constraints against a fixed time
    pub fn reverse(&self) -> Result<Self, ConstraintError> {
        match self {
            Self::Unary(c) => Err(ConstraintError::UnaryHasNoReverse(c.variable())),
            Self::Binary(c) => c.reverse().map(Self::Binary),
        }
    }
}

impl From<UnaryConstraint> for Constraint {
    fn from(c: UnaryConstraint) -> Self {
        Self::Unary(c)
    }
}

impl From<BinaryConstraint> for Constraint {
    fn from(c: BinaryConstraint) -> Self {
        Self::Binary(c)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary(c) => write!(f, "m{} {}", c.variable(), c.predicate()),
            Self::Binary(c) => write!(f, "m{} {} {}", c.left(), c.relation(), c.right()),
        }
    }
}
