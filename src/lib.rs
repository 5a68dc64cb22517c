//! meeting_csp - exact constraint satisfaction for meeting schedules
//!
//! Assigns an hourly slot to each of `n` meetings so that every unary and
//! binary constraint holds, using node consistency, AC-3 arc consistency and
//! backtracking search.

pub mod consistency;
pub mod constraints;
pub mod domain;
pub mod search;
pub mod solver;

pub use constraints::{Constraint, Operand, Relation, UnaryPredicate};
pub use solver::{solve, CspError, Solution, SolveStats, Solver, SolverConfig};

/// Index of a meeting variable, in `0..n`.
pub type Variable = usize;
