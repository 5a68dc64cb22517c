//! Backtracking search over filtered domains.
//!
//! - [`assignment`] - partial assignments and the scoped guard that undoes
//!   each tentative extension
//! - [`backtrack`] - the consistency check and the depth-first search

pub mod assignment;
pub mod backtrack;

pub use assignment::{Assignment, Tentative};
pub use backtrack::{backtrack, is_consistent, Backtracker};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Tentative `(variable, value)` extensions tried.
    pub nodes: usize,
    /// Extensions undone because they were inconsistent or led nowhere.
    pub backtracks: usize,
}
