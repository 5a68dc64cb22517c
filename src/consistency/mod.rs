//! Domain filtering before search.
//!
//! - [`node`] — node consistency, pruning by unary constraints
//! - [`arc`] — directed arcs derived from binary constraints
//! - [`ac3`] — arc consistency via the AC-3 worklist algorithm
//!
//! Both filters only ever remove values; a domain never grows.

pub mod ac3;
pub mod arc;
pub mod node;

pub use ac3::{arc_consistency, revise, ConstraintNetwork};
pub use arc::Arc;
pub use node::node_consistency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Summary of one filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pruning {
    /// Values removed across all domains.
    pub removed: usize,
    /// Constraints applied (node consistency) or arcs revised (AC-3).
    pub revisions: usize,
}
