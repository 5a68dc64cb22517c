//! Node consistency: pruning by unary constraints.

use super::Pruning;
use crate::constraints::Constraint;
use crate::domain::Domains;

/// Removes from every domain the values rejected by a unary constraint on
/// that variable.
///
/// Binary constraints, including those against a fixed time, are left to
/// arc consistency and the search.
///
/// # Panics
///
/// Panics if a unary constraint names a variable outside `0..domains.len()`.
pub fn node_consistency(domains: &mut Domains, constraints: &[Constraint]) -> Pruning {
    let mut pruning = Pruning::default();

    for constraint in constraints.iter().filter(|c| c.arity() == 1) {
        let variable = constraint.left();
        let removed = domains[variable].retain(|&v| constraint.is_satisfied_by_values(v, None));
        pruning.revisions += 1;
        pruning.removed += removed;
        if removed > 0 {
            log::trace!("{constraint}: removed {removed} values from m{variable}");
        }
    }

    log::debug!(
        "node consistency removed {} values over {} unary constraints",
        pruning.removed,
        pruning.revisions
    );
    pruning
}
