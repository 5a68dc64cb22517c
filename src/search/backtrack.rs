//! Depth-first backtracking over pruned domains.

use super::assignment::Assignment;
use super::SearchStats;
use crate::constraints::{Constraint, Operand};
use crate::domain::Domains;
use chrono::NaiveDateTime;

/// Checks every constraint that the partial `assignment` can decide.
///
/// A constraint is skipped while its left variable is unassigned, and a
/// binary constraint between two meetings is skipped while its right
/// variable is unassigned. Constraints never look ahead.
pub fn is_consistent(assignment: &Assignment, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|constraint| {
        let Some(left) = assignment.value_of(constraint.left()) else {
            return true;
        };
        match constraint.right() {
            None => constraint.is_satisfied_by_values(left, None),
            Some(Operand::Value(fixed)) => constraint.is_satisfied_by_values(left, Some(fixed)),
            Some(Operand::Variable(right)) => match assignment.value_of(right) {
                Some(value) => constraint.is_satisfied_by_values(left, Some(value)),
                None => true,
            },
        }
    })
}

/// Exhaustive backtracking search.
///
/// Variables are taken in index order and values in ascending chronological
/// order, so the first solution found is the lexicographically smallest one
/// over the given domains.
#[derive(Debug)]
pub struct Backtracker<'a> {
    domains: &'a Domains,
    constraints: &'a [Constraint],
    stats: SearchStats,
}

impl<'a> Backtracker<'a> {
    pub fn new(domains: &'a Domains, constraints: &'a [Constraint]) -> Self {
        Self {
            domains,
            constraints,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for a full assignment extending `assignment`.
    ///
    /// Returns the values indexed by variable, or `None` if no extension
    /// satisfies every constraint. `assignment` is left exactly as it was
    /// passed in.
    ///
    /// # Panics
    ///
    /// Panics if `assignment` covers more variables than there are domains.
    pub fn search(&mut self, assignment: &mut Assignment) -> Option<Vec<NaiveDateTime>> {
        if assignment.is_complete() {
            return assignment.to_values();
        }
        let variable = assignment.next_unassigned()?;

        let domains = self.domains;
        for value in domains[variable].iter() {
            self.stats.nodes += 1;
            let mut tentative = assignment.extend(variable, value);
            if is_consistent(&tentative, self.constraints) {
                log::trace!("m{variable} = {value} at depth {}", tentative.len());
                if let Some(solution) = self.search(&mut tentative) {
                    return Some(solution);
                }
            }
            self.stats.backtracks += 1;
        }
        None
    }

    /// Searches from the empty assignment.
    pub fn run(&mut self) -> Option<Vec<NaiveDateTime>> {
        let mut assignment = Assignment::new(self.domains.len());
        self.search(&mut assignment)
    }
}

/// Runs a backtracking search over `domains` under `constraints`.
pub fn backtrack(domains: &Domains, constraints: &[Constraint]) -> Option<Vec<NaiveDateTime>> {
    Backtracker::new(domains, constraints).run()
}
