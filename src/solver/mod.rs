//! The meeting solver: domain building, filtering and search in one call.
//!
//! 1. **Domains**: every date expands into hourly slots, copied per meeting.
//! 2. **Node consistency**: unary constraints prune each domain.
//! 3. **Arc consistency**: AC-3 prunes with binary constraints between meetings.
//! 4. **Search**: backtracking over the pruned domains, checking every
//!    constraint (including those against fixed times) on each extension.
//!
//! The outcome is either one feasible schedule or `None` when no schedule
//! exists. No objective is optimized.

mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::SolverConfig;
pub use error::{ConfigError, CspError};

use crate::consistency::{arc_consistency, node_consistency, Pruning};
use crate::constraints::Constraint;
use crate::domain::{build_domains, Domains};
use crate::search::{Backtracker, SearchStats};
use chrono::{NaiveDate, NaiveDateTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters for one solve call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveStats {
    /// Sum of all domain sizes before filtering.
    pub initial_domain_size: usize,
    pub node_pruned: usize,
    pub arc_pruned: usize,
    pub arc_revisions: usize,
    /// Tentative extensions tried by the search.
    pub nodes_explored: usize,
    pub backtracks: usize,
}

impl SolveStats {
    fn record_node(&mut self, pruning: Pruning) {
        self.node_pruned = pruning.removed;
    }

    fn record_arc(&mut self, pruning: Pruning) {
        self.arc_pruned = pruning.removed;
        self.arc_revisions = pruning.revisions;
    }

    fn record_search(&mut self, search: SearchStats) {
        self.nodes_explored = search.nodes;
        self.backtracks = search.backtracks;
    }
}

/// Result of [`Solver::solve_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Meeting times indexed by meeting, or `None` if unsatisfiable.
    pub values: Option<Vec<NaiveDateTime>>,
    pub stats: SolveStats,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        self.values.is_some()
    }
}

/// Exact solver for meeting schedules.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use meeting_csp::constraints::{Constraint, Relation};
/// use meeting_csp::Solver;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let constraints = [Constraint::binary(0, Relation::Before, 1)];
///
/// let times = Solver::default().solve(2, [day], &constraints).unwrap().unwrap();
/// assert!(times[0] < times[1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// # Errors
    ///
    /// Returns `CspError::Config` if `config` fails validation.
    pub fn new(config: SolverConfig) -> Result<Self, CspError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Initial domains for `n_meetings` over `dates`, one independent copy
    /// per meeting.
    pub fn build_domains<I>(&self, n_meetings: usize, dates: I) -> Domains
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        build_domains(n_meetings, dates, self.config.hours())
    }

    /// Schedules `n_meetings` meetings on the given dates.
    ///
    /// Returns the meeting times indexed by meeting, or `Ok(None)` if no
    /// schedule satisfies every constraint.
    ///
    /// # Errors
    ///
    /// Returns `CspError::Constraint` if arc construction fails.
    ///
    /// # Panics
    ///
    /// Constraints must only name meetings in `0..n_meetings`; the filtering
    /// phases panic on any other index.
    pub fn solve<I>(
        &self,
        n_meetings: usize,
        dates: I,
        constraints: &[Constraint],
    ) -> Result<Option<Vec<NaiveDateTime>>, CspError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Ok(self.solve_with_stats(n_meetings, dates, constraints)?.values)
    }

    /// Same as [`solve`](Self::solve), also reporting per-phase counters.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with_stats<I>(
        &self,
        n_meetings: usize,
        dates: I,
        constraints: &[Constraint],
    ) -> Result<Solution, CspError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut domains = self.build_domains(n_meetings, dates);
        let mut stats = SolveStats {
            initial_domain_size: domains.total_size(),
            ..SolveStats::default()
        };

        if self.config.node_consistency {
            stats.record_node(node_consistency(&mut domains, constraints));
        }
        if self.config.arc_consistency {
            stats.record_arc(arc_consistency(&mut domains, constraints)?);
        }

        let values = if domains.has_empty() {
            log::debug!("a meeting has no candidate slot left; skipping search");
            None
        } else {
            let mut search = Backtracker::new(&domains, constraints);
            let values = search.run();
            stats.record_search(search.stats());
            values
        };

        match &values {
            Some(_) => log::info!(
                "scheduled {n_meetings} meetings after exploring {} nodes",
                stats.nodes_explored
            ),
            None => log::info!("no schedule exists for {n_meetings} meetings"),
        }
        Ok(Solution { values, stats })
    }
}

/// Schedules `n_meetings` meetings on hourly slots of `dates` with the
/// default configuration.
///
/// # Errors
///
/// See [`Solver::solve`].
pub fn solve<I>(
    n_meetings: usize,
    dates: I,
    constraints: &[Constraint],
) -> Result<Option<Vec<NaiveDateTime>>, CspError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    Solver::default().solve(n_meetings, dates, constraints)
}
