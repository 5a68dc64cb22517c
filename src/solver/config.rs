//! Configuration for the meeting solver.

use super::error::ConfigError;
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Solver`](super::Solver).
///
/// Controls slot granularity and which filtering phases run before search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    // --- Slots ---
    /// First hour of the day that becomes a candidate slot.
    pub first_hour: u32,
    /// Last hour of the day that becomes a candidate slot (inclusive).
    pub last_hour: u32,

    // --- Filtering ---
    /// Prune with unary constraints before search.
    pub node_consistency: bool,
    /// Prune with AC-3 before search.
    pub arc_consistency: bool,
}

impl SolverConfig {
    /// Number of hourly slots in a full day.
    pub const HOURS_PER_DAY: u32 = 24;

    /// Hours expanded for every date.
    pub fn hours(&self) -> RangeInclusive<u32> {
        self.first_hour..=self.last_hour
    }

    /// Number of slots each date expands into.
    pub fn slots_per_day(&self) -> usize {
        self.hours().count()
    }

    pub fn with_hours(mut self, first_hour: u32, last_hour: u32) -> Self {
        self.first_hour = first_hour;
        self.last_hour = last_hour;
        self
    }

    pub fn with_node_consistency(mut self, enabled: bool) -> Self {
        self.node_consistency = enabled;
        self
    }

    pub fn with_arc_consistency(mut self, enabled: bool) -> Self {
        self.arc_consistency = enabled;
        self
    }

    /// Search only, no filtering.
    pub fn without_pruning(self) -> Self {
        self.with_node_consistency(false).with_arc_consistency(false)
    }

    /// # Errors
    ///
    /// - `HourOutOfRange` if either bound is 24 or more
    /// - `EmptyHourWindow` if `first_hour > last_hour`
    pub fn validate(&self) -> Result<(), ConfigError> {
        for hour in [self.first_hour, self.last_hour] {
            if hour >= Self::HOURS_PER_DAY {
                return Err(ConfigError::HourOutOfRange(hour));
            }
        }
        if self.first_hour > self.last_hour {
            return Err(ConfigError::EmptyHourWindow {
                first: self.first_hour,
                last: self.last_hour,
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            first_hour: 0,
            last_hour: Self::HOURS_PER_DAY - 1,
            node_consistency: true,
            arc_consistency: true,
        }
    }
}
