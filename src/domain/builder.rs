//! Expansion of calendar dates into hourly candidate slots.

use super::{Domain, Domains};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::ops::RangeInclusive;

/// Expands every date into one slot per hour in `hours`.
///
/// Hours outside `0..=23` produce no slot.
pub fn expand_dates<I>(dates: I, hours: RangeInclusive<u32>) -> Domain
where
    I: IntoIterator<Item = NaiveDate>,
{
    let times: Vec<NaiveTime> = hours
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect();

    dates
        .into_iter()
        .flat_map(|date| times.iter().map(move |&time| NaiveDateTime::new(date, time)))
        .collect()
}

/// Builds the initial domains for `n` meetings over the given dates.
///
/// The expanded pool is copied once per variable, so pruning one meeting's
/// domain never affects another's.
pub fn build_domains<I>(n: usize, dates: I, hours: RangeInclusive<u32>) -> Domains
where
    I: IntoIterator<Item = NaiveDate>,
{
    let pool = expand_dates(dates, hours);
    log::debug!(
        "built {n} domains of {} candidate slots each",
        pool.len()
    );
    Domains::replicate(n, &pool)
}
