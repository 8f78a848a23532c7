//! Upcoming birthday computation.
//!
//! For each birthday the next occurrence on or after `today` is found, moved
//! off the weekend (Saturday +2 days, Sunday +1 day) and kept if it falls
//! within the look-ahead window.

use crate::domain::{Birthday, DATE_FORMAT};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Default look-ahead window in days, inclusive on both ends.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact whose observed birthday falls within the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Observed date, already moved off the weekend
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,

    /// Whole days from today to `date`
    pub days_left: i64,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(DATE_FORMAT))
    }
}

/// The birthday's date in `year`.
///
/// A 29 February birthday is observed on 28 February when `year` is not a
/// leap year. Returns `None` only if `year` is outside chrono's range.
pub fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.is_leap_day() {
            debug!(year, "Leap-day birthday observed on 28 February");
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Next occurrence on or after `today`, before any weekend shift.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Observed date and days left if the birthday falls within `window_days`.
pub fn observed_within(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: i64,
) -> Option<(NaiveDate, i64)> {
    let observed = shift_off_weekend(next_occurrence(birthday, today)?);
    let days_left = (observed - today).num_days();
    (0..=window_days)
        .contains(&days_left)
        .then_some((observed, days_left))
}
