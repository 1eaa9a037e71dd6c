// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay duration calculation.
//!
//! Nights are derived from a check-in/check-out pair of calendar dates.
//! Time-of-day is ignored throughout: a stay is a range of calendar days.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

/// Parses an ISO 8601 calendar date, ignoring any time-of-day suffix.
///
/// Both `2025-03-10` and `2025-03-10T15:00:00Z` parse to March 10th.
///
/// # Errors
///
/// Returns an error if the string is empty or is not an ISO 8601 date.
pub fn parse_stay_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField("date"));
    }

    let date_part: &str = trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _)| date);

    Date::parse(
        date_part,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Returns the number of nights between two ISO date strings.
///
/// This is the lenient form used while a form is still being filled in:
/// a missing or unparseable date means "not yet specified" and yields `0`
/// instead of an error. A reversed range (check-out before check-in) is
/// clamped to `0` nights.
#[must_use]
pub fn nights_between(check_in: &str, check_out: &str) -> u32 {
    let (Ok(start), Ok(end)) = (parse_stay_date(check_in), parse_stay_date(check_out)) else {
        return 0;
    };

    if end < start {
        debug!(%start, %end, "Reversed stay range, clamping to zero nights");
        return 0;
    }

    nights_for(start, end)
}

/// Whole calendar days from `start` to `end`.
///
/// Dates carry no time-of-day, so the difference is already a whole number
/// of days and the ceiling is exact.
fn nights_for(start: Date, end: Date) -> u32 {
    let days: i64 = (end - start).whole_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// A validated check-in/check-out pair.
///
/// Invariant: `check_out > check_in`, so a `StayRange` always covers at
/// least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    check_in: Date,
    check_out: Date,
}

impl StayRange {
    /// Creates a new stay range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayRange` if `check_out` is not strictly
    /// after `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parses and validates a stay range from two ISO date strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is missing or malformed, or if the
    /// range is empty or reversed.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, DomainError> {
        let start: Date = parse_stay_date(check_in).map_err(|e| match e {
            DomainError::MissingField(_) => DomainError::MissingField("check_in"),
            other => other,
        })?;
        let end: Date = parse_stay_date(check_out).map_err(|e| match e {
            DomainError::MissingField(_) => DomainError::MissingField("check_out"),
            other => other,
        })?;
        Self::new(start, end)
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights covered by this stay.
    #[must_use]
    pub fn nights(&self) -> u32 {
        nights_for(self.check_in, self.check_out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_three_night_stay() {
        assert_eq!(nights_between("2025-03-10", "2025-03-13"), 3);
    }

    #[test]
    fn test_same_day_is_zero_nights() {
        assert_eq!(nights_between("2025-03-10", "2025-03-10"), 0);
    }

    #[test]
    fn test_missing_dates_are_zero_nights() {
        assert_eq!(nights_between("", "2025-03-13"), 0);
        assert_eq!(nights_between("2025-03-10", ""), 0);
        assert_eq!(nights_between("", ""), 0);
    }

    #[test]
    fn test_unparseable_dates_are_zero_nights() {
        assert_eq!(nights_between("tomorrow", "2025-03-13"), 0);
        assert_eq!(nights_between("2025-03-10", "2025-13-45"), 0);
    }

    #[test]
    fn test_reversed_range_clamps_to_zero() {
        assert_eq!(nights_between("2025-03-13", "2025-03-10"), 0);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        assert_eq!(
            nights_between("2025-03-10T23:59:00Z", "2025-03-11T00:01:00Z"),
            1
        );
        assert_eq!(
            nights_between("2025-03-10T08:00:00", "2025-03-10T20:00:00"),
            0
        );
    }

    #[test]
    fn test_stay_crossing_month_and_leap_day() {
        assert_eq!(nights_between("2024-02-27", "2024-03-02"), 4);
        assert_eq!(nights_between("2025-12-30", "2026-01-02"), 3);
    }

    #[test]
    fn test_stay_range_rejects_equal_dates() {
        let result = StayRange::new(date!(2025 - 03 - 10), date!(2025 - 03 - 10));
        assert!(matches!(
            result,
            Err(DomainError::InvalidStayRange { .. })
        ));
    }

    #[test]
    fn test_stay_range_rejects_reversed_dates() {
        let result = StayRange::parse("2025-03-13", "2025-03-10");
        assert!(matches!(
            result,
            Err(DomainError::InvalidStayRange { .. })
        ));
    }

    #[test]
    fn test_stay_range_reports_missing_field() {
        let result = StayRange::parse("2025-03-10", "");
        assert_eq!(result, Err(DomainError::MissingField("check_out")));

        let result = StayRange::parse("  ", "2025-03-10");
        assert_eq!(result, Err(DomainError::MissingField("check_in")));
    }

    #[test]
    fn test_stay_range_nights() {
        let stay: StayRange = StayRange::parse("2025-03-10", "2025-03-13").unwrap();
        assert_eq!(stay.nights(), 3);
        assert_eq!(stay.check_in(), date!(2025 - 03 - 10));
        assert_eq!(stay.check_out(), date!(2025 - 03 - 13));
    }

    #[test]
    fn test_valid_ranges_always_have_positive_nights() {
        let start: Date = date!(2025 - 01 - 01);
        for offset in 1..=60_i64 {
            let end: Date = start + time::Duration::days(offset);
            let stay: StayRange = StayRange::new(start, end).unwrap();
            assert_eq!(i64::from(stay.nights()), offset);
        }
    }
}
