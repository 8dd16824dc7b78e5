// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use ews_tz::EwsTimeZone;

use crate::error::TemporalError;

/// A plain calendar date in the `YYYY-MM-DD` wire format.
///
/// Dates carry no timezone, so no DST ambiguity is possible. Some servers
/// echo a `Z` or `±HH:MM` suffix back on date fields; the parser accepts and
/// discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EwsDate {
    inner: NaiveDate,
}

impl EwsDate {
    /// Build a date from calendar fields, `None` for out-of-range fields.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|inner| Self { inner })
    }

    /// Today's date on the wall clock of the given zone.
    pub fn today(tz: &EwsTimeZone) -> Self {
        Self {
            inner: Utc::now().with_timezone(tz).date_naive(),
        }
    }

    /// Parse the wire format, tolerating a trailing `Z` or offset.
    pub fn from_string(s: &str) -> Result<Self, TemporalError> {
        let date_part = s
            .get(..10)
            .ok_or_else(|| TemporalError::InvalidFormat(s.to_string()))?;
        if !is_discardable_suffix(&s[10..]) {
            return Err(TemporalError::InvalidFormat(s.to_string()));
        }
        let inner = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| TemporalError::InvalidFormat(s.to_string()))?;
        Ok(Self { inner })
    }

    /// Serialize to the wire format.
    pub fn ewsformat(&self) -> String {
        self.inner.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Attach a wall-clock time, for handing to `EwsTimeZone::localize`.
    pub fn and_hms(&self, hour: u32, min: u32, sec: u32) -> Option<NaiveDateTime> {
        self.inner.and_hms_opt(hour, min, sec)
    }

    pub fn naive(&self) -> NaiveDate {
        self.inner
    }
}

/// Dates may arrive with an offset suffix the model has no use for; it must
/// still be well-formed to be dropped.
fn is_discardable_suffix(suffix: &str) -> bool {
    if suffix.is_empty() || suffix == "Z" {
        return true;
    }
    let b = suffix.as_bytes();
    b.len() == 6
        && (b[0] == b'+' || b[0] == b'-')
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3] == b':'
        && b[4].is_ascii_digit()
        && b[5].is_ascii_digit()
}

impl From<NaiveDate> for EwsDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl fmt::Display for EwsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d"))
    }
}

impl Add<TimeDelta> for EwsDate {
    type Output = EwsDate;

    fn add(self, rhs: TimeDelta) -> EwsDate {
        EwsDate {
            inner: self.inner + rhs,
        }
    }
}

impl AddAssign<TimeDelta> for EwsDate {
    fn add_assign(&mut self, rhs: TimeDelta) {
        self.inner = self.inner + rhs;
    }
}

impl Sub<TimeDelta> for EwsDate {
    type Output = EwsDate;

    fn sub(self, rhs: TimeDelta) -> EwsDate {
        EwsDate {
            inner: self.inner - rhs,
        }
    }
}

impl SubAssign<TimeDelta> for EwsDate {
    fn sub_assign(&mut self, rhs: TimeDelta) {
        self.inner = self.inner - rhs;
    }
}

impl Sub<EwsDate> for EwsDate {
    type Output = TimeDelta;

    fn sub(self, rhs: EwsDate) -> TimeDelta {
        self.inner.signed_duration_since(rhs.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ewsformat() {
        assert_eq!(EwsDate::from_ymd(2000, 1, 1).unwrap().ewsformat(), "2000-01-01");
    }

    #[test]
    fn test_from_string() {
        let expected = EwsDate::from_ymd(2000, 1, 1).unwrap();
        assert_eq!(EwsDate::from_string("2000-01-01").unwrap(), expected);
        // offset suffixes are parsed and discarded
        assert_eq!(EwsDate::from_string("2000-01-01Z").unwrap(), expected);
        assert_eq!(EwsDate::from_string("2000-01-01+01:00").unwrap(), expected);
        assert_eq!(EwsDate::from_string("2000-01-01-01:00").unwrap(), expected);

        assert!(EwsDate::from_string("2000-01").is_err());
        assert!(EwsDate::from_string("2000-13-01").is_err());
        assert!(EwsDate::from_string("2000-01-01+1:00").is_err());
        assert!(EwsDate::from_string("2000-01-01garbage").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let date = EwsDate::from_ymd(2000, 1, 2).unwrap();
        assert_eq!(
            date - EwsDate::from_ymd(2000, 1, 1).unwrap(),
            TimeDelta::days(1)
        );
        assert_eq!(
            date + TimeDelta::days(1),
            EwsDate::from_ymd(2000, 1, 3).unwrap()
        );
        assert_eq!(
            date - TimeDelta::days(1),
            EwsDate::from_ymd(2000, 1, 1).unwrap()
        );

        let mut date = EwsDate::from_ymd(2000, 1, 2).unwrap();
        date += TimeDelta::days(1);
        assert_eq!(date, EwsDate::from_ymd(2000, 1, 3).unwrap());
        date -= TimeDelta::days(2);
        assert_eq!(date, EwsDate::from_ymd(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_ordering() {
        assert!(EwsDate::from_ymd(2000, 1, 1).unwrap() < EwsDate::from_ymd(2000, 1, 2).unwrap());
    }
}
