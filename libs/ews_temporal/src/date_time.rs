// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use ews_tz::EwsTimeZone;

use crate::date::EwsDate;
use crate::error::TemporalError;

/// A timezone-aware instant in the `YYYY-MM-DDTHH:MM:SS[.ffffff](Z|±HH:MM)`
/// wire format.
///
/// Every value is bound to a registry-issued [`EwsTimeZone`]; there is no way
/// to construct a naive one, so serialization never has to guess a zone.
/// Equality and ordering compare the absolute instant, not the rendered wall
/// clock, so the same instant in two zones compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EwsDateTime {
    inner: DateTime<EwsTimeZone>,
}

impl EwsDateTime {
    /// Build from civil fields read on the wall clock of `tz`, `None` for
    /// out-of-range fields.
    ///
    /// Wall times made ambiguous or skipped by a DST transition resolve to
    /// the pre-transition interpretation; use [`EwsTimeZone::localize`]
    /// directly to pick a side.
    pub fn new(
        tz: EwsTimeZone,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
        micro: u32,
    ) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_micro_opt(hour, min, sec, micro)?;
        Some(Self {
            inner: tz.localize(naive, None),
        })
    }

    /// Build from a wall-clock reading in `tz`, resolving DST ambiguity to
    /// the pre-transition side.
    pub fn from_naive(naive: NaiveDateTime, tz: &EwsTimeZone) -> Self {
        Self {
            inner: tz.localize(naive, None),
        }
    }

    /// The current instant on the wall clock of `tz`.
    pub fn now(tz: &EwsTimeZone) -> Self {
        Self {
            inner: Utc::now().with_timezone(tz),
        }
    }

    /// The current instant in UTC.
    pub fn utc_now() -> Self {
        Self::now(&ews_tz::UTC)
    }

    /// A Unix timestamp rendered in `tz`, `None` if out of range.
    pub fn from_timestamp(secs: i64, tz: &EwsTimeZone) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|utc| Self {
            inner: utc.with_timezone(tz),
        })
    }

    /// Parse the wire format.
    ///
    /// The trailing designator is mandatory; a timestamp without one is
    /// refused outright instead of being read in some default zone. The
    /// parsed instant is normalized to the UTC registry zone; callers that
    /// need the originating zone carry it separately.
    pub fn from_string(s: &str) -> Result<Self, TemporalError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(parsed) => Ok(Self {
                inner: parsed.with_timezone(&ews_tz::UTC),
            }),
            Err(_) => {
                let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"));
                if naive.is_ok() {
                    Err(TemporalError::NaiveDateTimeNotAllowed(s.to_string()))
                } else {
                    Err(TemporalError::InvalidFormat(s.to_string()))
                }
            },
        }
    }

    /// Serialize to the wire format.
    ///
    /// Fractional seconds are printed only when nonzero; the UTC zone is
    /// rendered as `Z`, everything else as `±HH:MM`.
    pub fn ewsformat(&self) -> String {
        let mut out = self.inner.format("%Y-%m-%dT%H:%M:%S").to_string();
        let micros = self.inner.timestamp_subsec_micros();
        if micros != 0 {
            out.push_str(&format!(".{micros:06}"));
        }
        if self.time_zone().key() == "UTC" {
            out.push('Z');
        } else {
            out.push_str(&self.inner.offset().to_string());
        }
        out
    }

    /// The same instant rendered on the wall clock of another zone.
    pub fn astimezone(&self, tz: &EwsTimeZone) -> Self {
        Self {
            inner: self.inner.with_timezone(tz),
        }
    }

    /// The calendar date of the wall-clock rendering.
    pub fn date(&self) -> EwsDate {
        EwsDate::from(self.inner.date_naive())
    }

    pub fn time_zone(&self) -> EwsTimeZone {
        self.inner.timezone()
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

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.inner.nanosecond() / 1_000
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.inner.timestamp()
    }
}

impl From<DateTime<EwsTimeZone>> for EwsDateTime {
    fn from(inner: DateTime<EwsTimeZone>) -> Self {
        Self { inner }
    }
}

impl fmt::Display for EwsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d %H:%M:%S"))?;
        let micros = self.inner.timestamp_subsec_micros();
        if micros != 0 {
            write!(f, ".{micros:06}")?;
        }
        write!(f, "{}", self.inner.offset())
    }
}

impl Add<TimeDelta> for EwsDateTime {
    type Output = EwsDateTime;

    fn add(self, rhs: TimeDelta) -> EwsDateTime {
        EwsDateTime {
            inner: self.inner + rhs,
        }
    }
}

impl AddAssign<TimeDelta> for EwsDateTime {
    fn add_assign(&mut self, rhs: TimeDelta) {
        self.inner = self.inner + rhs;
    }
}

impl Sub<TimeDelta> for EwsDateTime {
    type Output = EwsDateTime;

    fn sub(self, rhs: TimeDelta) -> EwsDateTime {
        EwsDateTime {
            inner: self.inner - rhs,
        }
    }
}

impl SubAssign<TimeDelta> for EwsDateTime {
    fn sub_assign(&mut self, rhs: TimeDelta) {
        self.inner = self.inner - rhs;
    }
}

impl Sub<EwsDateTime> for EwsDateTime {
    type Output = TimeDelta;

    fn sub(self, rhs: EwsDateTime) -> TimeDelta {
        self.inner.signed_duration_since(rhs.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ews_tz::UTC;

    fn zone(key: &str) -> EwsTimeZone {
        EwsTimeZone::from_key(key).unwrap()
    }

    #[test]
    fn test_static_zone_formatting() {
        let tz = zone("Etc/GMT-5");
        let dt = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 678901).unwrap();
        assert_eq!(dt.time_zone().ms_id(), tz.ms_id());
        assert_eq!(dt.to_string(), "2000-01-02 03:04:05.678901+05:00");
        assert_eq!(dt.ewsformat(), "2000-01-02T03:04:05.678901+05:00");
    }

    #[test]
    fn test_dst_zone_formatting() {
        let tz = zone("Europe/Copenhagen");
        let dt = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 678901).unwrap();
        assert_eq!(dt.to_string(), "2000-01-02 03:04:05.678901+01:00");
        assert_eq!(dt.ewsformat(), "2000-01-02T03:04:05.678901+01:00");
        assert_eq!(
            dt.astimezone(&UTC).ewsformat(),
            "2000-01-02T02:04:05.678901Z"
        );

        // summertime rendering of the same wall fields shifts by the DST hour
        let dt = EwsDateTime::new(tz, 2000, 8, 2, 3, 4, 5, 678901).unwrap();
        assert_eq!(
            dt.astimezone(&UTC).ewsformat(),
            "2000-08-02T01:04:05.678901Z"
        );
    }

    #[test]
    fn test_fraction_only_when_nonzero() {
        let dt = EwsDateTime::new(UTC, 2000, 1, 2, 3, 4, 5, 0).unwrap();
        assert_eq!(dt.ewsformat(), "2000-01-02T03:04:05Z");
        assert_eq!(dt.to_string(), "2000-01-02 03:04:05+00:00");
    }

    #[test]
    fn test_from_string_rejects_naive() {
        let err = EwsDateTime::from_string("2000-01-02T03:04:05").unwrap_err();
        assert_eq!(
            err,
            TemporalError::NaiveDateTimeNotAllowed("2000-01-02T03:04:05".to_string())
        );
        // with fraction but still no designator
        assert!(matches!(
            EwsDateTime::from_string("2000-01-02T03:04:05.678901").unwrap_err(),
            TemporalError::NaiveDateTimeNotAllowed(_)
        ));
        assert!(matches!(
            EwsDateTime::from_string("not a datetime").unwrap_err(),
            TemporalError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_from_string_normalizes_to_utc() {
        let parsed = EwsDateTime::from_string("2000-01-02T03:04:05+01:00").unwrap();
        assert_eq!(parsed, EwsDateTime::new(UTC, 2000, 1, 2, 2, 4, 5, 0).unwrap());
        assert_eq!(parsed.time_zone(), UTC);

        let parsed = EwsDateTime::from_string("2000-01-02T03:04:05Z").unwrap();
        assert_eq!(parsed, EwsDateTime::new(UTC, 2000, 1, 2, 3, 4, 5, 0).unwrap());
    }

    #[test]
    fn test_round_trip_preserves_instant() {
        for s in [
            "2000-01-02T03:04:05Z",
            "2000-01-02T03:04:05.678901+01:00",
            "2000-01-02T03:04:05.000001-09:30",
        ] {
            let parsed = EwsDateTime::from_string(s).unwrap();
            let reparsed = EwsDateTime::from_string(&parsed.ewsformat()).unwrap();
            assert_eq!(parsed, reparsed, "{s}");
            assert_eq!(parsed.microsecond(), reparsed.microsecond(), "{s}");
        }
    }

    #[test]
    fn test_arithmetic_closure() {
        let tz = zone("Europe/Copenhagen");
        let dt = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 0).unwrap();
        let delta = TimeDelta::days(1) + TimeDelta::seconds(3601);
        let back = (dt + delta) - delta;
        assert_eq!(back, dt);
        assert_eq!(back.time_zone(), dt.time_zone());
    }

    #[test]
    fn test_in_place_arithmetic() {
        let tz = zone("Europe/Copenhagen");
        let mut dt = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 0).unwrap();
        dt += TimeDelta::days(1);
        assert_eq!(dt, EwsDateTime::new(tz, 2000, 1, 3, 3, 4, 5, 0).unwrap());
        dt -= TimeDelta::days(2);
        assert_eq!(dt, EwsDateTime::new(tz, 2000, 1, 1, 3, 4, 5, 0).unwrap());
    }

    #[test]
    fn test_difference() {
        let tz = zone("Europe/Copenhagen");
        let a = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 0).unwrap();
        let b = EwsDateTime::new(tz, 2000, 1, 1, 3, 4, 5, 0).unwrap();
        assert_eq!(a - b, TimeDelta::days(1));
    }

    #[test]
    fn test_instant_comparison_across_zones() {
        // 12:00 UTC and 13:00 Copenhagen (winter) are the same instant
        let in_utc = EwsDateTime::new(UTC, 2000, 1, 2, 12, 0, 0, 0).unwrap();
        let in_cph = EwsDateTime::new(zone("Europe/Copenhagen"), 2000, 1, 2, 13, 0, 0, 0).unwrap();
        assert_eq!(in_utc, in_cph);
        assert!(in_utc < in_cph + TimeDelta::seconds(1));
        assert!(in_cph - TimeDelta::seconds(1) < in_utc);
    }

    #[test]
    fn test_addition_crosses_dst_boundary() {
        // absolute arithmetic: +24h over the spring-forward gap lands one
        // wall-clock hour later
        let tz = zone("Europe/Copenhagen");
        let dt = EwsDateTime::new(tz, 2023, 3, 25, 12, 0, 0, 0).unwrap();
        let next = dt + TimeDelta::hours(24);
        assert_eq!(next.hour(), 13);
        assert_eq!(next - dt, TimeDelta::hours(24));
    }

    #[test]
    fn test_date_accessors() {
        let tz = zone("Europe/Copenhagen");
        let dt = EwsDateTime::new(tz, 2000, 1, 2, 3, 4, 5, 678901).unwrap();
        assert_eq!(dt.date(), EwsDate::from_ymd(2000, 1, 2).unwrap());
        assert_eq!(
            (dt.year(), dt.month(), dt.day()),
            (2000, 1, 2)
        );
        assert_eq!(
            (dt.hour(), dt.minute(), dt.second(), dt.microsecond()),
            (3, 4, 5, 678901)
        );
    }

    #[test]
    fn test_from_timestamp() {
        let dt = EwsDateTime::from_timestamp(123456789, &UTC).unwrap();
        assert_eq!(dt.ewsformat(), "1973-11-29T21:33:09Z");
        assert_eq!(dt.timestamp(), 123456789);
    }

    #[test]
    fn test_now_is_zone_bound() {
        let tz = zone("Europe/Copenhagen");
        let now = EwsDateTime::now(&tz);
        assert_eq!(now.time_zone(), tz);
        let utc = EwsDateTime::utc_now();
        assert_eq!(utc.time_zone(), UTC);
    }
}
