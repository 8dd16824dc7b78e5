// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Registry-issued timezone values.
//!
//! [`EwsTimeZone`] is the only timezone type the rest of the stack accepts,
//! which makes "has a Windows mapping" a property of the type instead of a
//! runtime check scattered across call sites. Foreign representations are
//! admitted through the explicit adapters below and nowhere else.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
};
use chrono_tz::{OffsetComponents, Tz};
use tracing::trace;

use crate::error::TimeZoneError;
use crate::map;

/// A timezone recognized by both the IANA provider and the Windows mapping.
///
/// Equality is by IANA key. The Windows attributes are resolved from the
/// mapping table at construction and carried along, so the attribute getters
/// never fail.
#[derive(Debug, Clone, Copy)]
pub struct EwsTimeZone {
    inner: Tz,
    windows_id: &'static str,
    windows_name: &'static str,
}

/// The UTC timezone.
pub const UTC: EwsTimeZone = EwsTimeZone {
    inner: Tz::UTC,
    windows_id: "UTC",
    windows_name: "(UTC) Coordinated Universal Time",
};

impl EwsTimeZone {
    /// Resolve an IANA key.
    pub fn from_key(key: &str) -> Result<Self, TimeZoneError> {
        let tz: Tz = key
            .parse()
            .map_err(|_| TimeZoneError::UnknownKey(key.to_string()))?;
        Self::from_tz(tz)
    }

    /// Admit a provider timezone value.
    pub fn from_tz(tz: Tz) -> Result<Self, TimeZoneError> {
        let entry = map::lookup_by_iana(tz.name())
            .ok_or_else(|| TimeZoneError::NoWindowsMapping(tz.name().to_string()))?;
        Ok(Self {
            inner: tz,
            windows_id: entry.windows_id,
            windows_name: entry.windows_name,
        })
    }

    /// Resolve a Windows zone id to a representative zone.
    ///
    /// The Windows partition is coarser than IANA's, so the representative is
    /// one of several keys sharing the id; round-tripping a key through its
    /// Windows id is lossy by design. Servers occasionally echo an IANA key
    /// in the Windows id slot, so that spelling is accepted as a fallback.
    pub fn from_ms_id(id: &str) -> Result<Self, TimeZoneError> {
        match map::lookup_by_windows_id(id) {
            Some(key) => Self::from_key(key),
            None => {
                trace!("no Windows zone {id}, retrying as IANA key");
                Self::from_key(id)
            },
        }
    }

    /// Admit a foreign fixed-offset zone as the matching `Etc/GMT±N` zone.
    ///
    /// POSIX inverts the sign: `Etc/GMT+5` is five hours west of Greenwich.
    /// Offsets that are not a whole number of hours have no such zone and are
    /// rejected.
    pub fn from_fixed_offset(offset: FixedOffset) -> Result<Self, TimeZoneError> {
        let secs = offset.local_minus_utc();
        if secs == 0 {
            return Ok(UTC);
        }
        if secs % 3600 != 0 {
            return Err(TimeZoneError::UnmappableOffset(secs));
        }
        let hours = secs / 3600;
        let key = format!(
            "Etc/GMT{}{}",
            if hours > 0 { '-' } else { '+' },
            hours.abs()
        );
        Self::from_key(&key).map_err(|_| TimeZoneError::UnmappableOffset(secs))
    }

    /// The zone the host is configured for.
    pub fn localzone() -> Result<Self, TimeZoneError> {
        let key =
            iana_time_zone::get_timezone().map_err(|_| TimeZoneError::LocalZoneDetection)?;
        trace!("host timezone detected as {key}");
        Self::from_key(&key)
    }

    /// The IANA key.
    pub fn key(&self) -> &'static str {
        self.inner.name()
    }

    /// The Windows zone id the wire protocol wants.
    pub fn ms_id(&self) -> &'static str {
        self.windows_id
    }

    /// The Windows display string; may be empty.
    pub fn ms_name(&self) -> &'static str {
        self.windows_name
    }

    /// The provider handle carrying this zone's transition rules.
    pub fn provider(&self) -> Tz {
        self.inner
    }

    /// Interpret wall-clock fields in this zone.
    ///
    /// `is_dst` picks a side when the wall time is ambiguous (repeated by a
    /// backward transition) or skipped (by a forward transition):
    /// `Some(true)` prefers the daylight interpretation, `Some(false)` the
    /// standard one, and `None` the interpretation in effect before the
    /// transition. Unambiguous wall times ignore the hint entirely.
    ///
    /// A skipped wall time has no instant of its own; it resolves to the
    /// instant obtained by reading the fields with the chosen side's offset.
    pub fn localize(&self, local: NaiveDateTime, is_dst: Option<bool>) -> DateTime<EwsTimeZone> {
        let offset = match self.inner.offset_from_local_datetime(&local) {
            LocalResult::Single(offset) => offset.fix(),
            LocalResult::Ambiguous(first, second) => match is_dst {
                Some(want_dst) => {
                    let first_is_dst = !first.dst_offset().is_zero();
                    if first_is_dst == want_dst {
                        first.fix()
                    } else {
                        second.fix()
                    }
                },
                // repeated wall time: the pre-transition side has the larger offset
                None => {
                    let (first, second) = (first.fix(), second.fix());
                    if first.local_minus_utc() >= second.local_minus_utc() {
                        first
                    } else {
                        second
                    }
                },
            },
            LocalResult::None => {
                // the wall time sits inside a forward jump; probing with the
                // fields read as UTC and once more shifted by that result
                // lands one sample on each side of the transition
                let near = self.inner.offset_from_utc_datetime(&local);
                let shifted = local - TimeDelta::seconds(near.fix().local_minus_utc() as i64);
                let far = self.inner.offset_from_utc_datetime(&shifted);
                match is_dst {
                    Some(want_dst) => {
                        let near_is_dst = !near.dst_offset().is_zero();
                        if near_is_dst == want_dst {
                            near.fix()
                        } else {
                            far.fix()
                        }
                    },
                    // skipped wall time: the pre-transition side has the smaller offset
                    None => {
                        let (near, far) = (near.fix(), far.fix());
                        if near.local_minus_utc() <= far.local_minus_utc() {
                            near
                        } else {
                            far
                        }
                    },
                }
            },
        };
        let utc = local - TimeDelta::seconds(offset.local_minus_utc() as i64);
        self.from_utc_datetime(&utc)
    }
}

impl PartialEq for EwsTimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for EwsTimeZone {}

impl std::hash::Hash for EwsTimeZone {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl fmt::Display for EwsTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EwsTimeZone {
    type Err = TimeZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// UTC offset attached to datetimes carrying an [`EwsTimeZone`].
///
/// Keeps a handle to its zone so chrono can reconstruct the timezone from an
/// offset during datetime arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EwsOffset {
    tz: EwsTimeZone,
    offset: FixedOffset,
}

impl Offset for EwsOffset {
    fn fix(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Display for EwsOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset)
    }
}

impl TimeZone for EwsTimeZone {
    type Offset = EwsOffset;

    fn from_offset(offset: &EwsOffset) -> Self {
        offset.tz
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<EwsOffset> {
        self.inner.offset_from_local_date(local).map(|offset| EwsOffset {
            tz: *self,
            offset: offset.fix(),
        })
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<EwsOffset> {
        self.inner
            .offset_from_local_datetime(local)
            .map(|offset| EwsOffset {
                tz: *self,
                offset: offset.fix(),
            })
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> EwsOffset {
        EwsOffset {
            tz: *self,
            offset: self.inner.offset_from_utc_date(utc).fix(),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> EwsOffset {
        EwsOffset {
            tz: *self,
            offset: self.inner.offset_from_utc_datetime(utc).fix(),
        }
    }
}
