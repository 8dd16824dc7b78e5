// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Embedded IANA to Windows zone mapping.
//!
//! The tables live in `map_data.rs`, written by the `ews-winzone` tool and
//! checked in. Both directions are sorted static slices searched by binary
//! search; nothing here is mutated after program start.

use crate::map_data::{WINZONE_MAP, WINZONE_REVERSE};

/// One row of the embedded mapping snapshot.
#[derive(Debug, Clone, Copy)]
pub struct WinZoneEntry {
    /// IANA key, e.g. `Europe/Copenhagen`.
    pub iana: &'static str,
    /// Windows zone id, e.g. `Romance Standard Time`.
    pub windows_id: &'static str,
    /// Windows display string, empty when the snapshot has none.
    pub windows_name: &'static str,
}

/// Look up the Windows zone for an IANA key.
pub fn lookup_by_iana(key: &str) -> Option<&'static WinZoneEntry> {
    WINZONE_MAP
        .binary_search_by(|entry| entry.iana.cmp(key))
        .ok()
        .map(|idx| &WINZONE_MAP[idx])
}

/// Look up a representative IANA key for a Windows zone id.
///
/// Many IANA keys share one Windows id, so this direction is lossy: the
/// result maps back to the same Windows zone, not necessarily to the key a
/// forward lookup started from.
pub fn lookup_by_windows_id(id: &str) -> Option<&'static str> {
    WINZONE_REVERSE
        .binary_search_by(|(windows_id, _)| (*windows_id).cmp(id))
        .ok()
        .map(|idx| WINZONE_REVERSE[idx].1)
}

/// Names that are artifacts of a tz database installation rather than
/// geographic zones; excluded from coverage verification.
fn is_pseudo_zone(name: &str) -> bool {
    name == "localtime" || name.starts_with("SystemV/")
}

/// Provider zones with no mapping entry.
///
/// Expected empty; anything returned here means the embedded snapshot has
/// gone stale relative to the provider's tz database and `ews-winzone`
/// should be rerun.
pub fn missing_mappings() -> Vec<&'static str> {
    chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| !is_pseudo_zone(name) && lookup_by_iana(name).is_none())
        .collect()
}
