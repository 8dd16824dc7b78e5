// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Verifies the embedded mapping snapshot against the provider's zone list.

use ews_tz::{lookup_by_iana, lookup_by_windows_id, missing_mappings, EwsTimeZone};

#[test]
fn every_provider_zone_is_mapped() {
    let missing = missing_mappings();
    assert!(
        missing.is_empty(),
        "provider zones without a Windows mapping: {missing:?}"
    );
}

#[test]
fn every_provider_zone_constructs() {
    for tz in chrono_tz::TZ_VARIANTS {
        let zone = EwsTimeZone::from_tz(tz)
            .unwrap_or_else(|e| panic!("{}: {e}", tz.name()));
        assert!(!zone.ms_id().is_empty(), "{} has an empty Windows id", tz.name());
        // repeated construction resolves identically
        let again = EwsTimeZone::from_tz(tz).unwrap();
        assert_eq!(zone.ms_id(), again.ms_id());
        assert_eq!(zone.ms_name(), again.ms_name());
    }
}

#[test]
fn reverse_index_agrees_with_forward_table() {
    for tz in chrono_tz::TZ_VARIANTS {
        let entry = match lookup_by_iana(tz.name()) {
            Some(entry) => entry,
            None => continue, // covered by every_provider_zone_is_mapped
        };
        let representative = lookup_by_windows_id(entry.windows_id)
            .unwrap_or_else(|| panic!("no representative for {}", entry.windows_id));
        let round_trip = lookup_by_iana(representative)
            .unwrap_or_else(|| panic!("representative {representative} is unmapped"));
        assert_eq!(round_trip.windows_id, entry.windows_id);
    }
}
