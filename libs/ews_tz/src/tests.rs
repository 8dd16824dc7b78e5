// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Offset};

use crate::{EwsTimeZone, TimeZoneError, UTC};

fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_autogenerated_translations() {
    let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    assert_eq!(tz.key(), "Europe/Copenhagen");
    assert_eq!(tz.ms_id(), "Romance Standard Time");
    assert!(!tz.ms_name().is_empty());
}

#[test]
fn test_common_helpers() {
    let tz = EwsTimeZone::from_key("UTC").unwrap();
    assert_eq!(tz.key(), "UTC");
    assert_eq!(tz.ms_id(), "UTC");
    assert_eq!(tz, UTC);

    let tz = EwsTimeZone::from_key("GMT").unwrap();
    assert_eq!(tz.key(), "GMT");
    assert_eq!(tz.ms_id(), "UTC");
}

#[test]
fn test_unknown_key() {
    let err = EwsTimeZone::from_key("UNKNOWN").unwrap_err();
    assert_eq!(err, TimeZoneError::UnknownKey("UNKNOWN".to_string()));
    assert_eq!(err.to_string(), "No time zone found with key UNKNOWN");
}

#[test]
fn test_missing_mapping_message() {
    // the embedded snapshot covers the full provider list, so the stale-map
    // case can only be provoked through its message here
    let err = TimeZoneError::NoWindowsMapping("Africa/Tripoli".to_string());
    assert_eq!(
        err.to_string(),
        "No Windows timezone name found for timezone \"Africa/Tripoli\""
    );
}

#[test]
fn test_from_ms_id() {
    let tz = EwsTimeZone::from_ms_id("Romance Standard Time").unwrap();
    assert_eq!(tz.ms_id(), "Romance Standard Time");

    // servers sometimes hand back an IANA key in the Windows id slot
    let tz = EwsTimeZone::from_ms_id("Europe/Copenhagen").unwrap();
    assert_eq!(tz, EwsTimeZone::from_key("Europe/Copenhagen").unwrap());

    assert!(EwsTimeZone::from_ms_id("Nonexistent Standard Time").is_err());
}

#[test]
fn test_windows_id_round_trip_is_lossy() {
    let cph = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let back = EwsTimeZone::from_ms_id(cph.ms_id()).unwrap();
    // same Windows zone, but a representative key, not the original one
    assert_eq!(back.ms_id(), cph.ms_id());
    assert_ne!(back, cph);
}

#[test]
fn test_from_fixed_offset() {
    let east = EwsTimeZone::from_fixed_offset(FixedOffset::east_opt(5 * 3600).unwrap()).unwrap();
    assert_eq!(east.key(), "Etc/GMT-5");

    let west = EwsTimeZone::from_fixed_offset(FixedOffset::west_opt(5 * 3600).unwrap()).unwrap();
    assert_eq!(west.key(), "Etc/GMT+5");

    let zero = EwsTimeZone::from_fixed_offset(FixedOffset::east_opt(0).unwrap()).unwrap();
    assert_eq!(zero, UTC);

    let odd = EwsTimeZone::from_fixed_offset(FixedOffset::east_opt(5 * 3600 + 1800).unwrap());
    assert_eq!(odd.unwrap_err(), TimeZoneError::UnmappableOffset(19800));

    let out_of_range =
        EwsTimeZone::from_fixed_offset(FixedOffset::east_opt(15 * 3600).unwrap());
    assert_eq!(
        out_of_range.unwrap_err(),
        TimeZoneError::UnmappableOffset(15 * 3600)
    );
}

#[test]
fn test_equality_is_by_key() {
    let a = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let b = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let c = EwsTimeZone::from_key("Europe/Paris").unwrap();
    assert_eq!(a, b);
    // same Windows zone, different keys
    assert_eq!(a.ms_id(), c.ms_id());
    assert_ne!(a, c);
}

#[test]
fn test_parse_and_display() {
    let tz: EwsTimeZone = "Europe/Copenhagen".parse().unwrap();
    assert_eq!(tz.to_string(), "Europe/Copenhagen");
    assert!("Invalid/Zone".parse::<EwsTimeZone>().is_err());
}

#[test]
fn test_localize_backward_transition() {
    // 2023-10-29 in Copenhagen: 03:00 DST falls back to 02:00, so 02:36 is
    // read twice, first at +02:00 and again at +01:00
    let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let wall = naive(2023, 10, 29, 2, 36, 0);

    let standard = tz.localize(wall, Some(false));
    assert_eq!(standard.naive_utc(), naive(2023, 10, 29, 1, 36, 0));
    assert_eq!(standard.offset().fix().local_minus_utc(), 3600);

    let daylight = tz.localize(wall, Some(true));
    assert_eq!(daylight.naive_utc(), naive(2023, 10, 29, 0, 36, 0));
    assert_eq!(daylight.offset().fix().local_minus_utc(), 7200);

    // no hint resolves to the pre-transition reading
    let default = tz.localize(wall, None);
    assert_eq!(default, daylight);
}

#[test]
fn test_localize_forward_transition() {
    // 2023-03-26 in Copenhagen: 02:00 jumps to 03:00, so 02:36 never happens
    let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let wall = naive(2023, 3, 26, 2, 36, 0);

    // read with the standard-time offset of +01:00
    let standard = tz.localize(wall, Some(false));
    assert_eq!(standard.naive_utc(), naive(2023, 3, 26, 1, 36, 0));

    // read with the daylight offset of +02:00
    let daylight = tz.localize(wall, Some(true));
    assert_eq!(daylight.naive_utc(), naive(2023, 3, 26, 0, 36, 0));

    let default = tz.localize(wall, None);
    assert_eq!(default, standard);
}

#[test]
fn test_localize_unambiguous_ignores_hint() {
    let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let wall = naive(2023, 6, 1, 12, 0, 0);
    let expected = naive(2023, 6, 1, 10, 0, 0);
    for hint in [None, Some(true), Some(false)] {
        assert_eq!(tz.localize(wall, hint).naive_utc(), expected);
    }
}

#[test]
fn test_datetime_arithmetic_crosses_transitions() {
    // absolute-instant arithmetic: adding a day across the spring-forward
    // boundary moves the wall clock by 25 hours
    let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
    let before = tz.localize(naive(2023, 3, 25, 12, 0, 0), None);
    let after = before + chrono::TimeDelta::hours(24);
    assert_eq!(after.naive_local(), naive(2023, 3, 26, 13, 0, 0));
    assert_eq!(after.offset().fix().local_minus_utc(), 7200);
}
