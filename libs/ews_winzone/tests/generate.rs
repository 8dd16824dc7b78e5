// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Parser and error-classification tests against fixture documents; the
//! network path is exercised only through injected sources.

use ews_winzone::{generate_with, parse, GeneratedMap, MapError};

const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<supplementalData>
    <windowsZones>
        <mapTimezones otherVersion="7e11900" typeVersion="2025b">
            <!-- (UTC) Coordinated Universal Time -->
            <mapZone other="UTC" territory="001" type="Etc/UTC"/>
            <mapZone other="UTC" territory="ZZ" type="Etc/UTC Etc/GMT"/>
            <!-- (UTC+01:00) Brussels, Copenhagen, Madrid, Paris -->
            <mapZone other="Romance Standard Time" territory="001" type="Europe/Paris"/>
            <mapZone other="Romance Standard Time" territory="DK" type="Europe/Copenhagen"/>
            <!-- (UTC+06:30) Yangon (Rangoon) -->
            <mapZone other="Myanmar Standard Time" territory="001" type="Asia/Rangoon Indian/Cocos"/>
        </mapTimezones>
    </windowsZones>
</supplementalData>
"#;

fn fixture_map() -> GeneratedMap {
    parse(FIXTURE).expect("fixture parses")
}

#[test]
fn parses_version_tags() {
    let map = fixture_map();
    assert_eq!(map.type_version, "2025b");
    assert_eq!(map.other_version, "7e11900");
    assert_eq!(map.version_drift(), None);
}

#[test]
fn surfaces_version_drift_without_failing() {
    let drifted = FIXTURE.replace("2025b", "2026a");
    let map = parse(&drifted).expect("drifted document still parses");
    assert_eq!(map.version_drift(), Some(("2026a", "7e11900")));
}

#[test]
fn consumes_every_territory_and_splits_multi_name_rows() {
    let map = fixture_map();
    assert_eq!(
        map.entries.get("Europe/Copenhagen").map(|(id, _)| id.as_str()),
        Some("Romance Standard Time")
    );
    assert_eq!(
        map.entries.get("Indian/Cocos").map(|(id, _)| id.as_str()),
        Some("Myanmar Standard Time")
    );
}

#[test]
fn world_rows_define_representatives() {
    let map = fixture_map();
    assert_eq!(
        map.representatives.get("Romance Standard Time").map(String::as_str),
        Some("Europe/Paris")
    );
    assert_eq!(map.representatives.get("UTC").map(String::as_str), Some("Etc/UTC"));
    // territory rows do not override the world representative
    assert_ne!(
        map.representatives.get("Romance Standard Time").map(String::as_str),
        Some("Europe/Copenhagen")
    );
}

#[test]
fn closes_over_tz_database_aliases() {
    let map = fixture_map();
    // the document spells it Asia/Rangoon; the provider also enumerates the
    // canonical Asia/Yangon
    assert_eq!(
        map.entries.get("Asia/Yangon").map(|(id, _)| id.as_str()),
        Some("Myanmar Standard Time")
    );
    // plain GMT reaches Etc/GMT through the alias table
    assert_eq!(map.entries.get("GMT").map(|(id, _)| id.as_str()), Some("UTC"));
}

#[test]
fn supplements_posix_era_names() {
    let map = fixture_map();
    assert!(map.entries.contains_key("CET"));
}

#[test]
fn attaches_display_names_from_side_table() {
    let map = fixture_map();
    let (_, name) = map.entries.get("Europe/Copenhagen").unwrap();
    assert_eq!(name, "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris");
}

#[test]
fn fixture_agrees_with_embedded_snapshot() {
    let map = fixture_map();
    let (id, name) = map.entries.get("Europe/Copenhagen").unwrap();
    let embedded = ews_tz::lookup_by_iana("Europe/Copenhagen").unwrap();
    assert_eq!(id, embedded.windows_id);
    assert_eq!(name, embedded.windows_name);
}

#[test]
fn transport_failure_is_not_a_validation_error() {
    let result = generate_with(|| {
        Err(MapError::Fetch("connection reset by peer".to_string()))
    });
    match result {
        Err(MapError::Fetch(_)) => {},
        other => panic!("expected a fetch error, got {other:?}"),
    }
    // and the embedded table is untouched by the failed attempt
    assert_eq!(
        ews_tz::lookup_by_iana("Europe/Copenhagen").unwrap().windows_id,
        "Romance Standard Time"
    );
    assert!(ews_tz::missing_mappings().is_empty());
}

#[test]
fn malformed_documents_are_validation_errors() {
    for doc in [
        "",
        "not xml at all <",
        "<supplementalData><windowsZones></windowsZones></supplementalData>",
        // versions present but no rows
        r#"<supplementalData><windowsZones><mapTimezones otherVersion="x" typeVersion="y"></mapTimezones></windowsZones></supplementalData>"#,
        // rows but no version attributes
        r#"<supplementalData><windowsZones><mapTimezones><mapZone other="UTC" territory="001" type="Etc/UTC"/></mapTimezones></windowsZones></supplementalData>"#,
    ] {
        match parse(doc) {
            Err(MapError::Validation(_)) => {},
            other => panic!("expected a validation error for {doc:?}, got {other:?}"),
        }
    }
}
