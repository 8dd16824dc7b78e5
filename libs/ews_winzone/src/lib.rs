// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Generator for the embedded IANA to Windows timezone mapping.
//!
//! The authoritative source is the CLDR `windowsZones.xml` document. This
//! crate fetches it, parses every `mapZone` row, closes the result over the
//! tz database alias table so each zone the provider enumerates gets a row,
//! and hands back the table together with the document's two version tags.
//!
//! This is an offline maintenance path: the `ews-winzone` binary rewrites
//! `ews_tz`'s checked-in `map_data.rs`, it is never run while serving
//! requests. Upstream versions move independently of this workspace's
//! releases, so a version tag that differs from the embedded snapshot is
//! reported for review rather than treated as a failure.

mod fetch;
mod tables;

pub use fetch::fetch_upstream;

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::Reader;

/// The upstream authoritative mapping document.
pub const CLDR_WINZONE_URL: &str =
    "https://raw.githubusercontent.com/unicode-org/cldr/main/common/supplemental/windowsZones.xml";

/// Environment override for the upstream URL, e.g. an offline mirror.
pub const URL_ENV: &str = "EWS_WINZONE_URL";
/// Environment override for the fetch timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "EWS_WINZONE_TIMEOUT_MS";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// The configured upstream URL.
pub fn upstream_url() -> String {
    env::var(URL_ENV).unwrap_or_else(|_| CLDR_WINZONE_URL.to_string())
}

/// The configured fetch timeout.
pub fn fetch_timeout() -> Duration {
    let ms = env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    Duration::from_millis(ms)
}

/// Errors from map generation.
///
/// The two kinds are deliberately distinct: a broken network is tolerable to
/// a caller that only wanted to confirm snapshot freshness, a malformed
/// document is not.
#[derive(Debug)]
pub enum MapError {
    /// Transport failure reaching the upstream document.
    Fetch(String),
    /// The response is not a usable windowsZones document.
    Validation(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Fetch(msg) => write!(f, "Failed to fetch mapping document: {msg}"),
            MapError::Validation(msg) => write!(f, "Invalid mapping document: {msg}"),
        }
    }
}

impl std::error::Error for MapError {}

/// A freshly generated mapping table plus the upstream version tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    /// `typeVersion` attribute of the document (tz database release).
    pub type_version: String,
    /// `otherVersion` attribute of the document (Windows zone list revision).
    pub other_version: String,
    /// IANA key to `(windows_id, windows_display_name)`.
    pub entries: BTreeMap<String, (String, String)>,
    /// Windows id to its world-region (`territory="001"`) representative.
    pub representatives: BTreeMap<String, String>,
}

impl GeneratedMap {
    /// Version tags differing from the embedded snapshot, if any.
    ///
    /// Drift detection only; the freshly parsed table is valid either way.
    pub fn version_drift(&self) -> Option<(&str, &str)> {
        if self.type_version == ews_tz::CLDR_WINZONE_TYPE_VERSION
            && self.other_version == ews_tz::CLDR_WINZONE_OTHER_VERSION
        {
            None
        } else {
            Some((&self.type_version, &self.other_version))
        }
    }

    /// Provider zones the generated table does not cover.
    pub fn uncovered(&self) -> Vec<&'static str> {
        chrono_tz::TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| !self.entries.contains_key(*name))
            .collect()
    }
}

/// Parse a windowsZones document into a mapping table.
///
/// Every `mapZone` row is consumed regardless of territory; multi-name
/// `type` attributes contribute one entry per name. Display names come from
/// the static Windows zone name table, since the document carries none.
pub fn parse(raw: &str) -> Result<GeneratedMap, MapError> {
    let mut reader = Reader::from_reader(raw.as_bytes());
    reader.trim_text(true);

    let mut type_version = None;
    let mut other_version = None;
    let mut entries: BTreeMap<String, (String, String)> = BTreeMap::new();
    let mut representatives = BTreeMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref tag)) | Ok(Event::Empty(ref tag)) => {
                match tag.name().as_ref() {
                    b"mapTimezones" => {
                        for attr in tag.attributes() {
                            let attr = attr.map_err(validation)?;
                            let value = attr.unescape_value().map_err(validation)?;
                            match attr.key.as_ref() {
                                b"typeVersion" => type_version = Some(value.into_owned()),
                                b"otherVersion" => other_version = Some(value.into_owned()),
                                _ => {},
                            }
                        }
                    },
                    b"mapZone" => {
                        let mut windows_id = None;
                        let mut territory = None;
                        let mut types = None;
                        for attr in tag.attributes() {
                            let attr = attr.map_err(validation)?;
                            let value = attr.unescape_value().map_err(validation)?;
                            match attr.key.as_ref() {
                                b"other" => windows_id = Some(value.into_owned()),
                                b"territory" => territory = Some(value.into_owned()),
                                b"type" => types = Some(value.into_owned()),
                                _ => {},
                            }
                        }
                        let (Some(windows_id), Some(territory), Some(types)) =
                            (windows_id, territory, types)
                        else {
                            return Err(MapError::Validation(
                                "mapZone row is missing attributes".to_string(),
                            ));
                        };
                        let display = display_name(&windows_id);
                        for name in types.split_whitespace() {
                            entries.insert(
                                name.to_string(),
                                (windows_id.clone(), display.to_string()),
                            );
                        }
                        if territory == "001" {
                            if let Some(first) = types.split_whitespace().next() {
                                representatives.insert(windows_id, first.to_string());
                            }
                        }
                    },
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(validation(e)),
            _ => {},
        }
        buf.clear();
    }

    let (Some(type_version), Some(other_version)) = (type_version, other_version) else {
        return Err(MapError::Validation(
            "missing mapTimezones version attributes".to_string(),
        ));
    };
    if entries.is_empty() {
        return Err(MapError::Validation(
            "document contains no mapZone rows".to_string(),
        ));
    }

    // POSIX-era zone names have no upstream row
    for (name, windows_id) in tables::POSIX_SUPPLEMENT {
        entries
            .entry((*name).to_string())
            .or_insert_with(|| ((*windows_id).to_string(), display_name(windows_id).to_string()));
    }

    alias_closure(&mut entries);

    Ok(GeneratedMap {
        type_version,
        other_version,
        entries,
        representatives,
    })
}

/// Compose an injected document source with [`parse`].
pub fn generate_with<F>(source: F) -> Result<GeneratedMap, MapError>
where
    F: FnOnce() -> Result<String, MapError>,
{
    parse(&source()?)
}

/// Fetch the upstream document and generate the table.
pub async fn generate() -> Result<GeneratedMap, MapError> {
    let raw = fetch::fetch_upstream(&upstream_url(), fetch_timeout()).await?;
    parse(&raw)
}

fn validation(e: impl fmt::Display) -> MapError {
    MapError::Validation(e.to_string())
}

fn display_name(windows_id: &str) -> &'static str {
    tables::WINDOWS_ZONE_NAMES
        .binary_search_by(|(id, _)| (*id).cmp(windows_id))
        .ok()
        .map(|idx| tables::WINDOWS_ZONE_NAMES[idx].1)
        .unwrap_or("")
}

/// Give every provider zone missing from the document the mapping of an
/// equivalent spelling, per the tz database alias table. The document tends
/// to carry one spelling per zone (often the older one, e.g.
/// `Asia/Calcutta`) while the provider enumerates both.
fn alias_closure(entries: &mut BTreeMap<String, (String, String)>) {
    for tz in chrono_tz::TZ_VARIANTS.iter() {
        let name = tz.name();
        if entries.contains_key(name) {
            continue;
        }
        if let Some(mapping) = equivalent_mapping(name, entries) {
            entries.insert(name.to_string(), mapping);
        }
    }
}

/// A mapped name sharing `name`'s canonical zone, if any.
fn equivalent_mapping(
    name: &str,
    entries: &BTreeMap<String, (String, String)>,
) -> Option<(String, String)> {
    let canonical = link_target(name).unwrap_or(name);
    if let Some(mapping) = entries.get(canonical) {
        return Some(mapping.clone());
    }
    for (alias, target) in tables::TZ_LINKS {
        if *target == canonical {
            if let Some(mapping) = entries.get(*alias) {
                return Some(mapping.clone());
            }
        }
    }
    None
}

fn link_target(name: &str) -> Option<&'static str> {
    tables::TZ_LINKS
        .binary_search_by(|(alias, _)| (*alias).cmp(name))
        .ok()
        .map(|idx| tables::TZ_LINKS[idx].1)
}
