// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Rewrites `libs/ews_tz/src/map_data.rs` from the upstream document.
//!
//! Run from the workspace root, or pass the output path as the first
//! argument. `EWS_WINZONE_URL` points the fetch at a mirror.

mod minimal_tracer;

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ews_winzone::GeneratedMap;
use minimal_tracer::MinimalTracer;
use tracing::warn;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    MinimalTracer::register()?;

    let out_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "libs/ews_tz/src/map_data.rs".to_string());

    let map = ews_winzone::generate().await?;

    if let Some((type_version, other_version)) = map.version_drift() {
        warn!(
            "upstream moved to typeVersion={type_version} otherVersion={other_version} \
             (snapshot has {}/{}); review the diff before committing",
            ews_tz::CLDR_WINZONE_TYPE_VERSION,
            ews_tz::CLDR_WINZONE_OTHER_VERSION,
        );
    }
    let uncovered = map.uncovered();
    if !uncovered.is_empty() {
        warn!(
            "{} provider zones have no mapping and will fail lookups: {uncovered:?}",
            uncovered.len()
        );
    }

    write_map_data(Path::new(&out_path), &map)?;
    println!("wrote {} mappings to {out_path}", map.entries.len());
    Ok(())
}

/// Emit the checked-in data module consumed by `ews_tz`.
fn write_map_data(path: &Path, map: &GeneratedMap) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(
        out,
        "//! Generated by the `ews-winzone` tool from the CLDR windowsZones document."
    )?;
    writeln!(out, "//! Do not edit by hand; rerun the tool to refresh.")?;
    writeln!(out)?;
    writeln!(out, "use crate::map::WinZoneEntry;")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// `typeVersion` of the upstream document this table was generated from."
    )?;
    writeln!(
        out,
        "pub const CLDR_WINZONE_TYPE_VERSION: &str = \"{}\";",
        map.type_version
    )?;
    writeln!(
        out,
        "/// `otherVersion` of the upstream document this table was generated from."
    )?;
    writeln!(
        out,
        "pub const CLDR_WINZONE_OTHER_VERSION: &str = \"{}\";",
        map.other_version
    )?;
    writeln!(out)?;
    writeln!(out, "/// IANA key to Windows zone, sorted by key for binary search.")?;
    writeln!(out, "pub(crate) static WINZONE_MAP: &[WinZoneEntry] = &[")?;
    for (iana, (windows_id, windows_name)) in &map.entries {
        writeln!(
            out,
            "    WinZoneEntry {{ iana: \"{iana}\", windows_id: \"{windows_id}\", windows_name: \"{windows_name}\" }},"
        )?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Windows zone to its world-region representative IANA key, sorted by id."
    )?;
    writeln!(out, "pub(crate) static WINZONE_REVERSE: &[(&str, &str)] = &[")?;
    for (windows_id, iana) in &map.representatives {
        writeln!(out, "    (\"{windows_id}\", \"{iana}\"),")?;
    }
    writeln!(out, "];")?;
    out.flush()
}
