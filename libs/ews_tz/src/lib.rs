// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timezone translation layer for EWS wire payloads.
//!
//! The wire protocol identifies timezones by Microsoft's Windows zone names
//! (e.g. `Romance Standard Time`), while the host and its callers reason in
//! IANA keys (e.g. `Europe/Copenhagen`). This library owns that translation:
//!
//! 1. **Mapping table** — an embedded snapshot of the CLDR windowsZones
//!    document, stored as sorted static slices (`map_data.rs`) and searched
//!    by binary search. Regenerated offline by the `ews-winzone` tool, never
//!    mutated at runtime.
//! 2. **Registry** — [`EwsTimeZone`], a timezone value that is guaranteed to
//!    be known to both the IANA rule provider and the mapping table. It
//!    implements chrono's `TimeZone` trait, so datetimes bound to a registry
//!    zone keep their Windows identity through all arithmetic.
//!
//! The Windows partition of the world is coarser than IANA's, so many IANA
//! keys collapse onto one Windows id. The reverse direction resolves to a
//! representative key and is lossy by design.
//!
//! DST rule evaluation is delegated entirely to chrono-tz; this crate only
//! adds the Windows naming layer and wall-clock disambiguation on top.
//!
//! # Example
//!
//! ```
//! use ews_tz::EwsTimeZone;
//!
//! let tz = EwsTimeZone::from_key("Europe/Copenhagen").unwrap();
//! assert_eq!(tz.ms_id(), "Romance Standard Time");
//! ```

mod error;
mod map;
mod map_data;
mod registry;

pub use error::TimeZoneError;
pub use map::{lookup_by_iana, lookup_by_windows_id, missing_mappings, WinZoneEntry};
pub use map_data::{CLDR_WINZONE_OTHER_VERSION, CLDR_WINZONE_TYPE_VERSION};
pub use registry::{EwsOffset, EwsTimeZone, UTC};

#[cfg(test)]
mod tests;
