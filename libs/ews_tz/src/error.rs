// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors from timezone resolution.
///
/// The two unknown-key cases are reported separately: a key the IANA provider
/// has never heard of is a caller typo, while a key the provider knows but
/// the mapping table lacks means the embedded snapshot is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZoneError {
    /// The key is not recognized by the IANA provider.
    UnknownKey(String),
    /// The key is valid IANA but has no Windows mapping entry.
    NoWindowsMapping(String),
    /// A fixed UTC offset with no `Etc/GMT±N` equivalent.
    UnmappableOffset(i32),
    /// The host's local timezone could not be determined.
    LocalZoneDetection,
}

impl fmt::Display for TimeZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneError::UnknownKey(key) => {
                write!(f, "No time zone found with key {key}")
            },
            TimeZoneError::NoWindowsMapping(key) => {
                write!(f, "No Windows timezone name found for timezone \"{key}\"")
            },
            TimeZoneError::UnmappableOffset(secs) => {
                write!(f, "No fixed-offset time zone for UTC offset of {secs} seconds")
            },
            TimeZoneError::LocalZoneDetection => f.write_str("Failed to guess local timezone"),
        }
    }
}

impl std::error::Error for TimeZoneError {}
