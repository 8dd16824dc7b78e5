// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Temporal values in the EWS wire format.
//!
//! Two types cross the wire boundary:
//!
//! - [`EwsDate`] — a plain `YYYY-MM-DD` calendar date with no timezone.
//! - [`EwsDateTime`] — a `YYYY-MM-DDTHH:MM:SS[.ffffff](Z|±HH:MM)` instant,
//!   always bound to a registry-issued [`ews_tz::EwsTimeZone`].
//!
//! The wire format is strict on purpose: the remote protocol is ambiguous
//! about timestamps with an implicit timezone, and guessing has corrupted
//! data before. A datetime string without a trailing `Z` or offset is
//! rejected with [`TemporalError::NaiveDateTimeNotAllowed`] rather than
//! interpreted in any default zone, and the type system does not admit a
//! timezone-less datetime value at all, so serialization cannot be asked to
//! invent one.
//!
//! Comparison and arithmetic are in absolute time: two values denoting the
//! same instant are equal regardless of the zones they are rendered in, and
//! adding a duration across a DST transition shifts the wall clock.

mod date;
mod date_time;
mod error;

pub use date::EwsDate;
pub use date_time::EwsDateTime;
pub use error::TemporalError;
