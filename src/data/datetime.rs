// src/data/datetime.rs

//! Functions to transform the bracketed timestamp of an access-log
//! record to a chrono [`DateTime`] instance, and to derive the record's
//! hour-of-day bucket from it.
//!
//! Decoding a timestamp requires:
//! 1. extracting the raw bracketed span from the line (via
//!    [`extract_timestamp_raw`])
//! 2. parsing that span against the fixed _combined log format_
//!    timestamp pattern [`DATETIME_PATTERN`]
//!
//! The most relevant document to understand this file is the `chrono`
//! crate [`strftime`] format.
//!
//! The derived hour is the local wall-clock hour as written in the
//! record, in whatever timezone offset the record carries. It is never
//! normalized to UTC or any other zone; records from mixed timezones
//! mix local hours.
//!
//! [`DateTime`]: https://docs.rs/chrono/0.4.21/chrono/struct.DateTime.html
//! [`strftime`]: https://docs.rs/chrono/0.4.21/chrono/format/strftime/index.html
//! [`extract_timestamp_raw`]: crate::data::accesslog::extract_timestamp_raw
//! [`DATETIME_PATTERN`]: self::DATETIME_PATTERN

#![allow(non_camel_case_types)]

use crate::data::accesslog::extract_timestamp_raw;

use std::io::{Error, ErrorKind, Result};

extern crate chrono;
use chrono::{DateTime, FixedOffset, Timelike};

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ, dpn, dpo, dpx, dpñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// timestamp decoding
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// chrono [`DateTime::parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.21/chrono/format/strftime/index.html
/// [`DateTime::parse_from_str`]: https://docs.rs/chrono/0.4.21/chrono/struct.DateTime.html#method.parse_from_str
pub type DateTimePattern_str = str;

/// A chrono [`DateTime`] type used in _a3lib_; the timezone offset is
/// whatever offset the access record carries.
///
/// [`DateTime`]: https://docs.rs/chrono/0.4.21/chrono/struct.DateTime.html
pub type DateTimeA = DateTime<FixedOffset>;
pub type DateTimeAOpt = Option<DateTimeA>;

/// An hour-of-day bucket in `[0, 23]`.
pub type Hour = u32;

/// The one timestamp pattern of the _combined log format_,
/// `day/month-abbreviation/year:hour:minute:second timezone-offset`,
/// e.g. `15/Sep/2023:00:18:46 +0200`.
pub const DATETIME_PATTERN: &DateTimePattern_str = "%d/%b/%Y:%H:%M:%S %z";

/// Decode the bracketed timestamp of `line` to a [`DateTimeA`].
///
/// Returns `Err` with [`ErrorKind::InvalidData`] if `line` has no
/// bracketed span, or the span does not parse against
/// [`DATETIME_PATTERN`] (invalid month abbreviation, out-of-range day or
/// hour, missing offset, …).
///
/// [`DateTimeA`]: self::DateTimeA
/// [`DATETIME_PATTERN`]: self::DATETIME_PATTERN
pub fn datetime_of(line: &str) -> Result<DateTimeA> {
    dpfn!("({:?})", line);

    let timestamp_raw: String = extract_timestamp_raw(line)?;
    match DateTimeA::parse_from_str(&timestamp_raw, DATETIME_PATTERN) {
        Ok(datetime) => {
            dpfx!("return {:?}", datetime);
            Ok(datetime)
        }
        Err(err) => {
            dpfx!("return Err(ErrorKind::InvalidData) ({})", err);
            Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "timestamp {:?} does not match pattern {:?}: {}",
                    timestamp_raw, DATETIME_PATTERN, err,
                ),
            ))
        }
    }
}

/// The hour-of-day bucket of `line`; the literal hour field of the
/// bracketed timestamp, timezone-unadjusted.
///
/// Propagates the `Err` of [`datetime_of`].
///
/// [`datetime_of`]: self::datetime_of
pub fn hour_of(line: &str) -> Result<Hour> {
    let hour: Hour = datetime_of(line)?.hour();
    dpfñ!("({:?}) return {}", line, hour);

    Ok(hour)
}
