// src/readers/summary.rs

//! Implements the two whole-source aggregations: the hourly access
//! histogram and the set of distinct non-bot client addresses.
//!
//! Each aggregator drives a line source once, front to back, owning its
//! accumulator for the duration of that one scan; there is no state
//! across calls. The first malformed line aborts the entire scan with an
//! `Err` and no partial result. Callers wanting resilience (skip bad
//! lines, log-and-continue) must wrap the line source, not these
//! functions.

use crate::common::{Count, FPath};

use crate::data::accesslog::{is_bot, parse_fields, ParsedFields};

use crate::data::datetime::{hour_of, Hour};

use crate::readers::linereader::LineReader;

use std::collections::{BTreeMap, HashSet};
use std::io::Result;

extern crate more_asserts;
use more_asserts::debug_assert_le;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ, dpn, dpo, dpx, dpñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// aggregation result containers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Map [`Hour`] to a `Count` of accesses recorded in that hour.
///
/// Keys are present only for hours actually observed.
///
/// [`Hour`]: crate::data::datetime::Hour
pub type HistogramByHour = BTreeMap<Hour, Count>;

/// Set of unique client-address strings; membership implies at least one
/// non-bot access recorded for that address.
pub type AddressSet = HashSet<String>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// aggregation functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Scan `lines` once and count accesses per hour-of-day bucket.
///
/// Calls [`hour_of`] once per line. Hours never observed have no entry;
/// an empty source gives an empty map.
///
/// Propagates the first `Err` encountered, either an I/O `Err` from the
/// line source or a malformed-line `Err` from [`hour_of`]; the whole
/// scan aborts with no partial histogram.
///
/// [`hour_of`]: crate::data::datetime::hour_of
pub fn histogram_by_hour<I>(lines: I) -> Result<HistogramByHour>
where
    I: IntoIterator<Item = Result<String>>,
{
    dpfn!();

    let mut histogram = HistogramByHour::new();
    for line in lines {
        let line: String = line?;
        let hour: Hour = hour_of(&line)?;
        debug_assert_le!(hour, 23, "hour_of returned hour {} out of range", hour);
        *histogram
            .entry(hour)
            .or_insert(0) += 1;
    }
    dpfx!("return histogram with {} distinct hours", histogram.len());

    Ok(histogram)
}

/// Scan `lines` once and collect the unique client addresses of non-bot
/// accesses.
///
/// Calls [`parse_fields`] once per line; a line whose user-agent is a
/// bot (per [`is_bot`]) is skipped entirely, its address is never added.
/// A later non-bot line from the same address still adds that address
/// independently; inclusion is decided per line.
///
/// Propagates the first `Err` encountered, either an I/O `Err` from the
/// line source or a malformed-line `Err` from [`parse_fields`]; the
/// whole scan aborts with no partial set.
///
/// [`parse_fields`]: crate::data::accesslog::parse_fields
/// [`is_bot`]: crate::data::accesslog::is_bot
pub fn non_bot_addresses<I>(lines: I) -> Result<AddressSet>
where
    I: IntoIterator<Item = Result<String>>,
{
    dpfn!();

    let mut addresses = AddressSet::new();
    for line in lines {
        let line: String = line?;
        let fields: ParsedFields = parse_fields(&line)?;
        if is_bot(&fields.user_agent) {
            dpfo!("skip bot line from {:?}", fields.client_address);
            continue;
        }
        addresses.insert(fields.client_address);
    }
    dpfx!("return {} distinct addresses", addresses.len());

    Ok(addresses)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-path conveniences
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`histogram_by_hour`] over the file at `path` via a [`LineReader`].
///
/// [`histogram_by_hour`]: self::histogram_by_hour
/// [`LineReader`]: crate::readers::linereader::LineReader
pub fn histogram_by_hour_path(path: &FPath) -> Result<HistogramByHour> {
    dpfñ!("({:?})", path);
    let linereader: LineReader = LineReader::new(path)?;

    histogram_by_hour(linereader)
}

/// [`non_bot_addresses`] over the file at `path` via a [`LineReader`].
///
/// [`non_bot_addresses`]: self::non_bot_addresses
/// [`LineReader`]: crate::readers::linereader::LineReader
pub fn non_bot_addresses_path(path: &FPath) -> Result<AddressSet> {
    dpfñ!("({:?})", path);
    let linereader: LineReader = LineReader::new(path)?;

    non_bot_addresses(linereader)
}
