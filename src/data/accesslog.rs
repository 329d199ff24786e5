// src/data/accesslog.rs

//! Functions to perform regular expression ("regex") extraction of the
//! interesting fields of one Apache access-log record, and to classify
//! the record's user-agent as bot or not-bot.
//!
//! Extracting fields requires:
//! 1. matching one line of text against a regular expression for the
//!    _combined log format_
//! 2. returning the named capture groups verbatim to the caller (who
//!    will presumably classify or decode them)
//!
//! The most relevant document to understand this file is the `regex`
//! crate [Regular Expression syntax].
//!
//! The most relevant functions are:
//! - [`parse_fields`] which extracts all fields in one matching pass
//! - [`extract_user_agent`], [`extract_client_address`],
//!   [`extract_timestamp_raw`] for single fields
//! - [`is_bot`] and its whole-line convenience [`line_is_bot`]
//!
//! The most relevant constant is [`CLF_PATTERN`].
//!
//! [Regular Expression syntax]: https://docs.rs/regex/1.6.0/regex/index.html#syntax
//! [`parse_fields`]: self::parse_fields
//! [`extract_user_agent`]: self::extract_user_agent
//! [`extract_client_address`]: self::extract_client_address
//! [`extract_timestamp_raw`]: self::extract_timestamp_raw
//! [`is_bot`]: self::is_bot
//! [`line_is_bot`]: self::line_is_bot
//! [`CLF_PATTERN`]: self::CLF_PATTERN

use std::io::{Error, ErrorKind, Result};

extern crate const_format;
use const_format::concatcp;

extern crate lazy_static;
use lazy_static::lazy_static;

extern crate regex;
use regex::Regex;

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ, dpn, dpo, dpx, dpñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// combined log format regex matching
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Regular expression capture group name, used within the regular
/// expression and for later retrieval via [`regex::captures.name`].
///
/// [`regex::captures.name`]: https://docs.rs/regex/1.6.0/regex/struct.Captures.html#method.name
pub type CaptureGroupName = str;

/// Regular expression capture group pattern, used within a
/// [`RegexPattern`].
pub type CaptureGroupPattern = str;

/// A regular expression, passed to [`regex::Regex::captures`].
///
/// [`regex::Regex::captures`]: https://docs.rs/regex/1.6.0/regex/struct.Regex.html#method.captures
pub type RegexPattern = str;

pub const CGN_ADDR: &CaptureGroupName = "addr";
pub const CGN_TIMESTAMP: &CaptureGroupName = "timestamp";
pub const CGN_USERAGENT: &CaptureGroupName = "useragent";

/// The client address; the first whitespace-delimited token of a record.
pub const CGP_ADDR: &CaptureGroupPattern = r"(?P<addr>\S+)";
/// The bracketed timestamp; the span between the first `[` and its
/// matching `]`.
pub const CGP_TIMESTAMP: &CaptureGroupPattern = r"\[(?P<timestamp>[^\]]+)\]";
/// The quoted request line, e.g. `"GET /robots.txt HTTP/1.1"`.
pub const CGP_REQUEST: &CaptureGroupPattern = "\"(?P<request>.+)\"";
/// The numeric response status code.
pub const CGP_STATUS: &CaptureGroupPattern = r"(?P<status>\d+)";
/// The numeric response size in bytes.
pub const CGP_SIZE: &CaptureGroupPattern = r"(?P<size>\d+)";
/// The quoted referrer field (`"-"` when absent).
pub const CGP_REFERRER: &CaptureGroupPattern = "\"(?P<referrer>.+)\"";
/// The quoted user-agent field. Greedy; on a well-formed record the
/// capture runs to the last quote of the line so a user-agent containing
/// quoted spans is returned whole.
pub const CGP_USERAGENT: &CaptureGroupPattern = "\"(?P<useragent>.+)\"";

/// Separating whitespace between fields.
const RP_SP: &RegexPattern = r"\s+";
/// An identity field (`identd`, `userid`); `-` in practice, never used.
const RP_IDENT: &RegexPattern = r"\S+";
/// Trailing content after the final quoted field; ignored.
const RP_TRAILER: &RegexPattern = ".*";

/// Matches a record from the bracketed timestamp onward. The fixed
/// literal delimiters anchor the pass so the last capture is the
/// rightmost quoted pair at end of line, the user-agent.
///
/// Used by [`extract_user_agent`].
///
/// [`extract_user_agent`]: self::extract_user_agent
pub const CLF_TAIL_PATTERN: &RegexPattern = concatcp!(
    CGP_TIMESTAMP, RP_SP,
    CGP_REQUEST, RP_SP,
    CGP_STATUS, RP_SP,
    CGP_SIZE, RP_SP,
    CGP_REFERRER, RP_SP,
    CGP_USERAGENT, RP_TRAILER,
);

/// Matches an entire _combined log format_ record, anchored at the
/// start of the line.
///
/// Used by [`parse_fields`].
///
/// [`parse_fields`]: self::parse_fields
pub const CLF_PATTERN: &RegexPattern = concatcp!(
    "^", CGP_ADDR, RP_SP,
    RP_IDENT, RP_SP,
    RP_IDENT, RP_SP,
    CLF_TAIL_PATTERN,
);

/// Matches a user-agent declaring a bot, e.g. "Googlebot", "YandexBot",
/// "BOT". Case-insensitive.
pub const BOT_PATTERN: &RegexPattern = "(?i)bot";

lazy_static! {
    static ref CLF_REGEX: Regex =
        Regex::new(CLF_PATTERN).unwrap();
    static ref CLF_TAIL_REGEX: Regex =
        Regex::new(CLF_TAIL_PATTERN).unwrap();
    static ref ADDR_REGEX: Regex =
        Regex::new(concatcp!("^", CGP_ADDR)).unwrap();
    static ref TIMESTAMP_REGEX: Regex =
        Regex::new(CGP_TIMESTAMP).unwrap();
    static ref BOT_REGEX: Regex =
        Regex::new(BOT_PATTERN).unwrap();
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ParsedFields
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The interesting fields of one access-log record, extracted fresh per
/// line and never cached.
///
/// `client_address` is non-empty, `timestamp_raw` is the bracket
/// contents verbatim (not yet decoded; see
/// [`datetime_of`]), `user_agent` is the final quoted field verbatim.
///
/// [`datetime_of`]: crate::data::datetime::datetime_of
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedFields {
    pub client_address: String,
    pub timestamp_raw: String,
    pub user_agent: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// field extraction functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Extract all interesting fields of `line` in one matching pass of
/// [`CLF_REGEX`].
///
/// Returns `Err` with [`ErrorKind::InvalidData`] if `line` is not a
/// _combined log format_ record.
///
/// [`CLF_REGEX`]: static@self::CLF_REGEX
pub fn parse_fields(line: &str) -> Result<ParsedFields> {
    dpfn!("({:?})", line);

    let captures = match CLF_REGEX.captures(line) {
        Some(captures) => captures,
        None => {
            dpfx!("return Err(ErrorKind::InvalidData)");
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("line is not a combined log format record: {:?}", line),
            ));
        }
    };
    // the named groups cannot be absent from a successful match of
    // `CLF_REGEX`; every group is non-optional in the pattern
    let fields = ParsedFields {
        client_address: captures[CGN_ADDR].to_string(),
        timestamp_raw: captures[CGN_TIMESTAMP].to_string(),
        user_agent: captures[CGN_USERAGENT].to_string(),
    };
    dpfx!("return {:?}", fields);

    Ok(fields)
}

/// Extract the client address of `line`; the first whitespace-delimited
/// token.
///
/// Returns `Err` with [`ErrorKind::InvalidData`] if `line` is empty (no
/// leading token at all).
pub fn extract_client_address(line: &str) -> Result<String> {
    dpfn!("({:?})", line);

    match ADDR_REGEX.captures(line) {
        Some(captures) => {
            let addr: &str = &captures[CGN_ADDR];
            dpfx!("return {:?}", addr);
            Ok(addr.to_string())
        }
        None => {
            dpfx!("return Err(ErrorKind::InvalidData)");
            Err(Error::new(
                ErrorKind::InvalidData,
                format!("no client address token in line: {:?}", line),
            ))
        }
    }
}

/// Extract the raw timestamp of `line`; the substring between the first
/// `[` and its matching `]`, verbatim and not yet decoded.
///
/// Returns `Err` with [`ErrorKind::InvalidData`] if `line` has no
/// bracketed span.
pub fn extract_timestamp_raw(line: &str) -> Result<String> {
    dpfn!("({:?})", line);

    match TIMESTAMP_REGEX.captures(line) {
        Some(captures) => {
            let timestamp_raw: &str = &captures[CGN_TIMESTAMP];
            dpfx!("return {:?}", timestamp_raw);
            Ok(timestamp_raw.to_string())
        }
        None => {
            dpfx!("return Err(ErrorKind::InvalidData)");
            Err(Error::new(
                ErrorKind::InvalidData,
                format!("no bracketed timestamp in line: {:?}", line),
            ))
        }
    }
}

/// Extract the user-agent of `line`; the content of the final quoted
/// field, returned verbatim (may itself contain parentheses and
/// semicolons; it is never further tokenized).
///
/// Returns `Err` with [`ErrorKind::InvalidData`] if the record tail does
/// not match [`CLF_TAIL_REGEX`], e.g. fewer than two trailing quoted
/// fields, or a non-numeric status or size.
///
/// [`CLF_TAIL_REGEX`]: static@self::CLF_TAIL_REGEX
pub fn extract_user_agent(line: &str) -> Result<String> {
    dpfn!("({:?})", line);

    match CLF_TAIL_REGEX.captures(line) {
        Some(captures) => {
            let user_agent: &str = &captures[CGN_USERAGENT];
            dpfx!("return {:?}", user_agent);
            Ok(user_agent.to_string())
        }
        None => {
            dpfx!("return Err(ErrorKind::InvalidData)");
            Err(Error::new(
                ErrorKind::InvalidData,
                format!("no user-agent field in line: {:?}", line),
            ))
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// bot classification
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Does `user_agent` declare an automated crawler?
///
/// `true` iff the case-insensitive substring "bot" occurs anywhere in
/// `user_agent`; matches "Googlebot", "YandexBot", "BOT", ….
pub fn is_bot(user_agent: &str) -> bool {
    let is_bot_: bool = BOT_REGEX.is_match(user_agent);
    dpfñ!("({:?}) return {}", user_agent, is_bot_);

    is_bot_
}

/// Convenience for whole lines: extract the user-agent of `line` then
/// classify it with [`is_bot`].
///
/// Propagates the `Err` of [`extract_user_agent`] if the user-agent
/// cannot be extracted.
///
/// [`is_bot`]: self::is_bot
/// [`extract_user_agent`]: self::extract_user_agent
pub fn line_is_bot(line: &str) -> Result<bool> {
    let user_agent: String = extract_user_agent(line)?;

    Ok(is_bot(&user_agent))
}
