// src/data/mod.rs

//! The `data` module is the per-line parsing layer: field extraction and
//! bot classification of one access-log record, and decoding of its
//! embedded timestamp.
//!
//! ## Definitions of data
//!
//! ### Access record
//!
//! An "access record" is one line of an Apache access log in the
//! _combined log format_:
//!
//! ```text
//! <address> - - [<timestamp>] "<request-line>" <status> <size> "<referrer>" "<user-agent>"
//! ```
//!
//! Trailing content after the final quoted field is ignored. A record is
//! parsed into a [`ParsedFields`] by the functions in [`accesslog`].
//!
//! ### Timestamp
//!
//! The bracketed timestamp of an access record, e.g.
//! `15/Sep/2023:00:18:46 +0200`. Decoded by the functions in
//! [`datetime`]. The hour derived from it is the local wall-clock hour
//! as written in the record; it is never normalized to UTC or any other
//! zone.
//!
//! ### Bot
//!
//! A client whose declared user-agent string contains the substring
//! "bot", case-insensitive, e.g. "Googlebot", "YandexBot". A heuristic
//! for automated crawler traffic; see [`accesslog::is_bot`].
//!
//! Also see [_Overview of readers_].
//!
//! [_Overview of readers_]: crate::readers
//! [`ParsedFields`]: crate::data::accesslog::ParsedFields
//! [`accesslog`]: crate::data::accesslog
//! [`datetime`]: crate::data::datetime
//! [`accesslog::is_bot`]: crate::data::accesslog::is_bot

pub mod accesslog;
pub mod datetime;
