// src/readers/mod.rs

//! "Readers" for _a3lib_.
//!
//! ## Overview of readers
//!
//! * A [`LineReader`] derives lines of text, in file order, from a file
//!   path.
//! * The aggregators in [`summary`] drive any line source once, front to
//!   back, calling the per-line functions of [`crate::data`] on each
//!   line, and return their accumulated result.
//!
//! A line source is anything iterable yielding `Result<String>`; a
//! `LineReader` is the file-backed one. An in-memory sequence works the
//! same so the aggregators can be driven without a file.
//!
//! Aggregation has no partial results: the first malformed line aborts
//! the entire scan with an `Err`.
//!
//! <br/>
//!
//! _A `LineReader` is not a rust "Reader"; it does not implement the
//! trait [`Read`]. It is a "reader" in an informal sense._
//!
//! Also see [_Definitions of data_].
//!
//! [_Definitions of data_]: crate::data
//! [`Read`]: std::io::Read
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`summary`]: crate::readers::summary

pub mod linereader;
pub mod summary;
