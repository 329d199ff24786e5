// src/readers/linereader.rs

//! Implements a [`LineReader`], the file-backed line source for the
//! aggregators in [`summary`].
//!
//! [`LineReader`]: self::LineReader
//! [`summary`]: crate::readers::summary

use crate::common::{Count, FPath};

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Result};

extern crate si_trace_print;
#[allow(unused_imports)]
use si_trace_print::{dpfn, dpfo, dpfx, dpfñ, dpn, dpo, dpx, dpñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A line source over a file at a [`FPath`]; yields one `Result<String>`
/// per line of text, decoded as UTF-8, in file order. The file is read
/// exactly once, sequentially, front to back; no seeking.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`FPath`]: crate::common::FPath
/// [`Read`]: std::io::Read
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    path: FPath,
    /// `Count` of lines yielded so far.
    lines_processed: Count,
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader")
            .field("path", &self.path)
            .field("lines processed", &self.lines_processed)
            .finish()
    }
}

impl LineReader {
    /// Create a new `LineReader` over the file at `path`.
    ///
    /// Propagates the `Err` of [`File::open`], e.g. file not found.
    ///
    /// [`File::open`]: std::fs::File#method.open
    pub fn new(path: &FPath) -> Result<LineReader> {
        dpfn!("({:?})", path);

        let file: File = match File::open(path) {
            Ok(val) => val,
            Err(err) => {
                dpfx!("return File::open Err {}", err);
                return Err(err);
            }
        };
        dpfx!();

        Ok(LineReader {
            lines: BufReader::new(file).lines(),
            path: path.clone(),
            lines_processed: 0,
        })
    }

    /// The path this `LineReader` reads.
    pub const fn path(&self) -> &FPath {
        &self.path
    }

    /// `Count` of lines yielded so far.
    pub const fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        let line_opt = self.lines.next();
        if line_opt.is_some() {
            self.lines_processed += 1;
        }

        line_opt
    }
}
