//! Encrypt-and-emit loop.
//!
//! The environment unit goes first, then one unit per collected file. A unit
//! that cannot be read or encrypted is reported and skipped; the loop only
//! stops when the output itself can no longer be written.

use std::io::Write;
use std::path::PathBuf;

use ::age::x25519;
use tracing::debug;

use crate::core::env::{self, EnvSource};
use crate::core::unit::InputUnit;
use crate::core::{cipher, collect};
use crate::error::{Error, Result};

/// Receives units that were skipped because of a recoverable error.
pub trait Report {
    fn skipped(&mut self, name: &str, err: &Error);
}

impl<R: Report + ?Sized> Report for &mut R {
    fn skipped(&mut self, name: &str, err: &Error) {
        (**self).skipped(name, err);
    }
}

/// Counts for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Writes armored blocks for one recipient.
pub struct Pipeline<'a, W, R> {
    recipient: &'a x25519::Recipient,
    out: W,
    report: R,
    summary: Summary,
}

impl<'a, W: Write, R: Report> Pipeline<'a, W, R> {
    pub fn new(recipient: &'a x25519::Recipient, out: W, report: R) -> Self {
        Self {
            recipient,
            out,
            report,
            summary: Summary::default(),
        }
    }

    /// Emit the environment unit followed by every file the patterns match.
    ///
    /// # Errors
    ///
    /// Only fails when writing to or flushing the output fails.
    pub fn run<S: AsRef<str>>(
        mut self,
        source: &impl EnvSource,
        patterns: &[S],
    ) -> Result<Summary> {
        self.emit_environment(source)?;
        let paths = collect::files(patterns);
        self.emit_files(&paths)?;
        self.finish()
    }

    pub fn emit_environment(&mut self, source: &impl EnvSource) -> Result<()> {
        let unit = env::snapshot(source);
        self.emit(&unit)
    }

    pub fn emit_files(&mut self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            match collect::read(path) {
                Ok(unit) => self.emit(&unit)?,
                Err(e) => self.skip(&path.display().to_string(), e)?,
            }
        }
        Ok(())
    }

    /// Encrypt one unit and write its block.
    ///
    /// Encryption errors are reported and swallowed; output errors are not.
    pub fn emit(&mut self, unit: &InputUnit) -> Result<()> {
        match cipher::encrypt(self.recipient, &unit.payload) {
            Ok(armored) => {
                write_block(&mut self.out, &unit.name, &armored)?;
                self.summary.emitted += 1;
                Ok(())
            }
            Err(e) => self.skip(&unit.name, e),
        }
    }

    /// Flush the output and return the counts.
    ///
    /// # Errors
    ///
    /// A failed flush is fatal: blocks still buffered would be lost.
    pub fn finish(mut self) -> Result<Summary> {
        self.out.flush()?;
        debug!(
            emitted = self.summary.emitted,
            skipped = self.summary.skipped,
            "run complete"
        );
        Ok(self.summary)
    }

    fn skip(&mut self, name: &str, err: Error) -> Result<()> {
        if err.is_fatal() {
            return Err(err);
        }
        debug!(unit = name, error = %err, "skipping unit");
        self.report.skipped(name, &err);
        self.summary.skipped += 1;
        Ok(())
    }
}

/// Write a label line, the armored text and a blank separator line.
pub fn write_block(out: &mut impl Write, name: &str, armored: &str) -> Result<()> {
    writeln!(out, "{}", name)?;
    writeln!(out, "{}", armored.trim_end_matches(['\r', '\n']))?;
    writeln!(out)?;
    Ok(())
}
