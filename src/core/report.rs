use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::core::validator::RegexValidator;
use crate::domain::model::{ReportLine, ReportSummary, Verdict};
use crate::domain::ports::LineValidator;
use crate::utils::error::{Result, ValidatorError};

pub struct ReportEngine<V: LineValidator> {
    validator: V,
}

impl Default for ReportEngine<RegexValidator> {
    fn default() -> Self {
        Self::new(RegexValidator)
    }
}

impl<V: LineValidator> ReportEngine<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Trims the line and classifies it; blank lines yield `None`.
    pub fn classify(&self, raw: &str) -> Option<ReportLine> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(ReportLine {
            text: text.to_string(),
            verdict: Verdict::from(self.validator.is_valid(text)),
        })
    }

    /// Writes one report line per non-blank input line.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<ReportSummary> {
        let mut summary = ReportSummary::default();
        let mut chunk = Vec::new();
        let mut line_number = 0;

        loop {
            chunk.clear();
            if input.read_until(b'\n', &mut chunk)? == 0 {
                break;
            }
            let text = std::str::from_utf8(&chunk)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let text = text.strip_suffix('\n').unwrap_or(text);
            let text = text.strip_suffix('\r').unwrap_or(text);

            for line in text.split('\r') {
                line_number += 1;
                match self.classify(line) {
                    Some(entry) => {
                        tracing::debug!(
                            line_number,
                            verdict = entry.verdict.label(),
                            "classified {:?}",
                            entry.text
                        );
                        writeln!(out, "{}", entry)?;
                        summary.record(entry.verdict);
                    }
                    None => summary.skipped += 1,
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }

    /// Opens `path` and reports on it. Nothing is written if the file cannot be opened
    /// or is not a regular file.
    pub fn run_file<P: AsRef<Path>, W: Write>(&self, path: P, out: W) -> Result<ReportSummary> {
        let path = path.as_ref();
        let missing = |source| ValidatorError::MissingInputFile {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(missing)?;
        if !file.metadata().map_err(missing)?.is_file() {
            return Err(missing(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        tracing::debug!("Reading {}", path.display());

        let summary = self.run(BufReader::new(file), out)?;
        tracing::info!(
            "Classified {} lines ({} valid, {} invalid, {} blank skipped)",
            summary.classified(),
            summary.valid,
            summary.invalid,
            summary.skipped
        );
        Ok(summary)
    }
}
