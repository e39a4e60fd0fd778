//! Single-pass stream processor
//!
//! Reads match rows in file order, attaches both sides' pre-match ratings,
//! then commits the post-match update so later rows for the same entities
//! observe it. Correctness depends on strict row ordering; nothing here is
//! concurrent.

use crate::config::AppConfig;
use crate::error::{AugmentError, Result};
use crate::rating::{EloCalculator, MatchOutcome, RatingStore};
use crate::schema::ColumnIndices;
use crate::utils::format_rating;
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Counters reported after a completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Data rows read and emitted (header excluded)
    pub rows_processed: u64,
    /// Distinct entity identifiers referenced across the pass
    pub distinct_entities: usize,
}

/// Drives one augmentation pass over a row stream
#[derive(Debug)]
pub struct StreamProcessor {
    config: AppConfig,
    calculator: EloCalculator,
}

impl StreamProcessor {
    /// Create a processor for the given configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let calculator = EloCalculator::from_settings(&config.rating)?;

        Ok(Self { config, calculator })
    }

    /// Read just the header and resolve the required columns.
    ///
    /// Used by dry runs to fail fast without touching the output.
    pub fn validate_schema<R: Read>(&self, input: R) -> Result<ColumnIndices> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader.headers().context("Failed to read input header")?;
        if headers.is_empty() {
            return Err(AugmentError::MissingHeader.into());
        }

        ColumnIndices::resolve(headers, &self.config.schema)
    }

    /// Run one pass: header, then every row in input order, then flush.
    ///
    /// Each emitted row carries the original fields (short rows padded with
    /// empty fields up to the header width) plus both pre-match ratings and
    /// their difference, formatted to two decimal places.
    pub fn process<R: Read, W: Write>(&self, input: R, output: W) -> Result<PassSummary> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
        let headers = reader
            .headers()
            .context("Failed to read input header")?
            .clone();
        if headers.is_empty() {
            return Err(AugmentError::MissingHeader.into());
        }
        let columns = ColumnIndices::resolve(&headers, &self.config.schema)?;
        debug!(?columns, "resolved required columns");

        let mut writer = WriterBuilder::new().from_writer(output);
        let mut output_headers = headers.clone();
        output_headers.push_field(&self.config.output.first_rating_column);
        output_headers.push_field(&self.config.output.second_rating_column);
        output_headers.push_field(&self.config.output.difference_column);
        writer
            .write_record(&output_headers)
            .context("Failed to write output header")?;

        let mut store = RatingStore::new(self.calculator.initial_rating());
        let mut rows: u64 = 0;
        let mut record = StringRecord::new();

        while reader
            .read_record(&mut record)
            .context("Failed to read input row")?
        {
            // Short rows read missing fields as empty strings; identifiers
            // are trimmed, everything else passes through verbatim.
            let first = record
                .get(columns.first_entity)
                .unwrap_or("")
                .trim()
                .to_string();
            let second = record
                .get(columns.second_entity)
                .unwrap_or("")
                .trim()
                .to_string();
            let outcome_token = record.get(columns.outcome).unwrap_or("").trim();

            if first.is_empty() || second.is_empty() {
                debug!(row = rows + 1, "blank entity identifier, tracked as-is");
            }

            let outcome = MatchOutcome::from_winner_token(
                outcome_token,
                &self.config.schema.first_side_token,
                &self.config.schema.second_side_token,
            );
            if outcome == MatchOutcome::Draw {
                debug!(
                    row = rows + 1,
                    token = outcome_token,
                    "outcome matches neither side marker, scoring as draw"
                );
            }

            // Pre-match ratings, before this row's outcome is applied
            let first_pre = store.get(&first);
            let second_pre = store.get(&second);
            let difference = first_pre - second_pre;

            let mut augmented = StringRecord::new();
            for index in 0..headers.len() {
                augmented.push_field(record.get(index).unwrap_or(""));
            }
            augmented.push_field(&format_rating(first_pre));
            augmented.push_field(&format_rating(second_pre));
            augmented.push_field(&format_rating(difference));
            writer
                .write_record(&augmented)
                .context("Failed to write output row")?;

            // Commit the update only after the row has been emitted
            let (first_post, second_post) =
                self.calculator.rate_pair(first_pre, second_pre, outcome);
            store.set(&first, first_post);
            store.set(&second, second_post);

            rows += 1;
        }

        writer.flush().context("Failed to flush output")?;

        Ok(PassSummary {
            rows_processed: rows,
            distinct_entities: store.distinct_entities(),
        })
    }

    /// Process an input file into an output file.
    ///
    /// A failed pass removes the output file: callers never see a partial
    /// file next to a non-zero exit.
    pub fn augment_file(&self, input_path: &Path, output_path: &Path) -> Result<PassSummary> {
        let input = fs::File::open(input_path)
            .with_context(|| format!("Failed to open input '{}'", input_path.display()))?;
        let output = fs::File::create(output_path)
            .with_context(|| format!("Failed to create output '{}'", output_path.display()))?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "starting augmentation pass"
        );
        let result = self.process(BufReader::new(input), BufWriter::new(output));

        if result.is_err() {
            let _ = fs::remove_file(output_path);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (String, PassSummary) {
        let processor = StreamProcessor::new(AppConfig::default()).unwrap();
        let mut output = Vec::new();
        let summary = processor
            .process(Cursor::new(input.as_bytes()), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let processor = StreamProcessor::new(AppConfig::default()).unwrap();
        let mut output = Vec::new();
        let err = processor
            .process(Cursor::new(&b""[..]), &mut output)
            .unwrap_err();

        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn test_header_only_input_emits_extended_header() {
        let (output, summary) = run("r_fighter,b_fighter,winner\n");

        assert_eq!(output, "r_fighter,b_fighter,winner,r_elo,b_elo,elo_diff\n");
        assert_eq!(summary.rows_processed, 0);
        assert_eq!(summary.distinct_entities, 0);
    }

    #[test]
    fn test_single_row_uses_initial_ratings() {
        let (output, summary) = run("r_fighter,b_fighter,winner\nX,Y,Red\n");
        let mut lines = output.lines();

        assert_eq!(
            lines.next(),
            Some("r_fighter,b_fighter,winner,r_elo,b_elo,elo_diff")
        );
        assert_eq!(lines.next(), Some("X,Y,Red,1500.00,1500.00,0.00"));
        assert_eq!(summary.rows_processed, 1);
        assert_eq!(summary.distinct_entities, 2);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let processor = StreamProcessor::new(AppConfig::default()).unwrap();
        let mut output = Vec::new();
        let err = processor
            .process(Cursor::new(&b"r_fighter,b_fighter\nX,Y\n"[..]), &mut output)
            .unwrap_err();

        assert!(err.to_string().contains("winner"));
    }
}
