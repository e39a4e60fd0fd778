//! Shared helpers for the integration and property test suites

use elo_ledger::config::AppConfig;
use elo_ledger::processor::{PassSummary, StreamProcessor};
use std::io::Cursor;

/// Run one pass over an in-memory CSV with the given configuration
pub fn run_pass(config: AppConfig, input: &str) -> (String, PassSummary) {
    let processor = StreamProcessor::new(config).unwrap();
    let mut output = Vec::new();
    let summary = processor
        .process(Cursor::new(input.as_bytes()), &mut output)
        .unwrap();

    (String::from_utf8(output).unwrap(), summary)
}

/// Run one pass with the default configuration
pub fn run_default_pass(input: &str) -> (String, PassSummary) {
    run_pass(AppConfig::default(), input)
}

/// Parse CSV text into one Vec of fields per record, header included
pub fn parse_records(output: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(output.as_bytes());

    reader
        .records()
        .map(|record| {
            record
                .unwrap()
                .iter()
                .map(|field| field.to_string())
                .collect()
        })
        .collect()
}
