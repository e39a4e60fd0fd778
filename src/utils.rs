//! Utility functions for the augmentation tool

use std::path::{Path, PathBuf};

/// Format a rating for emission: fixed-point, two decimal places.
///
/// Internal state keeps full precision; only emitted fields are rounded.
pub fn format_rating(value: f64) -> String {
    format!("{:.2}", value)
}

/// Derive an output path from the input path by suffixing the file stem.
///
/// `data/fights.csv` with suffix `_with_elo` becomes `data/fights_with_elo.csv`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("augmented");

    input.with_file_name(format!("{}{}.csv", stem, suffix))
}
