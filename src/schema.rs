//! Header schema resolution
//!
//! Maps the configured column names onto positional indices in the input
//! header so row processing can use direct field access. Resolution happens
//! once, before any row is read.

use crate::config::SchemaSettings;
use crate::error::AugmentError;
use csv::StringRecord;

/// Positional indices of the three required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub first_entity: usize,
    pub second_entity: usize,
    pub outcome: usize,
}

impl ColumnIndices {
    /// Resolve the required column names against a header record.
    ///
    /// Matching is exact and case-sensitive. A missing column is fatal:
    /// every subsequent indexed field access would be meaningless.
    pub fn resolve(
        headers: &StringRecord,
        schema: &SchemaSettings,
    ) -> crate::error::Result<Self> {
        let find = |name: &str| -> crate::error::Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                AugmentError::MissingColumn {
                    column: name.to_string(),
                }
                .into()
            })
        };

        Ok(Self {
            first_entity: find(&schema.first_entity_column)?,
            second_entity: find(&schema.second_entity_column)?,
            outcome: find(&schema.outcome_column)?,
        })
    }
}
