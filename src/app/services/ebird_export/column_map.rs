//! Column mapping for the variable MyEBirdData.csv layout
//!
//! Export headers name the same fields in different orders, and older exports
//! omit columns entirely. The map is built once per file from the header row;
//! every field access goes through [`ColumnMap::get`], which tolerates both a
//! missing column and a row shorter than the header.

use csv::StringRecord;
use std::collections::HashMap;

/// Name-to-index mapping built from an export header row
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    /// Build the mapping from the header row. Duplicate header names keep
    /// the last occurrence. An empty header yields an empty mapping.
    pub fn from_header(header: &StringRecord) -> Self {
        let mut indices = HashMap::new();
        for (index, name) in header.iter().enumerate() {
            indices.insert(name.to_string(), index);
        }
        Self { indices }
    }

    /// Look up the cell for a named column in a data row.
    ///
    /// Returns the empty string when the column is absent from the header or
    /// the row has fewer cells than the header. Rows in this format carry a
    /// variable number of fields, so the bounds check applies to every access.
    pub fn get<'r>(&self, row: &'r StringRecord, name: &str) -> &'r str {
        self.indices
            .get(name)
            .and_then(|&index| row.get(index))
            .unwrap_or("")
    }

    /// Index of a named column, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Number of named columns
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the header named no columns at all
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
