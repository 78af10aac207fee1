use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Row – one labeled observation
// ---------------------------------------------------------------------------

/// One labeled observation with named numeric values, e.g. category → share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub entries: BTreeMap<String, f64>,
}

impl Row {
    pub fn new<L, I, K>(label: L, entries: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Row {
            label: label.into(),
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Sum of all entry values.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Fraction of the row total held by `key`; `None` when the key is absent
    /// or the row sums to zero.
    pub fn share(&self, key: &str) -> Option<f64> {
        let value = self.entries.get(key)?;
        let total = self.total();
        (total != 0.0).then(|| value / total)
    }
}

// ---------------------------------------------------------------------------
// Dataset – a titled collection of rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("row {row} ('{label}') has an entry with an empty key")]
    EmptyKey { row: usize, label: String },
    #[error("row {row} ('{label}'): value for '{key}' is not a finite number")]
    NonFiniteValue {
        row: usize,
        label: String,
        key: String,
    },
}

impl Dataset {
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Dataset {
            title: title.into(),
            rows,
        }
    }

    /// Check that every entry key is non-empty and every value is finite.
    pub fn validate(&self) -> Result<(), DatasetError> {
        for (i, row) in self.rows.iter().enumerate() {
            for (key, value) in &row.entries {
                if key.is_empty() {
                    return Err(DatasetError::EmptyKey {
                        row: i,
                        label: row.label.clone(),
                    });
                }
                if !value.is_finite() {
                    return Err(DatasetError::NonFiniteValue {
                        row: i,
                        label: row.label.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Sorted union of entry keys over all rows.
    pub fn categories(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flat_map(|row| row.entries.keys().cloned())
            .collect()
    }

    /// Row labels in dataset order.
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
