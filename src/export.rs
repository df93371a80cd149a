// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::Expense;

pub const CSV_HEADER: &str = "Date,Category,Amount,Description";

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to import expenses. Invalid JSON format: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Failed to import expenses. Invalid JSON format: top level is not an array")]
    NotAnArray,
}

/// CSV text with a header row. Descriptions are always quoted; rows are
/// joined by `\n` without a trailing newline.
pub fn csv_content(expenses: &[Expense]) -> String {
    let mut rows = Vec::with_capacity(expenses.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for e in expenses {
        rows.push(format!(
            "{},{},{:.2},\"{}\"",
            e.day().format("%Y-%m-%d"),
            e.category,
            e.amount.round_dp(2),
            e.description.replace('"', "\"\"")
        ));
    }
    rows.join("\n")
}

pub fn to_json(expenses: &[Expense]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(expenses)
}

/// Parses an exported payload. Anything but a top-level array of records
/// is rejected.
pub fn from_json(json: &str) -> Result<Vec<Expense>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// `expenses-YYYY-MM-DD.<ext>` stamped with `today`.
pub fn default_filename(today: NaiveDate, ext: &str) -> String {
    format!("expenses-{}.{}", today.format("%Y-%m-%d"), ext)
}
