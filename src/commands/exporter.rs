// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::{csv_content, default_filename, to_json};
use crate::models::Expense;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub fn handle(expenses: &[Expense], sub: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .context("format missing")?
        .to_lowercase();

    let body = match fmt.as_str() {
        "csv" => csv_content(expenses),
        "json" => to_json(expenses)?,
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    };

    let out = match sub.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_filename(now.date_naive(), &fmt)),
    };
    std::fs::write(&out, body).with_context(|| format!("Write {}", out.display()))?;
    tracing::info!(path = %out.display(), count = expenses.len(), "exported expenses");
    println!("Exported {} expense(s) to {}", expenses.len(), out.display());
    Ok(())
}
