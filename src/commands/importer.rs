// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::from_json;
use crate::store::ExpenseStore;
use anyhow::{Context, Result};

pub fn handle(store: &mut ExpenseStore<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").context("path missing")?.trim();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;

    // A failed parse leaves the current collection untouched.
    let incoming = from_json(&raw)?;
    let total = incoming.len();

    if sub.get_flag("merge") {
        let added = store.merge(incoming);
        println!(
            "Imported {} of {} expense(s) from {} (skipped {} already present or invalid)",
            added,
            total,
            path,
            total - added
        );
    } else {
        let kept = store.replace_all(incoming);
        println!(
            "Imported {} of {} expense(s) from {} (skipped {} duplicate or invalid)",
            kept,
            total,
            path,
            total - kept
        );
    }
    tracing::info!(path, total, "imported expenses");
    Ok(())
}
