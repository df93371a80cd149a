// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Theme};
use crate::prefs;
use crate::stats::goal_progress;
use crate::storage::KvStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::validation::parse_goal;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

use super::report_storage_error;

pub fn handle_goal(
    kv: &KvStore<'_>,
    expenses: &[Expense],
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let raw = sub.get_one::<String>("amount").context("amount missing")?;
            let Some(goal) = parse_goal(raw) else {
                bail!(
                    "Invalid goal '{}': use a positive amount with at most 2 decimal places, up to $1,000,000",
                    raw
                );
            };
            match prefs::set_goal(kv, goal) {
                Ok(true) => println!("Monthly goal set to {}", fmt_money(&goal)),
                Ok(false) => bail!("Goal must be greater than $0 and at most $1,000,000"),
                Err(err) => report_storage_error(&err),
            }
        }
        Some(("show", sub)) => {
            let progress = goal_progress(expenses, prefs::goal(kv), now);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &progress)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Goal", "Spent", "Remaining", "Used"],
                        vec![vec![
                            fmt_money(&progress.goal),
                            fmt_money(&progress.spent),
                            fmt_money(&progress.remaining),
                            format!("{:.1}%", progress.percentage.round_dp(1)),
                        ]],
                    )
                );
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn handle_theme(kv: &KvStore<'_>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let theme: Theme = sub
                .get_one::<String>("theme")
                .context("theme missing")?
                .parse()?;
            match prefs::set_theme(kv, theme) {
                Ok(()) => println!("Theme set to {}", theme.as_str()),
                Err(err) => report_storage_error(&err),
            }
        }
        Some(("toggle", _)) => match prefs::toggle_theme(kv) {
            Ok(theme) => println!("Theme set to {}", theme.as_str()),
            Err(err) => report_storage_error(&err),
        },
        _ => println!("{}", prefs::theme(kv).as_str()),
    }
    Ok(())
}
