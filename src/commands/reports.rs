// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Expense;
use crate::series::{
    calculate_trend, monthly_data, top_categories, DEFAULT_MONTHS, DEFAULT_TOP_CATEGORIES,
    DEFAULT_TREND_DAYS,
};
use crate::stats::calculate_stats;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub fn handle_stats(
    expenses: &[Expense],
    sub: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    let stats = calculate_stats(expenses, now);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Total", "This Month", "Count", "Average"],
            vec![vec![
                fmt_money(&stats.total),
                fmt_money(&stats.this_month),
                stats.count.to_string(),
                fmt_money(&stats.average),
            ]],
        )
    );
    let by_cat: Vec<Vec<String>> = stats
        .by_category
        .iter()
        .map(|(c, amt)| vec![c.to_string(), fmt_money(amt)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], by_cat));
    Ok(())
}

pub fn handle_chart(
    expenses: &[Expense],
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    match m.subcommand() {
        Some(("categories", sub)) => categories(expenses, sub)?,
        Some(("trend", sub)) => trend(expenses, sub, now)?,
        Some(("monthly", sub)) => monthly(expenses, sub, now)?,
        _ => {}
    }
    Ok(())
}

/// A proportional bar for terminal "charts".
fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO {
        return String::new();
    }
    let filled = (value / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    "█".repeat(filled)
}

fn categories(expenses: &[Expense], sub: &clap::ArgMatches) -> Result<()> {
    let limit = *sub
        .get_one::<usize>("limit")
        .unwrap_or(&DEFAULT_TOP_CATEGORIES);
    let data = top_categories(expenses, limit);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|d| {
            vec![
                d.category.to_string(),
                fmt_money(&d.amount),
                d.count.to_string(),
                format!("{:.2}%", d.percentage.round_dp(2)),
                bar(d.percentage, Decimal::ONE_HUNDRED, 30),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Count", "Share", ""], rows)
    );
    Ok(())
}

fn trend(expenses: &[Expense], sub: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let days = *sub.get_one::<usize>("days").unwrap_or(&DEFAULT_TREND_DAYS);
    let data = calculate_trend(expenses, days, now);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let max = data.iter().map(|d| d.amount).max().unwrap_or_default();
    let rows = data
        .iter()
        .map(|d| vec![d.date.clone(), fmt_money(&d.amount), bar(d.amount, max, 30)])
        .collect();
    println!("{}", pretty_table(&["Day", "Spent", ""], rows));
    Ok(())
}

fn monthly(expenses: &[Expense], sub: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let months = *sub.get_one::<usize>("months").unwrap_or(&DEFAULT_MONTHS);
    let data = monthly_data(expenses, months, now);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let max = data.iter().map(|d| d.amount).max().unwrap_or_default();
    let rows = data
        .iter()
        .map(|d| vec![d.month.clone(), fmt_money(&d.amount), bar(d.amount, max, 30)])
        .collect();
    println!("{}", pretty_table(&["Month", "Spent", ""], rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(Decimal::new(50, 0), Decimal::new(100, 0), 10), "█████");
        assert_eq!(bar(Decimal::new(100, 0), Decimal::new(100, 0), 4), "████");
        assert_eq!(bar(Decimal::ONE, Decimal::ZERO, 10), "");
    }
}
