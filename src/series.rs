// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed-shape series for the chart views. Every generator zero-fills its
//! buckets, so output length depends only on the requested size.

use chrono::{DateTime, Days, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{CategoryData, Expense, MonthlyData, TrendData};
use crate::stats::group_by_category;
use crate::utils::{day_key, month_key, month_start_back};

pub const DEFAULT_TOP_CATEGORIES: usize = 6;
pub const DEFAULT_TREND_DAYS: usize = 30;
pub const DEFAULT_MONTHS: usize = 6;

/// Categories ranked by spend, largest first. Equal amounts keep the
/// canonical category order.
pub fn top_categories(expenses: &[Expense], limit: usize) -> Vec<CategoryData> {
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let mut data: Vec<CategoryData> = group_by_category(expenses)
        .into_iter()
        .map(|(category, items)| {
            let amount: Decimal = items.iter().map(|e| e.amount).sum();
            let percentage = if total > Decimal::ZERO {
                amount / total * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            CategoryData {
                category,
                amount,
                count: items.len(),
                percentage,
            }
        })
        .collect();
    // sort_by is stable
    data.sort_by(|a, b| b.amount.cmp(&a.amount));
    data.truncate(limit);
    data
}

/// Daily totals for the `days` calendar days ending at `now`, oldest first.
///
/// Empty when `days` is 0 or the window starts before the earliest date
/// chrono can represent.
pub fn calculate_trend(expenses: &[Expense], days: usize, now: DateTime<Utc>) -> Vec<TrendData> {
    let end = now.date_naive();
    let Some(start) = days
        .checked_sub(1)
        .and_then(|span| end.checked_sub_days(Days::new(span as u64)))
    else {
        return Vec::new();
    };

    let mut daily: BTreeMap<String, Decimal> = start
        .iter_days()
        .take(days)
        .map(|d| (day_key(d), Decimal::ZERO))
        .collect();

    for e in expenses {
        let d = e.day();
        if d >= start && d <= end {
            *daily.entry(day_key(d)).or_insert(Decimal::ZERO) += e.amount;
        }
    }

    daily
        .into_iter()
        .map(|(date, amount)| TrendData { date, amount })
        .collect()
}

/// Totals for the last `months` calendar months ending with `now`'s month.
/// Empty when the oldest of those months lies outside chrono's calendar.
pub fn monthly_data(expenses: &[Expense], months: usize, now: DateTime<Utc>) -> Vec<MonthlyData> {
    let today = now.date_naive();
    if months == 0 || month_start_back(today, months - 1).is_none() {
        return Vec::new();
    }

    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *totals.entry(month_key(e.day())).or_insert(Decimal::ZERO) += e.amount;
    }

    (0..months)
        .rev()
        .filter_map(|back| month_start_back(today, back))
        .map(|first| MonthlyData {
            month: first.format("%b %Y").to_string(),
            amount: totals
                .get(&month_key(first))
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

