// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Category, Expense, ExpenseStats, GoalProgress};
use crate::utils::{month_key, month_start_back};

/// Aggregates the full record set. `now` anchors the current-month window.
pub fn calculate_stats(expenses: &[Expense], now: DateTime<Utc>) -> ExpenseStats {
    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let average = if count > 0 {
        total / Decimal::from(count)
    } else {
        Decimal::ZERO
    };

    let mut by_category = Category::zeroed_map();
    let mut by_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *by_category.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
        *by_month.entry(month_key(e.day())).or_insert(Decimal::ZERO) += e.amount;
    }

    ExpenseStats {
        total,
        count,
        average,
        by_category,
        by_month,
        this_month: month_total(expenses, now),
    }
}

/// Sum of amounts dated within the calendar month of `now`, both ends inclusive.
pub fn month_total(expenses: &[Expense], now: DateTime<Utc>) -> Decimal {
    let today = now.date_naive();
    let start = month_start_back(today, 0).unwrap_or(today);
    let next = start
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(chrono::NaiveDate::MAX);
    expenses
        .iter()
        .filter(|e| {
            let d = e.day();
            d >= start && d < next
        })
        .map(|e| e.amount)
        .sum()
}

pub fn group_by_category(expenses: &[Expense]) -> BTreeMap<Category, Vec<&Expense>> {
    let mut grouped: BTreeMap<Category, Vec<&Expense>> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
    for e in expenses {
        grouped.entry(e.category).or_default().push(e);
    }
    grouped
}

pub fn group_by_month(expenses: &[Expense]) -> BTreeMap<String, Vec<&Expense>> {
    let mut grouped: BTreeMap<String, Vec<&Expense>> = BTreeMap::new();
    for e in expenses {
        grouped.entry(month_key(e.day())).or_default().push(e);
    }
    grouped
}

/// Progress of this month's spending towards `goal`.
pub fn goal_progress(expenses: &[Expense], goal: Decimal, now: DateTime<Utc>) -> GoalProgress {
    let spent = month_total(expenses, now);
    let remaining = (goal - spent).max(Decimal::ZERO);
    let percentage = if goal > Decimal::ZERO {
        spent / goal * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    GoalProgress {
        goal,
        spent,
        remaining,
        percentage,
    }
}
