// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{approx, at, dollars, expense};
use rust_decimal::Decimal;
use spendlog::models::Category;
use spendlog::series::{calculate_trend, monthly_data, top_categories};

fn scenario() -> Vec<spendlog::models::Expense> {
    let d = at(2024, 3, 10, 12);
    vec![
        expense(1000, Category::Food, d, "Lunch"),
        expense(2000, Category::Food, d, "Dinner"),
        expense(500, Category::Bills, d, "Phone"),
    ]
}

#[test]
fn top_two_categories_with_percentages() {
    let top = top_categories(&scenario(), 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].category, Category::Food);
    assert_eq!(top[0].amount, dollars(30));
    assert_eq!(top[0].count, 2);
    assert_eq!(top[0].percentage.round_dp(2), Decimal::new(8571, 2));
    assert_eq!(top[1].category, Category::Bills);
    assert_eq!(top[1].amount, dollars(5));
    assert_eq!(top[1].percentage.round_dp(2), Decimal::new(1429, 2));
}

#[test]
fn full_ranking_sums_to_hundred_and_ties_keep_category_order() {
    let top = top_categories(&scenario(), 10);
    assert_eq!(top.len(), 6);
    let pct: Decimal = top.iter().map(|c| c.percentage).sum();
    assert!(approx(pct, Decimal::ONE_HUNDRED));
    let zero_tail: Vec<Category> = top[2..].iter().map(|c| c.category).collect();
    assert_eq!(
        zero_tail,
        vec![
            Category::Transportation,
            Category::Entertainment,
            Category::Shopping,
            Category::Other
        ]
    );
}

#[test]
fn empty_input_gives_zeroed_fixed_length_series() {
    let now = at(2024, 3, 10, 12);

    let top = top_categories(&[], 4);
    assert_eq!(top.len(), 4);
    assert!(top.iter().all(|c| c.amount.is_zero() && c.percentage.is_zero()));
    assert_eq!(top[0].category, Category::Food);

    let trend = calculate_trend(&[], 30, now);
    assert_eq!(trend.len(), 30);
    assert!(trend.iter().all(|t| t.amount.is_zero()));

    let months = monthly_data(&[], 6, now);
    assert_eq!(months.len(), 6);
    assert!(months.iter().all(|m| m.amount.is_zero()));
}

#[test]
fn zero_sizes_give_empty_output() {
    let now = at(2024, 3, 10, 12);
    assert!(top_categories(&scenario(), 0).is_empty());
    assert!(calculate_trend(&scenario(), 0, now).is_empty());
    assert!(monthly_data(&scenario(), 0, now).is_empty());
}

#[test]
fn trend_window_is_contiguous_and_ends_today() {
    let now = at(2024, 3, 2, 18);
    let records = vec![
        expense(700, Category::Food, at(2024, 3, 2, 23), "Today late"),
        expense(300, Category::Food, at(2024, 2, 28, 1), "Window start"),
        expense(900, Category::Food, at(2024, 2, 27, 23), "Too old"),
        expense(100, Category::Food, at(2024, 3, 3, 0), "Tomorrow"),
    ];
    let trend = calculate_trend(&records, 4, now);
    let dates: Vec<&str> = trend.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]);
    let amounts: Vec<Decimal> = trend.iter().map(|t| t.amount).collect();
    assert_eq!(
        amounts,
        vec![
            Decimal::new(300, 2),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::new(700, 2)
        ]
    );
}

#[test]
fn trend_has_no_duplicate_dates_across_a_year_boundary() {
    let trend = calculate_trend(&[], 400, at(2025, 1, 15, 0));
    assert_eq!(trend.len(), 400);
    assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(trend.last().unwrap().date, "2025-01-15");
}

#[test]
fn monthly_window_is_anchored_to_now() {
    let records = vec![
        expense(1000, Category::Food, at(2023, 11, 5, 0), "Nov"),
        expense(2500, Category::Food, at(2024, 1, 31, 0), "Jan"),
        expense(4000, Category::Food, at(2023, 6, 1, 0), "Outside"),
    ];
    let jan = monthly_data(&records, 3, at(2024, 1, 31, 22));
    let labels: Vec<&str> = jan.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(labels, vec!["Nov 2023", "Dec 2023", "Jan 2024"]);
    assert_eq!(jan[0].amount, dollars(10));
    assert_eq!(jan[1].amount, Decimal::ZERO);
    assert_eq!(jan[2].amount, dollars(25));

    let feb = monthly_data(&records, 3, at(2024, 2, 1, 0));
    let labels: Vec<&str> = feb.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(labels, vec!["Dec 2023", "Jan 2024", "Feb 2024"]);
}

#[test]
fn windows_past_the_calendar_edge_are_empty_not_a_panic() {
    let now = at(2024, 3, 10, 0);
    assert!(calculate_trend(&scenario(), 100_000_000, now).is_empty());
    assert!(calculate_trend(&[], usize::MAX, now).is_empty());
    assert!(monthly_data(&scenario(), 10_000_000, now).is_empty());
    assert!(monthly_data(&[], usize::MAX, now).is_empty());

    // Large windows that still fit keep their full length.
    let long = calculate_trend(&scenario(), 3650, now);
    assert_eq!(long.len(), 3650);
    assert_eq!(long.last().unwrap().date, "2024-03-10");
    assert_eq!(monthly_data(&scenario(), 600, now).len(), 600);
}
