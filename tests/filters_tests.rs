// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{at, day, expense};
use spendlog::filters::{CategoryFilter, FilterState, SortBy, SortOrder};
use spendlog::models::{Category, Expense};

fn sample() -> Vec<Expense> {
    vec![
        expense(1500, Category::Shopping, at(2024, 4, 3, 10), "New shoes"),
        expense(800, Category::Food, at(2024, 4, 1, 12), "Coffee and CAKE"),
        expense(800, Category::Food, at(2024, 4, 5, 8), "Cake for party"),
        expense(4200, Category::Bills, at(2024, 3, 28, 0), "Electricity"),
        expense(800, Category::Entertainment, at(2024, 4, 1, 20), "Cinema"),
    ]
}

fn descriptions(v: &[Expense]) -> Vec<&str> {
    v.iter().map(|e| e.description.as_str()).collect()
}

#[test]
fn default_state_sorts_newest_first_and_keeps_everything() {
    let f = FilterState::default();
    assert!(!f.is_active());
    let out = f.apply(&sample());
    assert_eq!(
        descriptions(&out),
        vec!["Cake for party", "New shoes", "Cinema", "Coffee and CAKE", "Electricity"]
    );
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut f = FilterState::default();
    f.set_search_query("cake");
    f.set_sorting(SortBy::Date, SortOrder::Asc);
    assert!(f.is_active());
    let out = f.apply(&sample());
    assert_eq!(descriptions(&out), vec!["Coffee and CAKE", "Cake for party"]);
}

#[test]
fn category_filter_is_exact() {
    let mut f = FilterState::default();
    f.set_category(CategoryFilter::Only(Category::Food));
    let out = f.apply(&sample());
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|e| e.category == Category::Food));

    f.set_category("all".parse().unwrap());
    assert_eq!(f.apply(&sample()).len(), 5);
}

#[test]
fn date_range_bounds_are_inclusive_days() {
    let mut f = FilterState::default();
    f.set_sorting(SortBy::Date, SortOrder::Asc);

    f.set_date_range(Some(day(2024, 4, 1)), Some(day(2024, 4, 3)));
    assert_eq!(
        descriptions(&f.apply(&sample())),
        vec!["Coffee and CAKE", "Cinema", "New shoes"]
    );

    f.set_date_range(Some(day(2024, 4, 3)), None);
    assert_eq!(
        descriptions(&f.apply(&sample())),
        vec!["New shoes", "Cake for party"]
    );

    f.set_date_range(None, Some(day(2024, 3, 28)));
    assert_eq!(descriptions(&f.apply(&sample())), vec!["Electricity"]);
}

#[test]
fn amount_sort_is_stable_for_ties() {
    let mut f = FilterState::default();
    f.set_sorting(SortBy::Amount, SortOrder::Asc);
    let out = f.apply(&sample());
    // the three 8.00 records keep their input order
    assert_eq!(
        descriptions(&out),
        vec![
            "Coffee and CAKE",
            "Cake for party",
            "Cinema",
            "New shoes",
            "Electricity"
        ]
    );

    f.set_sorting(SortBy::Amount, SortOrder::Desc);
    let out = f.apply(&sample());
    assert_eq!(
        descriptions(&out),
        vec![
            "Electricity",
            "New shoes",
            "Coffee and CAKE",
            "Cake for party",
            "Cinema"
        ]
    );
}

#[test]
fn category_sort_is_alphabetical_by_label() {
    let mut f = FilterState::default();
    f.set_sorting(SortBy::Category, SortOrder::Asc);
    let cats: Vec<Category> = f.apply(&sample()).iter().map(|e| e.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Bills,
            Category::Entertainment,
            Category::Food,
            Category::Food,
            Category::Shopping
        ]
    );
}

#[test]
fn filtering_only_narrows_and_reset_restores_defaults() {
    let records = sample();
    let mut f = FilterState::default();
    f.set_search_query("e");
    f.set_category(CategoryFilter::Only(Category::Food));
    f.set_date_range(Some(day(2024, 4, 2)), None);
    let out = f.apply(&records);
    assert!(out.len() <= records.len());
    for e in &out {
        assert!(e.description.to_lowercase().contains('e'));
        assert_eq!(e.category, Category::Food);
        assert!(e.day() >= day(2024, 4, 2));
    }
    assert_eq!(descriptions(&out), vec!["Cake for party"]);

    f.reset();
    assert_eq!(f, FilterState::default());
    assert_eq!(f.apply(&records).len(), records.len());
}

#[test]
fn list_command_reads_filters_from_cli() {
    use spendlog::{cli, commands::expenses, db, storage::KvStore, store::ExpenseStore};

    let conn = db::open_in_memory().unwrap();
    let mut store = ExpenseStore::open(KvStore::new(&conn));
    store.replace_all(sample());

    let matches = cli::build_cli().get_matches_from([
        "spendlog", "list", "--category", "food", "--sort", "amount", "--order", "asc",
        "--limit", "1",
    ]);
    let Some(("list", list_m)) = matches.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = expenses::query_rows(&store, list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Coffee and CAKE");
    assert_eq!(rows[0].amount, "8.00");
    assert_eq!(rows[0].date, "2024-04-01");

    let bad = cli::build_cli().get_matches_from(["spendlog", "list", "--from", "yesterday"]);
    let Some(("list", bad_m)) = bad.subcommand() else {
        panic!("no list subcommand");
    };
    assert!(expenses::query_rows(&store, bad_m).is_err());
}
