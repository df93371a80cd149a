// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Expense};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, c: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(want) => *want == c,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// Inclusive calendar-day bounds; a missing side is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start.is_none_or(|s| d >= s) && self.end.is_none_or(|e| d <= e)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Amount,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortBy::Date),
            "amount" => Ok(SortBy::Amount),
            "category" => Ok(SortBy::Category),
            other => Err(anyhow::anyhow!(
                "Unknown sort key '{}' (use date|amount|category)",
                other
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(anyhow::anyhow!("Unknown sort order '{}' (use asc|desc)", other)),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortBy::Date => "date",
            SortBy::Amount => "amount",
            SortBy::Category => "category",
        })
    }
}

type Comparator = fn(&Expense, &Expense) -> Ordering;

fn by_date(a: &Expense, b: &Expense) -> Ordering {
    a.date.cmp(&b.date)
}

fn by_amount(a: &Expense, b: &Expense) -> Ordering {
    a.amount.cmp(&b.amount)
}

fn by_category(a: &Expense, b: &Expense) -> Ordering {
    a.category.as_str().cmp(b.category.as_str())
}

impl SortBy {
    fn comparator(self) -> Comparator {
        match self {
            SortBy::Date => by_date,
            SortBy::Amount => by_amount,
            SortBy::Category => by_category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_query: String,
    pub category: CategoryFilter,
    pub date_range: DateRange,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.date_range = DateRange { start, end };
    }

    pub fn set_sorting(&mut self, sort_by: SortBy, sort_order: SortOrder) {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// True when any narrowing predicate is set. Sorting alone does not count.
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty()
            || self.category != CategoryFilter::All
            || !self.date_range.is_unbounded()
    }

    /// Filters then stably sorts a copy of `expenses`.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let query = self.search_query.to_lowercase();
        let mut out: Vec<Expense> = expenses
            .iter()
            .filter(|e| query.is_empty() || e.description.to_lowercase().contains(&query))
            .filter(|e| self.category.matches(e.category))
            .filter(|e| self.date_range.contains(e.day()))
            .cloned()
            .collect();

        let cmp = self.sort_by.comparator();
        match self.sort_order {
            SortOrder::Asc => out.sort_by(cmp),
            SortOrder::Desc => out.sort_by(|a, b| cmp(a, b).reverse()),
        }
        out
    }
}
