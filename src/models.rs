// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of expense categories. Declaration order is the canonical
/// enumeration order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Shopping,
    Bills,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == label)
    }

    /// A map holding every category at zero.
    pub fn zeroed_map() -> BTreeMap<Category, Decimal> {
        Category::ALL.iter().map(|c| (*c, Decimal::ZERO)).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Calendar day the expense is bucketed under.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Field values of a validated add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub by_category: BTreeMap<Category, Decimal>,
    pub by_month: BTreeMap<String, Decimal>, // YYYY-MM
    pub this_month: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryData {
    pub category: Category,
    pub amount: Decimal,
    pub count: usize,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendData {
    pub date: String, // YYYY-MM-DD
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyData {
    pub month: String, // "Mar 2024"
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow::anyhow!("Unknown theme '{}' (use light|dark)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}
