// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::models::{Category, ExpenseDraft};

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("amount pattern compiles"));

pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
pub const MIN_DESCRIPTION: usize = 3;
pub const MAX_DESCRIPTION: usize = 200;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// One optional message per form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    fn messages(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("date", &self.date),
            ("amount", &self.amount),
            ("category", &self.category),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .messages()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "invalid expense ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn parse_positive(raw: &str) -> Result<Decimal, String> {
    if raw.is_empty() {
        return Err("Amount is required".into());
    }
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| "Amount must be a valid number".to_string())?;
    if amount <= Decimal::ZERO {
        return Err("Amount must be greater than 0".into());
    }
    Ok(amount)
}

fn check_places(raw: &str) -> Result<(), String> {
    if AMOUNT_RE.is_match(raw) {
        Ok(())
    } else {
        Err("Amount can have at most 2 decimal places".into())
    }
}

fn check_amount(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    let amount = parse_positive(raw)?;
    if amount >= MAX_AMOUNT {
        return Err("Amount must be less than $1,000,000".into());
    }
    check_places(raw)?;
    Ok(amount)
}

fn check_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Date is required".into());
    }
    let date =
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| "Invalid date".to_string())?;
    if date > today {
        return Err("Date cannot be in the future".into());
    }
    Ok(date)
}

fn check_category(raw: &str) -> Result<Category, String> {
    if raw.trim().is_empty() {
        return Err("Category is required".into());
    }
    Category::from_label(raw).ok_or_else(|| "Invalid category".to_string())
}

fn check_description(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Description is required".into());
    }
    let len = trimmed.chars().count();
    if len < MIN_DESCRIPTION {
        return Err("Description must be at least 3 characters".into());
    }
    if len > MAX_DESCRIPTION {
        return Err("Description must be less than 200 characters".into());
    }
    Ok(trimmed.to_string())
}

impl ExpenseForm {
    /// Per-field errors; empty when the form is valid.
    pub fn errors(&self, today: NaiveDate) -> ValidationErrors {
        match self.validate(today) {
            Ok(_) => ValidationErrors::default(),
            Err(errs) => errs,
        }
    }

    /// Checks every field against `today` and returns the typed draft.
    pub fn validate(&self, today: NaiveDate) -> Result<ExpenseDraft, ValidationErrors> {
        let date = check_date(&self.date, today);
        let amount = check_amount(&self.amount);
        let category = check_category(&self.category);
        let description = check_description(&self.description);
        match (date, amount, category, description) {
            (Ok(date), Ok(amount), Ok(category), Ok(description)) => Ok(ExpenseDraft {
                date,
                amount,
                category,
                description,
            }),
            (date, amount, category, description) => Err(ValidationErrors {
                date: date.err(),
                amount: amount.err(),
                category: category.err(),
                description: description.err(),
            }),
        }
    }
}

/// A positive plain decimal with at most two places. Carries no upper
/// bound, so callers apply their own.
pub fn is_valid_amount(raw: &str) -> bool {
    let raw = raw.trim();
    parse_positive(raw).and_then(|_| check_places(raw)).is_ok()
}

/// Parses a goal typed by the user: a valid amount within the goal range.
pub fn parse_goal(raw: &str) -> Option<Decimal> {
    if !is_valid_amount(raw) {
        return None;
    }
    raw.trim().parse::<Decimal>().ok().filter(|g| is_valid_goal(*g))
}

/// Trims and collapses runs of whitespace to a single space.
pub fn sanitize_description(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Monthly goals must lie in `(0, 1_000_000]`.
pub fn is_valid_goal(goal: Decimal) -> bool {
    goal > Decimal::ZERO && goal <= MAX_AMOUNT
}
