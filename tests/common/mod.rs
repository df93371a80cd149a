// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use spendlog::models::{Category, Expense};
use uuid::Uuid;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Amount given in cents.
pub fn expense(cents: i64, category: Category, date: DateTime<Utc>, description: &str) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        date,
        amount: Decimal::new(cents, 2),
        category,
        description: description.to_string(),
        created_at: date,
        updated_at: date,
    }
}

pub fn dollars(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

pub fn approx(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < Decimal::new(1, 6)
}
