// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d.round_dp(2))
}

/// `YYYY-MM` bucket key for a calendar day.
pub fn month_key(d: NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

/// `YYYY-MM-DD` bucket key for a calendar day.
pub fn day_key(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// First day of the month `back` months before the month containing `d`.
/// `None` once that month falls outside chrono's calendar.
pub fn month_start_back(d: NaiveDate, back: usize) -> Option<NaiveDate> {
    let back = u32::try_from(back).ok()?;
    d.with_day(1)?.checked_sub_months(Months::new(back))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line.
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_start_back_crosses_years() {
        assert_eq!(month_start_back(d(2024, 3, 31), 0), Some(d(2024, 3, 1)));
        assert_eq!(month_start_back(d(2024, 3, 31), 3), Some(d(2023, 12, 1)));
        assert_eq!(month_start_back(d(2024, 1, 15), 13), Some(d(2022, 12, 1)));
        assert_eq!(month_start_back(d(2024, 1, 15), usize::MAX), None);
        assert_eq!(month_start_back(d(2024, 1, 15), 10_000_000), None);
    }

    #[test]
    fn keys_are_zero_padded() {
        assert_eq!(month_key(d(2024, 3, 5)), "2024-03");
        assert_eq!(day_key(d(2024, 3, 5)), "2024-03-05");
    }

    #[test]
    fn money_has_two_places() {
        assert_eq!(fmt_money(&Decimal::new(35, 0)), "$35.00");
        assert_eq!(fmt_money(&Decimal::new(11666, 3)), "$11.67");
    }
}
