// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filters::FilterState;
use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use crate::validation::ExpenseForm;
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub fn handle(
    store: &mut ExpenseStore<'_>,
    m: &clap::ArgMatches,
    now: DateTime<Utc>,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub, now)?,
        Some(("edit", sub)) => edit(store, sub, now)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("clear", sub)) => clear(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).cloned()
}

fn parse_id(sub: &clap::ArgMatches) -> Result<Uuid> {
    let raw = sub.get_one::<String>("id").context("id missing")?;
    Uuid::parse_str(raw.trim()).with_context(|| format!("Invalid expense id '{}'", raw))
}

/// Builds the form for `add`: unspecified date means today.
pub fn add_form(sub: &clap::ArgMatches, now: DateTime<Utc>) -> ExpenseForm {
    ExpenseForm {
        date: arg(sub, "date").unwrap_or_else(|| now.date_naive().to_string()),
        amount: arg(sub, "amount").unwrap_or_default(),
        category: arg(sub, "category").unwrap_or_default(),
        description: arg(sub, "description").unwrap_or_default(),
    }
}

/// Builds the form for `edit`, pre-filled from the current record.
pub fn edit_form(sub: &clap::ArgMatches, current: &Expense) -> ExpenseForm {
    ExpenseForm {
        date: arg(sub, "date").unwrap_or_else(|| current.day().to_string()),
        amount: arg(sub, "amount").unwrap_or_else(|| current.amount.normalize().to_string()),
        category: arg(sub, "category").unwrap_or_else(|| current.category.to_string()),
        description: arg(sub, "description").unwrap_or_else(|| current.description.clone()),
    }
}

fn add(store: &mut ExpenseStore<'_>, sub: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let draft = add_form(sub, now).validate(now.date_naive())?;
    let e = store.add(draft, now);
    println!(
        "Recorded {} on {} for '{}' ({}) [{}]",
        fmt_money(&e.amount),
        e.day(),
        e.description,
        e.category,
        e.id
    );
    Ok(())
}

fn edit(store: &mut ExpenseStore<'_>, sub: &clap::ArgMatches, now: DateTime<Utc>) -> Result<()> {
    let id = parse_id(sub)?;
    let current = store
        .get(id)
        .ok_or_else(|| anyhow!("Expense '{}' not found", id))?;
    let draft = edit_form(sub, current).validate(now.date_naive())?;
    let e = store.update(id, draft, now)?;
    println!(
        "Updated {}: {} on {} for '{}' ({})",
        e.id,
        fmt_money(&e.amount),
        e.day(),
        e.description,
        e.category
    );
    Ok(())
}

fn remove(store: &mut ExpenseStore<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub)?;
    let e = store.delete(id)?;
    println!("Deleted '{}' ({})", e.description, fmt_money(&e.amount));
    Ok(())
}

fn clear(store: &mut ExpenseStore<'_>, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        bail!("Refusing to delete all expenses without --yes; this action cannot be undone");
    }
    let n = store.clear();
    println!("Deleted {} expense(s)", n);
    Ok(())
}

/// Reads the list filters from the command line. Unparseable category or
/// dates are reported as errors rather than silently ignored.
pub fn filter_state(sub: &clap::ArgMatches) -> Result<FilterState> {
    let mut f = FilterState::default();
    if let Some(q) = sub.get_one::<String>("search") {
        f.set_search_query(q.as_str());
    }
    if let Some(c) = sub.get_one::<String>("category") {
        f.set_category(c.parse()?);
    }
    let start = sub.get_one::<String>("from").map(|s| parse_date(s)).transpose()?;
    let end = sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;
    f.set_date_range(start, end);
    let sort_by = match sub.get_one::<String>("sort") {
        Some(s) => s.parse()?,
        None => f.sort_by,
    };
    let sort_order = match sub.get_one::<String>("order") {
        Some(s) => s.parse()?,
        None => f.sort_order,
    };
    f.set_sorting(sort_by, sort_order);
    Ok(f)
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(e: &Expense) -> Self {
        ExpenseRow {
            id: e.id.to_string(),
            date: e.day().to_string(),
            category: e.category.to_string(),
            amount: format!("{:.2}", e.amount.round_dp(2)),
            description: e.description.clone(),
        }
    }
}

pub fn query_rows(store: &ExpenseStore<'_>, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let filters = filter_state(sub)?;
    let mut rows: Vec<ExpenseRow> = filters
        .apply(store.expenses())
        .iter()
        .map(ExpenseRow::from)
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list(store: &ExpenseStore<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let shown = data.len();
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| vec![r.date, r.category, r.amount, r.description, r.id])
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Amount", "Description", "Id"], rows)
        );
        println!("{} of {} expense(s)", shown, store.expenses().len());
    }
    Ok(())
}
