// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::Theme;
use crate::storage::{KvStore, StorageError, GOAL_KEY, THEME_KEY};
use crate::validation::is_valid_goal;

pub const DEFAULT_GOAL: Decimal = Decimal::from_parts(2500, 0, 0, false, 0);

pub fn theme(kv: &KvStore<'_>) -> Theme {
    kv.load(THEME_KEY, Theme::default())
}

pub fn set_theme(kv: &KvStore<'_>, theme: Theme) -> Result<(), StorageError> {
    kv.save(THEME_KEY, &theme)
}

pub fn toggle_theme(kv: &KvStore<'_>) -> Result<Theme, StorageError> {
    let next = theme(kv).toggled();
    set_theme(kv, next)?;
    Ok(next)
}

pub fn goal(kv: &KvStore<'_>) -> Decimal {
    let stored: Decimal = kv.load(GOAL_KEY, DEFAULT_GOAL);
    if is_valid_goal(stored) {
        stored
    } else {
        tracing::warn!(%stored, "stored monthly goal out of range; using default");
        DEFAULT_GOAL
    }
}

/// Stores `new_goal` when it is in range. Returns `Ok(false)` and leaves the
/// old goal untouched otherwise.
pub fn set_goal(kv: &KvStore<'_>, new_goal: Decimal) -> Result<bool, StorageError> {
    if !is_valid_goal(new_goal) {
        return Ok(false);
    }
    kv.save(GOAL_KEY, &new_goal)?;
    Ok(true)
}
