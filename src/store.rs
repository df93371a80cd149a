// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The expense collection: single source of truth for every derived view.
//!
//! Each mutation rewrites the whole collection through [`KvStore`]. A failed
//! write does not roll back the in-memory change; the failure is parked in
//! [`ExpenseStore::take_storage_warning`] for the caller to show once.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{Expense, ExpenseDraft};
use crate::storage::{KvStore, StorageError, EXPENSES_KEY};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Expense '{0}' not found")]
    NotFound(Uuid),
}

#[derive(Debug)]
pub struct ExpenseStore<'c> {
    kv: KvStore<'c>,
    expenses: Vec<Expense>,
    storage_warning: Option<StorageError>,
}

impl<'c> ExpenseStore<'c> {
    pub fn open(kv: KvStore<'c>) -> Self {
        let expenses: Vec<Expense> = kv.load(EXPENSES_KEY, Vec::new());
        tracing::debug!(count = expenses.len(), "loaded expenses");
        Self {
            kv,
            expenses,
            storage_warning: None,
        }
    }

    /// Records in canonical order: newest insertion first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn kv(&self) -> &KvStore<'c> {
        &self.kv
    }

    /// The last write failure, if any. Cleared on read.
    pub fn take_storage_warning(&mut self) -> Option<StorageError> {
        self.storage_warning.take()
    }

    fn persist(&mut self) {
        if let Err(err) = self.kv.save(EXPENSES_KEY, &self.expenses) {
            tracing::warn!(error = %err, "failed to persist expenses; keeping in-memory state");
            self.storage_warning = Some(err);
        }
    }

    pub fn add(&mut self, draft: ExpenseDraft, now: DateTime<Utc>) -> Expense {
        let expense = Expense {
            id: Uuid::new_v4(),
            date: draft.date.and_time(NaiveTime::MIN).and_utc(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description.trim().to_string(),
            created_at: now,
            updated_at: now,
        };
        self.expenses.insert(0, expense.clone());
        self.persist();
        tracing::info!(id = %expense.id, amount = %expense.amount, "added expense");
        expense
    }

    /// Replaces every editable field of `id`; position and `created_at` stay.
    pub fn update(
        &mut self,
        id: Uuid,
        draft: ExpenseDraft,
        now: DateTime<Utc>,
    ) -> Result<Expense, StoreError> {
        let slot = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = Expense {
            id,
            date: draft.date.and_time(NaiveTime::MIN).and_utc(),
            amount: draft.amount,
            category: draft.category,
            description: draft.description.trim().to_string(),
            created_at: slot.created_at,
            updated_at: now,
        };
        let updated = slot.clone();
        self.persist();
        tracing::info!(%id, "updated expense");
        Ok(updated)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Expense, StoreError> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.expenses.remove(pos);
        self.persist();
        tracing::info!(%id, "deleted expense");
        Ok(removed)
    }

    /// Drops every record and the stored collection with it.
    pub fn clear(&mut self) -> usize {
        let n = self.expenses.len();
        self.expenses.clear();
        self.kv.remove(EXPENSES_KEY);
        tracing::info!(count = n, "cleared expenses");
        n
    }

    /// Swaps in an imported collection wholesale. Records with a repeated id
    /// (after the first) or a non-positive amount are dropped. Returns how
    /// many were kept.
    pub fn replace_all(&mut self, incoming: Vec<Expense>) -> usize {
        let mut seen = HashSet::new();
        self.expenses = admissible(incoming, &mut seen).collect();
        self.persist();
        self.expenses.len()
    }

    /// Appends imported records whose ids are not already present, keeping
    /// their relative order after the existing ones. Returns how many were added.
    pub fn merge(&mut self, incoming: Vec<Expense>) -> usize {
        let mut seen: HashSet<Uuid> = self.expenses.iter().map(|e| e.id).collect();
        let before = self.expenses.len();
        let fresh: Vec<Expense> = admissible(incoming, &mut seen).collect();
        self.expenses.extend(fresh);
        let added = self.expenses.len() - before;
        if added > 0 {
            self.persist();
        }
        added
    }
}

/// Imported records that keep the collection's invariants: unseen id and a
/// positive amount.
fn admissible<'a>(
    incoming: Vec<Expense>,
    seen: &'a mut HashSet<Uuid>,
) -> impl Iterator<Item = Expense> + 'a {
    incoming.into_iter().filter(move |e| {
        if e.amount <= Decimal::ZERO {
            tracing::warn!(
                id = %e.id,
                amount = %e.amount,
                "skipping imported expense with non-positive amount"
            );
            return false;
        }
        if !seen.insert(e.id) {
            tracing::warn!(id = %e.id, "skipping imported expense with duplicate id");
            return false;
        }
        true
    })
}
