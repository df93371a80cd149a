// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-value key/value persistence on top of the `kv` table.
//!
//! Reads are lenient: a missing, corrupt, or wrongly shaped value yields the
//! caller's default. Writes report failures as [`StorageError`] so the caller
//! can warn the user, but callers are expected to carry on.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::db::DEFAULT_QUOTA_BYTES;

pub const EXPENSES_KEY: &str = "expense-tracker-data";
pub const THEME_KEY: &str = "expense-tracker-theme";
pub const GOAL_KEY: &str = "monthly-goal";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing '{key}' ({size} bytes, limit {quota})")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },
    #[error("storage backend error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn is_quota(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }
}

#[derive(Debug)]
pub struct KvStore<'c> {
    conn: &'c Connection,
    quota: usize,
}

impl<'c> KvStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self::with_quota(conn, DEFAULT_QUOTA_BYTES)
    }

    pub fn with_quota(conn: &'c Connection, quota: usize) -> Self {
        Self { conn, quota }
    }

    fn raw(&self, key: &str) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
    }

    /// Returns the stored value for `key`, or `default` when it is absent or
    /// cannot be read back as `T`. Never fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value; using default");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(key, error = %err, "stored value is corrupt; using default");
                default
            }
        }
    }

    /// Serializes `value` and replaces whatever is stored under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_string(value)?;
        if body.len() > self.quota {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                size: body.len(),
                quota: self.quota,
            });
        }
        let res = self.conn.execute(
            "INSERT INTO kv(key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
            params![key, body, chrono::Utc::now()],
        );
        match res {
            Ok(_) => {
                tracing::debug!(key, bytes = body.len(), "saved value");
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::DiskFull => {
                Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    size: body.len(),
                    quota: self.quota,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes `key` entirely. Failures are logged, not raised.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.conn.execute("DELETE FROM kv WHERE key=?1", params![key]) {
            tracing::warn!(key, error = %err, "failed to remove stored value");
        }
    }
}
