// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.spendlog", "Spendlog", "spendlog"));

/// Overrides the database location when `--db` is not given.
pub const DB_ENV: &str = "SPENDLOG_DB";
/// Maximum serialized size of a single stored value, in bytes.
pub const QUOTA_ENV: &str = "SPENDLOG_QUOTA_BYTES";
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendlog.sqlite"))
}

/// Resolves the database path: explicit flag, then `SPENDLOG_DB`, then the
/// platform data dir.
pub fn db_path(flag: Option<&str>) -> Result<PathBuf> {
    if let Some(p) = flag.map(str::trim).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    match std::env::var(DB_ENV) {
        Ok(p) if !p.trim().is_empty() => Ok(PathBuf::from(p.trim())),
        _ => default_db_path(),
    }
}

pub fn quota_bytes() -> usize {
    match std::env::var(QUOTA_ENV) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "ignoring invalid {}", QUOTA_ENV);
            DEFAULT_QUOTA_BYTES
        }),
        Err(_) => DEFAULT_QUOTA_BYTES,
    }
}

pub fn open_or_init(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Create data dir {}", parent.display()))?;
    }
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Open in-memory DB")?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}
