// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::StorageError;

pub mod expenses;
pub mod exporter;
pub mod importer;
pub mod prefs;
pub mod reports;

/// Tells the user a write did not reach disk. The in-memory change stands.
pub fn report_storage_error(err: &StorageError) {
    tracing::warn!(error = %err, "write not persisted");
    if err.is_quota() {
        eprintln!("Warning: {}. Please delete some old expenses.", err);
    } else {
        eprintln!("Warning: changes could not be saved: {}", err);
    }
}
