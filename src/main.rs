// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use spendlog::{cli, commands, db, storage::KvStore, store::ExpenseStore};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendlog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::db_path(matches.get_one::<String>("db").map(String::as_str))?;
    let conn = db::open_or_init(&path)?;
    let kv = KvStore::with_quota(&conn, db::quota_bytes());
    let mut store = ExpenseStore::open(kv);
    let now = chrono::Utc::now();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some((name @ ("add" | "edit" | "rm" | "clear" | "list"), _)) => {
            tracing::debug!(command = name, "expense command");
            commands::expenses::handle(&mut store, &matches, now)?
        }
        Some(("stats", sub)) => commands::reports::handle_stats(store.expenses(), sub, now)?,
        Some(("chart", sub)) => commands::reports::handle_chart(store.expenses(), sub, now)?,
        Some(("export", sub)) => commands::exporter::handle(store.expenses(), sub, now)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, sub)?,
        Some(("goal", sub)) => {
            commands::prefs::handle_goal(store.kv(), store.expenses(), sub, now)?
        }
        Some(("theme", sub)) => commands::prefs::handle_theme(store.kv(), sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    if let Some(err) = store.take_storage_warning() {
        commands::report_storage_error(&err);
    }
    Ok(())
}
