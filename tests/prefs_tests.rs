// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{at, dollars};
use spendlog::commands::prefs::handle_goal;
use spendlog::prefs::{self, DEFAULT_GOAL};
use spendlog::storage::KvStore;
use spendlog::{cli, db};

fn goal_set(kv: &KvStore<'_>, amount: &str) -> anyhow::Result<()> {
    let m = cli::build_cli().get_matches_from(["spendlog", "goal", "set", amount]);
    let Some(("goal", goal_m)) = m.subcommand() else {
        panic!("no goal subcommand");
    };
    handle_goal(kv, &[], goal_m, at(2024, 5, 4, 9))
}

#[test]
fn goal_set_rejects_malformed_amounts_and_keeps_old_goal() {
    let conn = db::open_in_memory().unwrap();
    let kv = KvStore::new(&conn);

    for bad in ["12.345", "1e2", "-5", "0", "abc", "1000000.01"] {
        assert!(goal_set(&kv, bad).is_err(), "accepted {bad}");
        assert_eq!(prefs::goal(&kv), DEFAULT_GOAL);
    }

    goal_set(&kv, "1000000").unwrap();
    assert_eq!(prefs::goal(&kv), dollars(1_000_000));

    goal_set(&kv, "300.50").unwrap();
    assert_eq!(prefs::goal(&kv), rust_decimal::Decimal::new(30050, 2));
}

#[test]
fn chart_and_goal_need_a_subcommand() {
    assert!(cli::build_cli().try_get_matches_from(["spendlog", "chart"]).is_err());
    assert!(cli::build_cli().try_get_matches_from(["spendlog", "goal"]).is_err());
    assert!(cli::build_cli()
        .try_get_matches_from(["spendlog", "chart", "trend", "--days", "7"])
        .is_ok());
    // `theme` alone shows the current theme.
    assert!(cli::build_cli().try_get_matches_from(["spendlog", "theme"]).is_ok());
}
