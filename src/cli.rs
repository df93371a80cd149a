// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn form_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .help("Expense date YYYY-MM-DD (defaults to today when adding)"),
    )
    .arg(Arg::new("amount").long("amount").required(required))
    .arg(
        Arg::new("category")
            .long("category")
            .required(required)
            .help("Food|Transportation|Entertainment|Shopping|Bills|Other"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('d')
            .required(required),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(clap::crate_version!())
        .about("Local-only personal expense tracker")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Path to the database file (overrides SPENDLOG_DB)"),
        )
        .subcommand(Command::new("init").about("Create the database if missing"))
        .subcommand(form_args(
            Command::new("add").about("Record a new expense"),
            true,
        ))
        .subcommand(
            form_args(
                Command::new("edit")
                    .about("Replace an expense; omitted fields keep their value")
                    .arg(Arg::new("id").required(true)),
                false,
            ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("clear").about("Delete every expense").arg(
                Arg::new("yes")
                    .long("yes")
                    .action(ArgAction::SetTrue)
                    .help("Confirm; this cannot be undone"),
            ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List expenses with filters and sorting")
                .arg(Arg::new("search").long("search").short('s'))
                .arg(Arg::new("category").long("category").help("Category or All"))
                .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD, inclusive"))
                .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD, inclusive"))
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_parser(["date", "amount", "category"])
                        .default_value("date"),
                )
                .arg(
                    Arg::new("order")
                        .long("order")
                        .value_parser(["asc", "desc"])
                        .default_value("desc"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(json_flags(
            Command::new("stats").about("Totals, averages, and per-category sums"),
        ))
        .subcommand(
            Command::new("chart")
                .about("Series behind the dashboard charts")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("categories").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize))
                            .default_value("6"),
                    ),
                ))
                .subcommand(json_flags(
                    Command::new("trend").arg(
                        Arg::new("days")
                            .long("days")
                            .value_parser(value_parser!(usize))
                            .default_value("30"),
                    ),
                ))
                .subcommand(json_flags(
                    Command::new("monthly").arg(
                        Arg::new("months")
                            .long("months")
                            .value_parser(value_parser!(usize))
                            .default_value("6"),
                    ),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses")
                .arg(
                    Arg::new("format")
                        .required(true)
                        .help("csv|json"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Output path (defaults to expenses-<today>.<format>)"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import expenses from a JSON export")
                .arg(Arg::new("path").required(true))
                .arg(
                    Arg::new("merge")
                        .long("merge")
                        .action(ArgAction::SetTrue)
                        .help("Keep existing expenses and add unseen ones"),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Monthly spending goal")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("show")))
                .subcommand(Command::new("set").arg(Arg::new("amount").required(true))),
        )
        .subcommand(
            Command::new("theme")
                .about("Theme preference")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("theme").required(true).value_parser(["light", "dark"])),
                )
                .subcommand(Command::new("toggle")),
        )
}
