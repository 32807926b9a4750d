// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

/// Everything below the binary name. The shell reuses this with
/// `no_binary_name`.
pub fn build_cli() -> Command {
    Command::new("budgetvision")
        .version(clap::crate_version!())
        .about("Personal finance dashboard: budgets, cash flow, tips and reminders")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Settings file (TOML); defaults to the platform config dir"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Pretend today is this date (YYYY-MM-DD)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (RUST_LOG takes precedence)"),
        )
        .subcommand(
            Command::new("overview")
                .about("Greeting, balance/income/expenses and recent transactions")
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .value_parser(value_parser!(usize))
                        .default_value("4"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction dated today")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget vs actual per category")
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(
                    Command::new("set")
                        .about("Set a category budget, adding the category if new")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("chart")
                .about("Chart data as tables")
                .subcommand(
                    Command::new("cashflow")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_delimiter(',')
                                .help("Month labels, e.g. Jan,Feb,Mar (default: whole year)"),
                        )
                        .arg(
                            Arg::new("series")
                                .long("series")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("expenses").args(json_args()))
                .subcommand(
                    Command::new("spending")
                        .arg(
                            Arg::new("timeframe")
                                .long("timeframe")
                                .value_parser(["week", "month"])
                                .default_value("week"),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("insights")
                .about("Savings tips, projection and savings rate")
                .subcommand(Command::new("tips"))
                .subcommand(Command::new("projection").args(json_args()))
                .subcommand(Command::new("savings").args(json_args())),
        )
        .subcommand(
            Command::new("reminders")
                .about("Payment reminders")
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(
                    Command::new("pay")
                        .about("Mark a reminder paid for this session")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(Command::new("reload").about("Remount from the reminder list")),
        )
        .subcommand(
            Command::new("profile")
                .about("Profile name and type")
                .subcommand(Command::new("show").args(json_args()))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("name").long("name"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["salary", "student", "business", "housewife"]),
                        ),
                )
                .subcommand(Command::new("avatar").about("Fetch the profile avatar")),
        )
        .subcommand(
            Command::new("export")
                .about("Export transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path (default BudgetVision_Transactions_<date>.<ext>)"),
                ),
        )
        .subcommand(Command::new("shell").about("Interactive session keeping state between commands"))
}
