// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn required(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).required(true).help(help)
}

fn optional(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

pub fn build_cli() -> Command {
    Command::new("wealthbook")
        .version(clap::crate_version!())
        .about("Track transactions, assets, debts and investments; derive net worth and ROI")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Database file (overrides WEALTHBOOK_DB_PATH)"),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Income and expense transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(required("amount", "Amount (not negative; sign comes from --type)"))
                        .arg(required("type", "income | expense"))
                        .arg(required("category", "Category name"))
                        .arg(optional("date", "YYYY-MM-DD (default: today)"))
                        .arg(optional("note", "Free-form note"))
                        .arg(optional("receipt", "Receipt URL or reference")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions in insertion order")
                        .arg(optional("type", "Only income | expense"))
                        .arg(optional("category", "Only this category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Keep only the last N matches"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("recent")
                        .about("Latest transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .default_value("5"),
                        ),
                )),
        )
        .subcommand(
            Command::new("asset")
                .about("Owned assets")
                .subcommand(
                    Command::new("add")
                        .about("Record an asset")
                        .arg(required("name", "Asset name"))
                        .arg(required("type", "real_estate | vehicle | gold | cash | other"))
                        .arg(required("value", "Current estimated value"))
                        .arg(optional("acquired", "Acquisition date YYYY-MM-DD")),
                )
                .subcommand(json_flags(Command::new("list").about("List assets"))),
        )
        .subcommand(
            Command::new("debt")
                .about("Debts owed by or to you")
                .subcommand(
                    Command::new("add")
                        .about("Record a debt")
                        .arg(required("creditor", "To whom / from whom"))
                        .arg(required("total", "Original amount"))
                        .arg(optional("remaining", "Outstanding amount (default: total)"))
                        .arg(required("due", "Due date YYYY-MM-DD"))
                        .arg(
                            Arg::new("receivable")
                                .long("receivable")
                                .action(ArgAction::SetTrue)
                                .help("The money is owed to you"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List debts"))),
        )
        .subcommand(
            Command::new("invest")
                .about("Investment positions")
                .subcommand(
                    Command::new("add")
                        .about("Record a position")
                        .arg(required("symbol", "Ticker or name"))
                        .arg(required("type", "stock | crypto | fund | local"))
                        .arg(required("quantity", "Units held (> 0)"))
                        .arg(required("buy-price", "Price paid per unit"))
                        .arg(optional("current-price", "Current price per unit (default: buy price)"))
                        .arg(optional("date", "Purchase date YYYY-MM-DD (default: today)")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List positions with value and gain"),
                )),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Net worth, income and expense totals"),
        ))
        .subcommand(json_flags(
            Command::new("expenses").about("Expense totals by category"),
        ))
        .subcommand(json_flags(
            Command::new("portfolio").about("Portfolio value, cost and ROI"),
        ))
        .subcommand(
            Command::new("export")
                .about("Write a collection to a file")
                .arg(
                    Arg::new("collection")
                        .required(true)
                        .value_parser(["transactions", "assets", "debts", "investments"]),
                )
                .arg(required("format", "csv | json"))
                .arg(required("out", "Output path")),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
