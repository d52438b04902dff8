// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use wealthbook::models::TransactionType;
use wealthbook::store::RecordStore;
use wealthbook::{cli, commands::transactions, db};

fn tx_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["wealthbook", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("tx", tx_m)) => tx_m.clone(),
        _ => panic!("no tx subcommand"),
    }
}

#[test]
fn list_limit_keeps_latest() {
    let store = RecordStore::load(db::open_in_memory().unwrap());
    let tx_m = tx_matches(&["list", "--limit", "2"]);
    if let Some(("list", list_m)) = tx_m.subcommand() {
        let rows = transactions::query_rows(store.transactions(), list_m).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "3");
        assert_eq!(rows[1].id, "4");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_filters_by_type_and_category() {
    let store = RecordStore::load(db::open_in_memory().unwrap());
    let tx_m = tx_matches(&["list", "--type", "expense"]);
    let (_, list_m) = tx_m.subcommand().unwrap();
    let rows = transactions::query_rows(store.transactions(), list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t.r#type == TransactionType::Expense));

    let tx_m = tx_matches(&["list", "--category", "وقود"]);
    let (_, list_m) = tx_m.subcommand().unwrap();
    let rows = transactions::query_rows(store.transactions(), list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, dec!(120));

    let tx_m = tx_matches(&["list", "--type", "transfer"]);
    let (_, list_m) = tx_m.subcommand().unwrap();
    assert!(transactions::query_rows(store.transactions(), list_m).is_err());
}

#[test]
fn add_trims_cli_inputs_and_persists() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let tx_m = tx_matches(&[
        "add",
        "--amount",
        " 64.90 ",
        "--type",
        " Expense ",
        "--category",
        " Pharmacy ",
        "--date",
        " 2024-04-11 ",
        "--note",
        "  ",
    ]);
    transactions::handle(&mut store, "JOD", &tx_m).unwrap();

    let t = store.transactions().last().unwrap();
    assert_eq!(t.amount, dec!(64.90));
    assert_eq!(t.r#type, TransactionType::Expense);
    assert_eq!(t.category, "Pharmacy");
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 4, 11).unwrap());
    assert_eq!(t.note, None);
    assert_eq!(store.transactions().len(), 5);
}

#[test]
fn add_rejects_negative_amount() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let tx_m = tx_matches(&[
        "add",
        "--amount=-3",
        "--type",
        "income",
        "--category",
        "Refund",
    ]);
    assert!(transactions::handle(&mut store, "JOD", &tx_m).is_err());
    assert_eq!(store.transactions().len(), 4);
}

#[test]
fn draft_defaults_date_to_today() {
    let tx_m = tx_matches(&[
        "add", "--amount", "10", "--type", "income", "--category", "Gift", "--receipt",
        "r-001",
    ]);
    let (_, add_m) = tx_m.subcommand().unwrap();
    let draft = transactions::draft_from(add_m).unwrap();
    assert_eq!(draft.date, chrono::Local::now().date_naive());
    assert_eq!(draft.receipt_url.as_deref(), Some("r-001"));
}
