// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use wealthbook::commands::{assets, debts, investments};
use wealthbook::models::{AssetType, InvestmentType};
use wealthbook::store::RecordStore;
use wealthbook::{cli, db};

fn sub_matches(group: &str, args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["wealthbook", group];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((name, m)) if name == group => m.clone(),
        _ => panic!("no {} subcommand", group),
    }
}

#[test]
fn asset_add_records_type_and_date() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let m = sub_matches(
        "asset",
        &[
            "add", "--name", "Gold bracelet", "--type", "gold", "--value", "2150.5",
            "--acquired", "2022-12-01",
        ],
    );
    assets::handle(&mut store, "JOD", &m).unwrap();

    let a = store.assets().last().unwrap();
    assert_eq!(a.r#type, AssetType::Gold);
    assert_eq!(a.value, dec!(2150.5));
    assert_eq!(a.date_acquired, NaiveDate::from_ymd_opt(2022, 12, 1));
}

#[test]
fn asset_add_rejects_unknown_type() {
    let m = sub_matches(
        "asset",
        &["add", "--name", "Boat", "--type", "yacht", "--value", "100"],
    );
    let (_, add_m) = m.subcommand().unwrap();
    assert!(assets::draft_from(add_m).is_err());
}

#[test]
fn debt_remaining_defaults_to_total_and_receivable_flips_direction() {
    let m = sub_matches(
        "debt",
        &["add", "--creditor", "Layla", "--total", "750", "--due", "2025-03-01", "--receivable"],
    );
    let (_, add_m) = m.subcommand().unwrap();
    let d = debts::draft_from(add_m).unwrap();
    assert_eq!(d.remaining_amount, dec!(750));
    assert!(!d.is_payable);
}

#[test]
fn debt_remaining_above_total_is_rejected() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let m = sub_matches(
        "debt",
        &[
            "add", "--creditor", "Bank", "--total", "100", "--remaining", "101", "--due",
            "2025-03-01",
        ],
    );
    assert!(debts::handle(&mut store, "JOD", &m).is_err());
    assert_eq!(store.debts().len(), 1);
}

#[test]
fn investment_add_defaults_current_price_to_buy_price() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let m = sub_matches(
        "invest",
        &[
            "add", "--symbol", " vti ", "--type", "fund", "--quantity", "3", "--buy-price",
            "220.10", "--date", "2024-08-15",
        ],
    );
    investments::handle(&mut store, "USD", &m).unwrap();

    let i = store.investments().last().unwrap();
    assert_eq!(i.symbol, "VTI");
    assert_eq!(i.r#type, InvestmentType::Fund);
    assert_eq!(i.current_price, dec!(220.10));
    assert_eq!(store.investments().len(), 3);
}

#[test]
fn investment_quantity_must_be_positive() {
    let m = sub_matches(
        "invest",
        &["add", "--symbol", "X", "--type", "local", "--quantity", "0", "--buy-price", "1"],
    );
    let (_, add_m) = m.subcommand().unwrap();
    assert!(investments::draft_from(add_m).is_err());
}
