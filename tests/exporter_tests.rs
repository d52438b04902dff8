// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use tempfile::tempdir;
use wealthbook::store::RecordStore;
use wealthbook::{cli, commands::exporter, db};

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["wealthbook", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("export", m)) => m.clone(),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn export_debts_writes_stored_json_shape() {
    let store = RecordStore::load(db::open_in_memory().unwrap());
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("debts.json");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["debts", "--format", "json", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "1",
                "creditor": "البنك العقاري",
                "totalAmount": 500000,
                "remainingAmount": 420000,
                "dueDate": "2030-01-01",
                "isPayable": true
            }
        ])
    );
}

#[test]
fn export_transactions_csv_has_union_header() {
    let mut store = RecordStore::load(db::open_in_memory().unwrap());
    let m = cli::build_cli().get_matches_from([
        "wealthbook", "tx", "add", "--amount", "9", "--type", "expense", "--category",
        "Parking", "--date", "2024-01-05", "--note", "airport",
    ]);
    let (_, tx_m) = m.subcommand().unwrap();
    wealthbook::commands::transactions::handle(&mut store, "JOD", tx_m).unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("tx.csv");
    let out_str = out_path.to_string_lossy().to_string();
    let m = export_matches(&["transactions", "--format", "CSV", "--out", &out_str]);
    exporter::handle(&store, &m).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert!(headers.iter().any(|h| h == "note"));
    assert!(headers.iter().any(|h| h == "category"));
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 5);

    let note_idx = headers.iter().position(|h| h == "note").unwrap();
    assert_eq!(&records[0][note_idx], "");
    assert_eq!(&records[4][note_idx], "airport");
}

#[test]
fn export_rejects_unknown_format() {
    let store = RecordStore::load(db::open_in_memory().unwrap());
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let m = export_matches(&["assets", "--format", "xml", "--out", &out_str]);
    assert!(exporter::handle(&store, &m).is_err());
    assert!(!out_path.exists());
}
