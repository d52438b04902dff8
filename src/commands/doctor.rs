// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::models::{Asset, Debt, Investment, Record, Transaction};
use crate::store::RecordStore;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub fn handle<S: BlobStore>(store: &RecordStore<S>) -> Result<()> {
    let rows = diagnose(store);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn diagnose<S: BlobStore>(store: &RecordStore<S>) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Stored blobs that load() silently replaced with seed data
    check_stored::<Transaction, S>(store.backend(), &mut rows);
    check_stored::<Asset, S>(store.backend(), &mut rows);
    check_stored::<Debt, S>(store.backend(), &mut rows);
    check_stored::<Investment, S>(store.backend(), &mut rows);

    // 2) Duplicate ids
    duplicate_ids(store.transactions(), &mut rows);
    duplicate_ids(store.assets(), &mut rows);
    duplicate_ids(store.debts(), &mut rows);
    duplicate_ids(store.investments(), &mut rows);

    // 3) Values outside their expected ranges
    for t in store.transactions() {
        if t.amount <= Decimal::ZERO {
            rows.push(vec!["non_positive_amount".into(), format!("transaction {} ({})", t.id, t.amount)]);
        }
    }
    for a in store.assets() {
        if a.value < Decimal::ZERO {
            rows.push(vec!["negative_value".into(), format!("asset {} ({})", a.id, a.value)]);
        }
    }
    for d in store.debts() {
        if d.remaining_amount < Decimal::ZERO || d.total_amount < Decimal::ZERO {
            rows.push(vec!["negative_debt".into(), format!("debt {}", d.id)]);
        }
        if d.remaining_amount > d.total_amount {
            rows.push(vec![
                "remaining_exceeds_total".into(),
                format!("debt {} ({} > {})", d.id, d.remaining_amount, d.total_amount),
            ]);
        }
    }
    for i in store.investments() {
        if i.quantity <= Decimal::ZERO {
            rows.push(vec!["non_positive_quantity".into(), format!("investment {} ({})", i.id, i.quantity)]);
        }
        if i.buy_price < Decimal::ZERO || i.current_price < Decimal::ZERO {
            rows.push(vec!["negative_price".into(), format!("investment {}", i.id)]);
        }
    }
    rows
}

fn check_stored<T: Record, S: BlobStore>(backend: &S, rows: &mut Vec<Vec<String>>) {
    match backend.get(T::KEY) {
        Ok(Some(raw)) => {
            if let Err(e) = serde_json::from_str::<Vec<T>>(&raw) {
                rows.push(vec!["unreadable_collection".into(), format!("{}: {}", T::KEY, e)]);
            }
        }
        Ok(None) => {}
        Err(e) => rows.push(vec!["storage_error".into(), format!("{}: {}", T::KEY, e)]),
    }
}

fn duplicate_ids<T: Record>(records: &[T], rows: &mut Vec<Vec<String>>) {
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id()) {
            rows.push(vec!["duplicate_id".into(), format!("{} {}", T::KEY, r.id())]);
        }
    }
}
