// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::store::RecordStore;
use crate::summary::recent_transactions;
use crate::utils::{
    fmt_money, maybe_print_json, optional_arg, parse_date, parse_non_negative, pretty_table,
    required_arg,
};
use anyhow::Result;

pub fn handle<S: BlobStore>(
    store: &mut RecordStore<S>,
    currency: &str,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, currency, sub)?,
        Some(("list", sub)) => list(store, currency, sub)?,
        Some(("recent", sub)) => recent(store, currency, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds a draft from CLI input, rejecting what the store would accept blindly.
pub fn draft_from(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = parse_non_negative(required_arg(sub, "amount")?, "amount")?;
    let r#type: TransactionType = required_arg(sub, "type")?.parse()?;
    let category = required_arg(sub, "category")?.to_string();
    let date = match optional_arg(sub, "date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(NewTransaction {
        amount,
        r#type,
        category,
        date,
        note: optional_arg(sub, "note").map(str::to_string),
        receipt_url: optional_arg(sub, "receipt").map(str::to_string),
    })
}

fn add<S: BlobStore>(
    store: &mut RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let t = store.add_transaction(draft_from(sub)?)?;
    println!(
        "Recorded {} {} ({}) on {} [id {}]",
        t.r#type,
        fmt_money(&t.amount, currency),
        t.category,
        t.date,
        t.id
    );
    Ok(())
}

pub fn query_rows<'a>(
    transactions: &'a [Transaction],
    sub: &clap::ArgMatches,
) -> Result<Vec<&'a Transaction>> {
    let kind = optional_arg(sub, "type")
        .map(str::parse::<TransactionType>)
        .transpose()?;
    let category = optional_arg(sub, "category");
    let mut rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        let skip = rows.len().saturating_sub(*limit);
        rows.drain(..skip);
    }
    Ok(rows)
}

fn list<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let data = query_rows(store.transactions(), sub)?;
    print_rows(&data, currency, sub)
}

fn recent<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(5);
    let data = recent_transactions(store.transactions(), limit);
    print_rows(&data, currency, sub)
}

fn print_rows(data: &[&Transaction], currency: &str, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                t.r#type.to_string(),
                t.category.clone(),
                fmt_money(&t.signed_amount(), currency),
                t.note.clone().unwrap_or_default(),
                t.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Amount", "Note", "Id"], rows)
    );
    Ok(())
}
