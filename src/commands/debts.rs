// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::models::NewDebt;
use crate::store::RecordStore;
use crate::utils::{
    fmt_money, maybe_print_json, optional_arg, parse_date, parse_non_negative, pretty_table,
    required_arg,
};
use anyhow::{Result, anyhow};

pub fn handle<S: BlobStore>(
    store: &mut RecordStore<S>,
    currency: &str,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let d = store.add_debt(draft_from(sub)?)?;
            let direction = if d.is_payable { "owed to" } else { "owed by" };
            println!(
                "Recorded {} {} {}, due {} [id {}]",
                fmt_money(&d.remaining_amount, currency),
                direction,
                d.creditor,
                d.due_date,
                d.id
            );
        }
        Some(("list", sub)) => {
            let data = store.debts();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .iter()
                    .map(|d| {
                        vec![
                            d.creditor.clone(),
                            if d.is_payable { "payable" } else { "receivable" }.to_string(),
                            fmt_money(&d.total_amount, currency),
                            fmt_money(&d.remaining_amount, currency),
                            d.due_date.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Creditor", "Kind", "Total", "Remaining", "Due"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<NewDebt> {
    let creditor = required_arg(sub, "creditor")?.to_string();
    let total_amount = parse_non_negative(required_arg(sub, "total")?, "total")?;
    let remaining_amount = match optional_arg(sub, "remaining") {
        Some(r) => parse_non_negative(r, "remaining")?,
        None => total_amount,
    };
    if remaining_amount > total_amount {
        return Err(anyhow!(
            "remaining ({}) cannot exceed total ({})",
            remaining_amount,
            total_amount
        ));
    }
    let due_date = parse_date(required_arg(sub, "due")?)?;
    Ok(NewDebt {
        creditor,
        total_amount,
        remaining_amount,
        due_date,
        is_payable: !sub.get_flag("receivable"),
    })
}
