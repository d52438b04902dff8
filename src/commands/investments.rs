// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::models::{InvestmentType, NewInvestment};
use crate::store::RecordStore;
use crate::summary::InvestmentPerformance;
use crate::utils::{
    fmt_money, maybe_print_json, optional_arg, parse_date, parse_non_negative, parse_positive,
    pretty_table, required_arg,
};
use anyhow::Result;

pub fn handle<S: BlobStore>(
    store: &mut RecordStore<S>,
    currency: &str,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let i = store.add_investment(draft_from(sub)?)?;
            println!(
                "Recorded {} {} x {} @ {} [id {}]",
                i.r#type,
                i.quantity,
                i.symbol,
                fmt_money(&i.buy_price, currency),
                i.id
            );
        }
        Some(("list", sub)) => list(store, currency, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<NewInvestment> {
    let symbol = required_arg(sub, "symbol")?.to_uppercase();
    let r#type: InvestmentType = required_arg(sub, "type")?.parse()?;
    let quantity = parse_positive(required_arg(sub, "quantity")?, "quantity")?;
    let buy_price = parse_non_negative(required_arg(sub, "buy-price")?, "buy price")?;
    let current_price = match optional_arg(sub, "current-price") {
        Some(p) => parse_non_negative(p, "current price")?,
        None => buy_price,
    };
    let date = match optional_arg(sub, "date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(NewInvestment {
        symbol,
        r#type,
        quantity,
        buy_price,
        current_price,
        date,
    })
}

fn list<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let perf: Vec<InvestmentPerformance> = store
        .investments()
        .iter()
        .map(InvestmentPerformance::of)
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &perf)? {
        return Ok(());
    }
    let rows = store
        .investments()
        .iter()
        .zip(&perf)
        .map(|(inv, p)| {
            vec![
                inv.symbol.clone(),
                inv.r#type.to_string(),
                format!("{}", inv.quantity.normalize()),
                fmt_money(&inv.buy_price, currency),
                fmt_money(&inv.current_price, currency),
                fmt_money(&p.current_value, currency),
                fmt_money(&p.gain, currency),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Symbol", "Type", "Qty", "Buy", "Current", "Value", "Gain"],
            rows
        )
    );
    Ok(())
}
