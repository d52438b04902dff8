// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::store::RecordStore;
use crate::summary::{FinancialSummary, PortfolioSummary, expense_by_category};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct Overview {
    #[serde(flatten)]
    pub totals: FinancialSummary,
    pub portfolio: PortfolioSummary,
}

pub fn overview<S: BlobStore>(store: &RecordStore<S>) -> Overview {
    Overview {
        totals: FinancialSummary::from_snapshot(store.snapshot()),
        portfolio: PortfolioSummary::of(store.investments()),
    }
}

pub fn summary<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let o = overview(store);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &o)? {
        return Ok(());
    }
    let t = &o.totals;
    let rows = vec![
        vec!["Net worth".into(), fmt_money(&t.net_worth, currency)],
        vec![
            "Assets + investments".into(),
            fmt_money(&(t.total_assets + t.total_investments), currency),
        ],
        vec!["Assets".into(), fmt_money(&t.total_assets, currency)],
        vec!["Investments".into(), fmt_money(&t.total_investments, currency)],
        vec!["Debts".into(), fmt_money(&t.total_debts, currency)],
        vec!["Income".into(), fmt_money(&t.total_income, currency)],
        vec!["Expense".into(), fmt_money(&t.total_expense, currency)],
        vec!["Portfolio ROI".into(), fmt_percent(&o.portfolio.roi_percent)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}

pub fn expenses<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let data = expense_by_category(store.transactions());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses recorded");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.amount, currency)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    Ok(())
}

pub fn portfolio<S: BlobStore>(
    store: &RecordStore<S>,
    currency: &str,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let p = PortfolioSummary::of(store.investments());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
        return Ok(());
    }
    let rows = vec![vec![
        fmt_money(&p.portfolio_value, currency),
        fmt_money(&p.total_cost, currency),
        fmt_money(&p.portfolio_value.saturating_sub(p.total_cost), currency),
        fmt_percent(&p.roi_percent),
    ]];
    println!(
        "{}",
        pretty_table(&["Value", "Cost", "Gain", "ROI"], rows)
    );
    Ok(())
}
