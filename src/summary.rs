// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures. Everything here is a pure function of the collections
//! passed in; nothing is cached.

use crate::models::{Asset, Debt, Investment, Transaction, TransactionType};
use crate::store::Snapshot;
use rust_decimal::Decimal;
use serde::Serialize;

/// Sums clamp at `Decimal::MAX`/`MIN` instead of overflowing.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn sum_by_type(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    saturating_sum(
        transactions
            .iter()
            .filter(|t| t.r#type == kind)
            .map(|t| t.amount),
    )
}

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    sum_by_type(transactions, TransactionType::Income)
}

pub fn total_expense(transactions: &[Transaction]) -> Decimal {
    sum_by_type(transactions, TransactionType::Expense)
}

pub fn total_assets_value(assets: &[Asset]) -> Decimal {
    saturating_sum(assets.iter().map(|a| a.value))
}

pub fn total_debts_value(debts: &[Debt]) -> Decimal {
    saturating_sum(debts.iter().map(|d| d.remaining_amount))
}

pub fn total_investments_value(investments: &[Investment]) -> Decimal {
    saturating_sum(investments.iter().map(current_value))
}

/// Assets plus investments minus the remaining amount of every debt,
/// including debts owed to the user.
pub fn net_worth(assets: &[Asset], investments: &[Investment], debts: &[Debt]) -> Decimal {
    total_assets_value(assets)
        .saturating_add(total_investments_value(investments))
        .saturating_sub(total_debts_value(debts))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Expense totals per category, in the order categories first appear.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        match out.iter_mut().find(|c| c.category == t.category) {
            Some(c) => c.amount = c.amount.saturating_add(t.amount),
            None => out.push(CategoryTotal {
                category: t.category.clone(),
                amount: t.amount,
            }),
        }
    }
    out
}

/// Last `limit` transactions, newest first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(limit).collect()
}

pub fn current_value(inv: &Investment) -> Decimal {
    inv.current_price.saturating_mul(inv.quantity)
}

pub fn cost_basis(inv: &Investment) -> Decimal {
    inv.buy_price.saturating_mul(inv.quantity)
}

pub fn gain(inv: &Investment) -> Decimal {
    inv.current_price
        .saturating_sub(inv.buy_price)
        .saturating_mul(inv.quantity)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentPerformance {
    pub id: String,
    pub symbol: String,
    pub current_value: Decimal,
    pub cost_basis: Decimal,
    pub gain: Decimal,
}

impl InvestmentPerformance {
    pub fn of(inv: &Investment) -> Self {
        Self {
            id: inv.id.clone(),
            symbol: inv.symbol.clone(),
            current_value: current_value(inv),
            cost_basis: cost_basis(inv),
            gain: gain(inv),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub portfolio_value: Decimal,
    pub total_cost: Decimal,
    pub roi_percent: Decimal,
}

impl PortfolioSummary {
    pub fn of(investments: &[Investment]) -> Self {
        let portfolio_value = total_investments_value(investments);
        let total_cost = saturating_sum(investments.iter().map(cost_basis));
        Self {
            portfolio_value,
            total_cost,
            roi_percent: roi_percent(portfolio_value, total_cost),
        }
    }
}

/// Gain relative to cost in percent; zero unless the cost is positive.
/// Ratios too large for a `Decimal` clamp to its bounds.
pub fn roi_percent(value: Decimal, cost: Decimal) -> Decimal {
    if cost <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let gain = value.saturating_sub(cost);
    gain
        .checked_div(cost)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if gain.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_worth: Decimal,
    pub total_assets: Decimal,
    pub total_debts: Decimal,
    pub total_investments: Decimal,
}

impl FinancialSummary {
    pub fn from_snapshot(s: Snapshot<'_>) -> Self {
        let total_assets = total_assets_value(s.assets);
        let total_debts = total_debts_value(s.debts);
        let total_investments = total_investments_value(s.investments);
        Self {
            total_income: total_income(s.transactions),
            total_expense: total_expense(s.transactions),
            net_worth: total_assets
                .saturating_add(total_investments)
                .saturating_sub(total_debts),
            total_assets,
            total_debts,
            total_investments,
        }
    }
}
