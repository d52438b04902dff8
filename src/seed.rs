// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Starter data used when a collection has nothing (readable) in storage.

use crate::models::{
    Asset, AssetType, Debt, Investment, InvestmentType, Transaction, TransactionType,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id: &str, r#type, amount, category: &str, date| Transaction {
        id: id.to_string(),
        amount,
        r#type,
        category: category.to_string(),
        date,
        note: None,
        receipt_url: None,
    };
    vec![
        tx("1", TransactionType::Income, dec!(15000), "راتب شهري", ymd(2023, 10, 25)),
        tx("2", TransactionType::Expense, dec!(350), "بقالة", ymd(2023, 10, 26)),
        tx("3", TransactionType::Expense, dec!(120), "وقود", ymd(2023, 10, 27)),
        tx("4", TransactionType::Income, dec!(2000), "عمل حر", ymd(2023, 10, 28)),
    ]
}

pub fn assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "1".into(),
            name: "المنزل".into(),
            r#type: AssetType::RealEstate,
            value: dec!(1200000),
            date_acquired: None,
        },
        Asset {
            id: "2".into(),
            name: "تويوتا كامري".into(),
            r#type: AssetType::Vehicle,
            value: dec!(85000),
            date_acquired: None,
        },
    ]
}

pub fn debts() -> Vec<Debt> {
    vec![Debt {
        id: "1".into(),
        creditor: "البنك العقاري".into(),
        total_amount: dec!(500000),
        remaining_amount: dec!(420000),
        due_date: ymd(2030, 1, 1),
        is_payable: true,
    }]
}

pub fn investments() -> Vec<Investment> {
    vec![
        Investment {
            id: "1".into(),
            symbol: "AAPL".into(),
            r#type: InvestmentType::Stock,
            quantity: dec!(10),
            buy_price: dec!(150),
            current_price: dec!(175),
            date: ymd(2023, 1, 15),
        },
        Investment {
            id: "2".into(),
            symbol: "BTC".into(),
            r#type: InvestmentType::Crypto,
            quantity: dec!(0.05),
            buy_price: dec!(25000),
            current_price: dec!(35000),
            date: ymd(2023, 5, 20),
        },
    ]
}
