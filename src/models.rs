// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted record kind. Each kind lives under its own storage key and is
/// created from a draft that carries everything except the id.
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Draft;

    /// Storage key of the collection holding this record kind.
    const KEY: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    RealEstate,
    Vehicle,
    Gold,
    Cash,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Stock,
    Crypto,
    Fund,
    Local,
}

macro_rules! spelled_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $s),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($s => Ok($ty::$variant),)+
                    other => Err(anyhow!(
                        "Unknown {} '{}' (expected one of: {})",
                        $what,
                        other,
                        [$($s),+].join(", ")
                    )),
                }
            }
        }
    };
}

spelled_enum!(TransactionType, "transaction type", {
    Income => "income",
    Expense => "expense",
});

spelled_enum!(AssetType, "asset type", {
    RealEstate => "real_estate",
    Vehicle => "vehicle",
    Gold => "gold",
    Cash => "cash",
    Other => "other",
});

spelled_enum!(InvestmentType, "investment type", {
    Stock => "stock",
    Crypto => "crypto",
    Fund => "fund",
    Local => "local",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl Transaction {
    /// Amount with the sign implied by the transaction type.
    pub fn signed_amount(&self) -> Decimal {
        match self.r#type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub receipt_url: Option<String>,
}

impl Record for Transaction {
    type Draft = NewTransaction;
    const KEY: &'static str = "transactions";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewTransaction) -> Self {
        Self {
            id,
            amount: d.amount,
            r#type: d.r#type,
            category: d.category,
            date: d.date,
            note: d.note,
            receipt_url: d.receipt_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub r#type: AssetType,
    pub value: Decimal,
    #[serde(
        default,
        with = "flexible_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_acquired: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub r#type: AssetType,
    pub value: Decimal,
    pub date_acquired: Option<NaiveDate>,
}

impl Record for Asset {
    type Draft = NewAsset;
    const KEY: &'static str = "assets";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewAsset) -> Self {
        Self {
            id,
            name: d.name,
            r#type: d.r#type,
            value: d.value,
            date_acquired: d.date_acquired,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Debt {
    pub id: String,
    pub creditor: String,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    #[serde(with = "flexible_date")]
    pub due_date: NaiveDate,
    /// `true` when the user owes the money, `false` when it is owed to the user.
    pub is_payable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDebt {
    pub creditor: String,
    pub total_amount: Decimal,
    pub remaining_amount: Decimal,
    pub due_date: NaiveDate,
    pub is_payable: bool,
}

impl Record for Debt {
    type Draft = NewDebt;
    const KEY: &'static str = "debts";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewDebt) -> Self {
        Self {
            id,
            creditor: d.creditor,
            total_amount: d.total_amount,
            remaining_amount: d.remaining_amount,
            due_date: d.due_date,
            is_payable: d.is_payable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Investment {
    pub id: String,
    pub symbol: String,
    pub r#type: InvestmentType,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal, // supplied by the user, never fetched
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestment {
    pub symbol: String,
    pub r#type: InvestmentType,
    pub quantity: Decimal,
    pub buy_price: Decimal,
    pub current_price: Decimal,
    pub date: NaiveDate,
}

impl Record for Investment {
    type Draft = NewInvestment;
    const KEY: &'static str = "investments";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewInvestment) -> Self {
        Self {
            id,
            symbol: d.symbol,
            r#type: d.r#type,
            quantity: d.quantity,
            buy_price: d.buy_price,
            current_price: d.current_price,
            date: d.date,
        }
    }
}

/// Dates are written as `YYYY-MM-DD`. On read, full RFC 3339 timestamps are
/// accepted too and truncated to their calendar date.
pub mod flexible_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => super::serialize(d, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
                None => Ok(None),
            }
        }
    }
}
