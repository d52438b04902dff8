// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::error::StoreError;
use crate::models::{
    Asset, Debt, Investment, NewAsset, NewDebt, NewInvestment, NewTransaction, Record,
    Transaction,
};
use crate::seed;
use uuid::Uuid;

/// Borrowed view of all four collections, handed to the summary functions.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub transactions: &'a [Transaction],
    pub assets: &'a [Asset],
    pub debts: &'a [Debt],
    pub investments: &'a [Investment],
}

/// Owns the four record collections and writes each one back to its
/// storage key after every append.
pub struct RecordStore<S: BlobStore> {
    backend: S,
    transactions: Vec<Transaction>,
    assets: Vec<Asset>,
    debts: Vec<Debt>,
    investments: Vec<Investment>,
}

impl<S: BlobStore> RecordStore<S> {
    /// Loads every collection from `backend`. A collection that is missing,
    /// unreadable, or malformed starts from its seed data instead.
    pub fn load(backend: S) -> Self {
        let transactions = load_collection(&backend, seed::transactions);
        let assets = load_collection(&backend, seed::assets);
        let debts = load_collection(&backend, seed::debts);
        let investments = load_collection(&backend, seed::investments);
        Self {
            backend,
            transactions,
            assets,
            debts,
            investments,
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transactions: &self.transactions,
            assets: &self.assets,
            debts: &self.debts,
            investments: &self.investments,
        }
    }

    pub fn add_transaction(&mut self, draft: NewTransaction) -> Result<Transaction, StoreError> {
        append(&self.backend, &mut self.transactions, draft)
    }

    pub fn add_asset(&mut self, draft: NewAsset) -> Result<Asset, StoreError> {
        append(&self.backend, &mut self.assets, draft)
    }

    pub fn add_debt(&mut self, draft: NewDebt) -> Result<Debt, StoreError> {
        append(&self.backend, &mut self.debts, draft)
    }

    pub fn add_investment(&mut self, draft: NewInvestment) -> Result<Investment, StoreError> {
        append(&self.backend, &mut self.investments, draft)
    }
}

fn load_collection<T: Record, S: BlobStore>(backend: &S, seed: fn() -> Vec<T>) -> Vec<T> {
    match backend.get(T::KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(list) => {
                tracing::debug!(key = T::KEY, records = list.len(), "loaded collection");
                list
            }
            Err(e) => {
                tracing::warn!(key = T::KEY, error = %e, "stored collection is malformed; using seed data");
                seed()
            }
        },
        Ok(None) => {
            tracing::debug!(key = T::KEY, "no stored collection; using seed data");
            seed()
        }
        Err(e) => {
            tracing::warn!(key = T::KEY, error = %e, "failed to read collection; using seed data");
            seed()
        }
    }
}

/// Appends a record built from `draft` and persists the whole collection.
/// The in-memory list only changes once the write succeeded.
fn append<T: Record, S: BlobStore>(
    backend: &S,
    list: &mut Vec<T>,
    draft: T::Draft,
) -> Result<T, StoreError> {
    let record = T::from_draft(fresh_id(list), draft);
    list.push(record.clone());
    if let Err(e) = persist(backend, list) {
        list.pop();
        tracing::warn!(key = T::KEY, error = %e, "failed to persist collection");
        return Err(e);
    }
    tracing::info!(key = T::KEY, id = record.id(), "record added");
    Ok(record)
}

fn persist<T: Record, S: BlobStore>(backend: &S, list: &[T]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(list)
        .map_err(|source| StoreError::Serialize { key: T::KEY, source })?;
    backend.put(T::KEY, &raw)?;
    tracing::debug!(key = T::KEY, records = list.len(), bytes = raw.len(), "persisted collection");
    Ok(())
}

fn fresh_id<T: Record>(existing: &[T]) -> String {
    loop {
        let id = Uuid::new_v4().simple().to_string();
        if !existing.iter().any(|r| r.id() == id) {
            return id;
        }
    }
}
