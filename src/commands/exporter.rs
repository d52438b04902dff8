// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::store::RecordStore;
use crate::utils::required_arg;
use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

pub fn handle<S: BlobStore>(store: &RecordStore<S>, m: &clap::ArgMatches) -> Result<()> {
    let collection = required_arg(m, "collection")?;
    let fmt = required_arg(m, "format")?.to_lowercase();
    let out = Path::new(required_arg(m, "out")?);

    let written = match collection {
        "transactions" => write_records(store.transactions(), &fmt, out)?,
        "assets" => write_records(store.assets(), &fmt, out)?,
        "debts" => write_records(store.debts(), &fmt, out)?,
        "investments" => write_records(store.investments(), &fmt, out)?,
        other => bail!("Unknown collection: {}", other),
    };
    println!("Exported {} {} to {}", written, collection, out.display());
    Ok(())
}

/// Optional fields are skipped when empty, so columns are the union of keys
/// in first-seen order and missing cells are left blank.
fn csv_rows<T: Serialize>(records: &[T]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut header: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());
    for r in records {
        let Value::Object(obj) = serde_json::to_value(r)? else {
            bail!("Only records can be exported as CSV");
        };
        for k in obj.keys() {
            if !header.contains(k) {
                header.push(k.clone());
            }
        }
        objects.push(obj);
    }
    let rows: Vec<Vec<String>> = objects
        .iter()
        .map(|obj| {
            header
                .iter()
                .map(|k| match obj.get(k) {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => s.clone(),
                    Some(v) => v.to_string(),
                })
                .collect()
        })
        .collect();
    Ok((header, rows))
}

fn write_records<T: Serialize>(records: &[T], fmt: &str, out: &Path) -> Result<usize> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            let (header, rows) = csv_rows(records)?;
            if !header.is_empty() {
                wtr.write_record(&header)?;
            }
            for row in rows {
                wtr.write_record(&row)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(records)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    tracing::debug!(path = %out.display(), records = records.len(), "export written");
    Ok(records.len())
}
