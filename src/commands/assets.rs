// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::BlobStore;
use crate::models::{AssetType, NewAsset};
use crate::store::RecordStore;
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
        Some(("add", sub)) => {
            let a = store.add_asset(draft_from(sub)?)?;
            println!(
                "Added asset '{}' ({}, {}) [id {}]",
                a.name,
                a.r#type,
                fmt_money(&a.value, currency),
                a.id
            );
        }
        Some(("list", sub)) => {
            let data = store.assets();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .iter()
                    .map(|a| {
                        vec![
                            a.name.clone(),
                            a.r#type.to_string(),
                            fmt_money(&a.value, currency),
                            a.date_acquired.map(|d| d.to_string()).unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Name", "Type", "Value", "Acquired"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<NewAsset> {
    let name = required_arg(sub, "name")?.to_string();
    let r#type: AssetType = required_arg(sub, "type")?.parse()?;
    let value = parse_non_negative(required_arg(sub, "value")?, "value")?;
    let date_acquired = optional_arg(sub, "acquired").map(parse_date).transpose()?;
    Ok(NewAsset {
        name,
        r#type,
        value,
        date_acquired,
    })
}
