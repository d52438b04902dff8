// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use wealthbook::{cli, commands, config::Config, db, logging, store::RecordStore};

/// `--db` is global, so it may sit on whichever subcommand level the user typed it.
fn db_override(m: &clap::ArgMatches) -> Option<PathBuf> {
    match m.get_one::<String>("db") {
        Some(p) => Some(PathBuf::from(p)),
        None => m.subcommand().and_then(|(_, sub)| db_override(sub)),
    }
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::from_env(db_override(&matches))?;
    logging::init_tracing(config.log_format);

    let conn = db::open_at(&config.db_path)?;
    let mut store = RecordStore::load(conn);
    let ccy = config.currency.as_str();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.db_path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, ccy, sub)?,
        Some(("asset", sub)) => commands::assets::handle(&mut store, ccy, sub)?,
        Some(("debt", sub)) => commands::debts::handle(&mut store, ccy, sub)?,
        Some(("invest", sub)) => commands::investments::handle(&mut store, ccy, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&store, ccy, sub)?,
        Some(("expenses", sub)) => commands::reports::expenses(&store, ccy, sub)?,
        Some(("portfolio", sub)) => commands::reports::portfolio(&store, ccy, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
