// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub const DEFAULT_CURRENCY: &str = "JOD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub currency: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env(db_override: Option<PathBuf>) -> Result<Self> {
        Self::from_lookup(db_override, |k| std::env::var(k).ok())
    }

    /// Resolves settings through `lookup` (normally the process environment).
    /// `db_override` wins over `WEALTHBOOK_DB_PATH`; the platform data
    /// directory is only consulted when neither is set.
    pub fn from_lookup<F>(db_override: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let db_path = match db_override {
            Some(p) => p,
            None => match non_empty("WEALTHBOOK_DB_PATH") {
                Some(p) => PathBuf::from(p),
                None => crate::db::db_path()?,
            },
        };
        let currency = non_empty("WEALTHBOOK_CURRENCY")
            .map(|c| c.to_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let log_format = match non_empty("WEALTHBOOK_LOG_FORMAT").as_deref() {
            None => LogFormat::Text,
            Some(f) if f.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => {
                return Err(anyhow!(
                    "Invalid WEALTHBOOK_LOG_FORMAT '{}' (use text|json)",
                    other
                ));
            }
        };
        Ok(Self {
            db_path,
            currency,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(None, lookup(&[
            ("WEALTHBOOK_DB_PATH", "/tmp/wb/test.sqlite"),
            ("WEALTHBOOK_CURRENCY", " usd "),
            ("WEALTHBOOK_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/wb/test.sqlite"));
        assert_eq!(cfg.currency, "USD");
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_currency_uses_default() {
        let cfg = Config::from_lookup(None, lookup(&[
            ("WEALTHBOOK_DB_PATH", "x.sqlite"),
            ("WEALTHBOOK_CURRENCY", "  "),
        ]))
        .unwrap();
        assert_eq!(cfg.currency, DEFAULT_CURRENCY);
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn db_override_beats_environment() {
        let cfg = Config::from_lookup(
            Some(PathBuf::from("/tmp/wb/flag.sqlite")),
            lookup(&[("WEALTHBOOK_DB_PATH", "/tmp/wb/env.sqlite")]),
        )
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/wb/flag.sqlite"));

        let cfg = Config::from_lookup(Some(PathBuf::from("only-flag.sqlite")), lookup(&[])).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("only-flag.sqlite"));
        assert_eq!(cfg.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let res = Config::from_lookup(None, lookup(&[
            ("WEALTHBOOK_DB_PATH", "x.sqlite"),
            ("WEALTHBOOK_LOG_FORMAT", "xml"),
        ]));
        assert!(res.is_err());
    }
}
