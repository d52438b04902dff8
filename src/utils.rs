// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::ArgMatches;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn required_arg<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .with_context(|| format!("Missing required argument --{}", name))
}

pub fn optional_arg<'a>(m: &'a ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parses a decimal that must not be negative; `what` names the field in errors.
pub fn parse_non_negative(s: &str, what: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(anyhow!("{} must not be negative (got {})", what, d));
    }
    Ok(d)
}

pub fn parse_positive(s: &str, what: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        return Err(anyhow!("{} must be greater than zero (got {})", what, d));
    }
    Ok(d)
}

/// `JOD 1285000`, at most three fractional digits, trailing zeros dropped.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(3).normalize())
}

pub fn fmt_percent(d: &Decimal) -> String {
    let rounded = d.round_dp(2);
    if rounded.is_zero() {
        return "0.00%".to_string();
    }
    let sign = if rounded.is_sign_negative() { "" } else { "+" };
    format!("{}{:.2}%", sign, rounded)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_keeps_at_most_three_decimals() {
        assert_eq!(fmt_money(&dec!(1285000.00), "JOD"), "JOD 1285000");
        assert_eq!(fmt_money(&dec!(12.34567), "JOD"), "JOD 12.346");
        assert_eq!(fmt_money(&dec!(-0.5), "USD"), "USD -0.5");
    }

    #[test]
    fn percent_shows_gain_sign() {
        assert_eq!(fmt_percent(&dec!(16.6666)), "+16.67%");
        assert_eq!(fmt_percent(&dec!(-4)), "-4.00%");
        assert_eq!(fmt_percent(&Decimal::ZERO), "0.00%");
    }

    #[test]
    fn percent_rounding_to_zero_has_no_sign() {
        assert_eq!(fmt_percent(&dec!(-0.004)), "0.00%");
        assert_eq!(fmt_percent(&dec!(0.001)), "0.00%");
        assert_eq!(fmt_percent(&dec!(-0.006)), "-0.01%");
    }

    #[test]
    fn range_parsers_reject_out_of_range_input() {
        assert!(parse_non_negative(" 0 ", "amount").is_ok());
        assert!(parse_non_negative("-1", "amount").is_err());
        assert!(parse_positive("0", "quantity").is_err());
        assert_eq!(parse_positive("0.05", "quantity").unwrap(), dec!(0.05));
        assert!(parse_date("2024-13-01").is_err());
    }
}
