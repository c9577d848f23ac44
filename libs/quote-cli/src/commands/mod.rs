//! Subcommand implementations.

pub mod parse_name;
pub mod quote;
pub mod submit;

use anyhow::Result;
use serde::Serialize;

/// Writes `value` as pretty JSON to stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Formats a major-unit amount with two decimals.
pub(crate) fn money(amount: f64) -> String {
    format!(
        "${:.*}",
        config::constants::PRICE_DECIMALS.unsigned_abs() as usize,
        amount
    )
}
