//! stl-quote parse-name command - recover volume and material for fulfillment.

use anyhow::Result;
use quote_engine::boundary::parse_display_name;
use serde::Serialize;

use super::print_json;
use crate::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedName<'a> {
    display_name: &'a str,
    volume_cm3: Option<f64>,
    material: &'static str,
}

pub fn run(display_name: &str, format: OutputFormat) -> Result<()> {
    let parts = parse_display_name(display_name);
    let parsed = ParsedName {
        display_name,
        volume_cm3: parts.volume_cm3,
        material: parts.material.key(),
    };

    match format {
        OutputFormat::Json => print_json(&parsed)?,
        OutputFormat::Text => {
            let volume = parsed
                .volume_cm3
                .map_or_else(|| "N/A".to_string(), |v| format!("{v:.1} cm³"));
            println!("volume: {volume}");
            println!("material: {}", parsed.material);
        }
    }
    Ok(())
}
