//! stl-quote quote command - price one or more meshes.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::RateTable;
use quote_engine::{quote_batch, PriceQuote, QuoteRequest};
use serde::Serialize;

use super::{money, print_json};
use crate::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteReport {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    quote: Option<PriceQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    print_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Reads and quotes every input, keeping input order.
pub(crate) fn collect(inputs: &[PathBuf], material: &str, rates: &RateTable) -> Result<Vec<QuoteReport>> {
    let contents = inputs
        .iter()
        .map(|path| {
            std::fs::read(path).with_context(|| format!("Failed to read mesh from {:?}", path))
        })
        .collect::<Result<Vec<_>>>()?;

    let requests: Vec<_> = contents
        .iter()
        .map(|bytes| QuoteRequest {
            raw_bytes: bytes,
            material,
        })
        .collect();

    Ok(inputs
        .iter()
        .zip(quote_batch(rates, &requests))
        .map(|(path, result)| report(path, result))
        .collect())
}

fn report(path: &Path, result: quote_engine::QuoteResult<PriceQuote>) -> QuoteReport {
    let path = path.display().to_string();
    match result {
        Ok(quote) => QuoteReport {
            path,
            print_time: Some(quote.print_estimate().to_string()),
            quote: Some(quote),
            error: None,
        },
        Err(err) => QuoteReport {
            path,
            quote: None,
            print_time: None,
            error: Some(err.to_string()),
        },
    }
}

pub fn run(inputs: &[PathBuf], material: &str, rates: &RateTable, format: OutputFormat) -> Result<()> {
    let reports = collect(inputs, material, rates)?;

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Text => {
            for report in &reports {
                match (&report.quote, &report.error) {
                    (Some(quote), _) => {
                        println!(
                            "{}: {:.2} cm³, {} → {} (est. {})",
                            report.path,
                            quote.volume_cm3(),
                            quote.material(),
                            money(quote.total_price()),
                            report.print_time.as_deref().unwrap_or_default(),
                        );
                        if let Some(fallback) = quote.material_fallback() {
                            println!("  warning: {fallback}");
                        }
                    }
                    (None, Some(error)) => println!("{}: error: {error}", report.path),
                    (None, None) => {}
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        bail!("{failed} of {} meshes could not be quoted", reports.len());
    }
    Ok(())
}
