//! stl-quote submit command - store an upload and build its line item.

use std::path::Path;

use anyhow::{Context, Result};
use config::RateTable;
use quote_engine::{ArtifactStore, FinalizedUpload, QuoteBoundary, Upload};

use super::{money, print_json};
use crate::OutputFormat;

/// Command-line inputs for one submission.
pub struct SubmitRequest<'a> {
    pub input: &'a Path,
    pub material: &'a str,
    pub quantity: Option<i64>,
    pub preview_total: Option<f64>,
}

/// Runs the submission against `store`.
pub(crate) async fn finalize<S>(
    request: &SubmitRequest<'_>,
    store: &S,
    rates: RateTable,
) -> Result<FinalizedUpload>
where
    S: ArtifactStore + ?Sized,
{
    let bytes = tokio::fs::read(request.input)
        .await
        .with_context(|| format!("Failed to read mesh from {:?}", request.input))?;
    let file_name = request
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let boundary = QuoteBoundary::new(rates);
    let upload = Upload {
        raw_bytes: &bytes,
        file_name: &file_name,
        material: request.material,
        quantity: request.quantity,
        preview_total: request.preview_total,
    };
    boundary
        .finalize_upload(store, upload)
        .await
        .with_context(|| format!("Failed to submit {:?}", request.input))
}

pub async fn run<S>(
    request: SubmitRequest<'_>,
    store: &S,
    rates: RateTable,
    format: OutputFormat,
) -> Result<()>
where
    S: ArtifactStore + ?Sized,
{
    let finalized = finalize(&request, store, rates).await?;

    match format {
        OutputFormat::Json => print_json(&finalized)?,
        OutputFormat::Text => {
            let item = &finalized.line_item;
            println!("{}", item.display_name());
            println!("  identifier: {}", item.identifier());
            println!("  stored at:  {}", finalized.artifact.url);
            println!(
                "  unit price: {} x {}",
                money(finalized.quote.total_price()),
                item.quantity().get()
            );
            if let Some(fallback) = finalized.quote.material_fallback() {
                println!("  warning: {fallback}");
            }
            if let Some(drift) = finalized.price_drift {
                println!(
                    "  warning: client showed {}, charged {}",
                    money(drift.client_total),
                    money(drift.authoritative_total)
                );
            }
        }
    }
    Ok(())
}
