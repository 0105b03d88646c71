//! Enrichment orchestrator: CSV in, CSV out, one remote session per batch.

use anyhow::{Context, Result};
use linkscout_browser::api::BrowserApiClient;
use linkscout_common::observability::{init_logging, LogConfig};
use linkscout_enrich::batch::{enrich_all, BATCH_SIZE};
use linkscout_enrich::{csvio, query};

use crate::settings::Settings;

mod settings;

#[tokio::main]
async fn main() -> Result<()> {
    // The credential check happens before any file or network work.
    let settings = Settings::load()
        .context("configuration incomplete (is LINKSCOUT_API_KEY set?)")?;

    init_logging(LogConfig::default())?;

    let profiles = csvio::load_profiles(&settings.input_path)
        .with_context(|| format!("failed to load profiles from {}", settings.input_path))?;
    let total = profiles.len();
    tracing::info!(count = total, path = %settings.input_path, "profiles.loaded");

    let queries: Vec<_> = profiles.into_iter().map(query::attach_search_url).collect();

    let browser = BrowserApiClient::new(&settings.api_base, &settings.api_key)
        .context("failed to construct browser service client")?;
    let enriched = enrich_all(&browser, queries, BATCH_SIZE).await;

    csvio::write_enriched(&settings.output_path, &enriched)
        .with_context(|| format!("failed to write output to {}", settings.output_path))?;

    tracing::info!(
        loaded = total,
        enriched = enriched.len(),
        dropped = total - enriched.len(),
        path = %settings.output_path,
        "run.complete"
    );
    Ok(())
}
