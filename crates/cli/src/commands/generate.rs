//! `blogforge generate` — Run the pipeline once over an exported config file.
//!
//! Takes the same JSON document the form exports, generates the post
//! headlessly, and prints it to stdout.

use blogforge_config::AppConfig;
use blogforge_core::BlogConfig;
use blogforge_pipeline::{BlogPipeline, HttpFetcher, PipelineSettings};
use std::path::Path;
use std::sync::Arc;

pub async fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let blog_config: BlogConfig = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", file.display()))?;

    let provider = blogforge_providers::build_from_config(&config)?;
    let fetcher = Arc::new(HttpFetcher::new(&config.fetcher)?);
    let pipeline = BlogPipeline::new(provider, fetcher, PipelineSettings::from(&config));

    let output = pipeline.generate(&blog_config).await?;
    println!("{output}");

    Ok(())
}
