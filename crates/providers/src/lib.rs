//! Completion provider client for Blogforge.
//!
//! The provider implements the `blogforge_core::Provider` trait and is built
//! from configuration — the credential and gateway base URL are passed in
//! explicitly, never read from the environment here.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use blogforge_core::error::ProviderError;
use blogforge_core::Provider;
use std::sync::Arc;

/// Build the completion provider from configuration.
///
/// Fails with `NotConfigured` when no API key is available so callers report
/// a clear error before any request is attempted.
pub fn build_from_config(
    config: &blogforge_config::AppConfig,
) -> Result<Arc<dyn Provider>, ProviderError> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        ProviderError::NotConfigured(
            "No API key configured — set api_key in config.toml or BLOGFORGE_API_KEY".into(),
        )
    })?;

    Ok(Arc::new(OpenAiCompatProvider::new(
        "openrouter",
        &config.base_url,
        api_key,
    )?))
}
