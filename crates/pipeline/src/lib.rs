//! # Blogforge Pipeline
//!
//! The request/response pipeline that turns a `BlogConfig` into a finished
//! blog post: fetch each reference link, extract its primary content, build a
//! summarisation prompt per link, collect the summaries, and compose the
//! final completion request.
//!
//! Everything runs strictly sequentially — one link at a time, one category
//! after another, then the final call — matching the cooperative, one-request
//! -in-flight model of the tool.

pub mod compose;
pub mod extract;
pub mod fetch;
pub mod prompt;
pub mod summarize;

pub use fetch::{Fetch, HttpFetcher};
pub use summarize::{Category, SummarizedLink};

use blogforge_core::error::Result;
use blogforge_core::{BlogConfig, Message, Provider, ProviderRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Model and token-cap settings for one pipeline instance.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Model for reference-material summaries (lighter)
    pub reference_model: String,

    /// Model for code summaries and the final composition
    pub composer_model: String,

    /// Token cap per per-link summary
    pub summary_max_tokens: u32,

    /// Token cap for the finished post
    pub post_max_tokens: u32,
}

impl From<&blogforge_config::AppConfig> for PipelineSettings {
    fn from(config: &blogforge_config::AppConfig) -> Self {
        Self {
            reference_model: config.reference_model.clone(),
            composer_model: config.composer_model.clone(),
            summary_max_tokens: config.summary_max_tokens,
            post_max_tokens: config.post_max_tokens,
        }
    }
}

/// The blog-post generation pipeline.
///
/// Holds the completion provider and the link fetcher behind their traits so
/// both seams can be stubbed in tests.
pub struct BlogPipeline {
    provider: Arc<dyn Provider>,
    fetcher: Arc<dyn Fetch>,
    settings: PipelineSettings,
}

impl BlogPipeline {
    pub fn new(
        provider: Arc<dyn Provider>,
        fetcher: Arc<dyn Fetch>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            provider,
            fetcher,
            settings,
        }
    }

    /// Run the full pipeline and return the generated post text.
    ///
    /// Category failures degrade to placeholder sections; only the final
    /// composition call propagates an error to the caller.
    pub async fn generate(&self, config: &BlogConfig) -> Result<String> {
        let subject = config.subject_or_default();

        info!("[1] Generating reference materials");
        let references = summarize::summarize_links(
            self.fetcher.as_ref(),
            self.provider.as_ref(),
            &self.settings.reference_model,
            self.settings.summary_max_tokens,
            &config.prompt,
            &config.reference_links,
            Category::ReferenceMaterial,
        )
        .await;

        info!("[2] Generating code references");
        let code_references = summarize::summarize_links(
            self.fetcher.as_ref(),
            self.provider.as_ref(),
            &self.settings.composer_model,
            self.settings.summary_max_tokens,
            &config.prompt,
            &config.code_links,
            Category::CodeReference,
        )
        .await;

        let reference_block =
            compose::aggregate(&references, Category::ReferenceMaterial.placeholder());
        let code_block =
            compose::aggregate(&code_references, Category::CodeReference.placeholder());

        let user_message = compose::compose_user_message(
            subject,
            &reference_block,
            &code_block,
            &config.links_to_include,
        );

        info!("[3] Generating blog post");
        debug!(prompt = %user_message, "Composed final prompt");

        let request = ProviderRequest {
            model: self.settings.composer_model.clone(),
            messages: vec![
                Message::system(&config.system_prompt),
                Message::user(user_message),
            ],
            max_tokens: Some(self.settings.post_max_tokens),
        };

        let response = self.provider.complete(request).await?;

        info!("[4] Blog post generated");
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blogforge_core::error::{FetchError, ProviderError};
    use blogforge_core::provider::ProviderResponse;
    use blogforge_core::Link;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl Fetch for StubFetcher {
        async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Network {
                    url: url.to_string(),
                    reason: "connection refused".into(),
                })
        }
    }

    /// Records every request and answers with a canned summary, except for
    /// the final composition request which echoes the composed user message
    /// so tests can assert on it.
    struct RecordingProvider {
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl RecordingProvider {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Provider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> std::result::Result<ProviderResponse, ProviderError> {
            let is_final = request.messages.len() == 2;
            let content = if is_final {
                request.messages[1].content.clone()
            } else {
                "a canned summary".to_string()
            };
            let model = request.model.clone();
            self.requests.lock().unwrap().push(request);
            Ok(ProviderResponse {
                content,
                model,
                usage: None,
            })
        }
    }

    fn settings() -> PipelineSettings {
        PipelineSettings {
            reference_model: "openai/gpt-4o-mini".into(),
            composer_model: "anthropic/claude-3.5-sonnet".into(),
            summary_max_tokens: 500,
            post_max_tokens: 2500,
        }
    }

    #[tokio::test]
    async fn end_to_end_scenario() {
        // One reference page with a <main>, one raw code file, no links to
        // include: both sections must be real, the formatting block the
        // fixed "no links" text.
        let mut pages = HashMap::new();
        pages.insert(
            "https://example.com/docs".to_string(),
            "<html><body><main><p>WebSocket docs text.</p></main></body></html>".to_string(),
        );
        pages.insert(
            "https://example.com/raw/client.rs".to_string(),
            "fn connect() -> Socket {}".to_string(),
        );

        let provider = Arc::new(RecordingProvider::new());
        let pipeline = BlogPipeline::new(
            provider.clone(),
            Arc::new(StubFetcher { pages }),
            settings(),
        );

        let config = BlogConfig {
            system_prompt: "You are a marketing expert.".into(),
            prompt: "WebSockets in game servers".into(),
            reference_links: vec![Link::new("https://example.com/docs", "docs")],
            code_links: vec![Link::new("https://example.com/raw/client.rs", "client")],
            links_to_include: vec![],
        };

        let output = pipeline.generate(&config).await.unwrap();

        // The recording provider echoes the composed user message back
        assert!(output.contains(
            "<blog_post_subject>WebSockets in game servers</blog_post_subject>"
        ));
        assert!(output.contains("- docs: https://example.com/docs\n  a canned summary"));
        assert!(output.contains("- client: https://example.com/raw/client.rs\n  a canned summary"));
        assert!(!output.contains("No reference materials provided"));
        assert!(!output.contains("No code references provided"));
        assert!(output.contains("<formatting_rules>No links need to be included</formatting_rules>"));

        // Three calls: one per summary, one final; summaries used the
        // per-category models and the 500-token cap, the final the 2500 cap.
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].model, "openai/gpt-4o-mini");
        assert_eq!(requests[0].max_tokens, Some(500));
        assert_eq!(requests[1].model, "anthropic/claude-3.5-sonnet");
        assert_eq!(requests[2].model, "anthropic/claude-3.5-sonnet");
        assert_eq!(requests[2].max_tokens, Some(2500));
        assert_eq!(requests[2].messages[0].content, "You are a marketing expert.");
    }

    #[tokio::test]
    async fn failed_category_degrades_to_placeholder() {
        // The reference link's fetch fails; the final request must carry the
        // placeholder section instead of failing outright.
        let provider = Arc::new(RecordingProvider::new());
        let pipeline = BlogPipeline::new(
            provider.clone(),
            Arc::new(StubFetcher {
                pages: HashMap::new(),
            }),
            settings(),
        );

        let config = BlogConfig {
            system_prompt: "sp".into(),
            prompt: "subject".into(),
            reference_links: vec![Link::new("https://dead.test", "docs")],
            code_links: vec![],
            links_to_include: vec![],
        };

        let output = pipeline.generate(&config).await.unwrap();
        assert!(output.contains(
            "<reference_materials>No reference materials provided</reference_materials>"
        ));
        assert!(output.contains("<code_references>No code references provided</code_references>"));
    }

    #[tokio::test]
    async fn empty_subject_renders_placeholder_in_final_prompt() {
        let provider = Arc::new(RecordingProvider::new());
        let pipeline = BlogPipeline::new(
            provider,
            Arc::new(StubFetcher {
                pages: HashMap::new(),
            }),
            settings(),
        );

        let output = pipeline.generate(&BlogConfig::default()).await.unwrap();
        assert!(output.contains("<blog_post_subject>No subject provided</blog_post_subject>"));
    }
}
