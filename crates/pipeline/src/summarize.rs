//! Summarisation dispatcher.
//!
//! Iterates one category's links strictly in order, one at a time: fetch,
//! extract (reference materials only), build the prompt, and send it to the
//! completion provider with the per-summary token cap. Each summary is paired
//! with its originating link at the moment it is produced, so skipped links
//! can never mislabel later summaries.
//!
//! Failure semantics are all-or-nothing per category: any fetch or provider
//! error abandons the whole batch and yields an empty list. An unusable page
//! (no primary content) is not an error — the link is skipped.

use crate::extract;
use crate::fetch::Fetch;
use crate::prompt;
use blogforge_core::error::Error;
use blogforge_core::{Link, Provider, ProviderRequest};
use tracing::{debug, info, warn};

/// A summary together with the link it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizedLink {
    pub link: Link,
    pub summary: String,
}

/// The two summarised link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ReferenceMaterial,
    CodeReference,
}

impl Category {
    /// The aggregated section text when the category produced no summaries.
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::ReferenceMaterial => "No reference materials provided",
            Category::CodeReference => "No code references provided",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Category::ReferenceMaterial => "reference materials",
            Category::CodeReference => "code references",
        }
    }
}

/// Summarise one category of links.
///
/// Returns the pairs in iteration order. On any error the whole category is
/// abandoned: partial progress is discarded and the result is empty, which
/// the aggregator renders as the category's placeholder.
pub async fn summarize_links(
    fetcher: &dyn Fetch,
    provider: &dyn Provider,
    model: &str,
    max_tokens: u32,
    subject: &str,
    links: &[Link],
    category: Category,
) -> Vec<SummarizedLink> {
    match try_summarize(fetcher, provider, model, max_tokens, subject, links, category).await {
        Ok(summaries) => summaries,
        Err(e) => {
            warn!(category = category.label(), error = %e, "Abandoning category after error");
            Vec::new()
        }
    }
}

async fn try_summarize(
    fetcher: &dyn Fetch,
    provider: &dyn Provider,
    model: &str,
    max_tokens: u32,
    subject: &str,
    links: &[Link],
    category: Category,
) -> Result<Vec<SummarizedLink>, Error> {
    info!(category = category.label(), count = links.len(), "Summarising links");

    let mut summaries = Vec::new();

    for link in links {
        info!(url = %link.url, description = %link.description, "Processing link");

        let prompt = build_prompt(fetcher, subject, link, category).await?;
        if prompt.is_empty() {
            debug!(url = %link.url, "No usable content, skipping link");
            continue;
        }

        let request = ProviderRequest::user(model, prompt, max_tokens);
        let response = provider.complete(request).await?;

        summaries.push(SummarizedLink {
            link: link.clone(),
            summary: response.content,
        });
    }

    Ok(summaries)
}

async fn build_prompt(
    fetcher: &dyn Fetch,
    subject: &str,
    link: &Link,
    category: Category,
) -> Result<String, Error> {
    let body = fetcher.fetch(&link.url).await?;

    let prompt = match category {
        Category::ReferenceMaterial => extract::main_content(&body)
            .map(|content| prompt::reference_material_prompt(subject, link, &content))
            .unwrap_or_default(),
        Category::CodeReference => prompt::code_reference_prompt(subject, link, &body),
    };

    Ok(prompt)
}
