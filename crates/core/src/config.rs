//! The exportable blog configuration and its link lists.
//!
//! These are the value objects that flow through the entire system: the form
//! posts a `BlogConfig`, the pipeline consumes it, and the export/import
//! feature serialises exactly this shape. Field names on the wire are
//! camelCase so an exported document re-imports without transformation.

use serde::{Deserialize, Serialize};

/// A user-supplied link with a free-form description.
///
/// Identity is positional within its list; duplicate URLs are permitted and
/// processed independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub description: String,
}

impl Link {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }

    /// The description as rendered into prompts — empty descriptions fall
    /// back to a fixed placeholder.
    pub fn description_or_default(&self) -> &str {
        if self.description.is_empty() {
            "No description provided"
        } else {
            &self.description
        }
    }
}

/// The full exportable state of the generator form.
///
/// `reference_links` are HTML pages whose main content gets summarised,
/// `code_links` are raw source files summarised as code references, and
/// `links_to_include` are embedded directly into the post without
/// summarisation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogConfig {
    /// Sets the tone and style of the post.
    pub system_prompt: String,

    /// The subject of the post.
    pub prompt: String,

    #[serde(default)]
    pub reference_links: Vec<Link>,

    #[serde(default)]
    pub code_links: Vec<Link>,

    #[serde(default)]
    pub links_to_include: Vec<Link>,
}

impl BlogConfig {
    /// The subject as rendered into the composed prompt.
    pub fn subject_or_default(&self) -> &str {
        if self.prompt.is_empty() {
            "No subject provided"
        } else {
            &self.prompt
        }
    }
}
