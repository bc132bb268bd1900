//! Aggregation and final composition.
//!
//! The aggregator renders one labelled section per category from the
//! dispatcher's link/summary pairs. The composer concatenates all sections,
//! in fixed order, into the single user message sent alongside the system
//! prompt for the final completion call.

use crate::prompt;
use crate::summarize::SummarizedLink;
use blogforge_core::Link;

/// Render one category's summaries as a section body.
///
/// Each pair becomes `- <description>: <url>` followed by the indented
/// summary; an empty list becomes the category's fixed placeholder.
pub fn aggregate(summaries: &[SummarizedLink], placeholder: &str) -> String {
    if summaries.is_empty() {
        return placeholder.to_string();
    }

    summaries
        .iter()
        .map(|s| format!("- {}: {}\n  {}", s.link.description, s.link.url, s.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the combined user message for the final completion call.
///
/// Block order is fixed regardless of which sections are empty or
/// placeholders: subject, reference materials, code references, style rules,
/// formatting rules.
pub fn compose_user_message(
    subject: &str,
    reference_materials: &str,
    code_references: &str,
    links_to_include: &[Link],
) -> String {
    [
        format!("<blog_post_subject>{subject}</blog_post_subject>"),
        format!("<reference_materials>{reference_materials}</reference_materials>"),
        format!("<code_references>{code_references}</code_references>"),
        format!("<style_rules>{}</style_rules>", prompt::style_rules()),
        format!(
            "<formatting_rules>{}</formatting_rules>",
            prompt::formatting_rules(links_to_include)
        ),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(url: &str, description: &str, summary: &str) -> SummarizedLink {
        SummarizedLink {
            link: Link::new(url, description),
            summary: summary.into(),
        }
    }

    #[test]
    fn aggregate_formats_each_pair() {
        let summaries = vec![
            pair("https://a.test", "docs", "First summary."),
            pair("https://b.test", "guide", "Second summary."),
        ];
        let section = aggregate(&summaries, "No reference materials provided");
        assert_eq!(
            section,
            "- docs: https://a.test\n  First summary.\n- guide: https://b.test\n  Second summary."
        );
    }

    #[test]
    fn aggregate_empty_list_uses_placeholder() {
        assert_eq!(
            aggregate(&[], "No reference materials provided"),
            "No reference materials provided"
        );
        assert_eq!(
            aggregate(&[], "No code references provided"),
            "No code references provided"
        );
    }

    #[test]
    fn composed_message_has_fixed_block_order() {
        let message = compose_user_message(
            "WebSockets in game servers",
            "No reference materials provided",
            "No code references provided",
            &[],
        );

        let subject_at = message.find("<blog_post_subject>").unwrap();
        let refs_at = message.find("<reference_materials>").unwrap();
        let code_at = message.find("<code_references>").unwrap();
        let style_at = message.find("<style_rules>").unwrap();
        let fmt_at = message.find("<formatting_rules>").unwrap();

        assert!(subject_at < refs_at);
        assert!(refs_at < code_at);
        assert!(code_at < style_at);
        assert!(style_at < fmt_at);
    }

    #[test]
    fn composed_message_embeds_sections_verbatim() {
        let message = compose_user_message(
            "Leaderboards",
            "- docs: https://a.test\n  A summary.",
            "No code references provided",
            &[Link::new("https://talo.dev", "Talo")],
        );
        assert!(message.contains("<blog_post_subject>Leaderboards</blog_post_subject>"));
        assert!(message.contains("- docs: https://a.test\n  A summary."));
        assert!(message.contains("<formatting_rules>Include the following links"));
        assert!(message.contains("- Talo: https://talo.dev"));
    }
}
