//! Prompt builders.
//!
//! Pure functions assembling the natural-language instructions sent to the
//! completion provider. Builders return an empty string when there is no
//! usable content — callers treat that as "skip this item", not as an error.

use blogforge_core::Link;

/// Build the summarisation prompt for one HTML reference page.
///
/// `main_content` is the extracted inner markup of the page's `<main>`
/// element; an empty extraction yields an empty prompt.
pub fn reference_material_prompt(subject: &str, link: &Link, main_content: &str) -> String {
    if main_content.is_empty() {
        return String::new();
    }

    [
        "Create a summary of the text inside the following HTML.".to_string(),
        "This summary will be used to help write a blog post on the following subject:".to_string(),
        format!("<blog_post_subject>{subject}</blog_post_subject>"),
        "Highlight key areas of interest and explain them but do not attempt to provide suggestions.".to_string(),
        "Here is the HTML:".to_string(),
        format!("<html>{main_content}</html>"),
        "Here is the link to the reference material:".to_string(),
        format!("<reference_material_link>{}</reference_material_link>", link.url),
        format!(
            "<reference_material_description>{}</reference_material_description>",
            link.description_or_default()
        ),
        "You should only respond with a list of up to 5 key areas of interest and explanations. Do not include any other text that is not part of the summary.".to_string(),
        "Write the summaries in British English.".to_string(),
    ]
    .join("\n")
}

/// Build the summarisation prompt for one raw code reference.
pub fn code_reference_prompt(subject: &str, link: &Link, raw_content: &str) -> String {
    if raw_content.is_empty() {
        return String::new();
    }

    [
        "Create a summary of the following code reference.".to_string(),
        "This summary will be used to help write a blog post on the following subject:".to_string(),
        format!("<blog_post_subject>{subject}</blog_post_subject>"),
        "Do not explain the code, only highlight key areas of interests for developers looking to leverage the code.".to_string(),
        "Include the code itself where relevant and where it would add value as part of the blog post.".to_string(),
        "Write the summaries in British English.".to_string(),
        "You should distinguish between example implementations in the code and the actual API developers will interact with in order to be able to provide helpful examples in the blog post.".to_string(),
        "Here is the code reference:".to_string(),
        format!("<code_reference>{raw_content}</code_reference>"),
        "Here is the link to the code reference:".to_string(),
        format!("<code_reference_link>{}</code_reference_link>", link.url),
        format!(
            "<code_reference_description>{}</code_reference_description>",
            link.description_or_default()
        ),
        "You should only respond with a list of up to 5 key areas of interest and short explanations. Do not include any other text that is not part of the summary.".to_string(),
        "Include relevant blocks or lines of code where it would add value as part of the blog post.".to_string(),
    ]
    .join("\n")
}

/// The static style directives appended to every composed request.
///
/// Constant output, independent of all inputs.
pub fn style_rules() -> &'static str {
    "Stick to the the following style rules as well as the example post when writing the blog post:\n\
     1. Write in a casual tone that is easy to read and understand whilst also being assertive and informative (because you are a professional in this field).\n\
     2. Spell words in British English and do not use Oxford commas.\n\
     3. Do not titlecase titles, headings, bullet points, etc. They should always be in sentence case. Only capitalise words if it is grammatically correct to do so or i.e. for nouns and product names.\n\
     4. Avoid any cheesy language, salesy language or cliches. Avoid sounding overly American. Be direct and to the point."
}

/// Build the formatting rules from the links-to-include list.
///
/// These links bypass summarisation and are embedded directly in the post.
pub fn formatting_rules(links: &[Link]) -> String {
    if links.is_empty() {
        return "No links need to be included".to_string();
    }

    let mut lines =
        vec!["Include the following links directly in the blog post where they are most relevant:"
            .to_string()];
    for link in links {
        lines.push(format!("- {}: {}", link.description_or_default(), link.url));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs_link() -> Link {
        Link::new("https://example.com/docs", "docs")
    }

    #[test]
    fn reference_prompt_embeds_tagged_content() {
        let prompt =
            reference_material_prompt("WebSockets in game servers", &docs_link(), "<p>hello</p>");
        assert!(prompt.contains("<blog_post_subject>WebSockets in game servers</blog_post_subject>"));
        assert!(prompt.contains("<html><p>hello</p></html>"));
        assert!(prompt.contains("<reference_material_link>https://example.com/docs</reference_material_link>"));
        assert!(prompt.contains("<reference_material_description>docs</reference_material_description>"));
        assert!(prompt.contains("up to 5 key areas"));
        assert!(prompt.contains("British English"));
    }

    #[test]
    fn reference_prompt_empty_content_yields_empty_prompt() {
        let prompt = reference_material_prompt("subject", &docs_link(), "");
        assert!(prompt.is_empty());
    }

    #[test]
    fn code_prompt_embeds_tagged_content() {
        let link = Link::new("https://example.com/raw/client.rs", "client");
        let prompt = code_reference_prompt("WebSockets in game servers", &link, "fn main() {}");
        assert!(prompt.contains("<code_reference>fn main() {}</code_reference>"));
        assert!(prompt.contains("<code_reference_link>https://example.com/raw/client.rs</code_reference_link>"));
        assert!(prompt.contains("<code_reference_description>client</code_reference_description>"));
        assert!(prompt.contains("distinguish between example implementations"));
    }

    #[test]
    fn missing_description_uses_placeholder() {
        let link = Link::new("https://example.com/docs", "");
        let prompt = reference_material_prompt("subject", &link, "<p>x</p>");
        assert!(prompt.contains(
            "<reference_material_description>No description provided</reference_material_description>"
        ));
    }

    #[test]
    fn style_rules_are_constant() {
        assert_eq!(style_rules(), style_rules());
        assert!(style_rules().contains("British English"));
        assert!(style_rules().starts_with("Stick to the the following style rules"));
        assert!(style_rules().contains("4. Avoid any cheesy language"));
    }

    #[test]
    fn formatting_rules_renders_each_link() {
        let links = vec![
            Link::new("https://talo.dev", "Talo homepage"),
            Link::new("https://talo.dev/docs", ""),
        ];
        let rules = formatting_rules(&links);
        assert!(rules.contains("- Talo homepage: https://talo.dev"));
        assert!(rules.contains("- No description provided: https://talo.dev/docs"));
    }

    #[test]
    fn formatting_rules_empty_list_is_fixed_text() {
        assert_eq!(formatting_rules(&[]), "No links need to be included");
    }
}
