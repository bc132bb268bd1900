//! Content extraction for HTML reference material.
//!
//! Reference pages are reduced to the inner markup of their `<main>` element
//! before summarisation. A page without a `<main>` element yields `None`,
//! which means "nothing usable" rather than an error — the dispatcher skips
//! the link. Code references bypass extraction entirely and are passed
//! through as opaque text.

use scraper::{Html, Selector};

/// Extract the inner HTML of the page's primary content region.
pub fn main_content(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    // The selector is a static literal, parsing cannot fail
    let selector = Selector::parse("main").ok()?;
    document.select(&selector).next().map(|el| el.inner_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_main_element_content() {
        let html = "<html><body><nav>menu</nav>\
                    <main><h1>WebSockets</h1><p>Realtime transport.</p></main>\
                    </body></html>";
        let content = main_content(html).unwrap();
        assert!(content.contains("<h1>WebSockets</h1>"));
        assert!(content.contains("Realtime transport."));
        assert!(!content.contains("menu"));
    }

    #[test]
    fn first_main_element_wins() {
        let html = "<main><p>first</p></main><main><p>second</p></main>";
        let content = main_content(html).unwrap();
        assert!(content.contains("first"));
        assert!(!content.contains("second"));
    }

    #[test]
    fn page_without_main_yields_none() {
        let html = "<html><body><article><p>No main here.</p></article></body></html>";
        assert!(main_content(html).is_none());
    }

    #[test]
    fn non_html_input_yields_none() {
        assert!(main_content("fn main() {}\n").is_none());
    }
}
