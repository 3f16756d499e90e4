//! Heading text extraction from an HTML document.

use scraper::{ElementRef, Html, Selector};

use crate::config::HEADING_TAGS;
use crate::error::ScrapeError;

/// Elements whose text never renders.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template"];

/// Extract the text of every `h1`/`h2`/`h3` in document order, dropping empty ones.
pub fn extract_headings(html: &str) -> Result<Vec<String>, ScrapeError> {
    extract_with_tags(html, HEADING_TAGS)
}

/// Extract trimmed text of every element matching one of `tags`, in document order.
///
/// Duplicates are kept. Elements whose text is empty after trimming are skipped.
pub fn extract_with_tags(html: &str, tags: &[&str]) -> Result<Vec<String>, ScrapeError> {
    let selector = build_selector(tags)?;
    let document = Html::parse_document(html);

    let headings: Vec<String> = document
        .select(&selector)
        .map(visible_text)
        .filter(|text| !text.is_empty())
        .collect();

    tracing::debug!(count = headings.len(), "extracted headings");
    Ok(headings)
}

fn build_selector(tags: &[&str]) -> Result<Selector, ScrapeError> {
    if tags.is_empty() {
        return Err(ScrapeError::Parse("no tags to select".to_string()));
    }
    let group = tags.join(", ");
    Selector::parse(&group).map_err(|e| ScrapeError::Parse(format!("'{group}': {e}")))
}

/// Text content of `element` with its ends trimmed and line breaks turned into spaces.
fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .take_while(|a| a.id() != element.id())
            .filter_map(|a| a.value().as_element())
            .any(|el| HIDDEN_TAGS.contains(&el.name()));
        if !hidden {
            text.push_str(fragment);
        }
    }
    // One heading per output line.
    text.trim().replace(['\r', '\n'], " ")
}
