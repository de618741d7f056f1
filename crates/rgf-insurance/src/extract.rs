//! Extract text, metadata and policy details from raw HTML.
//!
//! Parsing uses the `scraper` crate (html5ever), which never fails on
//! malformed markup. All extractors are pure functions over the markup string.

use scraper::{ElementRef, Html, Selector};

use crate::types::{ExtractedMetadata, HtmlEnvelope, PageText, PolicyInfo};

/// Cap for the plain body text view.
pub const FULL_TEXT_LIMIT: usize = 10_000;
/// Cap for the segmented text view.
pub const SEGMENTED_TEXT_LIMIT: usize = 10_000;
/// Cap for `text_content` in the HTML envelope.
pub const ENVELOPE_TEXT_LIMIT: usize = 5_000;
/// Cap for `html_preview` in the HTML envelope.
pub const HTML_PREVIEW_LIMIT: usize = 3_000;
/// Cap for `fullDetails` in policy info.
pub const POLICY_DETAILS_LIMIT: usize = 8_000;

/// Policy items must be longer than this (in chars, after trimming).
const MIN_POLICY_ITEM_CHARS: usize = 20;

pub const POLICY_NAME: &str = "RGF Car Insurance";
pub const TITLE_FALLBACK: &str = "No title found";
pub const DESCRIPTION_FALLBACK: &str = "No description";

const SEGMENT_TAGS: &str = "p, h1, h2, h3, h4, h5, h6, li, span, div";
const HEADING_TAGS: &str = "h1, h2, h3, h4, h5, h6";
const POLICY_CONTAINERS: &str = "section, article, .content, .policy-details";
const POLICY_ITEMS: &str = "h2, h3, li, p";

/// Body text, or body text plus a markup preview when `include_html` is set.
pub fn extract_page_text(html: &str, include_html: bool) -> PageText {
    let document = Html::parse_document(html);
    let text = body_text(&document);

    if include_html {
        PageText::WithHtml(HtmlEnvelope {
            text_content: truncate_chars(&text, ENVELOPE_TEXT_LIMIT),
            html_preview: truncate_chars(html, HTML_PREVIEW_LIMIT),
        })
    } else {
        PageText::Text(truncate_chars(&text, FULL_TEXT_LIMIT))
    }
}

/// Text of every block or inline element in the allow-list, one per paragraph.
///
/// Nested matches each contribute their own text, so `<div><p>X</p></div>`
/// yields `X` twice.
pub fn extract_segmented_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let segments: Vec<String> = select_all(&document, SEGMENT_TAGS)
        .into_iter()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    tracing::debug!("Segmented text: {} segments", segments.len());

    truncate_chars(&segments.join("\n\n"), SEGMENTED_TEXT_LIMIT)
}

/// Title, description, OpenGraph title/description, links and headings.
pub fn extract_metadata(html: &str) -> ExtractedMetadata {
    let document = Html::parse_document(html);

    let title = select_all(&document, "title")
        .first()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| TITLE_FALLBACK.to_string());

    let description = first_attr(&document, r#"meta[name="description"]"#, "content")
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string());

    let og_title = first_attr(&document, r#"meta[property="og:title"]"#, "content");
    let og_description = first_attr(&document, r#"meta[property="og:description"]"#, "content");

    let links: Vec<String> = select_all(&document, "a[href]")
        .into_iter()
        .filter_map(|el| el.value().attr("href").map(|s| s.to_string()))
        .collect();

    let headings: Vec<String> = select_all(&document, HEADING_TAGS)
        .into_iter()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
        .collect();

    tracing::debug!(
        "Metadata: {} links, {} headings",
        links.len(),
        headings.len()
    );

    ExtractedMetadata {
        title,
        description,
        og_title,
        og_description,
        links,
        headings,
    }
}

/// Coverage types and features from the page's content containers.
///
/// Only `h2`/`h3` (coverage types) and `li` (features) are collected.
/// Paragraphs pass the length filter but are dropped, and `benefits` is
/// always empty. `fullDetails` is the whole body text, not just containers.
pub fn extract_policy_info(html: &str, url: &str) -> PolicyInfo {
    let document = Html::parse_document(html);

    let mut coverage_types = Vec::new();
    let mut features = Vec::new();

    if let Ok(items) = Selector::parse(POLICY_ITEMS) {
        for container in select_all(&document, POLICY_CONTAINERS) {
            for item in container.select(&items) {
                if item.id() == container.id() {
                    continue;
                }

                let text = element_text(&item);
                if text.chars().count() <= MIN_POLICY_ITEM_CHARS {
                    continue;
                }

                match item.value().name() {
                    "h2" | "h3" => coverage_types.push(text),
                    "li" => features.push(text),
                    _ => {}
                }
            }
        }
    }

    tracing::debug!(
        "Policy info: {} coverage types, {} features",
        coverage_types.len(),
        features.len()
    );

    PolicyInfo {
        policy_name: POLICY_NAME.to_string(),
        url: url.to_string(),
        coverage_types,
        features,
        benefits: Vec::new(),
        full_details: truncate_chars(&body_text(&document), POLICY_DETAILS_LIMIT),
    }
}

/// Cut `text` to at most `limit` chars. Not word-aware.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(sel) => document.select(&sel).collect(),
        Err(e) => {
            tracing::warn!("Invalid selector {css:?}: {e:?}");
            Vec::new()
        }
    }
}

fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    select_all(document, css)
        .first()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.to_string())
}

fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn body_text(document: &Html) -> String {
    select_all(document, "body")
        .iter()
        .flat_map(|body| body.text())
        .collect::<String>()
        .trim()
        .to_string()
}
