//! Table of contents extraction and heading anchors.
//!
//! The TOC is built from a line scan of the raw MDX body, while heading anchors
//! are produced by the renderer from markdown events. Both sides reduce the
//! heading to plain text with [`heading_text`] and then apply [`slugify`], so an
//! entry's `id` always matches the `id` attribute on the rendered heading.

use std::sync::LazyLock;

use pulldown_cmark::{Event, Parser};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compile::markdown_options;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,4})\s+(.+?)\s*$").expect("Invalid heading regex"));

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid non-word regex"));

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading depth (2-4)
    pub level: u8,
    /// Plain heading text
    pub text: String,
    /// Anchor ID
    pub id: String,
}

/// Convert heading text to an anchor ID.
///
/// Lowercases, then replaces every run of non-word characters with `-`.
/// Leading and trailing dashes are dropped.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_WORD_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Reduce the inline markdown of a heading to the text a reader sees.
///
/// `Using **the** [Button](/docs/button)` becomes `Using the Button`.
pub fn heading_text(inline_markdown: &str) -> String {
    // Parsed as a heading so `1. Install` is not read as a list item
    let source = format!("# {}", inline_markdown);
    let mut text = String::new();
    for event in Parser::new_ext(&source, markdown_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

/// Scan the raw body for `##`..`####` heading lines.
///
/// Lines inside fenced code blocks and raw HTML blocks are ignored. Entries keep
/// document order and are not deduplicated, so repeated headings share an `id`.
pub fn extract_toc(body: &str) -> Vec<TocEntry> {
    let mut toc = Vec::new();
    let mut fence: Option<&str> = None;
    let mut in_html = false;

    for line in body.lines() {
        let trimmed = line.trim_start();

        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                Some(open) if marker == open => fence = None,
                Some(_) => {}
                None => fence = Some(marker),
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }

        // An HTML block runs to the next blank line
        if in_html {
            in_html = !trimmed.is_empty();
            continue;
        }
        if starts_html_block(trimmed) {
            in_html = true;
            continue;
        }

        let Some(caps) = HEADING_RE.captures(line) else {
            continue;
        };

        let level = caps[1].len() as u8;
        let text = heading_text(&caps[2]);
        if text.is_empty() {
            continue;
        }

        toc.push(TocEntry {
            level,
            id: slugify(&text),
            text,
        });
    }

    toc
}

/// Lowercase tags, closing tags, comments and declarations open a raw HTML
/// block. Capitalized tags are components and do not.
fn starts_html_block(trimmed_line: &str) -> bool {
    let Some(rest) = trimmed_line.strip_prefix('<') else {
        return false;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_lowercase() || c == '!' || c == '?')
}

/// Return the fence marker (```` ``` ```` or `~~~`) that opens or closes a code block.
pub(crate) fn fence_marker(trimmed_line: &str) -> Option<&'static str> {
    if trimmed_line.starts_with("```") {
        Some("```")
    } else if trimmed_line.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}
