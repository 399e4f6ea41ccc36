//! Documentation entries and resolved page content.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use syncdocs_mdx::TocEntry;

/// Section a page belongs to, fixed by the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GettingStarted,
    Installation,
    Components,
    Blocks,
}

impl Category {
    /// Sidebar order.
    pub const ALL: [Category; 4] = [
        Category::GettingStarted,
        Category::Installation,
        Category::Components,
        Category::Blocks,
    ];

    /// Human readable section title.
    pub fn label(&self) -> &'static str {
        match self {
            Category::GettingStarted => "Getting Started",
            Category::Installation => "Installation",
            Category::Components => "Components",
            Category::Blocks => "Blocks",
        }
    }
}

/// One page of the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Path-like identifier, empty for the docs root page
    pub slug: String,
    /// Display title
    pub title: String,
    /// Always `/docs/{slug}`
    pub url: String,
    pub category: Category,
}

impl DocEntry {
    /// Create an entry; the URL is derived from the slug.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        let slug = slug.into();
        Self {
            url: format!("/docs/{}", slug),
            slug,
            title: title.into(),
            category,
        }
    }

    /// Whether this is the page served at `/docs`.
    pub fn is_root(&self) -> bool {
        self.slug.is_empty()
    }

    /// Whether the entry lives under `blocks/`.
    pub fn is_block(&self) -> bool {
        self.slug.starts_with("blocks/")
    }
}

/// A resolved page ready to be mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocContent {
    /// Compiled page module
    pub code: String,
    /// File front matter with resolver-supplied fields applied on top
    pub frontmatter: Map<String, Value>,
    /// Headings in document order
    pub toc: Vec<TocEntry>,
}

impl DocContent {
    /// Front matter title, if the file declared one.
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get("title").and_then(Value::as_str)
    }

    /// Front matter description, if the file declared one.
    pub fn description(&self) -> Option<&str> {
        self.frontmatter.get("description").and_then(Value::as_str)
    }
}
