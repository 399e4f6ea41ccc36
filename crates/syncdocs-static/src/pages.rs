//! Build-time page enumeration and page props.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use syncdocs_content::{ContentResolver, DocEntry, NavSection};
use syncdocs_mdx::TocEntry;

use crate::builder::BuildError;

/// One route to generate, as path segments under `/docs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPath {
    pub segments: Vec<String>,
}

impl StaticPath {
    /// The slug the segments spell out.
    pub fn slug(&self) -> String {
        self.segments.join("/")
    }

    /// `{output}/docs/{segments}/index.html`
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        let mut path = output_dir.join("docs");
        for segment in &self.segments {
            path.push(segment);
        }
        path.join("index.html")
    }
}

/// Everything a page needs to render.
#[derive(Debug, Clone, Serialize)]
pub struct PageProps {
    pub entry: DocEntry,
    /// Compiled page module
    pub code: String,
    pub frontmatter: Map<String, Value>,
    pub toc: Vec<TocEntry>,
    /// Full sidebar tree
    pub navigation: Vec<NavSection>,
}

impl PageProps {
    /// Front matter title, falling back to the entry title.
    pub fn title(&self) -> &str {
        self.frontmatter
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(&self.entry.title)
    }

    pub fn description(&self) -> Option<&str> {
        self.frontmatter.get("description").and_then(Value::as_str)
    }
}

/// Exactly one path per entry; the root entry has no segments.
pub fn static_paths(entries: &[DocEntry]) -> Vec<StaticPath> {
    entries
        .iter()
        .map(|entry| StaticPath {
            segments: entry
                .slug
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
        .collect()
}

/// Resolve the props for `slug`.
///
/// A slug that does not resolve, or is not part of the entry list, is a
/// [`BuildError::NotFound`]. Compilation failures propagate.
pub fn static_props(
    resolver: &ContentResolver,
    entries: &[DocEntry],
    navigation: &[NavSection],
    slug: &str,
) -> Result<PageProps, BuildError> {
    let content = resolver
        .get_by_slug(slug)?
        .ok_or_else(|| BuildError::NotFound(slug.to_string()))?;

    let entry = entries
        .iter()
        .find(|e| e.slug == slug)
        .cloned()
        .ok_or_else(|| BuildError::NotFound(slug.to_string()))?;

    Ok(PageProps {
        entry,
        code: content.code,
        frontmatter: content.frontmatter,
        toc: content.toc,
        navigation: navigation.to_vec(),
    })
}
