//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use syncdocs_components::UiState;
use syncdocs_content::{navigation, ContentResolver, DocEntry, NavSection, ResolveError, SearchConfig};

use crate::assets::AssetPipeline;
use crate::pages::{static_paths, static_props, StaticPath};
use crate::render::{PageRenderer, SiteMeta};
use crate::search_index::SearchIndexFile;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Docs root (`content/docs`)
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    pub search: SearchConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/docs"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "Sync UI".to_string(),
            search: SearchConfig::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Docs directory not found: {0}")]
    MissingContent(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("No page for slug {0:?}")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    resolver: ContentResolver,
    renderer: PageRenderer,
}

impl StaticBuilder {
    /// Create a new static builder with the built-in components.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_renderer(config, PageRenderer::builtin())
    }

    /// Create a builder with a custom renderer.
    pub fn with_renderer(config: BuildConfig, renderer: PageRenderer) -> Self {
        Self {
            resolver: ContentResolver::new(&config.content_dir),
            config,
            renderer,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the static site.
    ///
    /// Any page that fails to resolve or render aborts the build.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        if !self.config.content_dir.is_dir() {
            return Err(BuildError::MissingContent(
                self.config.content_dir.display().to_string(),
            ));
        }

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let entries = self.resolver.list_all_slugs()?;
        let nav = navigation(&entries);
        let paths = static_paths(&entries);
        tracing::debug!("Building {} pages", paths.len());

        let site = self.site_meta();

        // Render pages in parallel
        let results: Vec<Result<(), BuildError>> = paths
            .par_iter()
            .map(|path| self.build_page(path, &entries, &nav, &site))
            .collect();

        for result in results {
            result?;
        }

        self.generate_assets()?;
        self.generate_search_index(&entries)?;
        self.generate_sitemap(&entries)?;
        self.generate_root_redirect()?;

        let duration = start.elapsed();
        tracing::info!(
            "Built {} pages into {} in {}ms",
            paths.len(),
            self.config.output_dir.display(),
            duration.as_millis()
        );

        Ok(BuildResult {
            pages: paths.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            live_reload: false,
            ui: UiState::default(),
        }
    }

    /// Build a single page.
    fn build_page(
        &self,
        path: &StaticPath,
        entries: &[DocEntry],
        nav: &[NavSection],
        site: &SiteMeta,
    ) -> Result<(), BuildError> {
        let props = static_props(&self.resolver, entries, nav, &path.slug())?;
        let html = self.renderer.render_document(&props, site)?;

        let output = path.output_file(&self.config.output_dir);
        write_file(&output, &html)?;

        tracing::debug!("Wrote {}", output.display());
        Ok(())
    }

    /// Write CSS and JS assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css
            })
        } else {
            css
        };
        write_file(&assets_dir.join("main.css"), &css)?;
        write_file(&assets_dir.join("main.js"), &AssetPipeline::generate_js())?;

        Ok(())
    }

    /// Write the palette corpus.
    fn generate_search_index(&self, entries: &[DocEntry]) -> Result<(), BuildError> {
        let json = SearchIndexFile::new(entries, &self.config.search)
            .to_json()
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        write_file(&self.config.output_dir.join("search-index.json"), &json)
    }

    /// Write sitemap.xml and robots.txt.
    fn generate_sitemap(&self, entries: &[DocEntry]) -> Result<(), BuildError> {
        let base = self.config.base_url.trim_end_matches('/');
        let urls: Vec<String> = entries
            .iter()
            .map(|entry| format!("  <url>\n    <loc>{}{}</loc>\n  </url>", base, entry.url))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );
        write_file(&self.config.output_dir.join("sitemap.xml"), &sitemap)?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml",
            base
        );
        write_file(&self.config.output_dir.join("robots.txt"), &robots)
    }

    /// `/` sends visitors to `/docs/`.
    fn generate_root_redirect(&self) -> Result<(), BuildError> {
        let target = format!("{}/docs/", self.config.base_url.trim_end_matches('/'));
        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="0; url={0}">
  <link rel="canonical" href="{0}">
  <title>{1}</title>
</head>
<body><a href="{0}">{1}</a></body>
</html>"#,
            target, self.config.title
        );
        write_file(&self.config.output_dir.join("index.html"), &html)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", parent.display(), e)))?;
    }
    fs::write(path, contents).map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn site(root: &Path) -> PathBuf {
        let docs = root.join("content/docs");
        write(&docs, "index.mdx", "---\ntitle: Introduction\n---\n# Welcome\n");
        write(
            &docs,
            "components/button.mdx",
            "---\ntitle: Button\ndescription: Clickable\n---\n## Usage\n\n<Button variant=\"outline\">Go</Button>\n",
        );
        write(&docs, "blocks/hero.mdx", "---\ntitle: Hero\n---\n<Hero title=\"Ship it\" />\n");
        docs
    }

    #[tokio::test]
    async fn builds_one_page_per_entry() {
        let temp = tempdir().unwrap();
        let docs = site(temp.path());
        let out = temp.path().join("dist");

        let builder = StaticBuilder::new(BuildConfig {
            content_dir: docs,
            output_dir: out.clone(),
            ..Default::default()
        });
        let result = builder.build().await.unwrap();

        assert_eq!(result.pages, 3);
        assert!(out.join("docs/index.html").exists());
        assert!(out.join("docs/components/button/index.html").exists());
        assert!(out.join("docs/blocks/hero/index.html").exists());

        let button = fs::read_to_string(out.join("docs/components/button/index.html")).unwrap();
        assert!(button.contains("sui-btn--outline"));
        assert!(button.contains(r#"id="usage""#));
    }

    #[tokio::test]
    async fn writes_assets_and_indexes() {
        let temp = tempdir().unwrap();
        let docs = site(temp.path());
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            content_dir: docs,
            output_dir: out.clone(),
            minify: false,
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        assert!(index.contains("Button"));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>/docs/components/button</loc>"));

        let root = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(root.contains("url=/docs/"));
    }

    #[tokio::test]
    async fn broken_page_aborts_build() {
        let temp = tempdir().unwrap();
        let docs = site(temp.path());
        write(&docs, "components/broken.mdx", "---\ntitle: Broken\n---\n<Card>\n");

        let result = StaticBuilder::new(BuildConfig {
            content_dir: docs,
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await;

        assert!(matches!(result, Err(BuildError::Resolve(_))));
    }

    #[tokio::test]
    async fn missing_content_dir_is_an_error() {
        let temp = tempdir().unwrap();

        let result = StaticBuilder::new(BuildConfig {
            content_dir: temp.path().join("nope"),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await;

        assert!(matches!(result, Err(BuildError::MissingContent(_))));
    }
}
