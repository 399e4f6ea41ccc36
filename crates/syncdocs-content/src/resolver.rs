//! Content resolver.
//!
//! Maps the fixed directory layout under the docs root to entries and pages:
//!
//! ```text
//! content/docs/*.mdx               Getting Started
//! content/docs/installation.mdx    Installation (section root)
//! content/docs/installation/*.mdx  Installation
//! content/docs/components/*.mdx    Components
//! content/docs/blocks/*.mdx        Blocks
//! ```
//!
//! Nothing is cached. Every call reads and parses from disk again.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use syncdocs_mdx::{extract_frontmatter, parse_mdx, FrontmatterError, ParseError};

use crate::entry::{Category, DocContent, DocEntry};

const INSTALLATION: &str = "installation";
const COMPONENTS: &str = "components";
const BLOCKS: &str = "blocks";
const INDEX: &str = "index";
const MDX_EXT: &str = "mdx";

/// Getting Started pages with exactly these titles come first, in this order.
/// Each slot lists the accepted spellings of one page title.
const GETTING_STARTED_PRIORITY: &[&[&str]] = &[
    &["Setup"],
    &["Changelog"],
    &["Story", "The Story of Sync UI"],
];

/// Errors that can occur while resolving content.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid front matter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },

    #[error("Failed to compile {path}: {source}")]
    Compile {
        path: String,
        #[source]
        source: ParseError,
    },
}

/// Resolves slugs against a docs root directory.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
}

impl ContentResolver {
    /// Create a resolver for the given docs root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The docs root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every page, in scan order: installation, docs root, components, blocks.
    ///
    /// Missing directories are skipped.
    pub fn list_all_slugs(&self) -> Result<Vec<DocEntry>, ResolveError> {
        let mut entries = Vec::new();

        let installation_dir = self.root.join(INSTALLATION);
        if installation_dir.is_dir() {
            let section_page = self.root.join(format!("{}.{}", INSTALLATION, MDX_EXT));
            if section_page.is_file() {
                let title = read_title(&section_page)?;
                entries.push(DocEntry::new(INSTALLATION, title, Category::Installation));
            } else {
                tracing::warn!(
                    "{} has no {}.{}; skipping the section page",
                    installation_dir.display(),
                    INSTALLATION,
                    MDX_EXT
                );
            }

            for path in mdx_files(&installation_dir) {
                let stem = file_stem(&path);
                entries.push(DocEntry::new(
                    format!("{}/{}", INSTALLATION, stem),
                    read_title(&path)?,
                    Category::Installation,
                ));
            }
        }

        let mut getting_started = Vec::new();
        for path in mdx_files(&self.root) {
            let stem = file_stem(&path);
            if stem == INSTALLATION {
                continue;
            }
            let slug = if stem == INDEX { String::new() } else { stem };
            getting_started.push(DocEntry::new(
                slug,
                read_title(&path)?,
                Category::GettingStarted,
            ));
        }
        // Stable: unranked pages keep directory order
        getting_started.sort_by_key(|e| getting_started_rank(&e.title));
        entries.extend(getting_started);

        for (dir, category) in [(COMPONENTS, Category::Components), (BLOCKS, Category::Blocks)] {
            let section_dir = self.root.join(dir);
            if !section_dir.is_dir() {
                tracing::debug!("Skipping missing directory {}", section_dir.display());
                continue;
            }
            for path in mdx_files(&section_dir) {
                let stem = file_stem(&path);
                entries.push(DocEntry::new(
                    format!("{}/{}", dir, stem),
                    read_title(&path)?,
                    category,
                ));
            }
        }

        tracing::debug!("Resolved {} entries under {}", entries.len(), self.root.display());
        Ok(entries)
    }

    /// Load and compile the page for `slug`.
    ///
    /// Returns `Ok(None)` when no file backs the slug. Compilation failures are
    /// returned as errors.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<DocContent>, ResolveError> {
        let Some(path) = self.path_for_slug(slug) else {
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }

        let source = fs::read_to_string(&path).map_err(|e| ResolveError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let doc = parse_mdx(&source).map_err(|e| ResolveError::Compile {
            path: path.display().to_string(),
            source: e,
        })?;

        let frontmatter = doc
            .frontmatter
            .unwrap_or_default()
            .merged([("slug".to_string(), Value::String(slug.to_string()))]);

        Ok(Some(DocContent {
            code: doc.compiled.code,
            frontmatter,
            toc: doc.toc,
        }))
    }

    /// Map a slug to the file that would back it.
    ///
    /// Returns `None` for slugs that cannot name a file in the layout
    /// (nested paths, `..` segments).
    pub fn path_for_slug(&self, slug: &str) -> Option<PathBuf> {
        let slug = slug.trim_matches('/');
        if slug.split('/').any(|seg| seg == ".." || seg == ".") {
            return None;
        }

        for dir in [COMPONENTS, BLOCKS, INSTALLATION] {
            if let Some(name) = slug.strip_prefix(dir).and_then(|r| r.strip_prefix('/')) {
                if name.is_empty() || name.contains('/') {
                    return None;
                }
                return Some(self.root.join(dir).join(format!("{}.{}", name, MDX_EXT)));
            }
        }

        if slug.contains('/') {
            return None;
        }

        let stem = if slug.is_empty() { INDEX } else { slug };
        Some(self.root.join(format!("{}.{}", stem, MDX_EXT)))
    }
}

/// `.mdx` files directly inside `dir`, sorted by file name.
fn mdx_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(MDX_EXT))
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Front matter title, falling back to the file name without extension.
fn read_title(path: &Path) -> Result<String, ResolveError> {
    let source = fs::read_to_string(path).map_err(|e| ResolveError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let (frontmatter, _) =
        extract_frontmatter(&source).map_err(|e| ResolveError::Frontmatter {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(frontmatter
        .and_then(|fm| fm.title)
        .unwrap_or_else(|| file_stem(path)))
}

fn getting_started_rank(title: &str) -> usize {
    GETTING_STARTED_PRIORITY
        .iter()
        .position(|titles| titles.contains(&title))
        .unwrap_or(GETTING_STARTED_PRIORITY.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let temp = tempdir().unwrap();
        let root = temp.path();

        write(root, "index.mdx", "---\ntitle: Introduction\n---\n## Welcome\n");
        write(root, "about.mdx", "No front matter here.\n");
        write(root, "story.mdx", "---\ntitle: The Story of Sync UI\n---\n");
        write(root, "changelog.mdx", "---\ntitle: Changelog\n---\n");
        write(root, "setup.mdx", "---\ntitle: Setup\n---\n");
        write(root, "installation.mdx", "---\ntitle: Installation\n---\n## Pick a framework\n");
        write(root, "installation/nextjs.mdx", "---\ntitle: Next.js\n---\n");
        write(root, "installation/vite.mdx", "---\ntitle: Vite\n---\n");
        write(
            root,
            "components/button.mdx",
            "---\ntitle: Button\ndescription: Animated buttons\n---\n## Usage\n\n<Button variant=\"shimmer\">Go</Button>\n",
        );
        write(root, "components/notes.txt", "ignored");
        write(root, "blocks/pricing.mdx", "---\ntitle: Pricing\n---\n");

        temp
    }

    #[test]
    fn lists_in_scan_order_with_priority() {
        let temp = fixture();
        let resolver = ContentResolver::new(temp.path());

        let slugs: Vec<_> = resolver
            .list_all_slugs()
            .unwrap()
            .into_iter()
            .map(|e| (e.slug, e.title, e.category))
            .collect();

        assert_eq!(
            slugs,
            vec![
                ("installation".into(), "Installation".into(), Category::Installation),
                ("installation/nextjs".into(), "Next.js".into(), Category::Installation),
                ("installation/vite".into(), "Vite".into(), Category::Installation),
                ("setup".into(), "Setup".into(), Category::GettingStarted),
                ("changelog".into(), "Changelog".into(), Category::GettingStarted),
                ("story".into(), "The Story of Sync UI".into(), Category::GettingStarted),
                ("about".into(), "about".into(), Category::GettingStarted),
                ("".into(), "Introduction".into(), Category::GettingStarted),
                ("components/button".into(), "Button".into(), Category::Components),
                ("blocks/pricing".into(), "Pricing".into(), Category::Blocks),
            ]
        );
    }

    #[test]
    fn priority_titles_match_exactly() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write(root, "a-storybook.mdx", "---\ntitle: Storybook\n---\n");
        write(root, "b-tailwind.mdx", "---\ntitle: Setup Tailwind\n---\n");
        write(root, "c-story.mdx", "---\ntitle: Story\n---\n");
        write(root, "d-setup.mdx", "---\ntitle: Setup\n---\n");

        let titles: Vec<_> = ContentResolver::new(root)
            .list_all_slugs()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();

        assert_eq!(titles, vec!["Setup", "Story", "Storybook", "Setup Tailwind"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directories_are_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = fixture();
        let locked = temp.path().join("components");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Permission bits are ignored when running as root
        let readable = fs::read_dir(&locked).is_ok();

        let result = ContentResolver::new(temp.path()).list_all_slugs();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let entries = result.unwrap();
        if !readable {
            assert!(entries.iter().all(|e| e.category != Category::Components));
        }
        assert!(entries.iter().any(|e| e.slug == "blocks/pricing"));
    }

    #[test]
    fn every_listed_slug_resolves() {
        let temp = fixture();
        let resolver = ContentResolver::new(temp.path());

        for entry in resolver.list_all_slugs().unwrap() {
            assert!(
                resolver.get_by_slug(&entry.slug).unwrap().is_some(),
                "{} did not resolve",
                entry.slug
            );
            assert_eq!(entry.url, format!("/docs/{}", entry.slug));
        }
    }

    #[test]
    fn skips_missing_directories() {
        let temp = tempdir().unwrap();
        write(temp.path(), "index.mdx", "# Home\n");

        let entries = ContentResolver::new(temp.path()).list_all_slugs().unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_root());
    }

    #[test]
    fn resolves_content_with_merged_frontmatter() {
        let temp = fixture();
        let resolver = ContentResolver::new(temp.path());

        let content = resolver.get_by_slug("components/button").unwrap().unwrap();

        assert_eq!(content.title(), Some("Button"));
        assert_eq!(content.description(), Some("Animated buttons"));
        assert_eq!(content.frontmatter["slug"], "components/button");
        assert_eq!(content.toc[0].id, "usage");
        assert!(content.code.contains("shimmer"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = fixture();
        let resolver = ContentResolver::new(temp.path());

        assert!(resolver.get_by_slug("components/nope").unwrap().is_none());
        assert!(resolver.get_by_slug("blocks/a/b").unwrap().is_none());
        assert!(resolver.get_by_slug("../secret").unwrap().is_none());
    }

    #[test]
    fn compile_errors_propagate() {
        let temp = fixture();
        write(temp.path(), "components/broken.mdx", "<Dialog>\nno close\n");
        let resolver = ContentResolver::new(temp.path());

        let err = resolver.get_by_slug("components/broken").unwrap_err();

        assert!(matches!(err, ResolveError::Compile { .. }));
    }

    #[test]
    fn maps_slugs_to_paths() {
        let resolver = ContentResolver::new("/docs");

        assert_eq!(
            resolver.path_for_slug("components/card"),
            Some(PathBuf::from("/docs/components/card.mdx"))
        );
        assert_eq!(
            resolver.path_for_slug("installation"),
            Some(PathBuf::from("/docs/installation.mdx"))
        );
        assert_eq!(
            resolver.path_for_slug("installation/vite"),
            Some(PathBuf::from("/docs/installation/vite.mdx"))
        );
        assert_eq!(resolver.path_for_slug(""), Some(PathBuf::from("/docs/index.mdx")));
    }
}
