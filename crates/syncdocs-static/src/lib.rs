//! Static site generator for the Sync UI documentation.
//!
//! Enumerates one page per documentation entry, resolves each page's props,
//! mounts the compiled MDX with the component registry, and writes the site
//! together with its assets, search index, and sitemap.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod render;
pub mod search_index;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use pages::{static_paths, static_props, PageProps, StaticPath};
pub use render::{PageRenderer, RenderError, SiteMeta};
pub use search_index::SearchIndexFile;
