//! MDX parsing for syncdocs.
//!
//! Extracts YAML front matter, scans headings into a table of contents, and
//! compiles the MDX body into a serialized page module made of markdown runs
//! and component elements. The module is mounted later by the page renderer.

pub mod compile;
pub mod frontmatter;
pub mod jsx;
pub mod parser;
pub mod toc;

pub use compile::{
    compile_mdx, load_module, markdown_options, CompileError, CompiledMdx, MdxNode, ModuleError,
};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use jsx::{parse_element, JsxElement, PropValue};
pub use parser::{parse_mdx, ParseError, ParsedDoc};
pub use toc::{extract_toc, heading_text, slugify, TocEntry};
