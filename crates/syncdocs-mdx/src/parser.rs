//! MDX document parser.

use crate::compile::{compile_mdx, CompileError, CompiledMdx};
use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
use crate::toc::{extract_toc, TocEntry};

/// A parsed MDX document.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Raw MDX body (without frontmatter)
    pub body: String,

    /// Table of contents, scanned from the raw body
    pub toc: Vec<TocEntry>,

    /// Compiled page module
    pub compiled: CompiledMdx,
}

/// Errors that can occur when parsing MDX.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),
}

/// Parse an MDX document.
///
/// The TOC comes from the raw body before compilation.
pub fn parse_mdx(source: &str) -> Result<ParsedDoc, ParseError> {
    let (frontmatter, body) = extract_frontmatter(source)?;
    let toc = extract_toc(body);
    let compiled = compile_mdx(body)?;

    Ok(ParsedDoc {
        frontmatter,
        body: body.to_string(),
        toc,
        compiled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{load_module, MdxNode};

    #[test]
    fn parses_complete_mdx() {
        let source = r#"---
title: Button
description: Animated buttons
---

## Installation

```bash
npx syncui add button
```

## Variants

<Button variant="shimmer">Shimmer</Button>

### Glow
"#;

        let doc = parse_mdx(source).unwrap();

        let fm = doc.frontmatter.unwrap();
        assert_eq!(fm.title.as_deref(), Some("Button"));
        assert_eq!(fm.description.as_deref(), Some("Animated buttons"));

        let ids: Vec<_> = doc.toc.iter().map(|e| (e.level, e.id.as_str())).collect();
        assert_eq!(ids, vec![(2, "installation"), (2, "variants"), (3, "glow")]);

        let nodes = load_module(&doc.compiled.code).unwrap();
        assert!(nodes
            .iter()
            .any(|n| matches!(n, MdxNode::Element { name, .. } if name == "Button")));
    }

    #[test]
    fn parses_without_frontmatter() {
        let doc = parse_mdx("## Just Markdown\n\nNo frontmatter.").unwrap();

        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.toc.len(), 1);
        assert_eq!(doc.toc[0].text, "Just Markdown");
    }

    #[test]
    fn compile_errors_surface() {
        let result = parse_mdx("---\ntitle: Broken\n---\n<Dialog>\n");

        assert!(matches!(result, Err(ParseError::Compile(_))));
    }
}
