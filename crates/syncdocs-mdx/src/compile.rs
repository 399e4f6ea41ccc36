//! MDX body compilation into a page module.
//!
//! The body is split into markdown runs and component elements. The resulting
//! node list is serialized to JSON; that string is the page's compiled `code`,
//! carried through static props and turned back into nodes by [`load_module`]
//! when the page is mounted.

use std::collections::BTreeMap;

use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

use crate::jsx::{parse_element, PropValue};
use crate::toc::fence_marker;

/// Version tag written into every compiled module.
pub const MODULE_VERSION: u32 = 1;

/// Markdown extensions shared by compilation, TOC extraction, and rendering.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// A node of a compiled page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MdxNode {
    /// A run of plain markdown
    Markdown {
        source: String,
        /// Rendered without a wrapping paragraph (single-line element children)
        #[serde(default)]
        inline: bool,
    },

    /// A component element resolved through the registry at render time
    Element {
        name: String,
        props: BTreeMap<String, PropValue>,
        children: Vec<MdxNode>,
        /// Line in the MDX body where the element starts (1-indexed)
        line: usize,
    },
}

/// Compiled output of an MDX body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledMdx {
    /// Serialized module
    pub code: String,
}

#[derive(Serialize, Deserialize)]
struct Module {
    version: u32,
    nodes: Vec<MdxNode>,
}

/// Errors raised while compiling an MDX body.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Unclosed <{name}> element at line {line}")]
    UnclosedElement { name: String, line: usize },

    #[error("Failed to serialize module: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading a compiled module.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Malformed module: {0}")]
    Malformed(String),

    #[error("Unsupported module version {0}")]
    Version(u32),
}

/// Compile an MDX body (front matter already removed).
pub fn compile_mdx(body: &str) -> Result<CompiledMdx, CompileError> {
    let nodes = compile_nodes(body, 1, Scope::Page)?;
    let code = serde_json::to_string(&Module {
        version: MODULE_VERSION,
        nodes,
    })?;

    Ok(CompiledMdx { code })
}

/// Turn compiled code back into nodes.
pub fn load_module(code: &str) -> Result<Vec<MdxNode>, ModuleError> {
    let module: Module =
        serde_json::from_str(code).map_err(|e| ModuleError::Malformed(e.to_string()))?;

    if module.version != MODULE_VERSION {
        return Err(ModuleError::Version(module.version));
    }

    Ok(module.nodes)
}

/// Where a body being compiled sits.
#[derive(Clone, Copy, PartialEq)]
enum Scope {
    Page,
    Children { inline: bool },
}

fn compile_nodes(body: &str, first_line: usize, scope: Scope) -> Result<Vec<MdxNode>, CompileError> {
    let inline = scope == Scope::Children { inline: true };
    let mut nodes = Vec::new();
    let mut markdown = String::new();
    let mut fence: Option<&str> = None;
    let mut line = first_line;
    let mut pos = 0;

    while pos < body.len() {
        let line_end = body[pos..]
            .find('\n')
            .map(|i| pos + i + 1)
            .unwrap_or(body.len());
        let text = &body[pos..line_end];
        let trimmed = text.trim_start();

        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                Some(open) if marker == open => fence = None,
                Some(_) => {}
                None => fence = Some(marker),
            }
        }

        let in_code = fence.is_some() || fence_marker(trimmed).is_some();

        if !in_code && scope == Scope::Page && is_esm_line(trimmed) {
            // Components come from the registry; module imports are dropped
            let (end, lines) = esm_statement_end(body, pos);
            pos = end;
            line += lines;
            continue;
        }

        if !in_code && starts_component(trimmed) {
            let start = pos + (text.len() - trimmed.len());

            let Some(element) = parse_element(&body[start..]) else {
                return Err(CompileError::UnclosedElement {
                    name: component_name(trimmed).to_string(),
                    line,
                });
            };

            flush_markdown(&mut markdown, &mut nodes, inline);

            let children = match &element.children {
                Some(children) => compile_nodes(
                    children,
                    line,
                    Scope::Children {
                        inline: !children.contains('\n'),
                    },
                )?,
                None => Vec::new(),
            };

            nodes.push(MdxNode::Element {
                name: element.name,
                props: element.props,
                children,
                line,
            });

            let consumed = &body[start..start + element.len];
            line += consumed.matches('\n').count();
            pos = start + element.len;

            // Rest of the closing line stays markdown; a bare newline is dropped
            if body[pos..].starts_with('\n') {
                pos += 1;
                line += 1;
            }
            continue;
        }

        markdown.push_str(text);
        pos = line_end;
        if text.ends_with('\n') {
            line += 1;
        }
    }

    flush_markdown(&mut markdown, &mut nodes, inline);
    Ok(nodes)
}

fn flush_markdown(markdown: &mut String, nodes: &mut Vec<MdxNode>, inline: bool) {
    if !markdown.trim().is_empty() {
        nodes.push(MdxNode::Markdown {
            source: markdown.trim_matches('\n').to_string(),
            inline,
        });
    }
    markdown.clear();
}

fn starts_component(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_uppercase())
}

fn component_name(trimmed: &str) -> &str {
    let rest = &trimmed[1..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .unwrap_or(rest.len());
    &rest[..end]
}

fn is_esm_line(trimmed: &str) -> bool {
    trimmed.starts_with("import ") || trimmed.starts_with("export ")
}

/// Byte offset just past the ESM statement starting at `start`, and the
/// number of lines it spans.
///
/// A statement ends on a line with a `from '...'` clause, or once its
/// brackets balance without a trailing `,`, `{`, `(`, `[` or `=`. A blank
/// line always ends it.
fn esm_statement_end(body: &str, start: usize) -> (usize, usize) {
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut pos = start;
    let mut lines = 0;

    while pos < body.len() {
        let line_end = body[pos..]
            .find('\n')
            .map(|i| pos + i + 1)
            .unwrap_or(body.len());
        let text = body[pos..line_end].trim();
        pos = line_end;
        lines += 1;

        if text.is_empty() && quote.is_none() {
            break;
        }

        for c in text.chars() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '\'' | '"' | '`' => quote = Some(c),
                    '{' | '[' | '(' => depth += 1,
                    '}' | ']' | ')' => depth -= 1,
                    _ => {}
                },
            }
        }
        // Plain quotes never span lines
        if quote != Some('`') {
            quote = None;
        }

        let has_source = ["from '", "from \""]
            .iter()
            .any(|clause| text.starts_with(clause) || text.contains(&format!(" {}", clause)));
        let continues = text.ends_with([',', '{', '(', '[', '=']);
        if quote.is_none() && (has_source || (depth <= 0 && !continues)) {
            break;
        }
    }

    (pos, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nodes(body: &str) -> Vec<MdxNode> {
        load_module(&compile_mdx(body).unwrap().code).unwrap()
    }

    #[test]
    fn plain_markdown_is_one_node() {
        let out = nodes("## Usage\n\nSome text.\n");

        assert_eq!(
            out,
            vec![MdxNode::Markdown {
                source: "## Usage\n\nSome text.".to_string(),
                inline: false
            }]
        );
    }

    #[test]
    fn splits_components_from_markdown() {
        let body = "Intro\n\n<Button variant=\"shimmer\">Click me</Button>\n\nOutro\n";

        let out = nodes(body);

        assert_eq!(out.len(), 3);
        match &out[1] {
            MdxNode::Element { name, props, children, line } => {
                assert_eq!(name, "Button");
                assert_eq!(props["variant"].as_str(), Some("shimmer"));
                assert_eq!(*line, 3);
                assert_eq!(
                    children,
                    &vec![MdxNode::Markdown {
                        source: "Click me".to_string(),
                        inline: true
                    }]
                );
            }
            other => panic!("expected element, got {:?}", other),
        }
    }

    #[test]
    fn nested_children_compile_recursively() {
        let body = "<Tabs>\n  <Tab label=\"Preview\">\n    <Button />\n  </Tab>\n</Tabs>\n";

        let out = nodes(body);

        let MdxNode::Element { children, .. } = &out[0] else {
            panic!("expected element");
        };
        let MdxNode::Element { name, children: inner, .. } = &children[0] else {
            panic!("expected nested element");
        };
        assert_eq!(name, "Tab");
        assert!(matches!(&inner[0], MdxNode::Element { name, .. } if name == "Button"));
    }

    #[test]
    fn components_inside_code_fences_stay_markdown() {
        let body = "```jsx\n<Button variant=\"glow\">\n```\n";

        let out = nodes(body);

        assert_eq!(out.len(), 1);
        assert!(matches!(&out[0], MdxNode::Markdown { source, .. } if source.contains("<Button")));
    }

    #[test]
    fn drops_imports() {
        let out = nodes("import { Button } from '@/components/ui/button'\n\n# Title\n");

        assert_eq!(
            out,
            vec![MdxNode::Markdown {
                source: "# Title".to_string(),
                inline: false
            }]
        );
    }

    #[test]
    fn drops_multi_line_imports() {
        let out = nodes("import {\n  Button,\n  Card,\n} from '@/components/ui'\n\n## Usage\n");

        assert_eq!(
            out,
            vec![MdxNode::Markdown {
                source: "## Usage".to_string(),
                inline: false
            }]
        );
    }

    #[test]
    fn drops_multi_line_exports() {
        let out = nodes(
            "export const meta = {\n  title: 'Button',\n  tags: ['ui', 'form'],\n}\n## Usage\n\n<Card>\nBody\n</Card>\n",
        );

        assert_eq!(
            out[0],
            MdxNode::Markdown {
                source: "## Usage".to_string(),
                inline: false
            }
        );
        assert!(matches!(
            &out[1],
            MdxNode::Element { name, line: 7, .. } if name == "Card"
        ));
    }

    #[test]
    fn unclosed_element_reports_line() {
        let err = compile_mdx("# Title\n\n<Card>\nnever closed\n").unwrap_err();

        assert!(matches!(
            err,
            CompileError::UnclosedElement { ref name, line: 3 } if name == "Card"
        ));
    }

    #[test]
    fn rejects_malformed_and_foreign_modules() {
        assert!(matches!(load_module("not json"), Err(ModuleError::Malformed(_))));
        assert!(matches!(
            load_module(r#"{"version":99,"nodes":[]}"#),
            Err(ModuleError::Version(99))
        ));
    }
}
