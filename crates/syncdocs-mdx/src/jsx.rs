//! JSX element parser for component tags embedded in MDX.
//!
//! Handles elements like `<Button variant="shimmer">Click me</Button>` and
//! `<Dock items={["Home", "Docs"]} />`, extracting the tag name, props, and raw
//! children. Quotes and braces are tracked so `>` or `/` inside attribute
//! values never end a tag early.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed JSX element.
#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    /// Component name (e.g., "Button")
    pub name: String,

    /// Props as key-value pairs
    pub props: BTreeMap<String, PropValue>,

    /// Raw children source, dedented
    pub children: Option<String>,

    /// Whether self-closing
    pub self_closing: bool,

    /// Number of bytes of the input the element spans
    pub len: usize,
}

/// A prop value from JSX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropValue {
    /// String literal: variant="shimmer"
    String(String),
    /// Boolean (presence or literal): disabled, open={false}
    Boolean(bool),
    /// Any other expression, kept as source: columns={3}
    Expression(String),
}

impl PropValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret as a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Boolean(b) => Some(*b),
            PropValue::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            PropValue::Expression(_) => None,
        }
    }

    /// Interpret as a number, from either `{3}` or `"3"`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::String(s) | PropValue::Expression(s) => s.trim().parse().ok(),
            PropValue::Boolean(_) => None,
        }
    }

    /// Interpret a `{["a", "b"]}` expression as a list of strings.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            PropValue::Expression(expr) => {
                let inner = expr.trim().strip_prefix('[')?.strip_suffix(']')?;
                Some(
                    split_top_level(inner)
                        .into_iter()
                        .filter_map(|item| unquote(item.trim()).map(str::to_string))
                        .collect(),
                )
            }
            PropValue::String(s) => Some(s.split(',').map(|s| s.trim().to_string()).collect()),
            PropValue::Boolean(_) => None,
        }
    }

    fn from_expression(expr: &str) -> Self {
        let expr = expr.trim();
        if let Some(s) = unquote(expr) {
            return PropValue::String(s.to_string());
        }
        match expr {
            "true" => PropValue::Boolean(true),
            "false" => PropValue::Boolean(false),
            _ => PropValue::Expression(expr.to_string()),
        }
    }
}

/// Parse the JSX element at the start of `source`.
///
/// Returns `None` if `source` does not start with a capitalized tag or the tag
/// is never closed.
pub fn parse_element(source: &str) -> Option<JsxElement> {
    let tag = scan_open_tag(source)?;
    let props = parse_props(tag.props);

    if tag.self_closing {
        return Some(JsxElement {
            name: tag.name.to_string(),
            props,
            children: None,
            self_closing: true,
            len: tag.end,
        });
    }

    let close = find_close_tag(source, tag.name, tag.end)?;
    let children = dedent(&source[tag.end..close]);
    let children = if children.trim().is_empty() {
        None
    } else {
        Some(children)
    };

    Some(JsxElement {
        name: tag.name.to_string(),
        props,
        children,
        self_closing: false,
        len: close + tag.name.len() + 3,
    })
}

/// The opening tag of an element.
struct OpenTag<'a> {
    name: &'a str,
    props: &'a str,
    /// Byte offset just past the closing `>`
    end: usize,
    self_closing: bool,
}

fn scan_open_tag(source: &str) -> Option<OpenTag<'_>> {
    let rest = source.strip_prefix('<')?;
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];

    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }

    let attrs_start = 1 + name_len;
    let bytes = source.as_bytes();
    let mut quote: Option<u8> = None;
    let mut braces = 0usize;

    for (at, &b) in bytes.iter().enumerate().skip(attrs_start) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' if braces == 0 => quote = Some(b),
                b'{' => braces += 1,
                b'}' => braces = braces.saturating_sub(1),
                b'>' if braces == 0 => {
                    let attrs = source[attrs_start..at].trim_end();
                    let self_closing = attrs.ends_with('/');
                    let props = attrs.strip_suffix('/').unwrap_or(attrs);
                    return Some(OpenTag {
                        name,
                        props,
                        end: at + 1,
                        self_closing,
                    });
                }
                _ => {}
            },
        }
    }

    None
}

/// Find the matching closing tag, handling nested same-name elements.
fn find_close_tag(source: &str, name: &str, from: usize) -> Option<usize> {
    let open_pattern = format!("<{}", name);
    let close_pattern = format!("</{}>", name);

    let mut depth = 1usize;
    let mut pos = from;

    while pos < source.len() {
        let rest = &source[pos..];
        let next_close = rest.find(&close_pattern)?;

        match rest.find(&open_pattern) {
            Some(o) if o < next_close => {
                let at = pos + o;
                match scan_open_tag(&source[at..]) {
                    Some(tag) if tag.name == name => {
                        if !tag.self_closing {
                            depth += 1;
                        }
                        pos = at + tag.end;
                    }
                    // `<Tab` inside `<Tabs`, or a stray `<Name`
                    _ => pos = at + open_pattern.len(),
                }
            }
            _ => {
                let at = pos + next_close;
                depth -= 1;
                if depth == 0 {
                    return Some(at);
                }
                pos = at + close_pattern.len();
            }
        }
    }

    None
}

fn parse_props(src: &str) -> BTreeMap<String, PropValue> {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut props = BTreeMap::new();
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        if b == b'{' {
            // Spread attributes carry nothing static
            i = skip_braces(bytes, i).unwrap_or(len);
            continue;
        }
        if !(b.is_ascii_alphabetic() || b == b'_') {
            i += 1;
            continue;
        }

        let start = i;
        while i < len && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'_' | b'-' | b':'))
        {
            i += 1;
        }
        let name = src[start..i].to_string();

        let mut j = i;
        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j >= len || bytes[j] != b'=' {
            props.insert(name, PropValue::Boolean(true));
            continue;
        }

        j += 1;
        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }

        match bytes.get(j) {
            Some(&q @ (b'"' | b'\'')) => {
                let end = src[j + 1..]
                    .find(q as char)
                    .map(|e| j + 1 + e)
                    .unwrap_or(len);
                props.insert(name, PropValue::String(src[j + 1..end].to_string()));
                i = (end + 1).min(len);
            }
            Some(b'{') => match skip_braces(bytes, j) {
                Some(end) => {
                    props.insert(name, PropValue::from_expression(&src[j + 1..end - 1]));
                    i = end;
                }
                None => {
                    props.insert(name, PropValue::from_expression(&src[j + 1..]));
                    i = len;
                }
            },
            _ => {
                props.insert(name, PropValue::Boolean(true));
                i = j;
            }
        }
    }

    props
}

/// Return the offset just past the `}` matching the `{` at `open`.
fn skip_braces(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;

    for (at, &b) in bytes.iter().enumerate().skip(open) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' | b'`' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(at + 1);
                    }
                }
                _ => {}
            },
        }
    }

    None
}

/// Split a list body on commas that are not nested in quotes or brackets.
fn split_top_level(src: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in src.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' | '`' => quote = Some(c),
                '[' | '{' | '(' => depth += 1,
                ']' | '}' | ')' => depth -= 1,
                ',' if depth == 0 => {
                    parts.push(&src[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    if !src[start..].trim().is_empty() {
        parts.push(&src[start..]);
    }
    parts
}

fn unquote(s: &str) -> Option<&str> {
    ['"', '\'', '`'].into_iter().find_map(|q| {
        s.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
            .filter(|inner| !inner.contains(q))
    })
}

/// Strip the common leading indentation so indented children do not turn into
/// markdown code blocks.
fn dedent(src: &str) -> String {
    let indent = src
        .lines()
        .filter(|l| !l.trim().is_empty())
        .skip(usize::from(!src.starts_with('\n')))
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    src.lines()
        .enumerate()
        .map(|(n, l)| {
            if n == 0 && !src.starts_with('\n') {
                l.trim_start()
            } else if l.get(..indent).is_some_and(|p| p.trim().is_empty()) {
                &l[indent..]
            } else {
                l.trim_start()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_self_closing() {
        let el = parse_element(r#"<Spinner variant="dots" />"#).unwrap();

        assert_eq!(el.name, "Spinner");
        assert!(el.self_closing);
        assert_eq!(
            el.props.get("variant"),
            Some(&PropValue::String("dots".to_string()))
        );
        assert!(el.children.is_none());
        assert_eq!(el.len, 26);
    }

    #[test]
    fn parses_with_children() {
        let el = parse_element(r#"<Button variant="shimmer">Click me</Button> trailing"#).unwrap();

        assert_eq!(el.name, "Button");
        assert!(!el.self_closing);
        assert_eq!(el.children.as_deref(), Some("Click me"));
        assert_eq!(el.len, r#"<Button variant="shimmer">Click me</Button>"#.len());
    }

    #[test]
    fn parses_boolean_and_expression_props() {
        let el = parse_element(
            r#"<Carousel autoplay loop={false} interval={3000} onChange={(i) => setIndex(i)} />"#,
        )
        .unwrap();

        assert_eq!(el.props.get("autoplay"), Some(&PropValue::Boolean(true)));
        assert_eq!(el.props.get("loop"), Some(&PropValue::Boolean(false)));
        assert_eq!(el.props["interval"].as_number(), Some(3000.0));
        assert!(matches!(
            el.props.get("onChange"),
            Some(PropValue::Expression(e)) if e.contains("=>")
        ));
    }

    #[test]
    fn slash_and_angle_inside_values_do_not_end_tag() {
        let el = parse_element(r#"<Card href="/docs/components/card" note={a > b} />"#).unwrap();

        assert!(el.self_closing);
        assert_eq!(el.props["href"].as_str(), Some("/docs/components/card"));
    }

    #[test]
    fn parses_string_lists() {
        let el = parse_element(r#"<Dock items={["Home", "Docs, API", 'Blog']} />"#).unwrap();

        assert_eq!(
            el.props["items"].as_string_list(),
            Some(vec!["Home".to_string(), "Docs, API".to_string(), "Blog".to_string()])
        );
    }

    #[test]
    fn skips_spread_props() {
        let el = parse_element(r#"<Badge {...rest} variant="glow">New</Badge>"#).unwrap();

        assert_eq!(el.props.len(), 1);
        assert_eq!(el.props["variant"].as_str(), Some("glow"));
    }

    #[test]
    fn nested_same_name_elements() {
        let src = "<Card>\n  <Card>Inner</Card>\n</Card>";
        let el = parse_element(src).unwrap();

        assert_eq!(el.len, src.len());
        assert_eq!(el.children.as_deref(), Some("<Card>Inner</Card>"));
    }

    #[test]
    fn prefix_names_are_not_confused() {
        let src = "<Tabs>\n<Tab label=\"One\">First</Tab>\n</Tabs>";
        let el = parse_element(src).unwrap();

        assert_eq!(el.name, "Tabs");
        assert_eq!(el.len, src.len());
    }

    #[test]
    fn dedents_children() {
        let el = parse_element("<Alert>\n    ## Heads up\n\n    Body text\n</Alert>").unwrap();

        assert_eq!(el.children.as_deref(), Some("## Heads up\n\nBody text"));
    }

    #[test]
    fn rejects_unclosed_and_lowercase() {
        assert!(parse_element("<Button>never closed").is_none());
        assert!(parse_element("<div>html</div>").is_none());
        assert!(parse_element("plain text").is_none());
    }
}
