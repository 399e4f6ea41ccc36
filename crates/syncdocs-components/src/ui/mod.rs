//! Showcase components.
//!
//! Every component takes its props and already-rendered children and returns
//! HTML. Components never fail: unknown variants render the default look and
//! missing props fall back to placeholder text.
//!
//! Per-instance interactive state (open panel, selected tab, carousel
//! position) is written out as `data-*` attributes for the runtime script.

pub mod actions;
pub mod data;
pub mod disclosure;
pub mod feedback;
pub mod marketing;

use crate::props::Props;

variants! {
    /// Shared size scale.
    Size {
        Md => "md",
        Sm => "sm",
        Lg => "lg",
    }
}

/// `sui-{block} sui-{block}--{modifier}`
pub(crate) fn classes(block: &str, modifier: &str) -> String {
    format!("sui-{block} sui-{block}--{modifier}")
}

/// Children when present, otherwise the escaped `key` prop or `default`.
pub(crate) fn content(props: &Props<'_>, children: &str, key: &str, default: &str) -> String {
    if children.trim().is_empty() {
        props.text(key, default)
    } else {
        children.to_string()
    }
}

/// Optional element, empty when the prop is missing.
pub(crate) fn optional(props: &Props<'_>, key: &str, tag: &str, class: &str) -> String {
    match props.str(key) {
        Some(value) if !value.is_empty() => format!(
            r#"<{tag} class="{class}">{}</{tag}>"#,
            crate::props::escape(value)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use syncdocs_mdx::PropValue;

    /// Build a prop map from string pairs.
    pub fn props(pairs: &[(&str, &str)]) -> BTreeMap<String, PropValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), PropValue::String(v.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_falls_back_to_medium() {
        assert_eq!(Size::parse(Some("xl")), Size::Md);
        assert_eq!(Size::parse(None), Size::Md);
        assert_eq!(Size::parse(Some("lg")).as_str(), "lg");
        assert_eq!(Size::ALL.len(), 3);
    }
}
