//! Prop access for component renderers.

use std::collections::BTreeMap;

use syncdocs_mdx::PropValue;

static NO_PROPS: BTreeMap<String, PropValue> = BTreeMap::new();

/// Read-only view over an element's props.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    map: &'a BTreeMap<String, PropValue>,
}

impl<'a> Props<'a> {
    pub fn new(map: &'a BTreeMap<String, PropValue>) -> Self {
        Self { map }
    }

    /// No props at all.
    pub fn empty() -> Props<'static> {
        Props { map: &NO_PROPS }
    }

    /// The `variant` prop.
    pub fn variant(&self) -> Option<&'a str> {
        self.str("variant")
    }

    /// A string prop.
    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.map.get(name).and_then(PropValue::as_str)
    }

    /// A string prop, HTML-escaped, or `default` when absent.
    pub fn text(&self, name: &str, default: &str) -> String {
        escape(self.str(name).unwrap_or(default))
    }

    /// A flag; absent means `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.map
            .get(name)
            .and_then(PropValue::as_bool)
            .unwrap_or(false)
    }

    /// A numeric prop.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.map.get(name).and_then(PropValue::as_number)
    }

    /// A list prop (`{["a", "b"]}` or `"a, b"`), HTML-escaped.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.map
            .get(name)
            .and_then(PropValue::as_string_list)
            .unwrap_or_default()
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| escape(s))
            .collect()
    }
}

/// Escape HTML special characters including single quotes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_typed_props() {
        let mut map = BTreeMap::new();
        map.insert("title".to_string(), PropValue::String("<b>Hi</b>".into()));
        map.insert("open".to_string(), PropValue::Boolean(true));
        map.insert("count".to_string(), PropValue::Expression("4".into()));
        map.insert("items".to_string(), PropValue::String("a, b".into()));
        let props = Props::new(&map);

        assert_eq!(props.text("title", ""), "&lt;b&gt;Hi&lt;/b&gt;");
        assert!(props.flag("open"));
        assert!(!props.flag("missing"));
        assert_eq!(props.number("count"), Some(4.0));
        assert_eq!(props.list("items"), vec!["a", "b"]);
        assert_eq!(Props::empty().variant(), None);
    }
}
