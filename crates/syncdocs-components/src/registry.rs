//! Component registry for MDX rendering.
//!
//! Maps the tag names that may appear in MDX to showcase components. The map
//! is built once and then only read.

use std::collections::{BTreeMap, HashMap};

use syncdocs_mdx::PropValue;

use crate::props::Props;
use crate::ui::{actions, data, disclosure, feedback, marketing};

/// A renderable showcase component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Accordion,
    AccordionItem,
    Alert,
    Avatar,
    Badge,
    Button,
    Card,
    Carousel,
    Dialog,
    Dock,
    FeatureGrid,
    Footer,
    Hero,
    Input,
    Marquee,
    Pricing,
    Progress,
    Skeleton,
    Slide,
    Spinner,
    Step,
    Stepper,
    Tab,
    Table,
    Tabs,
    Testimonial,
    Timeline,
    TimelineItem,
    Toggle,
    Tooltip,
}

impl Component {
    pub const ALL: &'static [Component] = &[
        Component::Accordion,
        Component::AccordionItem,
        Component::Alert,
        Component::Avatar,
        Component::Badge,
        Component::Button,
        Component::Card,
        Component::Carousel,
        Component::Dialog,
        Component::Dock,
        Component::FeatureGrid,
        Component::Footer,
        Component::Hero,
        Component::Input,
        Component::Marquee,
        Component::Pricing,
        Component::Progress,
        Component::Skeleton,
        Component::Slide,
        Component::Spinner,
        Component::Step,
        Component::Stepper,
        Component::Tab,
        Component::Table,
        Component::Tabs,
        Component::Testimonial,
        Component::Timeline,
        Component::TimelineItem,
        Component::Toggle,
        Component::Tooltip,
    ];

    /// Tag name used in MDX.
    pub fn tag(&self) -> &'static str {
        match self {
            Component::Accordion => "Accordion",
            Component::AccordionItem => "AccordionItem",
            Component::Alert => "Alert",
            Component::Avatar => "Avatar",
            Component::Badge => "Badge",
            Component::Button => "Button",
            Component::Card => "Card",
            Component::Carousel => "Carousel",
            Component::Dialog => "Dialog",
            Component::Dock => "Dock",
            Component::FeatureGrid => "FeatureGrid",
            Component::Footer => "Footer",
            Component::Hero => "Hero",
            Component::Input => "Input",
            Component::Marquee => "Marquee",
            Component::Pricing => "Pricing",
            Component::Progress => "Progress",
            Component::Skeleton => "Skeleton",
            Component::Slide => "Slide",
            Component::Spinner => "Spinner",
            Component::Step => "Step",
            Component::Stepper => "Stepper",
            Component::Tab => "Tab",
            Component::Table => "Table",
            Component::Tabs => "Tabs",
            Component::Testimonial => "Testimonial",
            Component::Timeline => "Timeline",
            Component::TimelineItem => "TimelineItem",
            Component::Toggle => "Toggle",
            Component::Tooltip => "Tooltip",
        }
    }

    /// Render with the given props and already-rendered children.
    pub fn render(&self, props: Props<'_>, children: &str) -> String {
        let render: fn(Props<'_>, &str) -> String = match self {
            Component::Accordion => disclosure::accordion,
            Component::AccordionItem => disclosure::accordion_item,
            Component::Alert => feedback::alert,
            Component::Avatar => data::avatar,
            Component::Badge => actions::badge,
            Component::Button => actions::button,
            Component::Card => data::card,
            Component::Carousel => data::carousel,
            Component::Dialog => feedback::dialog,
            Component::Dock => disclosure::dock,
            Component::FeatureGrid => marketing::feature_grid,
            Component::Footer => marketing::footer,
            Component::Hero => marketing::hero,
            Component::Input => actions::input,
            Component::Marquee => data::marquee,
            Component::Pricing => marketing::pricing,
            Component::Progress => feedback::progress,
            Component::Skeleton => feedback::skeleton,
            Component::Slide => data::slide,
            Component::Spinner => actions::spinner,
            Component::Step => disclosure::step,
            Component::Stepper => disclosure::stepper,
            Component::Tab => disclosure::tab,
            Component::Table => data::table,
            Component::Tabs => disclosure::tabs,
            Component::Testimonial => marketing::testimonial,
            Component::Timeline => disclosure::timeline,
            Component::TimelineItem => disclosure::timeline_item,
            Component::Toggle => actions::toggle,
            Component::Tooltip => feedback::tooltip,
        };
        render(props, children)
    }
}

/// Tag name to component map.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<&'static str, Component>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in component.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &component in Component::ALL {
            registry.register(component.tag(), component);
        }
        // Aliases used by older pages
        registry.register("Features", Component::FeatureGrid);
        registry.register("Switch", Component::Toggle);
        registry
    }

    /// Map `tag` to `component`, replacing any previous mapping.
    pub fn register(&mut self, tag: &'static str, component: Component) {
        self.components.insert(tag, component);
    }

    /// Look up a component by tag name (case-sensitive, like JSX).
    pub fn get(&self, tag: &str) -> Option<Component> {
        self.components.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.components.contains_key(tag)
    }

    /// All registered tag names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.components.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Render the component registered under `tag`.
    pub fn render(
        &self,
        tag: &str,
        props: &BTreeMap<String, PropValue>,
        children: &str,
    ) -> Result<String, RegistryError> {
        let component = self
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownComponent(tag.to_string()))?;
        Ok(component.render(Props::new(props), children))
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown component: <{0}>")]
    UnknownComponent(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_variant(variant: &str) -> BTreeMap<String, PropValue> {
        let mut props = BTreeMap::new();
        props.insert("variant".to_string(), PropValue::String(variant.to_string()));
        props
    }

    #[test]
    fn builtin_registers_every_component() {
        let registry = ComponentRegistry::builtin();

        for component in Component::ALL {
            assert_eq!(registry.get(component.tag()), Some(*component));
        }
        assert_eq!(registry.get("Features"), Some(Component::FeatureGrid));
        assert!(!registry.contains("button"));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let registry = ComponentRegistry::builtin();

        let err = registry.render("Sparkles", &BTreeMap::new(), "").unwrap_err();

        assert_eq!(err.to_string(), "Unknown component: <Sparkles>");
    }

    #[test]
    fn unknown_variant_renders_default_for_every_component() {
        let registry = ComponentRegistry::builtin();
        let bogus = with_variant("definitely-not-a-variant");
        let none = BTreeMap::new();

        for tag in registry.names() {
            let fallback = registry.render(tag, &bogus, "child").unwrap();
            let default = registry.render(tag, &none, "child").unwrap();
            assert_eq!(fallback, default, "<{tag}> did not fall back");
        }
    }

    #[test]
    fn renders_button() {
        let registry = ComponentRegistry::builtin();

        let html = registry.render("Button", &with_variant("outline"), "Save").unwrap();

        assert_eq!(
            html,
            r#"<button type="button" class="sui-btn sui-btn--outline sui-btn--md">Save</button>"#
        );
    }
}
