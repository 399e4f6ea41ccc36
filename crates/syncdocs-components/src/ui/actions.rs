//! Buttons and form controls.

use crate::props::{escape, Props};
use crate::ui::{classes, content, Size};

variants! {
    ButtonVariant {
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
        Ghost => "ghost",
        Destructive => "destructive",
        Link => "link",
    }
}

variants! {
    BadgeVariant {
        Default => "default",
        Secondary => "secondary",
        Outline => "outline",
        Success => "success",
        Warning => "warning",
        Destructive => "destructive",
    }
}

variants! {
    ToggleVariant {
        Switch => "switch",
        Button => "button",
        Checkbox => "checkbox",
    }
}

variants! {
    InputVariant {
        Default => "default",
        Filled => "filled",
        Underline => "underline",
    }
}

variants! {
    SpinnerVariant {
        Circle => "circle",
        Dots => "dots",
        Bars => "bars",
    }
}

const INPUT_TYPES: &[&str] = &["text", "email", "password", "search", "number", "url", "tel"];

pub fn button(props: Props<'_>, children: &str) -> String {
    let variant = ButtonVariant::parse(props.variant());
    let size = Size::parse(props.str("size"));
    let class = format!("{} sui-btn--{}", classes("btn", variant.as_str()), size.as_str());
    let label = content(&props, children, "label", "Button");

    match props.str("href") {
        Some(href) => format!(
            r#"<a class="{class}" href="{}">{label}</a>"#,
            escape(href)
        ),
        None => {
            let disabled = if props.flag("disabled") { " disabled" } else { "" };
            format!(r#"<button type="button" class="{class}"{disabled}>{label}</button>"#)
        }
    }
}

pub fn badge(props: Props<'_>, children: &str) -> String {
    let variant = BadgeVariant::parse(props.variant());
    format!(
        r#"<span class="{}">{}</span>"#,
        classes("badge", variant.as_str()),
        content(&props, children, "label", "Badge")
    )
}

pub fn toggle(props: Props<'_>, children: &str) -> String {
    let variant = ToggleVariant::parse(props.variant());
    let checked = props.flag("checked") || props.flag("defaultChecked");
    let disabled = if props.flag("disabled") { " disabled" } else { "" };
    let label = content(&props, children, "label", "");
    let class = classes("toggle", variant.as_str());

    let control = match variant {
        ToggleVariant::Switch => format!(
            r#"<button type="button" role="switch" class="sui-toggle-control" aria-checked="{checked}" data-toggle{disabled}><span class="sui-toggle-thumb"></span></button>"#
        ),
        ToggleVariant::Button => format!(
            r#"<button type="button" class="sui-toggle-control" aria-pressed="{checked}" data-toggle{disabled}>{}</button>"#,
            if label.is_empty() { "Toggle" } else { label.as_str() }
        ),
        ToggleVariant::Checkbox => format!(
            r#"<input type="checkbox" class="sui-toggle-control"{}{disabled}>"#,
            if checked { " checked" } else { "" }
        ),
    };

    if label.is_empty() || variant == ToggleVariant::Button {
        format!(r#"<span class="{class}">{control}</span>"#)
    } else {
        format!(r#"<label class="{class}">{control}<span class="sui-toggle-label">{label}</span></label>"#)
    }
}

pub fn input(props: Props<'_>, _children: &str) -> String {
    let variant = InputVariant::parse(props.variant());
    let size = Size::parse(props.str("size"));
    let kind = props
        .str("type")
        .filter(|t| INPUT_TYPES.contains(t))
        .unwrap_or("text");
    let placeholder = props.text("placeholder", "");
    let disabled = if props.flag("disabled") { " disabled" } else { "" };
    let field = format!(
        r#"<input class="sui-input-field sui-input-field--{}" type="{kind}" placeholder="{placeholder}"{disabled}>"#,
        size.as_str()
    );

    match props.str("label") {
        Some(label) => format!(
            r#"<label class="{}"><span class="sui-input-label">{}</span>{field}</label>"#,
            classes("input", variant.as_str()),
            escape(label)
        ),
        None => format!(
            r#"<div class="{}">{field}</div>"#,
            classes("input", variant.as_str())
        ),
    }
}

pub fn spinner(props: Props<'_>, _children: &str) -> String {
    let variant = SpinnerVariant::parse(props.variant());
    let size = Size::parse(props.str("size"));
    let parts = match variant {
        SpinnerVariant::Circle => 1,
        SpinnerVariant::Dots => 3,
        SpinnerVariant::Bars => 4,
    };
    let inner = r#"<span class="sui-spinner-part"></span>"#.repeat(parts);

    format!(
        r#"<span class="{} sui-spinner--{}" role="status" aria-label="{}">{inner}</span>"#,
        classes("spinner", variant.as_str()),
        size.as_str(),
        props.text("label", "Loading")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::props;

    #[test]
    fn button_unknown_variant_is_primary() {
        let fallback = props(&[("variant", "sparkly")]);
        let none = props(&[]);

        assert_eq!(
            button(Props::new(&fallback), "Go"),
            button(Props::new(&none), "Go")
        );
        assert!(button(Props::new(&none), "Go").contains("sui-btn--primary"));
    }

    #[test]
    fn button_variants_are_distinct() {
        let rendered: Vec<String> = ButtonVariant::ALL
            .iter()
            .map(|v| {
                let p = props(&[("variant", v.as_str())]);
                button(Props::new(&p), "x")
            })
            .collect();

        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn button_with_href_is_a_link() {
        let p = props(&[("href", "/docs/"), ("label", "Docs")]);

        assert_eq!(
            button(Props::new(&p), ""),
            r#"<a class="sui-btn sui-btn--primary sui-btn--md" href="/docs/">Docs</a>"#
        );
    }

    #[test]
    fn badge_escapes_label() {
        let p = props(&[("label", "<new>"), ("variant", "success")]);

        assert_eq!(
            badge(Props::new(&p), ""),
            r#"<span class="sui-badge sui-badge--success">&lt;new&gt;</span>"#
        );
    }

    #[test]
    fn toggle_switch_reflects_checked() {
        let mut p = props(&[("label", "Wifi")]);
        p.insert("checked".into(), syncdocs_mdx::PropValue::Boolean(true));

        let html = toggle(Props::new(&p), "");

        assert!(html.contains(r#"role="switch""#));
        assert!(html.contains(r#"aria-checked="true""#));
        assert!(html.contains("Wifi"));
    }

    #[test]
    fn input_rejects_unknown_type() {
        let p = props(&[("type", "file"), ("placeholder", "Email")]);

        let html = input(Props::new(&p), "");

        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"placeholder="Email""#));
    }

    #[test]
    fn spinner_variants_change_parts() {
        let dots = props(&[("variant", "dots")]);
        let bogus = props(&[("variant", "nope")]);

        assert_eq!(
            spinner(Props::new(&dots), "").matches("sui-spinner-part").count(),
            3
        );
        assert!(spinner(Props::new(&bogus), "").contains("sui-spinner--circle"));
    }
}
