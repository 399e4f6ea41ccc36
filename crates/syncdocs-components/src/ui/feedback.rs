//! Alerts, overlays, and loading states.

use crate::props::{escape, Props};
use crate::ui::{classes, content, optional};

variants! {
    AlertVariant {
        Info => "info",
        Success => "success",
        Warning => "warning",
        Error => "error",
    }
}

variants! {
    TooltipVariant {
        Dark => "dark",
        Light => "light",
    }
}

variants! {
    Placement {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

variants! {
    ProgressVariant {
        Default => "default",
        Striped => "striped",
        Gradient => "gradient",
    }
}

variants! {
    SkeletonVariant {
        Text => "text",
        Circle => "circle",
        Rect => "rect",
        Card => "card",
    }
}

variants! {
    DialogVariant {
        Default => "default",
        Alert => "alert",
        Sheet => "sheet",
    }
}

impl AlertVariant {
    fn icon(&self) -> &'static str {
        match self {
            AlertVariant::Info => "i",
            AlertVariant::Success => "✓",
            AlertVariant::Warning => "!",
            AlertVariant::Error => "×",
        }
    }
}

pub fn alert(props: Props<'_>, children: &str) -> String {
    let variant = AlertVariant::parse(props.variant());
    let dismiss = if props.flag("dismissible") {
        r#"<button type="button" class="sui-alert-dismiss" aria-label="Dismiss" data-dismiss>×</button>"#
    } else {
        ""
    };

    format!(
        r#"<div class="{}" role="alert"><span class="sui-alert-icon" aria-hidden="true">{}</span><div class="sui-alert-body">{}<div class="sui-alert-text">{}</div></div>{dismiss}</div>"#,
        classes("alert", variant.as_str()),
        variant.icon(),
        optional(&props, "title", "p", "sui-alert-title"),
        content(&props, children, "description", "")
    )
}

pub fn tooltip(props: Props<'_>, children: &str) -> String {
    let variant = TooltipVariant::parse(props.variant());
    let placement = Placement::parse(props.str("placement").or_else(|| props.str("side")));

    format!(
        r#"<span class="{} sui-tooltip--{}" data-tooltip><span class="sui-tooltip-trigger" tabindex="0">{}</span><span class="sui-tooltip-content" role="tooltip">{}</span></span>"#,
        classes("tooltip", variant.as_str()),
        placement.as_str(),
        content(&props, children, "label", "Hover me"),
        props.text("content", "")
    )
}

pub fn progress(props: Props<'_>, _children: &str) -> String {
    let variant = ProgressVariant::parse(props.variant());
    let max = props.number("max").filter(|m| *m > 0.0).unwrap_or(100.0);
    let value = props.number("value").unwrap_or(0.0).clamp(0.0, max);
    let percent = value / max * 100.0;

    format!(
        r#"<div class="{}" role="progressbar" aria-valuemin="0" aria-valuemax="{max}" aria-valuenow="{value}"><div class="sui-progress-bar" style="width: {percent:.1}%"></div></div>"#,
        classes("progress", variant.as_str())
    )
}

pub fn skeleton(props: Props<'_>, _children: &str) -> String {
    let variant = SkeletonVariant::parse(props.variant());
    let lines = props.number("lines").map(|n| n as usize).unwrap_or(3).clamp(1, 12);

    let inner = match variant {
        SkeletonVariant::Text => r#"<span class="sui-skeleton-line"></span>"#.repeat(lines),
        SkeletonVariant::Circle | SkeletonVariant::Rect => String::new(),
        SkeletonVariant::Card => concat!(
            r#"<span class="sui-skeleton-media"></span>"#,
            r#"<span class="sui-skeleton-line"></span>"#,
            r#"<span class="sui-skeleton-line sui-skeleton-line--short"></span>"#
        )
        .to_string(),
    };

    format!(
        r#"<div class="{}" aria-busy="true">{inner}</div>"#,
        classes("skeleton", variant.as_str())
    )
}

pub fn dialog(props: Props<'_>, children: &str) -> String {
    let variant = DialogVariant::parse(props.variant());
    let role = match variant {
        DialogVariant::Alert => "alertdialog",
        _ => "dialog",
    };
    let open = if props.flag("open") || props.flag("defaultOpen") {
        " open"
    } else {
        ""
    };
    let confirm = match props.str("confirm") {
        Some(label) => format!(
            r#"<button type="button" class="sui-btn sui-btn--primary sui-btn--md" data-dialog-close>{}</button>"#,
            escape(label)
        ),
        None => String::new(),
    };

    format!(
        concat!(
            r#"<div class="{class}" data-dialog>"#,
            r#"<button type="button" class="sui-btn sui-btn--outline sui-btn--md" data-dialog-open>{trigger}</button>"#,
            r#"<dialog class="sui-dialog-panel" role="{role}"{open}>"#,
            r#"<header class="sui-dialog-header">{title}{description}</header>"#,
            r#"<div class="sui-dialog-body">{body}</div>"#,
            r#"<footer class="sui-dialog-footer"><button type="button" class="sui-btn sui-btn--ghost sui-btn--md" data-dialog-close>{cancel}</button>{confirm}</footer>"#,
            r#"</dialog></div>"#
        ),
        class = classes("dialog", variant.as_str()),
        trigger = props.text("trigger", "Open"),
        role = role,
        open = open,
        title = optional(&props, "title", "h3", "sui-dialog-title"),
        description = optional(&props, "description", "p", "sui-dialog-description"),
        body = children,
        cancel = props.text("cancel", "Close"),
        confirm = confirm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::props;
    use syncdocs_mdx::PropValue;

    #[test]
    fn alert_defaults_to_info() {
        let p = props(&[("variant", "catastrophic"), ("title", "Heads up")]);

        let html = alert(Props::new(&p), "<p>Body</p>");

        assert!(html.starts_with(r#"<div class="sui-alert sui-alert--info" role="alert">"#));
        assert!(html.contains(r#"<p class="sui-alert-title">Heads up</p>"#));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn alert_variants_use_distinct_icons() {
        let icons: Vec<_> = AlertVariant::ALL.iter().map(|v| v.icon()).collect();
        for (i, a) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(a));
        }
    }

    #[test]
    fn tooltip_placement_falls_back_to_top() {
        let p = props(&[("placement", "diagonal"), ("content", "Saved")]);

        let html = tooltip(Props::new(&p), "Hover");

        assert!(html.contains("sui-tooltip--top"));
        assert!(html.contains(">Saved<"));
    }

    #[test]
    fn progress_clamps_value() {
        let mut p = props(&[]);
        p.insert("value".into(), PropValue::Expression("150".into()));

        let html = progress(Props::new(&p), "");

        assert!(html.contains(r#"aria-valuenow="100""#));
        assert!(html.contains("width: 100.0%"));
    }

    #[test]
    fn skeleton_text_renders_lines() {
        let mut p = props(&[]);
        p.insert("lines".into(), PropValue::Expression("2".into()));

        let html = skeleton(Props::new(&p), "");

        assert_eq!(html.matches("sui-skeleton-line").count(), 2);
    }

    #[test]
    fn dialog_alert_variant_changes_role() {
        let alert = props(&[("variant", "alert")]);
        let other = props(&[("variant", "popover")]);

        assert!(dialog(Props::new(&alert), "").contains(r#"role="alertdialog""#));
        assert!(dialog(Props::new(&other), "").contains("sui-dialog--default"));
    }
}
