//! Components that reveal content one piece at a time.
//!
//! Container components receive their items already rendered. Items carry a
//! marker class that the container rewrites to add per-item state, so the
//! selected tab or current step is decided in one place.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::props::{escape, Props};
use crate::ui::{classes, optional};

static TAB_PANEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="sui-tab-panel" role="tabpanel" data-tab-label="([^"]*)""#)
        .expect("Invalid tab panel regex")
});

static STEP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<li class="sui-step""#).expect("Invalid step regex"));

variants! {
    AccordionVariant {
        Bordered => "bordered",
        Separated => "separated",
        Ghost => "ghost",
    }
}

variants! {
    TabsVariant {
        Underline => "underline",
        Pills => "pills",
        Boxed => "boxed",
    }
}

variants! {
    StepperVariant {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

variants! {
    TimelineVariant {
        Default => "default",
        Alternate => "alternate",
        Compact => "compact",
    }
}

variants! {
    DockVariant {
        Default => "default",
        Magnify => "magnify",
        Minimal => "minimal",
    }
}

pub fn accordion(props: Props<'_>, children: &str) -> String {
    let variant = AccordionVariant::parse(props.variant());
    let mode = match props.str("type") {
        Some("multiple") => "multiple",
        _ => "single",
    };

    format!(
        r#"<div class="{}" data-accordion="{mode}">{children}</div>"#,
        classes("accordion", variant.as_str())
    )
}

pub fn accordion_item(props: Props<'_>, children: &str) -> String {
    let open = if props.flag("open") || props.flag("defaultOpen") {
        " open"
    } else {
        ""
    };

    format!(
        r#"<details class="sui-accordion-item"{open}><summary class="sui-accordion-trigger">{}</summary><div class="sui-accordion-content">{children}</div></details>"#,
        props.text("title", "Section")
    )
}

pub fn tabs(props: Props<'_>, children: &str) -> String {
    let variant = TabsVariant::parse(props.variant());
    let labels: Vec<String> = TAB_PANEL
        .captures_iter(children)
        .map(|c| c[1].to_string())
        .collect();
    let selected = props
        .number("defaultIndex")
        .map(|n| n as usize)
        .filter(|n| *n < labels.len())
        .unwrap_or(0);

    let list: String = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            format!(
                r#"<button type="button" role="tab" class="sui-tab" data-index="{i}" aria-selected="{}">{label}</button>"#,
                i == selected
            )
        })
        .collect();

    let mut index = 0;
    let panels = TAB_PANEL.replace_all(children, |caps: &Captures| {
        let hidden = if index == selected { "" } else { " hidden" };
        let rewritten = format!(
            r#"<div class="sui-tab-panel" role="tabpanel" data-index="{index}"{hidden} data-tab-label="{}""#,
            &caps[1]
        );
        index += 1;
        rewritten
    });

    format!(
        r#"<div class="{}" data-tabs data-selected="{selected}"><div class="sui-tab-list" role="tablist">{list}</div>{panels}</div>"#,
        classes("tabs", variant.as_str())
    )
}

pub fn tab(props: Props<'_>, children: &str) -> String {
    let label = props
        .str("label")
        .or_else(|| props.str("value"))
        .unwrap_or("Tab");

    format!(
        r#"<div class="sui-tab-panel" role="tabpanel" data-tab-label="{}">{children}</div>"#,
        escape(label)
    )
}

pub fn stepper(props: Props<'_>, children: &str) -> String {
    let variant = StepperVariant::parse(props.variant());
    let current = props.number("current").map(|n| n as usize).unwrap_or(0);

    let mut index = 0;
    let steps = STEP.replace_all(children, |_: &Captures| {
        let state = match index.cmp(&current) {
            std::cmp::Ordering::Less => "complete",
            std::cmp::Ordering::Equal => "current",
            std::cmp::Ordering::Greater => "upcoming",
        };
        index += 1;
        format!(r#"<li class="sui-step" data-step="{index}" data-state="{state}""#)
    });

    format!(
        r#"<ol class="{}" data-current="{current}">{steps}</ol>"#,
        classes("stepper", variant.as_str())
    )
}

pub fn step(props: Props<'_>, children: &str) -> String {
    format!(
        r#"<li class="sui-step"><span class="sui-step-marker"></span><div class="sui-step-body"><p class="sui-step-title">{}</p>{children}</div></li>"#,
        props.text("title", "Step")
    )
}

pub fn timeline(props: Props<'_>, children: &str) -> String {
    let variant = TimelineVariant::parse(props.variant());
    format!(
        r#"<ol class="{}">{children}</ol>"#,
        classes("timeline", variant.as_str())
    )
}

pub fn timeline_item(props: Props<'_>, children: &str) -> String {
    format!(
        r#"<li class="sui-timeline-item"><span class="sui-timeline-dot"></span><div class="sui-timeline-content">{}<p class="sui-timeline-title">{}</p>{children}</div></li>"#,
        optional(&props, "date", "time", "sui-timeline-date"),
        props.text("title", "")
    )
}

pub fn dock(props: Props<'_>, children: &str) -> String {
    let variant = DockVariant::parse(props.variant());
    let items: String = props
        .list("items")
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                r#"<button type="button" class="sui-dock-item" data-index="{i}" title="{item}"><span class="sui-dock-icon">{}</span><span class="sui-dock-label">{item}</span></button>"#,
                item.chars().next().unwrap_or('•')
            )
        })
        .collect();

    format!(
        r#"<nav class="{}" data-dock data-hover="-1">{items}{children}</nav>"#,
        classes("dock", variant.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::props;
    use syncdocs_mdx::PropValue;

    fn two_tabs() -> String {
        let a = props(&[("label", "Preview")]);
        let b = props(&[("label", "Code")]);
        format!(
            "{}{}",
            tab(Props::new(&a), "<p>one</p>"),
            tab(Props::new(&b), "<p>two</p>")
        )
    }

    #[test]
    fn tabs_build_list_from_panels() {
        let p = props(&[("variant", "pills")]);

        let html = tabs(Props::new(&p), &two_tabs());

        assert!(html.contains("sui-tabs--pills"));
        assert!(html.contains(r#"data-index="0" aria-selected="true">Preview</button>"#));
        assert!(html.contains(r#"data-index="1" aria-selected="false">Code</button>"#));
        assert!(html.contains(r#"data-index="1" hidden data-tab-label="Code""#));
        assert!(!html.contains(r#"data-index="0" hidden"#));
    }

    #[test]
    fn tabs_ignore_out_of_range_default() {
        let mut p = props(&[("variant", "fancy")]);
        p.insert("defaultIndex".into(), PropValue::Expression("9".into()));

        let html = tabs(Props::new(&p), &two_tabs());

        assert!(html.contains(r#"data-selected="0""#));
        assert!(html.contains("sui-tabs--underline"));
    }

    #[test]
    fn accordion_items_are_details() {
        let mut item = props(&[("title", "Is it accessible?")]);
        item.insert("defaultOpen".into(), PropValue::Boolean(true));
        let inner = accordion_item(Props::new(&item), "Yes.");

        let html = accordion(Props::new(&props(&[("type", "multiple")])), &inner);

        assert!(html.contains(r#"data-accordion="multiple""#));
        assert!(html.contains(r#"<details class="sui-accordion-item" open>"#));
        assert!(html.contains("sui-accordion--bordered"));
    }

    #[test]
    fn stepper_marks_step_states() {
        let steps: String = ["Account", "Profile", "Done"]
            .iter()
            .map(|t| step(Props::new(&props(&[("title", *t)])), ""))
            .collect();
        let mut p = props(&[]);
        p.insert("current".into(), PropValue::Expression("1".into()));

        let html = stepper(Props::new(&p), &steps);

        assert!(html.contains(r#"data-step="1" data-state="complete""#));
        assert!(html.contains(r#"data-step="2" data-state="current""#));
        assert!(html.contains(r#"data-step="3" data-state="upcoming""#));
    }

    #[test]
    fn dock_renders_items_and_falls_back() {
        let mut p = props(&[("variant", "wobbly")]);
        p.insert(
            "items".into(),
            PropValue::Expression(r#"["Home", "Search"]"#.into()),
        );

        let html = dock(Props::new(&p), "");

        assert!(html.contains("sui-dock--default"));
        assert_eq!(html.matches("sui-dock-item").count(), 2);
        assert!(html.contains(r#"title="Search""#));
    }

    #[test]
    fn timeline_item_shows_date() {
        let p = props(&[("title", "v1.0"), ("date", "2024-01-01")]);

        let html = timeline_item(Props::new(&p), "Released");

        assert!(html.contains(r#"<time class="sui-timeline-date">2024-01-01</time>"#));
        assert!(html.contains("v1.0"));
    }
}
