//! Components that present content: tables, cards, media.

use crate::props::{escape, Props};
use crate::ui::{classes, optional, Size};

variants! {
    TableVariant {
        Default => "default",
        Striped => "striped",
        Bordered => "bordered",
        Compact => "compact",
    }
}

variants! {
    AvatarVariant {
        Circle => "circle",
        Rounded => "rounded",
        Square => "square",
    }
}

variants! {
    CardVariant {
        Default => "default",
        Elevated => "elevated",
        Outline => "outline",
        Glass => "glass",
    }
}

variants! {
    CarouselVariant {
        Slide => "slide",
        Fade => "fade",
        Cards => "cards",
    }
}

variants! {
    MarqueeVariant {
        Left => "left",
        Right => "right",
        Vertical => "vertical",
    }
}

/// Cells of a `"a | b | c"` row.
fn cells(row: &str) -> Vec<&str> {
    row.split('|').map(str::trim).collect()
}

pub fn table(props: Props<'_>, children: &str) -> String {
    let variant = TableVariant::parse(props.variant());
    let class = classes("table", variant.as_str());

    if !children.trim().is_empty() {
        return format!(r#"<div class="{class}">{children}</div>"#);
    }

    let head: String = props
        .list("headers")
        .iter()
        .map(|h| format!("<th>{h}</th>"))
        .collect();
    let body: String = props
        .list("rows")
        .iter()
        .map(|row| {
            let cols: String = cells(row).iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{cols}</tr>")
        })
        .collect();

    format!(
        r#"<div class="{class}"><table>{}<thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></div>"#,
        optional(&props, "caption", "caption", "sui-table-caption")
    )
}

/// Up to two initials from a display name.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn avatar(props: Props<'_>, _children: &str) -> String {
    let variant = AvatarVariant::parse(props.variant());
    let size = Size::parse(props.str("size"));
    let name = props.str("name").or_else(|| props.str("alt")).unwrap_or("");
    let class = format!(
        "{} sui-avatar--{}",
        classes("avatar", variant.as_str()),
        size.as_str()
    );

    let inner = match props.str("src") {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(src),
            escape(name)
        ),
        None => {
            let text = initials(name);
            format!(
                r#"<span class="sui-avatar-fallback">{}</span>"#,
                if text.is_empty() { "?".to_string() } else { escape(&text) }
            )
        }
    };

    format!(r#"<span class="{class}">{inner}</span>"#)
}

pub fn card(props: Props<'_>, children: &str) -> String {
    let variant = CardVariant::parse(props.variant());
    let header = format!(
        "{}{}",
        optional(&props, "title", "h3", "sui-card-title"),
        optional(&props, "description", "p", "sui-card-description")
    );
    let header = if header.is_empty() {
        header
    } else {
        format!(r#"<header class="sui-card-header">{header}</header>"#)
    };
    let footer = optional(&props, "footer", "footer", "sui-card-footer");

    format!(
        r#"<div class="{}">{header}<div class="sui-card-content">{children}</div>{footer}</div>"#,
        classes("card", variant.as_str())
    )
}

pub fn carousel(props: Props<'_>, children: &str) -> String {
    let variant = CarouselVariant::parse(props.variant());
    let autoplay = props.flag("autoplay");
    let interval = props
        .number("interval")
        .filter(|n| *n >= 500.0)
        .unwrap_or(4000.0) as u64;

    let slides: String = if children.trim().is_empty() {
        props
            .list("items")
            .iter()
            .map(|item| slide_html(item))
            .collect()
    } else {
        children.to_string()
    };

    format!(
        concat!(
            r#"<div class="{}" data-carousel data-index="0" data-autoplay="{}" data-interval="{}">"#,
            r#"<div class="sui-carousel-track">{}</div>"#,
            r#"<button type="button" class="sui-carousel-prev" aria-label="Previous" data-carousel-prev>‹</button>"#,
            r#"<button type="button" class="sui-carousel-next" aria-label="Next" data-carousel-next>›</button>"#,
            r#"</div>"#
        ),
        classes("carousel", variant.as_str()),
        autoplay,
        interval,
        slides
    )
}

fn slide_html(body: &str) -> String {
    format!(r#"<div class="sui-carousel-slide">{body}</div>"#)
}

pub fn slide(_props: Props<'_>, children: &str) -> String {
    slide_html(children)
}

pub fn marquee(props: Props<'_>, children: &str) -> String {
    let variant = MarqueeVariant::parse(props.variant());
    let items: String = if children.trim().is_empty() {
        props
            .list("items")
            .iter()
            .map(|item| format!(r#"<span class="sui-marquee-item">{item}</span>"#))
            .collect()
    } else {
        children.to_string()
    };
    let pause = if props.flag("pauseOnHover") {
        " sui-marquee--pause"
    } else {
        ""
    };

    // Content is repeated so the loop has no visible seam
    format!(
        r#"<div class="{}{pause}"><div class="sui-marquee-track">{items}</div><div class="sui-marquee-track" aria-hidden="true">{items}</div></div>"#,
        classes("marquee", variant.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::props;
    use syncdocs_mdx::PropValue;

    #[test]
    fn table_from_props() {
        let mut p = props(&[("variant", "striped")]);
        p.insert(
            "headers".into(),
            PropValue::Expression(r#"["Name", "Role"]"#.into()),
        );
        p.insert(
            "rows".into(),
            PropValue::Expression(r#"["Ada | Admin", "Lin | Editor"]"#.into()),
        );

        let html = table(Props::new(&p), "");

        assert!(html.starts_with(r#"<div class="sui-table sui-table--striped"><table>"#));
        assert!(html.contains("<th>Name</th><th>Role</th>"));
        assert!(html.contains("<tr><td>Lin</td><td>Editor</td></tr>"));
    }

    #[test]
    fn table_wraps_children() {
        let html = table(Props::new(&props(&[("variant", "?")])), "<table></table>");

        assert_eq!(
            html,
            r#"<div class="sui-table sui-table--default"><table></table></div>"#
        );
    }

    #[test]
    fn avatar_falls_back_to_initials() {
        let p = props(&[("name", "grace hopper"), ("variant", "hexagon")]);

        let html = avatar(Props::new(&p), "");

        assert!(html.contains("sui-avatar--circle"));
        assert!(html.contains(">GH<"));
    }

    #[test]
    fn card_omits_empty_header() {
        let html = card(Props::empty(), "Body");

        assert_eq!(
            html,
            r#"<div class="sui-card sui-card--default"><div class="sui-card-content">Body</div></div>"#
        );
    }

    #[test]
    fn carousel_exposes_local_state() {
        let mut p = props(&[("variant", "fade")]);
        p.insert("autoplay".into(), PropValue::Boolean(true));

        let html = carousel(Props::new(&p), &slide(Props::empty(), "One"));

        assert!(html.contains(r#"data-index="0" data-autoplay="true" data-interval="4000""#));
        assert!(html.contains(r#"<div class="sui-carousel-slide">One</div>"#));
        assert!(html.contains("sui-carousel--fade"));
    }

    #[test]
    fn marquee_duplicates_track() {
        let p = props(&[("items", "Rust, Zig"), ("variant", "diagonal")]);

        let html = marquee(Props::new(&p), "");

        assert_eq!(html.matches("sui-marquee-track").count(), 2);
        assert_eq!(html.matches(">Zig<").count(), 2);
        assert!(html.contains("sui-marquee--left"));
    }
}
