//! Landing page blocks.

use crate::props::{escape, Props};
use crate::ui::{classes, content, optional};

variants! {
    PricingVariant {
        Basic => "basic",
        Popular => "popular",
        Enterprise => "enterprise",
    }
}

variants! {
    TestimonialVariant {
        Card => "card",
        Minimal => "minimal",
        Highlight => "highlight",
    }
}

variants! {
    HeroVariant {
        Centered => "centered",
        Split => "split",
        Gradient => "gradient",
    }
}

variants! {
    FeatureGridVariant {
        Grid => "grid",
        Cards => "cards",
        List => "list",
    }
}

variants! {
    FooterVariant {
        Simple => "simple",
        Columns => "columns",
        Minimal => "minimal",
    }
}

/// `"Label|/href"`, or a bare label linking nowhere.
fn link(item: &str) -> String {
    let (label, href) = item.split_once('|').unwrap_or((item, "#"));
    format!(r#"<a href="{}">{}</a>"#, href.trim(), label.trim())
}

pub fn pricing(props: Props<'_>, children: &str) -> String {
    let variant = PricingVariant::parse(props.variant());
    let badge = match variant {
        PricingVariant::Popular => r#"<span class="sui-badge sui-badge--default">Most popular</span>"#,
        _ => "",
    };
    let features: String = props
        .list("features")
        .iter()
        .map(|f| format!(r#"<li class="sui-pricing-feature">{f}</li>"#))
        .collect();
    let cta_class = match variant {
        PricingVariant::Popular => "sui-btn sui-btn--primary sui-btn--lg",
        _ => "sui-btn sui-btn--outline sui-btn--lg",
    };

    format!(
        concat!(
            r#"<div class="{}">{}"#,
            r#"<h3 class="sui-pricing-name">{}</h3>"#,
            r#"<p class="sui-pricing-price"><span class="sui-pricing-amount">{}</span><span class="sui-pricing-period">{}</span></p>"#,
            r#"{}<ul class="sui-pricing-features">{}</ul>{}"#,
            r#"<a class="{}" href="{}">{}</a></div>"#
        ),
        classes("pricing", variant.as_str()),
        badge,
        props.text("name", "Plan"),
        props.text("price", "$0"),
        props.text("period", "/month"),
        optional(&props, "description", "p", "sui-pricing-description"),
        features,
        children,
        cta_class,
        props.text("href", "#"),
        props.text("cta", "Get started")
    )
}

pub fn testimonial(props: Props<'_>, children: &str) -> String {
    let variant = TestimonialVariant::parse(props.variant());
    let avatar = match props.str("avatar") {
        Some(src) if variant != TestimonialVariant::Minimal => format!(
            r#"<img class="sui-testimonial-avatar" src="{}" alt="">"#,
            escape(src)
        ),
        _ => String::new(),
    };

    format!(
        r#"<figure class="{}"><blockquote class="sui-testimonial-quote">{}</blockquote><figcaption class="sui-testimonial-author">{avatar}<span class="sui-testimonial-name">{}</span>{}</figcaption></figure>"#,
        classes("testimonial", variant.as_str()),
        content(&props, children, "quote", ""),
        props.text("author", "Anonymous"),
        optional(&props, "role", "span", "sui-testimonial-role")
    )
}

pub fn hero(props: Props<'_>, children: &str) -> String {
    let variant = HeroVariant::parse(props.variant());
    let primary = format!(
        r#"<a class="sui-btn sui-btn--primary sui-btn--lg" href="{}">{}</a>"#,
        props.text("href", "/docs/"),
        props.text("cta", "Get started")
    );
    let secondary = match props.str("secondary") {
        Some(label) => format!(
            r#"<a class="sui-btn sui-btn--outline sui-btn--lg" href="{}">{}</a>"#,
            props.text("secondaryHref", "#"),
            escape(label)
        ),
        None => String::new(),
    };
    let media = match variant {
        HeroVariant::Split => format!(r#"<div class="sui-hero-media">{children}</div>"#),
        _ => children.to_string(),
    };

    format!(
        r#"<section class="{}"><div class="sui-hero-copy"><h1 class="sui-hero-title">{}</h1>{}<div class="sui-hero-actions">{primary}{secondary}</div></div>{media}</section>"#,
        classes("hero", variant.as_str()),
        props.text("title", "Build faster"),
        optional(&props, "subtitle", "p", "sui-hero-subtitle")
    )
}

pub fn feature_grid(props: Props<'_>, children: &str) -> String {
    let variant = FeatureGridVariant::parse(props.variant());
    let columns = props
        .number("columns")
        .map(|n| n as u8)
        .unwrap_or(3)
        .clamp(1, 4);
    let features: String = props
        .list("features")
        .iter()
        .map(|f| {
            let (title, body) = f.split_once(':').unwrap_or((f, ""));
            format!(
                r#"<div class="sui-feature"><h3 class="sui-feature-title">{}</h3><p class="sui-feature-body">{}</p></div>"#,
                title.trim(),
                body.trim()
            )
        })
        .collect();

    format!(
        r#"<div class="{}" style="--sui-columns: {columns}">{features}{children}</div>"#,
        classes("features", variant.as_str())
    )
}

pub fn footer(props: Props<'_>, children: &str) -> String {
    let variant = FooterVariant::parse(props.variant());
    let links: String = props.list("links").iter().map(|l| link(l)).collect();
    let brand = match variant {
        FooterVariant::Minimal => String::new(),
        _ => optional(&props, "brand", "strong", "sui-footer-brand"),
    };

    format!(
        r#"<footer class="{}">{brand}<nav class="sui-footer-links">{links}</nav>{children}<p class="sui-footer-copy">{}</p></footer>"#,
        classes("footer", variant.as_str()),
        props.text("copyright", "")
    )
}
