//! Template engine for rendering documentation pages.

use minijinja::{context, Environment};
use serde::Serialize;

use syncdocs_components::ThemeMode;
use syncdocs_content::{Crumb, NavSection, Pager};
use syncdocs_mdx::TocEntry;

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    pub description: Option<String>,
    /// Site title
    pub site_title: String,
    /// Base URL
    pub base_url: String,
    /// URL of the page being rendered, for the active sidebar link
    pub current_url: String,
    /// Rendered content HTML
    pub content: String,
    /// Sidebar sections
    pub nav: Vec<NavSection>,
    /// Table of contents
    pub toc: Vec<TocEntry>,
    pub pager: Pager,
    pub breadcrumbs: Vec<Crumb>,
    pub theme: ThemeMode,
    /// Include the live reload client
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");
        env.add_template_owned("doc.html".to_string(), DOC_TEMPLATE.to_string())
            .expect("Failed to add doc template");
        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");
        env.add_template_owned("palette.html".to_string(), PALETTE_TEMPLATE.to_string())
            .expect("Failed to add palette template");
        env.add_template_owned("status.html".to_string(), STATUS_TEMPLATE.to_string())
            .expect("Failed to add status template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(&self, template: &str, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            description => &context.description,
            site_title => &context.site_title,
            base_url => &context.base_url,
            current_url => &context.current_url,
            content => &context.content,
            nav => &context.nav,
            toc => &context.toc,
            pager => &context.pager,
            breadcrumbs => &context.breadcrumbs,
            theme => context.theme.as_str(),
            live_reload => context.live_reload,
        })
    }

    /// Render a page with a title and a message and no navigation.
    pub fn render_status(
        &self,
        title: &str,
        message: &str,
        base_url: &str,
        theme: ThemeMode,
        live_reload: bool,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("status.html")?;

        tmpl.render(context! {
            title => title,
            message => message,
            site_title => "Sync UI",
            base_url => base_url,
            theme => theme.as_str(),
            live_reload => live_reload,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <header class="site-header">
    <button type="button" class="menu-btn" aria-label="Toggle navigation" data-sidebar-toggle>&#9776;</button>
    <a href="/docs/" class="site-logo">{{ site_title }}</a>
    <button type="button" class="search-trigger" data-search-trigger>
      <span>Search documentation...</span><kbd>/</kbd>
    </button>
    <button type="button" class="theme-toggle" aria-label="Toggle theme" data-theme-toggle>&#9680;</button>
  </header>
  <div class="layout">
    <nav class="sidebar" data-sidebar>
      {% include "nav.html" %}
    </nav>
    <main class="main">
      {% block content %}{% endblock %}
    </main>
  </div>
  <footer class="site-footer">
    <form class="newsletter" data-newsletter>
      <label for="newsletter-email">Get notified about new components</label>
      <div class="newsletter-row">
        <input id="newsletter-email" type="email" name="email" placeholder="you@example.com" required>
        <button type="submit" class="sui-btn sui-btn--primary sui-btn--md">Subscribe</button>
      </div>
    </form>
    <div class="toast-region" aria-live="polite" data-toasts></div>
  </footer>
  {% include "palette.html" %}
  <script src="{{ base_url }}assets/main.js" data-search-index="{{ base_url }}search-index.json"></script>
  {% if live_reload %}<script src="{{ base_url }}assets/reload.js"></script>{% endif %}
</body>
</html>"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  {% if breadcrumbs %}
  <ol class="breadcrumbs">
  {% for crumb in breadcrumbs %}
    <li>{% if crumb.url %}<a href="{{ crumb.url }}">{{ crumb.title }}</a>{% else %}<span>{{ crumb.title }}</span>{% endif %}</li>
  {% endfor %}
  </ol>
  {% endif %}
  <header class="doc-header">
    <h1 class="doc-title">{{ title }}</h1>
    {% if description %}<p class="doc-description">{{ description }}</p>{% endif %}
  </header>
  <div class="content">
    {{ content | safe }}
  </div>
  <nav class="pager">
    {% if pager.prev %}<a class="pager-prev" href="{{ pager.prev.url }}"><small>Previous</small>{{ pager.prev.title }}</a>{% endif %}
    {% if pager.next %}<a class="pager-next" href="{{ pager.next.url }}"><small>Next</small>{{ pager.next.title }}</a>{% endif %}
  </nav>
</article>

{% if toc %}
<aside class="toc">
  <h2>On this page</h2>
  <ul>
  {% for entry in toc %}
    <li class="toc-level-{{ entry.level }}">
      <a href="#{{ entry.id }}" data-toc-link="{{ entry.id }}">{{ entry.text }}</a>
    </li>
  {% endfor %}
  </ul>
</aside>
{% endif %}
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"<ul class="nav-list">
{% for section in nav %}
  <li class="nav-section">
    <h4 class="nav-section-title">{{ section.title }}</h4>
    <ul class="nav-children">
      {% for item in section.items %}
      <li class="nav-item{% if item.url == current_url %} active{% endif %}">
        <a href="{{ item.url }}"{% if item.url == current_url %} aria-current="page"{% endif %}>{{ item.title }}</a>
      </li>
      {% endfor %}
    </ul>
  </li>
{% endfor %}
</ul>"##;

const PALETTE_TEMPLATE: &str = r##"<div class="palette" data-palette hidden>
  <div class="palette-backdrop" data-palette-backdrop></div>
  <div class="palette-panel" role="dialog" aria-label="Search documentation">
    <div class="palette-input-row">
      <input type="search" class="palette-input" placeholder="Search components..." autocomplete="off" data-palette-input>
      <button type="button" class="palette-close" aria-label="Close search" data-palette-close>&times;</button>
    </div>
    <div class="palette-results" role="listbox" data-palette-results></div>
  </div>
</div>"##;

const STATUS_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <main class="status">
    <h1>{{ title }}</h1>
    <pre class="status-message">{{ message }}</pre>
    <a href="/docs/">Back to the docs</a>
  </main>
  {% if live_reload %}<script src="{{ base_url }}assets/reload.js"></script>{% endif %}
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use syncdocs_content::{navigation, Category, DocEntry, NavLink};

    fn context() -> Context {
        let entries = vec![
            DocEntry::new("", "Introduction", Category::GettingStarted),
            DocEntry::new("components/button", "Button", Category::Components),
        ];
        Context {
            title: "Button".to_string(),
            description: Some("Animated buttons".to_string()),
            site_title: "Sync UI".to_string(),
            base_url: "/".to_string(),
            current_url: "/docs/components/button".to_string(),
            content: "<p>Hello world</p>".to_string(),
            nav: navigation(&entries),
            toc: vec![TocEntry {
                level: 2,
                text: "Usage".to_string(),
                id: "usage".to_string(),
            }],
            pager: Pager {
                prev: Some(NavLink::from(&entries[0])),
                next: None,
            },
            breadcrumbs: vec![],
            theme: ThemeMode::Light,
            live_reload: false,
        }
    }

    #[test]
    fn renders_basic_page() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("doc.html", &context()).unwrap();

        assert!(html.contains("<title>Button - Sync UI</title>"));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains(r#"<html lang="en" data-theme="light">"#));
        assert!(html.contains(r##"<a href="#usage" data-toc-link="usage">Usage</a>"##));
        assert!(!html.contains("reload.js"));
    }

    #[test]
    fn renders_navigation() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("doc.html", &context()).unwrap();

        assert!(html.contains("Getting Started"));
        assert!(html.contains(r#"<li class="nav-item active">"#));
        assert!(html.contains(r#"aria-current="page">Button</a>"#));
        assert!(html.contains("<small>Previous</small>Introduction"));
    }

    #[test]
    fn escapes_titles() {
        let engine = TemplateEngine::new();
        let mut ctx = context();
        ctx.title = "<script>".to_string();
        ctx.theme = ThemeMode::Dark;
        ctx.live_reload = true;

        let html = engine.render_page("doc.html", &ctx).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains("assets/reload.js"));
    }

    #[test]
    fn renders_status_page() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_status("Not found", "No page at /docs/x", "/", ThemeMode::Light, false)
            .unwrap();

        assert!(html.contains("<h1>Not found</h1>"));
        assert!(html.contains("No page at"));
    }
}
