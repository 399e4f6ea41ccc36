//! Page mounting.
//!
//! Turns a compiled page module back into nodes and renders them: markdown
//! through pulldown-cmark with the docs typography wrappers, elements through
//! the component registry. Rendering failures are contained to the content
//! area, which then shows a short error message.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Parser, Tag, TagEnd};

use syncdocs_components::{escape, ComponentRegistry, RegistryError, ThemeMode, UiState};
use syncdocs_content::{breadcrumbs, pager};
use syncdocs_mdx::{load_module, markdown_options, slugify, MdxNode, ModuleError};

use crate::builder::BuildError;
use crate::pages::PageProps;
use crate::templates::{Context, TemplateEngine};

/// Errors raised while mounting a page module.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error("Line {line}: {source}")]
    Component {
        line: usize,
        #[source]
        source: RegistryError,
    },
}

/// Site-wide values shared by every page.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub title: String,
    pub base_url: String,
    /// Inject the live reload client
    pub live_reload: bool,
    pub ui: UiState,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Sync UI".to_string(),
            base_url: "/".to_string(),
            live_reload: false,
            ui: UiState::default(),
        }
    }
}

/// Renders page props to HTML documents.
pub struct PageRenderer {
    registry: ComponentRegistry,
    templates: TemplateEngine,
}

impl PageRenderer {
    pub fn new(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            templates: TemplateEngine::new(),
        }
    }

    /// Renderer with the built-in components.
    pub fn builtin() -> Self {
        Self::new(ComponentRegistry::builtin())
    }

    /// Mount a compiled module.
    pub fn try_render(&self, code: &str) -> Result<String, RenderError> {
        let nodes = load_module(code)?;
        let mut out = String::new();
        self.render_nodes(&nodes, &mut out)?;
        Ok(out)
    }

    /// Mount a compiled module, degrading to an error message on failure.
    pub fn render_content(&self, code: &str) -> String {
        match self.try_render(code) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to render page content: {}", e);
                error_message(&e)
            }
        }
    }

    /// Render the complete HTML document for a page.
    pub fn render_document(&self, props: &PageProps, site: &SiteMeta) -> Result<String, BuildError> {
        let context = Context {
            title: props.title().to_string(),
            description: props.description().map(str::to_string),
            site_title: site.title.clone(),
            base_url: site.base_url.clone(),
            current_url: props.entry.url.clone(),
            content: self.render_content(&props.code),
            nav: props.navigation.clone(),
            toc: props.toc.clone(),
            pager: pager(&props.navigation, &props.entry.slug),
            breadcrumbs: breadcrumbs(&props.entry),
            theme: site.ui.theme,
            live_reload: site.live_reload,
        };

        self.templates
            .render_page("doc.html", &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    /// Render a bare status page (not found, build failure).
    pub fn render_status(&self, title: &str, message: &str, site: &SiteMeta) -> Result<String, BuildError> {
        self.templates
            .render_status(title, message, &site.base_url, site.ui.theme, site.live_reload)
            .map_err(|e| BuildError::TemplateError(e.to_string()))
    }

    fn render_nodes(&self, nodes: &[MdxNode], out: &mut String) -> Result<(), RenderError> {
        for node in nodes {
            match node {
                MdxNode::Markdown { source, inline } => {
                    out.push_str(&render_markdown(source, *inline));
                }
                MdxNode::Element {
                    name,
                    props,
                    children,
                    line,
                } => {
                    let mut inner = String::new();
                    self.render_nodes(children, &mut inner)?;
                    let html = self
                        .registry
                        .render(name, props, &inner)
                        .map_err(|source| RenderError::Component { line: *line, source })?;
                    out.push_str(&html);
                }
            }
        }
        Ok(())
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Minimal content shown when a page fails to mount.
fn error_message(error: &RenderError) -> String {
    format!(
        r#"<div class="sui-render-error" role="alert"><p>This page could not be displayed.</p><pre>{}</pre></div>"#,
        escape(&error.to_string())
    )
}

/// Render markdown with heading anchors, copyable code blocks, and wrapped
/// tables and blockquotes.
///
/// `inline` drops the paragraph around a single-paragraph result.
pub fn render_markdown(source: &str, inline: bool) -> String {
    let mut events: Vec<Event> = Vec::new();
    let mut heading: Option<(u8, Vec<Event>)> = None;
    let mut code: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(source, markdown_options()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some((level as u8, Vec::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, inner)) = heading.take() {
                    events.push(Event::Html(CowStr::from(heading_html(level, inner))));
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                code = Some((lang, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, text)) = code.take() {
                    events.push(Event::Html(CowStr::from(code_html(lang.as_deref(), &text))));
                }
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::Start(Tag::Table(alignments)) => {
                events.push(Event::Html(CowStr::Borrowed(r#"<div class="sui-prose-table">"#)));
                events.push(Event::Start(Tag::Table(alignments)));
            }
            Event::End(TagEnd::Table) => {
                events.push(Event::End(TagEnd::Table));
                events.push(Event::Html(CowStr::Borrowed("</div>")));
            }
            Event::Start(Tag::BlockQuote(_)) => {
                events.push(Event::Html(CowStr::Borrowed(
                    r#"<blockquote class="sui-blockquote">"#,
                )));
            }
            other => match heading.as_mut() {
                Some((_, inner)) => inner.push(other),
                None => events.push(other),
            },
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());

    if inline {
        if let Some(inner) = single_paragraph(&out) {
            return inner.to_string();
        }
    }
    out
}

/// `<hN id="…">…</hN>` with the anchor derived from the visible text.
fn heading_html(level: u8, inner: Vec<Event>) -> String {
    let mut text = String::new();
    for event in &inner {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    let id = slugify(text.trim());

    let mut body = String::new();
    html::push_html(&mut body, inner.into_iter());

    format!(
        r##"<h{level} id="{id}" class="sui-heading"><a class="sui-anchor" href="#{id}" aria-hidden="true">#</a>{body}</h{level}>"##
    )
}

fn code_html(lang: Option<&str>, text: &str) -> String {
    let class = lang
        .map(|l| format!(r#" class="language-{}""#, escape(l)))
        .unwrap_or_default();
    format!(
        r#"<div class="sui-code" data-code><button type="button" class="sui-copy" data-copy>Copy</button><pre><code{class}>{}</code></pre></div>"#,
        escape(text)
    )
}

fn single_paragraph(html: &str) -> Option<&str> {
    let inner = html.trim_end().strip_prefix("<p>")?.strip_suffix("</p>")?;
    (!inner.contains("<p>")).then_some(inner)
}
