//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file: site chrome followed by component styles.
    pub fn generate_css() -> String {
        format!("{}\n{}", SITE_CSS, COMPONENT_CSS)
    }

    /// Generate the runtime script.
    pub fn generate_js() -> String {
        RUNTIME_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* Sync UI docs theme */

:root {
  --background: #ffffff;
  --foreground: #0a0a0a;
  --muted: #f4f4f5;
  --muted-foreground: #71717a;
  --card: #ffffff;
  --card-foreground: #0a0a0a;
  --border: #e4e4e7;
  --primary: #18181b;
  --primary-foreground: #fafafa;
  --secondary: #f4f4f5;
  --secondary-foreground: #18181b;
  --accent: #f4f4f5;
  --accent-foreground: #18181b;
  --destructive: #dc2626;
  --success: #16a34a;
  --warning: #d97706;
  --info: #2563eb;
  --ring: #a1a1aa;
  --radius: 0.5rem;
  --sidebar-width: 260px;
  --toc-width: 200px;
  --content-max-width: 780px;
  --header-height: 3.5rem;
}

[data-theme="dark"] {
  --background: #09090b;
  --foreground: #fafafa;
  --muted: #18181b;
  --muted-foreground: #a1a1aa;
  --card: #0c0c0e;
  --card-foreground: #fafafa;
  --border: #27272a;
  --primary: #fafafa;
  --primary-foreground: #18181b;
  --secondary: #27272a;
  --secondary-foreground: #fafafa;
  --accent: #27272a;
  --accent-foreground: #fafafa;
  --ring: #52525b;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  gap: 1rem;
  height: var(--header-height);
  padding: 0 1.5rem;
  background: var(--background);
  border-bottom: 1px solid var(--border);
}

.site-logo {
  font-weight: 700;
  color: var(--foreground);
  text-decoration: none;
}

.search-trigger {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  margin-left: auto;
  padding: 0.375rem 0.75rem;
  color: var(--muted-foreground);
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  cursor: pointer;
}

.search-trigger kbd {
  font-family: ui-monospace, monospace;
  font-size: 0.75rem;
  padding: 0 0.375rem;
  border: 1px solid var(--border);
  border-radius: 0.25rem;
}

.theme-toggle,
.menu-btn {
  padding: 0.375rem 0.625rem;
  color: var(--foreground);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  cursor: pointer;
}

.menu-btn {
  display: none;
}

.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: calc(100vh - var(--header-height));
}

/* Sidebar */
.sidebar {
  position: sticky;
  top: var(--header-height);
  height: calc(100vh - var(--header-height));
  overflow-y: auto;
  padding: 1.5rem 1rem;
  border-right: 1px solid var(--border);
}

.nav-list,
.nav-children {
  list-style: none;
}

.nav-section {
  margin-bottom: 1.25rem;
}

.nav-section-title {
  padding: 0 0.75rem;
  margin-bottom: 0.25rem;
  font-size: 0.8125rem;
  font-weight: 600;
}

.nav-item a {
  display: block;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
  text-decoration: none;
  border-radius: var(--radius);
}

.nav-item a:hover {
  color: var(--foreground);
  background: var(--accent);
}

.nav-item.active > a {
  color: var(--foreground);
  font-weight: 500;
  background: var(--muted);
}

/* Main content */
.main {
  display: grid;
  grid-template-columns: 1fr var(--toc-width);
  gap: 2rem;
  padding: 2rem;
  max-width: calc(var(--content-max-width) + var(--toc-width) + 4rem);
}

.doc {
  max-width: var(--content-max-width);
  min-width: 0;
}

.breadcrumbs {
  display: flex;
  gap: 0.5rem;
  list-style: none;
  margin-bottom: 1rem;
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.breadcrumbs li + li::before {
  content: "/";
  margin-right: 0.5rem;
}

.breadcrumbs a {
  color: inherit;
  text-decoration: none;
}

.doc-title {
  font-size: 2.25rem;
  font-weight: 700;
}

.doc-description {
  margin: 0.5rem 0 2rem;
  font-size: 1.125rem;
  color: var(--muted-foreground);
}

.content h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin: 2.5rem 0 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--border);
}

.content h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin: 1.75rem 0 0.75rem;
}

.content h4 {
  font-size: 1rem;
  font-weight: 600;
  margin: 1.5rem 0 0.5rem;
}

.sui-heading {
  position: relative;
  scroll-margin-top: calc(var(--header-height) + 1rem);
}

.sui-anchor {
  position: absolute;
  left: -1.25rem;
  color: var(--muted-foreground);
  text-decoration: none;
  opacity: 0;
}

.sui-heading:hover .sui-anchor {
  opacity: 1;
}

.content p,
.content ul,
.content ol {
  margin-bottom: 1rem;
}

.content ul,
.content ol {
  padding-left: 1.5rem;
}

.content a {
  color: var(--foreground);
  text-decoration: underline;
  text-underline-offset: 4px;
}

.content code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
  padding: 0.125rem 0.375rem;
  background: var(--muted);
  border-radius: 0.25rem;
}

/* Code blocks */
.sui-code {
  position: relative;
  margin-bottom: 1rem;
}

.sui-code pre {
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.sui-code pre code {
  padding: 0;
  background: none;
}

.sui-copy {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  color: var(--secondary-foreground);
  background: var(--secondary);
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
}

.sui-copy:focus-visible {
  outline: 2px solid var(--ring);
  outline-offset: 2px;
}

.sui-prose-table {
  margin-bottom: 1rem;
  overflow-x: auto;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.sui-prose-table table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.875rem;
}

.sui-prose-table th,
.sui-prose-table td {
  padding: 0.5rem 0.75rem;
  text-align: left;
  border-bottom: 1px solid var(--border);
}

.sui-blockquote {
  margin-bottom: 1rem;
  padding-left: 1rem;
  color: var(--muted-foreground);
  border-left: 3px solid var(--border);
}

.sui-render-error {
  padding: 1rem;
  color: var(--destructive);
  border: 1px solid var(--destructive);
  border-radius: var(--radius);
}

.sui-render-error pre {
  margin-top: 0.5rem;
  font-size: 0.8125rem;
  white-space: pre-wrap;
}

/* Pager */
.pager {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 3rem;
}

.pager a {
  display: flex;
  flex-direction: column;
  padding: 0.75rem 1rem;
  color: var(--foreground);
  text-decoration: none;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.pager small {
  color: var(--muted-foreground);
}

.pager-next {
  margin-left: auto;
  text-align: right;
}

/* Table of contents */
.toc {
  position: sticky;
  top: calc(var(--header-height) + 2rem);
  align-self: start;
}

.toc h2 {
  margin-bottom: 0.75rem;
  font-size: 0.875rem;
  font-weight: 600;
}

.toc ul {
  list-style: none;
}

.toc a {
  font-size: 0.875rem;
  color: var(--muted-foreground);
  text-decoration: none;
}

.toc a.active {
  color: var(--foreground);
  font-weight: 500;
}

.toc-level-3 {
  padding-left: 1rem;
}

.toc-level-4 {
  padding-left: 2rem;
}

/* Search palette */
.palette {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: flex-start;
  justify-content: center;
  padding-top: 12vh;
}

.palette[hidden] {
  display: none;
}

.palette-backdrop {
  position: absolute;
  inset: 0;
  background: rgb(0 0 0 / 0.5);
}

.palette-panel {
  position: relative;
  width: min(640px, 92vw);
  max-height: 70vh;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.palette-input-row {
  display: flex;
  border-bottom: 1px solid var(--border);
}

.palette-input {
  flex: 1;
  padding: 0.875rem 1rem;
  font-size: 1rem;
  color: var(--foreground);
  background: transparent;
  border: none;
  outline: none;
}

.palette-close {
  display: none;
  padding: 0 1rem;
  font-size: 1.25rem;
  color: var(--muted-foreground);
  background: none;
  border: none;
}

.palette-results {
  overflow-y: auto;
  padding: 0.5rem;
}

.palette-group-title {
  padding: 0.5rem 0.5rem 0.25rem;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--muted-foreground);
}

.palette-item {
  display: block;
  padding: 0.5rem 0.75rem;
  color: var(--foreground);
  text-decoration: none;
  border-radius: var(--radius);
}

.palette-item[aria-selected="true"] {
  background: var(--accent);
}

.palette-empty,
.palette-loading {
  padding: 1.5rem;
  text-align: center;
  color: var(--muted-foreground);
}

/* Footer and newsletter */
.site-footer {
  padding: 2rem;
  border-top: 1px solid var(--border);
}

.newsletter {
  max-width: 420px;
}

.newsletter label {
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

.newsletter-row {
  display: flex;
  gap: 0.5rem;
}

.newsletter input {
  flex: 1;
  padding: 0.5rem 0.75rem;
  color: var(--foreground);
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.toast-region {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  z-index: 70;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.toast {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.75rem 1rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 4px 12px rgb(0 0 0 / 0.1);
}

.toast--error {
  border-color: var(--destructive);
}

.toast button {
  color: var(--muted-foreground);
  background: none;
  border: none;
  cursor: pointer;
}

.status {
  max-width: 640px;
  margin: 20vh auto;
  padding: 0 1rem;
}

.status-message {
  margin: 1rem 0;
  white-space: pre-wrap;
  color: var(--muted-foreground);
}

/* Responsive */
@media (max-width: 1024px) {
  .layout,
  .main {
    grid-template-columns: 1fr;
  }

  .menu-btn {
    display: block;
  }

  .sidebar {
    position: fixed;
    left: -100%;
    z-index: 50;
    width: var(--sidebar-width);
    background: var(--background);
    transition: left 0.3s;
  }

  .sidebar.open {
    left: 0;
  }

  .toc {
    display: none;
  }

  .palette {
    padding-top: 0;
  }

  .palette-panel {
    width: 100vw;
    max-height: 100vh;
    height: 100vh;
    border-radius: 0;
  }

  .palette-close {
    display: block;
  }
}
"#;

const COMPONENT_CSS: &str = r#"/* Showcase components */

.sui-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-weight: 500;
  text-decoration: none;
  border: 1px solid transparent;
  border-radius: var(--radius);
  cursor: pointer;
  transition: background 0.15s, color 0.15s, transform 0.15s;
}

.sui-btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.sui-btn--sm { padding: 0.25rem 0.75rem; font-size: 0.8125rem; }
.sui-btn--md { padding: 0.5rem 1rem; font-size: 0.875rem; }
.sui-btn--lg { padding: 0.75rem 1.5rem; font-size: 1rem; }

.sui-btn--primary { color: var(--primary-foreground); background: var(--primary); }
.sui-btn--secondary { color: var(--secondary-foreground); background: var(--secondary); }
.sui-btn--outline { color: var(--foreground); background: transparent; border-color: var(--border); }
.sui-btn--ghost { color: var(--foreground); background: transparent; }
.sui-btn--ghost:hover { background: var(--accent); }
.sui-btn--destructive { color: #fff; background: var(--destructive); }
.sui-btn--link { color: var(--foreground); background: none; text-decoration: underline; }

.sui-badge {
  display: inline-flex;
  padding: 0.125rem 0.625rem;
  font-size: 0.75rem;
  font-weight: 600;
  border: 1px solid transparent;
  border-radius: 999px;
}

.sui-badge--default { color: var(--primary-foreground); background: var(--primary); }
.sui-badge--secondary { color: var(--secondary-foreground); background: var(--secondary); }
.sui-badge--outline { border-color: var(--border); }
.sui-badge--success { color: #fff; background: var(--success); }
.sui-badge--warning { color: #fff; background: var(--warning); }
.sui-badge--destructive { color: #fff; background: var(--destructive); }

.sui-toggle { display: inline-flex; align-items: center; gap: 0.5rem; }
.sui-toggle--switch .sui-toggle-control {
  position: relative;
  width: 2.5rem;
  height: 1.375rem;
  background: var(--border);
  border: none;
  border-radius: 999px;
  cursor: pointer;
}
.sui-toggle--switch .sui-toggle-control[aria-checked="true"] { background: var(--primary); }
.sui-toggle-thumb {
  position: absolute;
  top: 0.1875rem;
  left: 0.1875rem;
  width: 1rem;
  height: 1rem;
  background: var(--background);
  border-radius: 50%;
  transition: transform 0.15s;
}
.sui-toggle-control[aria-checked="true"] .sui-toggle-thumb { transform: translateX(1.125rem); }
.sui-toggle--button .sui-toggle-control {
  padding: 0.375rem 0.75rem;
  color: var(--foreground);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.sui-toggle--button .sui-toggle-control[aria-pressed="true"] { background: var(--accent); }

.sui-input { display: flex; flex-direction: column; gap: 0.375rem; }
.sui-input-label { font-size: 0.875rem; font-weight: 500; }
.sui-input-field {
  padding: 0.5rem 0.75rem;
  color: var(--foreground);
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.sui-input-field--sm { padding: 0.25rem 0.5rem; }
.sui-input-field--lg { padding: 0.75rem 1rem; }
.sui-input--filled .sui-input-field { background: var(--muted); border-color: transparent; }
.sui-input--underline .sui-input-field { border-width: 0 0 1px; border-radius: 0; }

.sui-spinner { display: inline-flex; gap: 0.25rem; }
.sui-spinner--circle .sui-spinner-part {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid var(--border);
  border-top-color: var(--foreground);
  border-radius: 50%;
  animation: sui-spin 0.8s linear infinite;
}
.sui-spinner--dots .sui-spinner-part {
  width: 0.5rem;
  height: 0.5rem;
  background: var(--foreground);
  border-radius: 50%;
  animation: sui-pulse 1s ease-in-out infinite;
}
.sui-spinner--bars .sui-spinner-part {
  width: 0.25rem;
  height: 1.25rem;
  background: var(--foreground);
  animation: sui-pulse 1s ease-in-out infinite;
}
.sui-spinner--lg .sui-spinner-part { transform: scale(1.5); }
.sui-spinner--sm .sui-spinner-part { transform: scale(0.75); }

@keyframes sui-spin { to { transform: rotate(360deg); } }
@keyframes sui-pulse { 50% { opacity: 0.3; } }
@keyframes sui-shimmer { 100% { background-position: -200% 0; } }
@keyframes sui-scroll-x { to { transform: translateX(-100%); } }
@keyframes sui-scroll-y { to { transform: translateY(-100%); } }

.sui-alert {
  display: flex;
  gap: 0.75rem;
  padding: 1rem;
  margin-bottom: 1rem;
  border: 1px solid var(--border);
  border-left-width: 4px;
  border-radius: var(--radius);
}
.sui-alert--info { border-left-color: var(--info); }
.sui-alert--success { border-left-color: var(--success); }
.sui-alert--warning { border-left-color: var(--warning); }
.sui-alert--error { border-left-color: var(--destructive); }
.sui-alert-title { font-weight: 600; }
.sui-alert-dismiss { margin-left: auto; background: none; border: none; cursor: pointer; }

.sui-tooltip { position: relative; display: inline-block; }
.sui-tooltip-content {
  position: absolute;
  z-index: 10;
  padding: 0.25rem 0.5rem;
  font-size: 0.75rem;
  white-space: nowrap;
  border-radius: 0.25rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.15s;
}
.sui-tooltip:hover .sui-tooltip-content,
.sui-tooltip:focus-within .sui-tooltip-content { opacity: 1; }
.sui-tooltip--dark .sui-tooltip-content { color: #fafafa; background: #18181b; }
.sui-tooltip--light .sui-tooltip-content { color: #18181b; background: #fff; border: 1px solid var(--border); }
.sui-tooltip--top .sui-tooltip-content { bottom: 100%; left: 50%; transform: translate(-50%, -0.375rem); }
.sui-tooltip--bottom .sui-tooltip-content { top: 100%; left: 50%; transform: translate(-50%, 0.375rem); }
.sui-tooltip--left .sui-tooltip-content { right: 100%; top: 50%; transform: translate(-0.375rem, -50%); }
.sui-tooltip--right .sui-tooltip-content { left: 100%; top: 50%; transform: translate(0.375rem, -50%); }

.sui-progress {
  width: 100%;
  height: 0.5rem;
  overflow: hidden;
  background: var(--muted);
  border-radius: 999px;
}
.sui-progress-bar { height: 100%; background: var(--primary); transition: width 0.3s; }
.sui-progress--striped .sui-progress-bar {
  background-image: linear-gradient(45deg, rgb(255 255 255 / 0.2) 25%, transparent 25%, transparent 50%, rgb(255 255 255 / 0.2) 50%, rgb(255 255 255 / 0.2) 75%, transparent 75%);
  background-size: 1rem 1rem;
}
.sui-progress--gradient .sui-progress-bar { background: linear-gradient(90deg, #6366f1, #ec4899); }

.sui-skeleton { display: flex; flex-direction: column; gap: 0.5rem; }
.sui-skeleton-line,
.sui-skeleton-media,
.sui-skeleton--circle,
.sui-skeleton--rect {
  background: linear-gradient(90deg, var(--muted) 25%, var(--border) 50%, var(--muted) 75%);
  background-size: 200% 100%;
  animation: sui-shimmer 1.5s infinite;
  border-radius: 0.25rem;
}
.sui-skeleton-line { height: 0.875rem; }
.sui-skeleton-line--short { width: 60%; }
.sui-skeleton-media { height: 8rem; }
.sui-skeleton--circle { width: 3rem; height: 3rem; border-radius: 50%; }
.sui-skeleton--rect { width: 100%; height: 6rem; }
.sui-skeleton--card { padding: 1rem; border: 1px solid var(--border); border-radius: var(--radius); }

.sui-dialog-panel {
  margin: auto;
  padding: 1.5rem;
  width: min(480px, 92vw);
  color: var(--foreground);
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}
.sui-dialog-panel::backdrop { background: rgb(0 0 0 / 0.5); }
.sui-dialog--alert .sui-dialog-panel { border-top: 4px solid var(--destructive); }
.sui-dialog--sheet .sui-dialog-panel { margin: 0 0 0 auto; height: 100vh; max-height: 100vh; border-radius: 0; }
.sui-dialog-title { font-size: 1.125rem; font-weight: 600; }
.sui-dialog-description { color: var(--muted-foreground); }
.sui-dialog-body { margin: 1rem 0; }
.sui-dialog-footer { display: flex; justify-content: flex-end; gap: 0.5rem; }

.sui-accordion { margin-bottom: 1rem; }
.sui-accordion-item > summary { padding: 0.75rem 0; font-weight: 500; cursor: pointer; }
.sui-accordion-content { padding-bottom: 0.75rem; color: var(--muted-foreground); }
.sui-accordion--bordered .sui-accordion-item { border-bottom: 1px solid var(--border); }
.sui-accordion--separated .sui-accordion-item { margin-bottom: 0.5rem; padding: 0 1rem; border: 1px solid var(--border); border-radius: var(--radius); }
.sui-accordion--ghost .sui-accordion-item > summary:hover { color: var(--muted-foreground); }

.sui-tabs { margin-bottom: 1rem; }
.sui-tab-list { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
.sui-tab { padding: 0.375rem 0.875rem; color: var(--muted-foreground); background: none; border: none; cursor: pointer; }
.sui-tab[aria-selected="true"] { color: var(--foreground); }
.sui-tabs--underline .sui-tab-list { border-bottom: 1px solid var(--border); }
.sui-tabs--underline .sui-tab[aria-selected="true"] { box-shadow: inset 0 -2px var(--foreground); }
.sui-tabs--pills .sui-tab { border-radius: 999px; }
.sui-tabs--pills .sui-tab[aria-selected="true"] { color: var(--primary-foreground); background: var(--primary); }
.sui-tabs--boxed .sui-tab-list { padding: 0.25rem; background: var(--muted); border-radius: var(--radius); }
.sui-tabs--boxed .sui-tab[aria-selected="true"] { background: var(--background); border-radius: calc(var(--radius) - 0.125rem); }

.sui-stepper { display: flex; gap: 1rem; list-style: none; margin-bottom: 1rem; }
.sui-stepper--vertical { flex-direction: column; }
.sui-step { display: flex; gap: 0.75rem; flex: 1; }
.sui-step-marker { flex: none; width: 1.5rem; height: 1.5rem; border: 2px solid var(--border); border-radius: 50%; }
.sui-step[data-state="complete"] .sui-step-marker { background: var(--primary); border-color: var(--primary); }
.sui-step[data-state="current"] .sui-step-marker { border-color: var(--primary); }
.sui-step[data-state="upcoming"] { color: var(--muted-foreground); }
.sui-step-title { font-weight: 500; }

.sui-timeline { list-style: none; margin-bottom: 1rem; border-left: 2px solid var(--border); }
.sui-timeline-item { position: relative; padding: 0 0 1.5rem 1.5rem; }
.sui-timeline-dot { position: absolute; left: -0.4375rem; top: 0.375rem; width: 0.75rem; height: 0.75rem; background: var(--primary); border-radius: 50%; }
.sui-timeline-date { font-size: 0.8125rem; color: var(--muted-foreground); }
.sui-timeline-title { font-weight: 600; }
.sui-timeline--alternate .sui-timeline-item:nth-child(even) { padding-left: 3rem; }
.sui-timeline--compact .sui-timeline-item { padding-bottom: 0.5rem; }

.sui-dock {
  display: inline-flex;
  align-items: flex-end;
  gap: 0.5rem;
  padding: 0.5rem;
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: 1rem;
}
.sui-dock-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  color: var(--foreground);
  background: none;
  border: none;
  cursor: pointer;
  transition: transform 0.15s;
}
.sui-dock-icon { display: grid; place-items: center; width: 2.5rem; height: 2.5rem; font-weight: 600; background: var(--background); border-radius: 0.75rem; }
.sui-dock-label { font-size: 0.6875rem; opacity: 0; transition: opacity 0.15s; }
.sui-dock-item:hover .sui-dock-label { opacity: 1; }
.sui-dock--magnify .sui-dock-item[data-hovered="0"] { transform: scale(1.4) translateY(-0.5rem); }
.sui-dock--magnify .sui-dock-item[data-hovered="1"] { transform: scale(1.2) translateY(-0.25rem); }
.sui-dock--minimal { background: transparent; border-color: transparent; }

.sui-table { margin-bottom: 1rem; overflow-x: auto; }
.sui-table table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.sui-table th, .sui-table td { padding: 0.5rem 0.75rem; text-align: left; }
.sui-table--default tr { border-bottom: 1px solid var(--border); }
.sui-table--striped tbody tr:nth-child(odd) { background: var(--muted); }
.sui-table--bordered th, .sui-table--bordered td { border: 1px solid var(--border); }
.sui-table--compact th, .sui-table--compact td { padding: 0.25rem 0.5rem; }

.sui-avatar { display: inline-grid; place-items: center; overflow: hidden; background: var(--muted); }
.sui-avatar img { width: 100%; height: 100%; object-fit: cover; }
.sui-avatar--sm { width: 2rem; height: 2rem; font-size: 0.75rem; }
.sui-avatar--md { width: 2.75rem; height: 2.75rem; }
.sui-avatar--lg { width: 4rem; height: 4rem; font-size: 1.25rem; }
.sui-avatar--circle { border-radius: 50%; }
.sui-avatar--rounded { border-radius: var(--radius); }
.sui-avatar--square { border-radius: 0; }

.sui-card { margin-bottom: 1rem; color: var(--card-foreground); background: var(--card); border-radius: var(--radius); }
.sui-card-header { padding: 1.25rem 1.25rem 0; }
.sui-card-title { font-size: 1.125rem; font-weight: 600; }
.sui-card-description { color: var(--muted-foreground); }
.sui-card-content { padding: 1.25rem; }
.sui-card-footer { padding: 0 1.25rem 1.25rem; color: var(--muted-foreground); }
.sui-card--default { border: 1px solid var(--border); }
.sui-card--elevated { box-shadow: 0 10px 30px rgb(0 0 0 / 0.12); }
.sui-card--outline { border: 2px dashed var(--border); }
.sui-card--glass { background: rgb(255 255 255 / 0.08); border: 1px solid rgb(255 255 255 / 0.2); backdrop-filter: blur(12px); }

.sui-carousel { position: relative; margin-bottom: 1rem; overflow: hidden; border-radius: var(--radius); }
.sui-carousel-track { display: flex; transition: transform 0.4s ease; }
.sui-carousel-slide { flex: 0 0 100%; padding: 2rem; background: var(--muted); }
.sui-carousel--fade .sui-carousel-track { display: grid; }
.sui-carousel--fade .sui-carousel-slide { grid-area: 1 / 1; opacity: 0; transition: opacity 0.4s; }
.sui-carousel--fade .sui-carousel-slide.is-active { opacity: 1; }
.sui-carousel--cards .sui-carousel-slide { flex-basis: 80%; margin-right: 1rem; border-radius: var(--radius); }
.sui-carousel-prev, .sui-carousel-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 2rem;
  height: 2rem;
  color: var(--foreground);
  background: var(--background);
  border: 1px solid var(--border);
  border-radius: 50%;
  cursor: pointer;
}
.sui-carousel-prev { left: 0.5rem; }
.sui-carousel-next { right: 0.5rem; }

.sui-marquee { display: flex; gap: 2rem; margin-bottom: 1rem; overflow: hidden; }
.sui-marquee-track { display: flex; flex: none; gap: 2rem; min-width: 100%; justify-content: space-around; animation: sui-scroll-x 20s linear infinite; }
.sui-marquee--right .sui-marquee-track { animation-direction: reverse; }
.sui-marquee--vertical { flex-direction: column; height: 12rem; }
.sui-marquee--vertical .sui-marquee-track { flex-direction: column; min-width: 0; min-height: 100%; animation-name: sui-scroll-y; }
.sui-marquee--pause:hover .sui-marquee-track { animation-play-state: paused; }
.sui-marquee-item { padding: 0.5rem 1rem; white-space: nowrap; border: 1px solid var(--border); border-radius: var(--radius); }

.sui-pricing { display: flex; flex-direction: column; gap: 1rem; padding: 1.5rem; border: 1px solid var(--border); border-radius: var(--radius); }
.sui-pricing--popular { border: 2px solid var(--primary); box-shadow: 0 10px 30px rgb(0 0 0 / 0.12); }
.sui-pricing--enterprise { color: var(--primary-foreground); background: var(--primary); }
.sui-pricing-name { font-weight: 600; }
.sui-pricing-amount { font-size: 2.25rem; font-weight: 700; }
.sui-pricing-period { color: var(--muted-foreground); }
.sui-pricing-features { list-style: none; }
.sui-pricing-feature::before { content: "✓ "; }

.sui-testimonial { margin-bottom: 1rem; }
.sui-testimonial-quote { font-size: 1.125rem; }
.sui-testimonial-author { display: flex; align-items: center; gap: 0.75rem; margin-top: 1rem; }
.sui-testimonial-avatar { width: 2.5rem; height: 2.5rem; border-radius: 50%; }
.sui-testimonial-name { font-weight: 600; }
.sui-testimonial-role { color: var(--muted-foreground); }
.sui-testimonial--card { padding: 1.5rem; border: 1px solid var(--border); border-radius: var(--radius); }
.sui-testimonial--highlight { padding: 2rem; color: var(--primary-foreground); background: var(--primary); border-radius: var(--radius); }

.sui-hero { display: flex; flex-direction: column; align-items: center; gap: 2rem; padding: 4rem 1rem; text-align: center; }
.sui-hero-title { font-size: 3rem; font-weight: 800; line-height: 1.1; }
.sui-hero-subtitle { margin-top: 1rem; font-size: 1.25rem; color: var(--muted-foreground); }
.sui-hero-actions { display: flex; justify-content: center; gap: 0.75rem; margin-top: 2rem; }
.sui-hero--split { flex-direction: row; text-align: left; }
.sui-hero--split .sui-hero-actions { justify-content: flex-start; }
.sui-hero--split .sui-hero-media { flex: 1; }
.sui-hero--gradient { color: #fff; background: linear-gradient(135deg, #6366f1, #ec4899); border-radius: var(--radius); }
.sui-hero--gradient .sui-hero-subtitle { color: rgb(255 255 255 / 0.85); }

.sui-features { display: grid; grid-template-columns: repeat(var(--sui-columns), minmax(0, 1fr)); gap: 1.5rem; margin-bottom: 1rem; }
.sui-feature-title { font-weight: 600; }
.sui-feature-body { color: var(--muted-foreground); }
.sui-features--cards .sui-feature { padding: 1.25rem; border: 1px solid var(--border); border-radius: var(--radius); }
.sui-features--list { grid-template-columns: 1fr; }
.sui-features--list .sui-feature { padding-left: 1rem; border-left: 2px solid var(--primary); }

.sui-footer { display: flex; flex-wrap: wrap; align-items: center; gap: 1.5rem; padding: 2rem 0; border-top: 1px solid var(--border); }
.sui-footer-links { display: flex; gap: 1rem; }
.sui-footer-links a { color: var(--muted-foreground); text-decoration: none; }
.sui-footer-copy { margin-left: auto; font-size: 0.875rem; color: var(--muted-foreground); }
.sui-footer--columns .sui-footer-links { display: grid; grid-template-columns: repeat(3, auto); }
.sui-footer--minimal { justify-content: center; border-top: none; }
.sui-footer--minimal .sui-footer-copy { margin-left: 0; }
"#;

const RUNTIME_JS: &str = r#"// Sync UI docs runtime
(function() {
  'use strict';

  const root = document.documentElement;
  const script = document.currentScript;

  // Theme (session only)
  document.querySelectorAll('[data-theme-toggle]').forEach(btn => {
    btn.addEventListener('click', () => {
      root.dataset.theme = root.dataset.theme === 'dark' ? 'light' : 'dark';
    });
  });

  // Mobile sidebar
  const sidebar = document.querySelector('[data-sidebar]');
  document.querySelectorAll('[data-sidebar-toggle]').forEach(btn => {
    btn.addEventListener('click', () => sidebar && sidebar.classList.toggle('open'));
  });

  // Copy buttons
  document.querySelectorAll('[data-code]').forEach(block => {
    const btn = block.querySelector('[data-copy]');
    if (!btn) return;
    btn.addEventListener('click', async () => {
      const code = block.querySelector('code');
      try {
        await navigator.clipboard.writeText(code ? code.textContent : '');
        btn.textContent = 'Copied!';
      } catch (err) {
        btn.textContent = 'Error';
      }
      setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
    });
  });

  // Active heading in the table of contents
  const tocLinks = new Map();
  document.querySelectorAll('[data-toc-link]').forEach(link => {
    tocLinks.set(link.dataset.tocLink, link);
  });
  if (tocLinks.size > 0 && 'IntersectionObserver' in window) {
    const observer = new IntersectionObserver(entries => {
      entries.forEach(entry => {
        if (!entry.isIntersecting) return;
        tocLinks.forEach(link => link.classList.remove('active'));
        const link = tocLinks.get(entry.target.id);
        if (link) link.classList.add('active');
      });
    }, { rootMargin: '0px 0px -70% 0px' });
    tocLinks.forEach((_, id) => {
      const heading = document.getElementById(id);
      if (heading) observer.observe(heading);
    });
  }

  // Toasts
  const toasts = document.querySelector('[data-toasts]');
  function toast(message, kind) {
    if (!toasts) return;
    const el = document.createElement('div');
    el.className = 'toast toast--' + kind;
    el.setAttribute('role', 'status');
    const text = document.createElement('span');
    text.textContent = message;
    const close = document.createElement('button');
    close.type = 'button';
    close.setAttribute('aria-label', 'Dismiss');
    close.textContent = '×';
    close.addEventListener('click', () => el.remove());
    el.append(text, close);
    toasts.appendChild(el);
    setTimeout(() => el.remove(), 5000);
  }

  // Newsletter: one request, no retry; the form stays filled on failure
  document.querySelectorAll('[data-newsletter]').forEach(form => {
    form.addEventListener('submit', async event => {
      event.preventDefault();
      const input = form.querySelector('input[type="email"]');
      const button = form.querySelector('button[type="submit"]');
      if (button) button.disabled = true;
      try {
        const res = await fetch('/api/subscribe', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ email: input ? input.value : '' }),
        });
        const body = await res.json().catch(() => ({ ok: false, message: 'Subscription failed' }));
        if (res.ok && body.ok) {
          toast(body.message || 'Subscribed!', 'success');
          if (input) input.value = '';
        } else {
          toast(body.message || 'Subscription failed', 'error');
        }
      } catch (err) {
        toast('Could not reach the server. Please try again.', 'error');
      } finally {
        if (button) button.disabled = false;
      }
    });
  });

  // Tabs
  document.querySelectorAll('[data-tabs]').forEach(tabs => {
    const buttons = tabs.querySelectorAll(':scope > .sui-tab-list > [role="tab"]');
    const panels = tabs.querySelectorAll(':scope > .sui-tab-panel');
    buttons.forEach(btn => {
      btn.addEventListener('click', () => {
        const index = btn.dataset.index;
        tabs.dataset.selected = index;
        buttons.forEach(b => b.setAttribute('aria-selected', String(b === btn)));
        panels.forEach(p => { p.hidden = p.dataset.index !== index; });
      });
    });
  });

  // Accordion: single mode keeps one panel open
  document.querySelectorAll('[data-accordion="single"]').forEach(accordion => {
    const items = accordion.querySelectorAll(':scope > details');
    items.forEach(item => {
      item.addEventListener('toggle', () => {
        if (!item.open) return;
        items.forEach(other => { if (other !== item) other.open = false; });
      });
    });
  });

  // Carousel
  document.querySelectorAll('[data-carousel]').forEach(carousel => {
    const track = carousel.querySelector('.sui-carousel-track');
    const slides = track ? track.children : [];
    if (slides.length === 0) return;
    let timer = null;
    function show(index) {
      const count = slides.length;
      const next = ((index % count) + count) % count;
      carousel.dataset.index = String(next);
      Array.from(slides).forEach((s, i) => s.classList.toggle('is-active', i === next));
      if (!carousel.classList.contains('sui-carousel--fade')) {
        track.style.transform = 'translateX(-' + (next * 100) + '%)';
      }
    }
    const current = () => Number(carousel.dataset.index || 0);
    const prev = carousel.querySelector('[data-carousel-prev]');
    const next = carousel.querySelector('[data-carousel-next]');
    if (prev) prev.addEventListener('click', () => show(current() - 1));
    if (next) next.addEventListener('click', () => show(current() + 1));
    if (carousel.dataset.autoplay === 'true') {
      const interval = Number(carousel.dataset.interval || 4000);
      timer = setInterval(() => show(current() + 1), interval);
      carousel.addEventListener('mouseenter', () => { clearInterval(timer); timer = null; });
      carousel.addEventListener('mouseleave', () => {
        if (!timer) timer = setInterval(() => show(current() + 1), interval);
      });
    }
    show(0);
  });

  // Dock: hover distance drives magnification
  document.querySelectorAll('[data-dock]').forEach(dock => {
    const items = Array.from(dock.querySelectorAll('.sui-dock-item'));
    items.forEach((item, i) => {
      item.addEventListener('mouseenter', () => {
        dock.dataset.hover = String(i);
        items.forEach((other, j) => { other.dataset.hovered = String(Math.abs(i - j)); });
      });
    });
    dock.addEventListener('mouseleave', () => {
      dock.dataset.hover = '-1';
      items.forEach(other => { delete other.dataset.hovered; });
    });
  });

  // Dialogs
  document.querySelectorAll('[data-dialog]').forEach(wrapper => {
    const dialog = wrapper.querySelector('dialog');
    if (!dialog) return;
    wrapper.querySelectorAll('[data-dialog-open]').forEach(btn => {
      btn.addEventListener('click', () => dialog.showModal ? dialog.showModal() : dialog.setAttribute('open', ''));
    });
    wrapper.querySelectorAll('[data-dialog-close]').forEach(btn => {
      btn.addEventListener('click', () => dialog.close ? dialog.close() : dialog.removeAttribute('open'));
    });
  });

  // Dismissible alerts and toggles
  document.querySelectorAll('[data-dismiss]').forEach(btn => {
    btn.addEventListener('click', () => btn.closest('.sui-alert').remove());
  });
  document.querySelectorAll('[data-toggle]').forEach(btn => {
    btn.addEventListener('click', () => {
      const attr = btn.hasAttribute('aria-checked') ? 'aria-checked' : 'aria-pressed';
      btn.setAttribute(attr, String(btn.getAttribute(attr) !== 'true'));
    });
  });

  // Search palette
  const palette = document.querySelector('[data-palette]');
  if (!palette) return;
  const input = palette.querySelector('[data-palette-input]');
  const list = palette.querySelector('[data-palette-results]');
  const ORDER = ['Latest', 'All Blocks', 'All Components', 'Search Results'];
  const mobile = window.matchMedia('(max-width: 1024px)');
  let index = null;
  let results = [];
  let selected = 0;
  let generation = 0;

  function load() {
    if (index) return Promise.resolve(index);
    const url = (script && script.dataset.searchIndex) || '/search-index.json';
    return fetch(url).then(r => r.json()).then(data => { index = data; return data; });
  }

  function filter(query) {
    const q = query.trim().toLowerCase();
    if (!q) return index.suggestions;
    return index.entries
      .filter(e => e.title.toLowerCase().includes(q))
      .map(e => ({
        title: e.title,
        slug: e.slug,
        url: e.url,
        category: e.slug.startsWith('blocks/') ? 'All Blocks' : 'Search Results',
      }));
  }

  function render() {
    list.innerHTML = '';
    if (results.length === 0) {
      const empty = document.createElement('p');
      empty.className = 'palette-empty';
      empty.textContent = 'No results found.';
      list.appendChild(empty);
      return;
    }
    let position = 0;
    ORDER.forEach(category => {
      const items = results.filter(r => r.category === category);
      if (items.length === 0) return;
      const title = document.createElement('p');
      title.className = 'palette-group-title';
      title.textContent = category;
      list.appendChild(title);
      items.forEach(item => {
        const i = position++;
        const link = document.createElement('a');
        link.className = 'palette-item';
        link.href = item.url;
        link.textContent = item.title;
        link.setAttribute('role', 'option');
        link.setAttribute('aria-selected', String(i === selected));
        list.appendChild(link);
      });
    });
  }

  function ordered() {
    return ORDER.flatMap(category => results.filter(r => r.category === category));
  }

  function publish(query) {
    results = filter(query);
    selected = 0;
    render();
  }

  function setQuery(query) {
    const ticket = ++generation;
    const delay = index ? index.delay_ms : 0;
    if (!delay) {
      publish(query);
      return;
    }
    list.innerHTML = '<p class="palette-loading">Searching...</p>';
    setTimeout(() => { if (ticket === generation) publish(query); }, delay);
  }

  function open() {
    if (!palette.hidden) return;
    palette.hidden = false;
    input.focus();
    load().then(() => setQuery(input.value)).catch(() => {
      list.innerHTML = '<p class="palette-empty">Search is unavailable.</p>';
    });
  }

  function close(clear) {
    palette.hidden = true;
    if (clear) {
      input.value = '';
      generation++;
      if (index) publish('');
    }
  }

  function move(delta) {
    const last = Math.max(results.length - 1, 0);
    selected = Math.min(Math.max(selected + delta, 0), last);
    render();
  }

  document.querySelectorAll('[data-search-trigger]').forEach(btn => btn.addEventListener('click', open));
  input.addEventListener('input', () => { if (index) setQuery(input.value); });
  palette.querySelector('[data-palette-close]').addEventListener('click', () => close(false));
  palette.querySelector('[data-palette-backdrop]').addEventListener('click', () => {
    if (!mobile.matches) close(false);
  });

  document.addEventListener('keydown', event => {
    const target = event.target;
    const typing = target instanceof HTMLElement &&
      (target.isContentEditable || ['INPUT', 'TEXTAREA', 'SELECT'].includes(target.tagName));

    if (palette.hidden) {
      if (event.key === '/' && !typing) {
        event.preventDefault();
        open();
      }
      return;
    }

    switch (event.key) {
      case 'ArrowDown':
        event.preventDefault();
        move(1);
        break;
      case 'ArrowUp':
        event.preventDefault();
        move(-1);
        break;
      case 'Enter': {
        const item = ordered()[selected];
        if (item) {
          event.preventDefault();
          close(false);
          window.location.href = item.url;
        }
        break;
      }
      case 'Escape':
        close(true);
        break;
    }
  });
})();
"#;
