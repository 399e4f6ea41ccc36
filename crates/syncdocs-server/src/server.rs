//! Development server implementation.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};

use syncdocs_components::UiState;
use syncdocs_content::{navigation, ContentResolver, SearchConfig};
use syncdocs_static::assets::AssetPipeline;
use syncdocs_static::{static_props, BuildError, PageRenderer, SearchIndexFile, SiteMeta};

use crate::newsletter::{self, SubscribeRequest, NEWSLETTER_URL_ENV};
use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Docs root (`content/docs`)
    pub content_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title
    pub title: String,

    pub search: SearchConfig,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/docs"),
            port: 3000,
            host: "127.0.0.1".to_string(),
            open: true,
            title: "Sync UI".to_string(),
            search: SearchConfig::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    resolver: ContentResolver,
    renderer: PageRenderer,
    reload: ReloadHub,
    http: reqwest::Client,
}

impl ServerState {
    fn site(&self) -> SiteMeta {
        SiteMeta {
            title: self.config.title.clone(),
            base_url: "/".to_string(),
            live_reload: true,
            ui: UiState::default(),
        }
    }
}

/// Development server.
pub struct DevServer {
    state: Arc<ServerState>,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        let state = ServerState {
            resolver: ContentResolver::new(&config.content_dir),
            renderer: PageRenderer::builtin(),
            reload: ReloadHub::new(),
            http: newsletter::create_http_client(),
            config,
        };
        Self {
            state: Arc::new(state),
        }
    }

    pub fn config(&self) -> &DevServerConfig {
        &self.state.config
    }

    /// Hub that pushes reload messages to open pages.
    pub fn reload_hub(&self) -> ReloadHub {
        self.state.reload.clone()
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(|| async { Redirect::temporary("/docs/") }))
            .route("/docs", get(docs_index_handler))
            .route("/docs/", get(docs_index_handler))
            .route("/docs/{*slug}", get(doc_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler))
            .route("/assets/reload.js", get(reload_script_handler))
            .route("/search-index.json", get(search_index_handler))
            .route("/api/subscribe", post(subscribe_handler))
            .route(RELOAD_PATH, get(ws_handler))
            .with_state(Arc::clone(&self.state))
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let config = &self.state.config;
        let ip: IpAddr = config
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress(config.host.clone()))?;
        let addr = SocketAddr::new(ip, config.port);

        let (watcher, mut rx) = FileWatcher::new(&[config.content_dir.clone()])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let hub = self.reload_hub();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&hub, event);
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://{}/docs/", addr);
        tracing::info!("Dev server running at {}", url);

        if config.open {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Every change reloads open pages; pages are rendered fresh on request.
fn handle_watch_event(hub: &ReloadHub, event: WatchEvent) {
    match &event {
        WatchEvent::ContentModified(path) => tracing::info!("Page modified: {}", path.display()),
        WatchEvent::Created(path) => tracing::info!("Created: {}", path.display()),
        WatchEvent::Deleted(path) => tracing::info!("Deleted: {}", path.display()),
        WatchEvent::Modified(path) => tracing::debug!("Modified: {}", path.display()),
    }
    hub.send(ReloadMessage::Reload);
}

async fn docs_index_handler(State(state): State<Arc<ServerState>>) -> Response {
    render_doc(&state, "")
}

async fn doc_handler(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    render_doc(&state, slug.trim_matches('/'))
}

/// Resolve and render one page from disk.
fn render_doc(state: &ServerState, slug: &str) -> Response {
    let site = state.site();

    let rendered = state
        .resolver
        .list_all_slugs()
        .map_err(BuildError::from)
        .and_then(|entries| {
            let nav = navigation(&entries);
            static_props(&state.resolver, &entries, &nav, slug)
        })
        .and_then(|props| state.renderer.render_document(&props, &site));

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(BuildError::NotFound(_)) => status_page(
            state,
            StatusCode::NOT_FOUND,
            "Page not found",
            &format!("No page exists at /docs/{}", slug),
        ),
        Err(e) => {
            tracing::warn!("Failed to render /docs/{}: {}", slug, e);
            status_page(state, StatusCode::INTERNAL_SERVER_ERROR, "Build error", &e.to_string())
        }
    }
}

fn status_page(state: &ServerState, status: StatusCode, title: &str, message: &str) -> Response {
    match state.renderer.render_status(title, message, &state.site()) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::warn!("Failed to render status page: {}", e);
            (status, format!("{}\n\n{}", title, message)).into_response()
        }
    }
}

async fn css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], AssetPipeline::generate_css())
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}

async fn search_index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let json = state
        .resolver
        .list_all_slugs()
        .map_err(|e| e.to_string())
        .and_then(|entries| {
            SearchIndexFile::new(&entries, &state.config.search)
                .to_json()
                .map_err(|e| e.to_string())
        });

    match json {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            tracing::warn!("Failed to build search index: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

async fn subscribe_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SubscribeRequest>,
) -> impl IntoResponse {
    let endpoint = std::env::var(NEWSLETTER_URL_ENV).ok();
    let (status, body) = newsletter::respond(&state.http, endpoint.as_deref(), &request.email).await;
    (status, Json(body))
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let rx = state.reload.subscribe();
    ws.on_upgrade(move |socket| handle_ws(socket, rx))
}

/// Forward reload messages to one page until it disconnects.
async fn handle_ws(mut socket: WebSocket, mut rx: tokio::sync::broadcast::Receiver<ReloadMessage>) {
    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).map_err(|_| ())?;
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}
