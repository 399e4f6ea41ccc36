//! Development server with live reload for the Sync UI docs.
//!
//! Pages are resolved and rendered on every request, so edits show up on the
//! next load. A file watcher pushes reload messages to open pages over a
//! WebSocket.

pub mod newsletter;
pub mod server;
pub mod watcher;
pub mod websocket;

pub use newsletter::{subscribe, NewsletterError, SubscribeRequest, SubscribeResponse, NEWSLETTER_URL_ENV};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{reload_client_script, ReloadHub, ReloadMessage};
