//! Newsletter subscription proxy.
//!
//! The docs footer posts an email address to `/api/subscribe`; the server
//! forwards it once to the endpoint named by [`NEWSLETTER_URL_ENV`]. There is
//! no retry. Every outcome is reported as a [`SubscribeResponse`] the page
//! shows as a dismissable notification.

use std::time::Duration;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Environment variable holding the upstream subscription URL.
///
/// Read on every request so the server does not need a restart when it changes.
pub const NEWSLETTER_URL_ENV: &str = "SYNCDOCS_NEWSLETTER_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body posted by the subscribe form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Body returned to the subscribe form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub ok: bool,
    pub message: String,
}

/// Errors that can occur while subscribing.
#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("Newsletter signup is not configured")]
    NotConfigured,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Could not reach the newsletter service: {0}")]
    Network(String),

    #[error("The newsletter service answered with status {0}")]
    Upstream(u16),
}

impl NewsletterError {
    /// HTTP status reported to the browser.
    pub fn status(&self) -> StatusCode {
        match self {
            NewsletterError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            NewsletterError::InvalidEmail => StatusCode::BAD_REQUEST,
            NewsletterError::Network(_) | NewsletterError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Shared client for upstream requests.
pub fn create_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

/// Forward `email` to `endpoint` once.
pub async fn subscribe(
    client: &reqwest::Client,
    endpoint: Option<&str>,
    email: &str,
) -> Result<(), NewsletterError> {
    let endpoint = endpoint
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(NewsletterError::NotConfigured)?;

    let email = email.trim();
    if !looks_like_email(email) {
        return Err(NewsletterError::InvalidEmail);
    }

    tracing::debug!(url = endpoint, "forwarding newsletter signup");

    let response = client
        .post(endpoint)
        .json(&SubscribeRequest {
            email: email.to_string(),
        })
        .send()
        .await
        .map_err(|e| NewsletterError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NewsletterError::Upstream(status.as_u16()));
    }

    Ok(())
}

/// Run a subscription and turn the outcome into a response for the form.
pub async fn respond(
    client: &reqwest::Client,
    endpoint: Option<&str>,
    email: &str,
) -> (StatusCode, SubscribeResponse) {
    match subscribe(client, endpoint, email).await {
        Ok(()) => (
            StatusCode::OK,
            SubscribeResponse {
                ok: true,
                message: "Thanks for subscribing!".to_string(),
            },
        ),
        Err(e) => {
            tracing::warn!("Newsletter signup failed: {}", e);
            (
                e.status(),
                SubscribeResponse {
                    ok: false,
                    message: e.to_string(),
                },
            )
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
