//! Identity resolution — the boundary to the external identity provider.
//!
//! Session issuance, sign-in UI, and account management all live outside this
//! service. The only thing this module does is map an inbound request's
//! session token to an opaque authenticated-subject identifier, via the
//! provider's verification endpoint. `Ok(None)` is an answer ("nobody is
//! signed in"), not an error — the caller redirects to the sign-in page.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cookie set by the hosted sign-in flow.
const SESSION_COOKIE: &str = "__session";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Identity provider error (status {status}): {message}")]
    Provider { status: u16, message: String },
}

/// Resolves the inbound request context to an authenticated subject.
///
/// Carried in `AppState` as `Arc<dyn IdentityResolver>` so tests can swap in
/// a stub without standing up a provider.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, session_token: Option<&str>) -> Result<Option<String>, AuthError>;
}

/// Pulls the session token out of the request headers:
/// `Authorization: Bearer ...` first, then the `__session` cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    let cookies = headers.get(header::COOKIE).and_then(|v| v.to_str().ok())?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    subject: String,
}

/// Session verification against the hosted identity provider.
/// One POST per resolution; a 401/404 from the provider means the session is
/// expired, revoked, or unknown — unauthenticated, not an infrastructure
/// failure.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl IdentityClient {
    pub fn new(base_url: String, secret_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            secret_key,
        }
    }
}

#[async_trait]
impl IdentityResolver for IdentityClient {
    async fn resolve(&self, session_token: Option<&str>) -> Result<Option<String>, AuthError> {
        let Some(token) = session_token else {
            return Ok(None);
        };

        let response = self
            .client
            .post(format!("{}/v1/sessions/verify", self.base_url))
            .bearer_auth(&self.secret_key)
            .json(&VerifyRequest { token })
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let verified: VerifyResponse = response.json().await?;
        Ok(Some(verified.subject))
    }
}
