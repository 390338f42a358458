//! OAuth2 client-credentials authentication for the Microsoft identity platform.
//!
//! Acquires bearer tokens from `/{tenant}/oauth2/v2.0/token` using the
//! client_credentials grant. The token is cached in [`TokenProvider`] and
//! refreshed on demand; [`GraphClient`](crate::client::GraphClient) reads the
//! cached token via `token()` and calls `refresh_token()` when it is absent
//! or stale.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

use crate::config::{CONNECT_TIMEOUT, NationalCloud, TOKEN_REQUEST_TIMEOUT};
use crate::error::{GraphError, Result};

/// Token endpoint path below the authority host. `{tenant_id}` is replaced
/// at runtime.
const TOKEN_PATH: &str = "/{tenant_id}/oauth2/v2.0/token";

/// Form body sent to the token endpoint.
#[derive(Serialize)]
pub struct TokenRequest<'a> {
    client_id: &'a str,
    scope: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Subset of the token response that we need. Extra fields such as
/// `ext_expires_in` are ignored.
#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Seconds subtracted from `expires_in` so refresh happens before the
/// service starts rejecting the token. Capped at half the lifetime so a
/// short-lived token is still usable right after it is issued.
const EXPIRY_BUFFER_SECS: u64 = 60;

/// Manages OAuth2 token acquisition and caching.
///
/// Invariants:
/// - `response` is `None` until the first successful `refresh_token()`.
/// - `acquired_at` is `Some` whenever `response` is `Some`.
/// - `token()` returns `None` once the token is inside the expiry buffer.
pub struct TokenProvider {
    client: reqwest::Client,
    authority: String,
    scope: String,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    response: Option<TokenResponse>,
    acquired_at: Option<Instant>,
}

impl TokenProvider {
    /// Creates a provider for the global cloud.
    pub fn new(tenant_id: &str, client_id: &str, client_secret: &str, scope: &str) -> Self {
        TokenProvider {
            client: build_token_client(),
            authority: NationalCloud::Global.login_endpoint().to_string(),
            scope: scope.to_string(),
            tenant_id: tenant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            response: None,
            acquired_at: None,
        }
    }

    /// Creates a provider whose authority and scope follow `cloud`.
    pub fn for_cloud(
        cloud: NationalCloud,
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Self {
        TokenProvider::new(tenant_id, client_id, client_secret, &cloud.default_scope())
            .with_authority(cloud.login_endpoint())
    }

    /// Overrides the authority host (e.g. a mock server in tests).
    pub fn with_authority(mut self, authority: &str) -> Self {
        self.authority = authority.trim_end_matches('/').to_string();
        self
    }

    /// Creates a provider with a pre-set token that never contacts the
    /// identity platform until it expires (3600s) or is invalidated.
    pub fn with_token(token: &str) -> Self {
        TokenProvider {
            client: build_token_client(),
            authority: NationalCloud::Global.login_endpoint().to_string(),
            scope: String::new(),
            tenant_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            response: Some(TokenResponse {
                access_token: token.to_string(),
                token_type: "Bearer".to_string(),
                expires_in: 3600,
            }),
            acquired_at: Some(Instant::now()),
        }
    }

    fn token_url(&self) -> String {
        format!(
            "{}{}",
            self.authority,
            TOKEN_PATH.replace("{tenant_id}", &self.tenant_id)
        )
    }

    /// Fetches a new token and caches it.
    ///
    /// The body is read as text before the status check so the AADSTS
    /// diagnostics end up in the error.
    #[instrument(skip(self), fields(tenant = %self.tenant_id))]
    pub async fn refresh_token(&mut self) -> Result<()> {
        let form = TokenRequest {
            client_id: &self.client_id,
            scope: &self.scope,
            client_secret: &self.client_secret,
            grant_type: "client_credentials",
        };

        let response = self
            .client
            .post(self.token_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| GraphError::Auth {
                message: "token request could not be sent".to_string(),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GraphError::Auth {
            message: "token response body could not be read".to_string(),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            return Err(GraphError::Auth {
                message: format!("token request failed ({status}): {body}"),
                source: None,
            });
        }

        let resp: TokenResponse = serde_json::from_str(&body).map_err(|e| GraphError::Auth {
            message: "failed to parse token response".to_string(),
            source: Some(Box::new(e)),
        })?;
        debug!(expires_in = resp.expires_in, "acquired access token");
        self.acquired_at = Some(Instant::now());
        self.response = Some(resp);

        Ok(())
    }

    /// Drops the cached token so the next `token()` returns `None`.
    pub fn invalidate(&mut self) {
        self.response = None;
        self.acquired_at = None;
    }

    fn is_expired(&self) -> bool {
        match (&self.response, self.acquired_at) {
            (Some(resp), Some(acquired)) => {
                let buffer = EXPIRY_BUFFER_SECS.min(resp.expires_in / 2);
                let lifetime = resp.expires_in - buffer;
                acquired.elapsed().as_secs() >= lifetime
            }
            _ => false,
        }
    }

    /// Returns the cached access token, or `None` if there is none or it
    /// has entered the expiry buffer.
    pub fn token(&self) -> Option<&str> {
        if self.is_expired() {
            return None;
        }
        self.response.as_ref().map(|ret| ret.access_token.as_str())
    }
}

fn build_token_client() -> reqwest::Client {
    // Builder only fails when the TLS backend cannot initialise; fall back
    // to the default client, which would fail the same way on first use.
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(TOKEN_REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_none_before_refresh() {
        let tp = TokenProvider::new("tenant", "client", "secret", "scope");
        assert!(tp.token().is_none());
    }

    #[test]
    fn token_url_uses_authority_and_tenant() {
        let tp = TokenProvider::new("abc-123", "cid", "secret", "scope");
        assert_eq!(
            tp.token_url(),
            "https://login.microsoftonline.com/abc-123/oauth2/v2.0/token"
        );
        let tp = tp.with_authority("http://127.0.0.1:9999/");
        assert_eq!(tp.token_url(), "http://127.0.0.1:9999/abc-123/oauth2/v2.0/token");
    }

    #[test]
    fn for_cloud_selects_authority_and_scope() {
        let tp = TokenProvider::for_cloud(NationalCloud::China, "t", "c", "s");
        assert_eq!(tp.token_url(), "https://login.chinacloudapi.cn/t/oauth2/v2.0/token");
        assert_eq!(tp.scope, "https://microsoftgraph.chinacloudapi.cn/.default");
    }

    #[test]
    fn token_request_serializes_as_form() {
        let req = TokenRequest {
            client_id: "cid",
            scope: "https://graph.microsoft.com/.default",
            client_secret: "secret~value",
            grant_type: "client_credentials",
        };
        let encoded = serde_urlencoded::to_string(&req).unwrap();
        assert!(encoded.contains("client_id=cid"));
        assert!(encoded.contains("grant_type=client_credentials"));
        assert!(encoded.contains("scope=https%3A%2F%2Fgraph.microsoft.com%2F.default"));
    }

    #[test]
    fn token_response_ignores_unknown_fields() {
        let json = r#"{
            "token_type": "Bearer",
            "expires_in": 3599,
            "ext_expires_in": 3599,
            "access_token": "eyJ0eXAi.test.token"
        }"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "eyJ0eXAi.test.token");
        assert_eq!(resp.token_type, "Bearer");
        assert_eq!(resp.expires_in, 3599);
    }

    #[test]
    fn fresh_token_is_available() {
        let tp = TokenProvider::with_token("test-token");
        assert_eq!(tp.token(), Some("test-token"));
    }

    #[test]
    fn expired_token_returns_none() {
        let mut tp = TokenProvider::with_token("test-token");
        tp.acquired_at = Some(Instant::now() - std::time::Duration::from_secs(7200));
        assert!(tp.token().is_none());
    }

    #[test]
    fn token_within_buffer_returns_none() {
        // expires_in=300 with a 60s buffer leaves a 240s effective lifetime.
        let mut tp = TokenProvider::with_token("test-token");
        tp.response.as_mut().unwrap().expires_in = 300;
        tp.acquired_at = Some(Instant::now() - std::time::Duration::from_secs(241));
        assert!(tp.token().is_none());
    }

    #[test]
    fn short_lived_token_is_usable_after_refresh() {
        // expires_in=60 halves the buffer to 30s instead of zeroing the lifetime.
        let mut tp = TokenProvider::with_token("test-token");
        tp.response.as_mut().unwrap().expires_in = 60;
        assert_eq!(tp.token(), Some("test-token"));

        tp.acquired_at = Some(Instant::now() - std::time::Duration::from_secs(30));
        assert!(tp.token().is_none());
    }

    #[test]
    fn invalidate_clears_cached_token() {
        let mut tp = TokenProvider::with_token("test-token");
        tp.invalidate();
        assert!(tp.token().is_none());
    }
}
