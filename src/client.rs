//! Authenticated HTTP adapter for Microsoft Graph.
//!
//! `GraphClient` wraps a `reqwest::Client` and a `TokenProvider` behind a
//! `Mutex`. Every request builder in the crate ends up in one of the
//! `send*` methods here, which:
//!
//! 1. bind the client's base URL into the request template and expand it,
//! 2. attach the bearer token and the JSON body,
//! 3. on `401 Unauthorized`, refresh the token (unless a concurrent
//!    request already did) and retry exactly once; a second 401 is a hard
//!    failure,
//! 4. map 4XX/5XX through the request's [`ErrorMappings`],
//! 5. return `None` for 204 or an empty body, the decoded value otherwise.

use std::str::FromStr;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::auth::TokenProvider;
use crate::config::{API_REQUEST_TIMEOUT, CONNECT_TIMEOUT, NationalCloud};
use crate::device_app_management::{self, DeviceAppManagementRequestBuilder};
use crate::error::{ErrorMappings, GraphError, ODataError, Result};
use crate::request::{BASE_URL_KEY, RAW_URL_KEY, RequestInformation};

fn build_api_client() -> Result<Client> {
    Ok(Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(API_REQUEST_TIMEOUT)
        .build()?)
}

/// Authenticated HTTP client for the Graph REST API.
///
/// The token lock is held only for the token check/refresh, never across
/// an API round-trip. `base_url` has no trailing slash; templates start
/// with `{+baseurl}/`.
pub struct GraphClient {
    client: Client,
    base_url: String,
    auth: Mutex<TokenProvider>,
}

impl GraphClient {
    /// Client for the global cloud (`https://graph.microsoft.com/v1.0`).
    pub fn new(auth: TokenProvider) -> Result<Self> {
        GraphClient::for_cloud(auth, NationalCloud::Global)
    }

    /// Client for a national cloud deployment.
    pub fn for_cloud(auth: TokenProvider, cloud: NationalCloud) -> Result<Self> {
        GraphClient::with_base_url(auth, &cloud.base_url())
    }

    /// Client for an arbitrary base URL, e.g. a mock server.
    pub fn with_base_url(auth: TokenProvider, base_url: &str) -> Result<Self> {
        Ok(GraphClient {
            client: build_api_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: Mutex::new(auth),
        })
    }

    /// The base URL bound into every request template.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Entry point of the `/deviceAppManagement` resource tree.
    pub fn device_app_management(&self) -> DeviceAppManagementRequestBuilder<'_> {
        device_app_management::request_builder(self)
    }

    async fn bearer_token(&self) -> Result<String> {
        let mut auth = self.auth.lock().await;
        if auth.token().is_none() {
            auth.refresh_token().await?;
        }
        auth.token().map(str::to_owned).ok_or_else(|| GraphError::Auth {
            message: "token missing after refresh".to_string(),
            source: None,
        })
    }

    /// Replaces `rejected` with a fresh token. If another request has
    /// already rotated the cached token, that one is returned instead.
    async fn force_refresh(&self, rejected: &str) -> Result<String> {
        let mut auth = self.auth.lock().await;
        if let Some(current) = auth.token().filter(|current| *current != rejected) {
            debug!("token already refreshed by a concurrent request");
            return Ok(current.to_owned());
        }
        auth.invalidate();
        auth.refresh_token().await?;
        auth.token().map(str::to_owned).ok_or_else(|| GraphError::Auth {
            message: "token missing after forced refresh".to_string(),
            source: None,
        })
    }

    fn build_request(
        &self,
        request: &RequestInformation,
        url: &reqwest::Url,
        token: &str,
    ) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(request.method.clone(), url.clone())
            .headers(request.headers.clone())
            .bearer_auth(token);
        if let Some(content) = &request.content {
            req = req.json(content);
        }
        req
    }

    /// Binds the base URL unless the request targets a raw URL.
    fn resolve_url(&self, request: &RequestInformation) -> Result<reqwest::Url> {
        if request.path_parameters.contains_key(RAW_URL_KEY)
            || request.path_parameters.contains_key(BASE_URL_KEY)
        {
            return request.url();
        }
        let mut bound = request.clone();
        bound
            .path_parameters
            .insert(BASE_URL_KEY.to_string(), self.base_url.clone());
        bound.url()
    }

    /// Sends the request, retrying once on 401, and returns the response
    /// after failure statuses have been mapped to errors.
    #[instrument(skip_all, fields(operation = %request.operation()))]
    async fn execute(
        &self,
        request: &RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Response> {
        let url = self.resolve_url(request)?;
        debug!(%url, "sending request");

        let token = self.bearer_token().await?;
        let mut resp = self.build_request(request, &url, &token).send().await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            warn!("received 401, refreshing token and retrying once");
            let fresh_token = self.force_refresh(&token).await?;
            resp = self.build_request(request, &url, &fresh_token).send().await?;
        }

        debug!(status = %resp.status(), "response received");
        throw_if_failed(resp, mappings).await
    }

    /// Sends a request whose response is a JSON document.
    ///
    /// Returns `Ok(None)` for 204 or an empty body.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: &RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Option<T>> {
        let resp = self.execute(request, mappings).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = resp.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Sends a request whose response is a single `text/plain` value, e.g.
    /// the integer returned by `/$count`.
    pub async fn send_primitive<T>(
        &self,
        request: &RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let resp = self.execute(request, mappings).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let status = resp.status();
        let text = resp.text().await?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<T>()
            .map(Some)
            .map_err(|e| GraphError::UnexpectedStatus {
                status,
                message: format!("response is not a valid primitive: {e}"),
                body: text.to_string(),
            })
    }

    /// Sends a request whose response body, if any, is discarded.
    pub async fn send_no_content(
        &self,
        request: &RequestInformation,
        mappings: &ErrorMappings,
    ) -> Result<()> {
        self.execute(request, mappings).await?;
        Ok(())
    }
}

/// Passes responses below 400 through; turns everything else into a
/// `GraphError` according to `mappings`.
async fn throw_if_failed(resp: Response, mappings: &ErrorMappings) -> Result<Response> {
    let status = resp.status();
    if status.as_u16() < 400 {
        return Ok(resp);
    }

    let headers = resp.headers().clone();
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
    let body = resp.text().await?;

    if mappings.resolve(status).is_none() {
        return Err(GraphError::UnexpectedStatus {
            status,
            message: "no error mapping is registered for this status".to_string(),
            body,
        });
    }
    if body.trim().is_empty() {
        return Err(GraphError::UnexpectedStatus {
            status,
            message: "error response has no body".to_string(),
            body,
        });
    }

    match serde_json::from_str::<ODataError>(&body) {
        Ok(error) if is_json || !error.error.code.is_empty() => Err(GraphError::Api {
            status,
            error,
            headers,
        }),
        _ => Err(GraphError::UnexpectedStatus {
            status,
            message: "error response is not an OData error".to_string(),
            body,
        }),
    }
}
