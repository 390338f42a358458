//! Typed error hierarchy for the graph-dam crate.
//!
//! Every Graph call funnels its failures into [`GraphError`]. The variants
//! follow the boundaries a request crosses: the token endpoint (`Auth`),
//! template expansion (`InvalidUrl`), the transport (`Network`), the Graph
//! service itself (`Api`, `UnexpectedStatus`, `EmptyResponse`) and
//! deserialization (`Parse`).
//!
//! Failure statuses are resolved through an [`ErrorMappings`] table keyed by
//! status pattern. A mapped status is decoded into the generic [`ODataError`]
//! shape the service returns for 4XX/5XX; anything the table does not cover
//! surfaces as `UnexpectedStatus` with the raw body preserved.

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Unified error type for all graph-dam operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Authentication failure at the Microsoft identity platform token
    /// endpoint. The message carries the HTTP status and AADSTS body when
    /// the endpoint answered at all.
    #[error("authentication failed: {message}")]
    Auth {
        /// Human-readable description of the failure.
        message: String,
        /// The underlying transport or parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered with a failure status that the error mappings
    /// cover, and the body decoded as an OData error.
    #[error("API error {status}: {error}")]
    Api {
        /// HTTP status returned by Graph.
        status: StatusCode,
        /// The decoded OData error payload.
        error: ODataError,
        /// Response headers, useful for `request-id` and `Retry-After`.
        headers: HeaderMap,
    },

    /// The service answered with a failure status that could not be turned
    /// into an [`ODataError`]: no mapping was registered for it, the body was
    /// empty, or the body was not an OData error document.
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status returned by Graph.
        status: StatusCode,
        /// What went wrong while mapping the failure.
        message: String,
        /// The raw response body, possibly empty.
        body: String,
    },

    /// An operation that must return an entity got no content back
    /// (204, or an empty body).
    #[error("no content returned for {operation}")]
    EmptyResponse {
        /// `METHOD template` of the request that came back empty.
        operation: String,
    },

    /// The request URL could not be produced from its template.
    #[error("invalid request URL for {template}: {reason}")]
    InvalidUrl {
        /// The URL template being expanded.
        template: String,
        /// Why expansion or parsing failed.
        reason: String,
    },

    /// JSON (de)serialization of a request or response body failed.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Transport-level failure: DNS, TCP, TLS, timeouts, unreadable bodies.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl GraphError {
    /// HTTP status of the failed response, when the service answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GraphError::Api { status, .. } | GraphError::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The decoded OData error, for `Api` failures.
    pub fn odata_error(&self) -> Option<&ODataError> {
        match self {
            GraphError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

// ── OData error payload ──────────────────────────────────────────────

/// The generic error document Graph returns for 4XX/5XX responses:
/// `{ "error": { "code": ..., "message": ..., ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ODataError {
    /// The main error body.
    pub error: MainError,
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code, self.error.message)
    }
}

/// Top-level error details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainError {
    /// Service-defined error code, e.g. `"ResourceNotFound"`.
    #[serde(default)]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// The target of the error, when the service names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Additional per-item failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    /// Diagnostics: request id, client request id, date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

/// One entry of `error.details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Diagnostic block Graph attaches under `error.innerError`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(
        rename = "client-request-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    /// Anything else the service put in the inner error.
    #[serde(flatten)]
    pub additional_data: serde_json::Map<String, serde_json::Value>,
}

// ── Error mappings ───────────────────────────────────────────────────

/// A status pattern in an error-mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    /// A single status code, e.g. `404`.
    Exact(u16),
    /// `4XX`: any client error.
    ClientError,
    /// `5XX`: any server error.
    ServerError,
    /// `XXX`: any status in 400..600.
    Any,
}

impl FromStr for StatusKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "4XX" => Ok(StatusKey::ClientError),
            "5XX" => Ok(StatusKey::ServerError),
            "XXX" => Ok(StatusKey::Any),
            code => code
                .parse::<u16>()
                .ok()
                .filter(|c| (400..600).contains(c))
                .map(StatusKey::Exact)
                .ok_or_else(|| format!("invalid status key: {s}")),
        }
    }
}

/// Table of status patterns whose failure bodies decode as [`ODataError`].
///
/// Resolution order for a failed status: exact code, then `4XX`/`5XX`,
/// then `XXX`. Statuses outside 400..600 never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMappings {
    keys: Vec<StatusKey>,
}

impl ErrorMappings {
    /// An empty table: every failure becomes `UnexpectedStatus`.
    pub fn empty() -> Self {
        ErrorMappings { keys: Vec::new() }
    }

    /// The table every generated operation uses: `XXX` → OData error.
    pub fn odata() -> Self {
        ErrorMappings {
            keys: vec![StatusKey::Any],
        }
    }

    /// Adds a key to the table.
    pub fn with(mut self, key: StatusKey) -> Self {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    /// Returns the key that claims `status`, honouring precedence.
    pub fn resolve(&self, status: StatusCode) -> Option<StatusKey> {
        let code = status.as_u16();
        if !(400..600).contains(&code) {
            return None;
        }
        let exact = StatusKey::Exact(code);
        let class = if code < 500 {
            StatusKey::ClientError
        } else {
            StatusKey::ServerError
        };
        [exact, class, StatusKey::Any]
            .into_iter()
            .find(|key| self.keys.contains(key))
    }
}

impl Default for ErrorMappings {
    fn default() -> Self {
        ErrorMappings::odata()
    }
}
