//! Unsent description of one Graph request.
//!
//! Builders produce a [`RequestInformation`]; the client expands its
//! template, attaches headers and body, and sends it. Keeping the two steps
//! apart lets callers (and tests) inspect the exact URL a builder targets
//! without touching the network.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::query::{QueryParameters, RequestConfiguration};
use crate::uri_template::{self, TemplateValue};

/// Path parameter that, when present, replaces template expansion.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Path parameter carrying the client's base URL.
pub const BASE_URL_KEY: &str = "baseurl";

const JSON: &str = "application/json";

/// Everything needed to send one request.
#[derive(Debug, Clone)]
pub struct RequestInformation {
    /// HTTP verb.
    pub method: Method,
    /// RFC 6570 template, e.g.
    /// `{+baseurl}/deviceAppManagement/mobileApps{?%24top}`.
    pub url_template: String,
    /// Path variables (and the base URL) bound into the template.
    pub path_parameters: BTreeMap<String, String>,
    /// Query variables bound into the template.
    pub query_parameters: BTreeMap<String, TemplateValue>,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub content: Option<serde_json::Value>,
}

impl RequestInformation {
    /// A request for `url_template` with the given path parameters.
    pub fn new(method: Method, url_template: &str, path_parameters: BTreeMap<String, String>) -> Self {
        RequestInformation {
            method,
            url_template: url_template.to_string(),
            path_parameters,
            query_parameters: BTreeMap::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// A request for an absolute URL, e.g. an `@odata.nextLink`.
    pub fn from_raw_url(method: Method, raw_url: &str) -> Self {
        let mut path_parameters = BTreeMap::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), raw_url.to_string());
        RequestInformation::new(method, "", path_parameters)
    }

    /// Sets the `Accept` header unless the caller already chose one.
    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static(media_type));
        self
    }

    /// Shorthand for `Accept: application/json`.
    pub fn accept_json(self) -> Self {
        self.accept(JSON)
    }

    /// Merges headers and query options from a request configuration.
    /// Configured headers replace headers of the same name.
    pub fn configure<Q: QueryParameters>(mut self, config: Option<&RequestConfiguration<Q>>) -> Self {
        if let Some(config) = config {
            for (name, value) in config.headers.iter() {
                self.headers.insert(name.clone(), value.clone());
            }
            for (name, value) in config.query.to_template_vars() {
                self.query_parameters.insert(name.to_string(), value);
            }
        }
        self
    }

    /// Serializes `body` as the JSON content. A body serializing to `null`
    /// (e.g. `()`) leaves the request without content.
    pub fn with_json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.content = (!value.is_null()).then_some(value);
        Ok(self)
    }

    /// Expands the template into the final request URL.
    pub fn url(&self) -> Result<reqwest::Url> {
        let raw = match self.path_parameters.get(RAW_URL_KEY) {
            Some(raw) => raw.clone(),
            None => {
                let mut vars: BTreeMap<String, TemplateValue> = self
                    .path_parameters
                    .iter()
                    .map(|(k, v)| (k.clone(), TemplateValue::Text(v.clone())))
                    .collect();
                vars.extend(self.query_parameters.clone());
                uri_template::expand(&self.url_template, &vars).map_err(|e| {
                    GraphError::InvalidUrl {
                        template: self.url_template.clone(),
                        reason: e.to_string(),
                    }
                })?
            }
        };
        reqwest::Url::parse(&raw).map_err(|e| GraphError::InvalidUrl {
            template: self.url_template.clone(),
            reason: format!("{e}: {raw}"),
        })
    }

    /// `METHOD template`, used in logs and errors.
    pub fn operation(&self) -> String {
        match self.path_parameters.get(RAW_URL_KEY) {
            Some(raw) => format!("{} {raw}", self.method),
            None => format!("{} {}", self.method, self.url_template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQuery;
    use reqwest::header::HeaderName;

    fn params() -> BTreeMap<String, String> {
        let mut p = BTreeMap::new();
        p.insert(BASE_URL_KEY.to_string(), "https://graph.microsoft.com/v1.0".to_string());
        p
    }

    #[test]
    fn url_expands_template_with_query_options() {
        let config = RequestConfiguration::with_query(ListQuery {
            top: Some(2),
            select: vec!["id".to_string()],
            ..Default::default()
        });
        let info = RequestInformation::new(
            Method::GET,
            "{+baseurl}/deviceAppManagement/vppTokens{?%24count,%24select,%24top}",
            params(),
        )
        .configure(Some(&config));
        assert_eq!(
            info.url().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/deviceAppManagement/vppTokens?%24select=id&%24top=2"
        );
    }

    #[test]
    fn raw_url_bypasses_template() {
        let next = "https://graph.microsoft.com/v1.0/deviceAppManagement/mobileApps?$skiptoken=abc";
        let info = RequestInformation::from_raw_url(Method::GET, next);
        assert_eq!(info.url().unwrap().as_str(), next);
        assert!(info.operation().contains("skiptoken"));
    }

    #[test]
    fn missing_path_parameter_is_invalid_url() {
        let info = RequestInformation::new(
            Method::DELETE,
            "{+baseurl}/deviceAppManagement/vppTokens/{vppToken%2Did}",
            params(),
        );
        let err = info.url().unwrap_err();
        assert!(matches!(err, GraphError::InvalidUrl { .. }), "got {err:?}");
        assert!(err.to_string().contains("vppToken%2Did"));
    }

    #[test]
    fn configured_headers_override_and_accept_is_kept() {
        let mut config: RequestConfiguration = RequestConfiguration::default();
        config.headers.insert(
            HeaderName::from_static("consistencylevel"),
            HeaderValue::from_static("eventual"),
        );
        let info = RequestInformation::new(Method::GET, "{+baseurl}/x", params())
            .accept_json()
            .configure(Some(&config));
        assert_eq!(info.headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(info.headers.get("consistencylevel").unwrap(), "eventual");
    }

    #[test]
    fn unit_body_leaves_request_without_content() {
        let info = RequestInformation::new(Method::POST, "{+baseurl}/x", params())
            .with_json_body(&())
            .unwrap();
        assert!(info.content.is_none());

        let info = RequestInformation::new(Method::POST, "{+baseurl}/x", params())
            .with_json_body(&serde_json::json!({"displayName": "Word"}))
            .unwrap();
        assert_eq!(info.content.unwrap()["displayName"], "Word");
    }
}
