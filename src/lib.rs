//! Async Rust client for the Microsoft Graph `deviceAppManagement` API.
//!
//! Provides OAuth2 client-credentials authentication, an authenticated HTTP
//! adapter with a one-shot 401 retry, and typed request builders for every
//! resource under `/deviceAppManagement`: mobile apps and categories, app
//! configurations, managed eBooks, app protection policies, VPP tokens and
//! Windows Information Protection policies.
//!
//! # Modules
//!
//! - [`auth`]: OAuth2 client credentials token provider with expiry tracking.
//! - [`builders`]: Generic collection/item/count/action/function builders and paging.
//! - [`client`]: `GraphClient`, the shared HTTP adapter.
//! - [`config`]: National clouds, API version and timeouts.
//! - [`device_app_management`]: The resource tree rooted at `/deviceAppManagement`.
//! - [`error`]: `GraphError`, the OData error shape and error mappings.
//! - [`models`]: Serde types for the resources.
//! - [`query`]: OData query options and per-request configuration.
//! - [`request`]: `RequestInformation`, one unsent request.
//! - [`uri_template`]: RFC 6570 expansion for request templates.
//!
//! # Quick Start
//!
//! ```ignore
//! use graph_dam::auth::TokenProvider;
//! use graph_dam::client::GraphClient;
//! use graph_dam::config::NationalCloud;
//! use graph_dam::query::{ListQuery, RequestConfiguration};
//!
//! let tp = TokenProvider::for_cloud(NationalCloud::Global, "tenant", "client_id", "secret");
//! let client = GraphClient::new(tp)?;
//! let config = RequestConfiguration::with_query(ListQuery {
//!     filter: Some("isFeatured eq true".to_string()),
//!     ..Default::default()
//! });
//! let apps = client
//!     .device_app_management()
//!     .mobile_apps()
//!     .pages(Some(&config))
//!     .collect_all()
//!     .await?;
//! ```

pub mod auth;
pub mod builders;
pub mod client;
pub mod config;
pub mod device_app_management;
pub mod error;
pub mod models;
pub mod query;
pub mod request;
pub mod uri_template;
