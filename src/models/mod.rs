//! Resource shapes moved by the deviceAppManagement endpoints.
//!
//! Conventions shared by every model:
//! - camelCase wire names, `@odata.type` as `odata_type`;
//! - every property optional and omitted when `None`, so an update body
//!   only carries what the caller set;
//! - unmodelled properties (including those of derived types such as
//!   `#microsoft.graph.win32LobApp`) land in `additional_data` and are
//!   written back unchanged.

mod app_configurations;
mod app_protection;
mod apps;
mod common;
mod ebooks;
mod vpp;
mod wip;

pub use app_configurations::*;
pub use app_protection::*;
pub use apps::*;
pub use common::*;
pub use ebooks::*;
pub use vpp::*;
pub use wip::*;

use serde::{Deserialize, Serialize};

/// The `/deviceAppManagement` singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAppManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled_for_microsoft_store_for_business: Option<bool>,
    /// Locale used when syncing Microsoft Store for Business apps, e.g. `en-us`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsoft_store_for_business_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsoft_store_for_business_last_completed_application_sync_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microsoft_store_for_business_last_successful_sync_date_time: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
