//! The `/deviceAppManagement` resource tree.
//!
//! [`GraphClient::device_app_management`](crate::client::GraphClient::device_app_management)
//! returns the root builder. Navigation methods walk the tree and every
//! node is one of the generic builders from [`crate::builders`]:
//!
//! ```ignore
//! let apps = client
//!     .device_app_management()
//!     .mobile_apps()
//!     .get(None)
//!     .await?;
//!
//! client
//!     .device_app_management()
//!     .mobile_apps()
//!     .by_id(&app_id)
//!     .assign()
//!     .post(&MobileAppAssignRequest { mobile_app_assignments }, None)
//!     .await?;
//! ```
//!
//! The resource markers declared in the submodules name the collections
//! (`MobileApps`, `VppTokens`, ...) and fix which verbs each one accepts.

mod app_configurations;
mod app_protection;
mod managed_ebooks;
mod mobile_apps;
mod vpp_tokens;
mod wip;

pub use app_configurations::*;
pub use app_protection::*;
pub use managed_ebooks::*;
pub use mobile_apps::*;
pub use vpp_tokens::*;
pub use wip::*;

use crate::builders::{ActionRequestBuilder, BaseRequestBuilder, ItemRequestBuilder, resource};
use crate::client::GraphClient;
use crate::models::DeviceAppManagement;

resource! {
    /// `/deviceAppManagement`, a singleton readable and patchable as a whole.
    pub enum DeviceAppManagementRoot => DeviceAppManagement, "deviceAppManagement";
    Updatable
}

/// Builder for `/deviceAppManagement`.
pub type DeviceAppManagementRequestBuilder<'a> = ItemRequestBuilder<'a, DeviceAppManagementRoot>;

pub(crate) fn request_builder(client: &GraphClient) -> DeviceAppManagementRequestBuilder<'_> {
    BaseRequestBuilder::root(client, "").single()
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// `POST /deviceAppManagement/syncMicrosoftStoreForBusinessApps`.
    ///
    /// Starts a sync of the Microsoft Store for Business catalogue. Takes
    /// no body and answers 204.
    pub fn sync_microsoft_store_for_business_apps(&self) -> ActionRequestBuilder<'a, ()> {
        self.base().action("syncMicrosoftStoreForBusinessApps")
    }
}
