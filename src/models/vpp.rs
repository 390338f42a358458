use serde::{Deserialize, Serialize};

use super::common::AdditionalData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenState {
    Unknown,
    Valid,
    Expired,
    Invalid,
    AssignedToExternalMDM,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenSyncStatus {
    None,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VppTokenAccountType {
    Business,
    Education,
    #[serde(other)]
    Unknown,
}

/// An Apple Volume Purchase Program token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VppToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpp_token_account_type: Option<VppTokenAccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date_time: Option<String>,
    /// The `.vpptoken` file contents; write-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<VppTokenState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_status: Option<VppTokenSyncStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatically_update_apps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_or_region: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// License usage of one app under one token, as returned by
/// `getLicensesForApp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VppTokenLicenseSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpp_token_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_license_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_license_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
