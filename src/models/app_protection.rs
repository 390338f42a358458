use serde::{Deserialize, Serialize};

use super::common::{AdditionalData, AssignmentTarget, MobileAppIdentifier};

/// Which set of apps a MAM policy targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetedManagedAppGroupType {
    SelectedPublicApps,
    AllCoreMicrosoftApps,
    AllMicrosoftApps,
    AllApps,
    #[serde(other)]
    Unknown,
}

/// Base shape of every MAM policy, as returned by `/managedAppPolicies` and
/// a registration's applied/intended policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppPolicy {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An app protection policy. The Android, iOS and default flavours share
/// this shape; platform-only settings land in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppProtection {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// ISO 8601 duration, e.g. `PT30M`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_offline_before_access_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_online_before_access_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_inbound_data_transfer_sources: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_outbound_data_transfer_destinations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_credentials_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_outbound_clipboard_sharing_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_backup_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_compliance_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_browser_to_open_links_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_as_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_offline_before_wipe_is_enforced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_pin_retries: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_pin_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_pin_length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_character_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_data_storage_locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_sync_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_app_pin_if_device_pin_is_set: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_required_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_required_app_version: Option<String>,
    /// Read-only on the targeted flavours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_assigned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_app_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An app a MAM policy applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedMobileApp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_app_identifier: Option<MobileAppIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetedManagedAppPolicyAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTarget>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Where a policy has been deployed and how many users picked it up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppPolicyDeploymentSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_deployed_user_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refresh_time: Option<String>,
    /// Per-app rows; passed through as returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_deployment_summary_per_app: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A device/app pair that has checked in with the MAM service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppRegistration {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub management_sdk_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_reasons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_identifier: Option<MobileAppIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A pending operation against a registration, e.g. a selective wipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A MAM status report. The report payload varies by `odata_type` and is
/// kept in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedAppStatus {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of the `targetApps` action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAppsRequest {
    pub apps: Vec<ManagedMobileApp>,
    /// Omitted for `/managedAppPolicies/{id}/targetApps`, which takes apps only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_group_type: Option<TargetedManagedAppGroupType>,
}

/// Body of `assign` on app protections and targeted app configurations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetedManagedAppPolicyAssignRequest {
    pub assignments: Vec<TargetedManagedAppPolicyAssignment>,
}
