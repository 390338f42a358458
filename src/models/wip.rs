use serde::{Deserialize, Serialize};

use super::common::AdditionalData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowsInformationProtectionEnforcementLevel {
    NoProtection,
    EncryptAndAuditOnly,
    EncryptAuditAndPrompt,
    EncryptAuditAndBlock,
    #[serde(other)]
    Unknown,
}

/// A Windows Information Protection policy, with or without MDM
/// enrollment. Protected/exempt app lists, network boundaries and the
/// rest of the policy surface stay in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsInformationProtectionPolicy {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement_level: Option<WindowsInformationProtectionEnforcementLevel>,
    /// Primary enterprise domain, e.g. `contoso.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_under_lock_config_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_on_unenroll_disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights_management_services_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_rights_management_services_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexing_encrypted_stores_or_items_blocked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_assigned: Option<bool>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// An AppLocker XML file attached to a WIP policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsInformationProtectionAppLockerFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// SHA256 of the file, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    /// Base64 file contents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}
