use serde::{Deserialize, Serialize};

use super::apps::InstallIntent;
use super::common::{AdditionalData, AssignmentTarget, MimeContent};

/// Install state of a book on one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallState {
    NotApplicable,
    Installed,
    Failed,
    NotInstalled,
    UninstallFailed,
    #[serde(other)]
    Unknown,
}

/// A managed eBook (e.g. an Apple VPP book).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedEBook {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_cover: Option<MimeContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_information_url: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedEBookAssignment {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_intent: Option<InstallIntent>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `POST /managedEBooks/{id}/assign`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedEBookAssignRequest {
    pub managed_e_book_assignments: Vec<ManagedEBookAssignment>,
}

/// Install state of a book on one device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInstallState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_state: Option<InstallState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Per-user install counts for a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInstallStateSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_device_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_device_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_installed_device_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Tenant-wide install counts for a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EBookInstallSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_device_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_device_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_installed_device_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_user_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_user_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_installed_user_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_request_spells_ebook_property_like_graph() {
        let body = ManagedEBookAssignRequest {
            managed_e_book_assignments: vec![ManagedEBookAssignment {
                target: Some(AssignmentTarget::group("g-1")),
                install_intent: Some(InstallIntent::Available),
                ..Default::default()
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["managedEBookAssignments"][0]["installIntent"], "available");
    }

    #[test]
    fn device_install_state_reads_state_enum() {
        let json = r#"{
            "id": "state-1",
            "deviceName": "iPad-07",
            "installState": "uninstallFailed",
            "errorCode": "0x87D1041C"
        }"#;
        let state: DeviceInstallState = serde_json::from_str(json).unwrap();
        assert_eq!(state.install_state, Some(InstallState::UninstallFailed));
        assert_eq!(state.error_code.as_deref(), Some("0x87D1041C"));
    }
}
