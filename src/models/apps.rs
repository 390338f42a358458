use serde::{Deserialize, Serialize};

use super::common::{AdditionalData, AssignmentTarget, MimeContent};

/// Publishing state of a mobile app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MobileAppPublishingState {
    NotPublished,
    Processing,
    Published,
    /// A value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// How an app assignment is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallIntent {
    Available,
    Required,
    Uninstall,
    AvailableWithoutEnrollment,
    #[serde(other)]
    Unknown,
}

/// A managed app. The concrete app kind (`#microsoft.graph.iosStoreApp`,
/// `#microsoft.graph.win32LobApp`, ...) is in `odata_type`; kind-specific
/// properties stay in `additional_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileApp {
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
    pub large_icon: Option<MimeContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_information_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Read-only; set by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing_state: Option<MobileAppPublishingState>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// A category apps can be filed under in the Company Portal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Assignment of an app to a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppAssignment {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<InstallIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTarget>,
    /// Platform-specific install settings, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

/// Body of `POST /mobileApps/{id}/assign`. Replaces every assignment of
/// the app with the given list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppAssignRequest {
    pub mobile_app_assignments: Vec<MobileAppAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_app_keeps_type_specific_properties() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.iosStoreApp",
            "id": "0177548a-548a-0177-8a54-77018a547701",
            "displayName": "Outlook",
            "publisher": "Microsoft",
            "isFeatured": true,
            "publishingState": "published",
            "bundleId": "com.microsoft.Office.Outlook",
            "appStoreUrl": "https://apps.apple.com/app/id951937596"
        }"##;
        let app: MobileApp = serde_json::from_str(json).unwrap();
        assert_eq!(app.odata_type.as_deref(), Some("#microsoft.graph.iosStoreApp"));
        assert_eq!(app.publishing_state, Some(MobileAppPublishingState::Published));
        assert_eq!(app.additional_data["bundleId"], "com.microsoft.Office.Outlook");

        let back = serde_json::to_value(&app).unwrap();
        assert_eq!(back["appStoreUrl"], "https://apps.apple.com/app/id951937596");
        assert_eq!(back["displayName"], "Outlook");
    }

    #[test]
    fn unknown_publishing_state_does_not_fail() {
        let app: MobileApp =
            serde_json::from_str(r#"{"id": "a", "publishingState": "somethingNew"}"#).unwrap();
        assert_eq!(app.publishing_state, Some(MobileAppPublishingState::Unknown));
    }

    #[test]
    fn assign_request_uses_graph_property_names() {
        let body = MobileAppAssignRequest {
            mobile_app_assignments: vec![MobileAppAssignment {
                odata_type: Some("#microsoft.graph.mobileAppAssignment".to_string()),
                intent: Some(InstallIntent::Required),
                target: Some(AssignmentTarget::all_devices()),
                ..Default::default()
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        let first = &json["mobileAppAssignments"][0];
        assert_eq!(first["intent"], "required");
        assert_eq!(
            first["target"]["@odata.type"],
            "#microsoft.graph.allDevicesAssignmentTarget"
        );
        assert!(first.get("id").is_none());
    }

    #[test]
    fn install_intent_serializes_camel_case() {
        assert_eq!(
            serde_json::to_value(InstallIntent::AvailableWithoutEnrollment).unwrap(),
            "availableWithoutEnrollment"
        );
    }
}
