use serde::{Deserialize, Serialize};

/// Properties the model does not name, kept verbatim.
pub type AdditionalData = serde_json::Map<String, serde_json::Value>;

/// OData collection wrapper returned by list endpoints and functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    /// Absolute URL of the next page, if any.
    #[serde(
        rename = "@odata.nextLink",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_link: Option<String>,
    /// Total item count, present when `$count=true` was requested.
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Target of an assignment: a group, all users, all devices, or an
/// exclusion. The concrete kind is carried by `odata_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTarget {
    /// e.g. `#microsoft.graph.groupAssignmentTarget`.
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl AssignmentTarget {
    /// Targets the members of an Entra ID group.
    pub fn group(group_id: &str) -> Self {
        AssignmentTarget {
            odata_type: Some("#microsoft.graph.groupAssignmentTarget".to_string()),
            group_id: Some(group_id.to_string()),
            additional_data: AdditionalData::new(),
        }
    }

    /// Targets all licensed users.
    pub fn all_licensed_users() -> Self {
        AssignmentTarget {
            odata_type: Some("#microsoft.graph.allLicensedUsersAssignmentTarget".to_string()),
            ..Default::default()
        }
    }

    /// Targets all managed devices.
    pub fn all_devices() -> Self {
        AssignmentTarget {
            odata_type: Some("#microsoft.graph.allDevicesAssignmentTarget".to_string()),
            ..Default::default()
        }
    }
}

/// Binary content with its MIME type, e.g. an app icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MimeContent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Base64-encoded bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Identifies an app across platforms. Android identifiers carry
/// `package_id`, iOS identifiers `bundle_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileAppIdentifier {
    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: AdditionalData,
}

impl MobileAppIdentifier {
    /// An Android package identifier.
    pub fn android(package_id: &str) -> Self {
        MobileAppIdentifier {
            odata_type: Some("#microsoft.graph.androidMobileAppIdentifier".to_string()),
            package_id: Some(package_id.to_string()),
            ..Default::default()
        }
    }

    /// An iOS bundle identifier.
    pub fn ios(bundle_id: &str) -> Self {
        MobileAppIdentifier {
            odata_type: Some("#microsoft.graph.iosMobileAppIdentifier".to_string()),
            bundle_id: Some(bundle_id.to_string()),
            ..Default::default()
        }
    }
}

/// A name/value setting pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
