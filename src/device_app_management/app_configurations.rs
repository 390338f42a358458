//! `mobileAppConfigurations` (MDM) and `targetedManagedAppConfigurations` (MAM).

use crate::builders::{ActionRequestBuilder, CollectionRequestBuilder, ItemRequestBuilder, resource};
use crate::models::{
    ManagedDeviceMobileAppConfiguration, ManagedDeviceMobileAppConfigurationAssignment,
    ManagedDeviceMobileAppConfigurationDeviceStatus, ManagedDeviceMobileAppConfigurationSummary,
    ManagedDeviceMobileAppConfigurationUserStatus, MobileAppConfigurationAssignRequest,
    TargetedManagedAppConfiguration,
};

use super::DeviceAppManagementRequestBuilder;
use super::app_protection::targeted_policy_navigation;

resource! {
    /// `/deviceAppManagement/mobileAppConfigurations`
    pub enum MobileAppConfigurations => ManagedDeviceMobileAppConfiguration, "mobileAppConfigurations", key "managedDeviceMobileAppConfiguration%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum MobileAppConfigurationAssignments => ManagedDeviceMobileAppConfigurationAssignment, "assignments", key "managedDeviceMobileAppConfigurationAssignment%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum MobileAppConfigurationDeviceStatuses => ManagedDeviceMobileAppConfigurationDeviceStatus, "deviceStatuses", key "managedDeviceMobileAppConfigurationDeviceStatus%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum MobileAppConfigurationUserStatuses => ManagedDeviceMobileAppConfigurationUserStatus, "userStatuses", key "managedDeviceMobileAppConfigurationUserStatus%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum DeviceStatusSummary => ManagedDeviceMobileAppConfigurationSummary, "deviceStatusSummary";
    Updatable, Deletable
}

resource! {
    pub enum UserStatusSummary => ManagedDeviceMobileAppConfigurationSummary, "userStatusSummary";
    Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/targetedManagedAppConfigurations`
    pub enum TargetedManagedAppConfigurations => TargetedManagedAppConfiguration, "targetedManagedAppConfigurations", key "targetedManagedAppConfiguration%2Did";
    Creatable, Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// App configurations delivered to enrolled devices.
    pub fn mobile_app_configurations(&self) -> CollectionRequestBuilder<'a, MobileAppConfigurations> {
        self.base().collection()
    }

    /// App configurations delivered through MAM.
    pub fn targeted_managed_app_configurations(
        &self,
    ) -> CollectionRequestBuilder<'a, TargetedManagedAppConfigurations> {
        self.base().collection()
    }
}

impl<'a> ItemRequestBuilder<'a, MobileAppConfigurations> {
    pub fn assignments(&self) -> CollectionRequestBuilder<'a, MobileAppConfigurationAssignments> {
        self.base().collection()
    }

    pub fn device_statuses(&self) -> CollectionRequestBuilder<'a, MobileAppConfigurationDeviceStatuses> {
        self.base().collection()
    }

    pub fn user_statuses(&self) -> CollectionRequestBuilder<'a, MobileAppConfigurationUserStatuses> {
        self.base().collection()
    }

    pub fn device_status_summary(&self) -> ItemRequestBuilder<'a, DeviceStatusSummary> {
        self.base().single()
    }

    pub fn user_status_summary(&self) -> ItemRequestBuilder<'a, UserStatusSummary> {
        self.base().single()
    }

    /// `POST .../mobileAppConfigurations/{id}/assign`.
    pub fn assign(&self) -> ActionRequestBuilder<'a, MobileAppConfigurationAssignRequest> {
        self.base().action("assign")
    }
}

targeted_policy_navigation!(TargetedManagedAppConfigurations);
