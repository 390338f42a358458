//! Windows Information Protection policies, with and without MDM enrollment.

use crate::builders::{CollectionRequestBuilder, ItemRequestBuilder, resource};
use crate::models::{WindowsInformationProtectionAppLockerFile, WindowsInformationProtectionPolicy};

use super::{DeviceAppManagementRequestBuilder, TargetedManagedAppPolicyAssignments};

resource! {
    /// `/deviceAppManagement/windowsInformationProtectionPolicies`
    pub enum WindowsInformationProtectionPolicies => WindowsInformationProtectionPolicy, "windowsInformationProtectionPolicies", key "windowsInformationProtectionPolicy%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/mdmWindowsInformationProtectionPolicies`
    pub enum MdmWindowsInformationProtectionPolicies => WindowsInformationProtectionPolicy, "mdmWindowsInformationProtectionPolicies", key "mdmWindowsInformationProtectionPolicy%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum ExemptAppLockerFiles => WindowsInformationProtectionAppLockerFile, "exemptAppLockerFiles", key "windowsInformationProtectionAppLockerFile%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum ProtectedAppLockerFiles => WindowsInformationProtectionAppLockerFile, "protectedAppLockerFiles", key "windowsInformationProtectionAppLockerFile%2Did";
    Creatable, Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// WIP policies for devices without enrollment.
    pub fn windows_information_protection_policies(
        &self,
    ) -> CollectionRequestBuilder<'a, WindowsInformationProtectionPolicies> {
        self.base().collection()
    }

    /// WIP policies delivered through MDM.
    pub fn mdm_windows_information_protection_policies(
        &self,
    ) -> CollectionRequestBuilder<'a, MdmWindowsInformationProtectionPolicies> {
        self.base().collection()
    }
}

macro_rules! wip_navigation {
    ($($resource:ty),+) => {$(
        impl<'a> ItemRequestBuilder<'a, $resource> {
            pub fn assignments(&self) -> CollectionRequestBuilder<'a, TargetedManagedAppPolicyAssignments> {
                self.base().collection()
            }

            /// AppLocker files whose apps may access enterprise data unprotected.
            pub fn exempt_app_locker_files(&self) -> CollectionRequestBuilder<'a, ExemptAppLockerFiles> {
                self.base().collection()
            }

            pub fn protected_app_locker_files(&self) -> CollectionRequestBuilder<'a, ProtectedAppLockerFiles> {
                self.base().collection()
            }
        }
    )+};
}

wip_navigation!(WindowsInformationProtectionPolicies, MdmWindowsInformationProtectionPolicies);
