//! App protection (MAM) policies, registrations and statuses.
//!
//! The Android, iOS and targeted-configuration policy items all expose the
//! same navigation set, which `targeted_policy_navigation!` stamps out.

use crate::builders::{
    ActionRequestBuilder, CollectionRequestBuilder, FunctionRequestBuilder, ItemRequestBuilder,
    resource,
};
use crate::models::{
    ManagedAppOperation, ManagedAppPolicy, ManagedAppPolicyDeploymentSummary, ManagedAppProtection,
    ManagedAppRegistration, ManagedAppStatus, ManagedMobileApp, TargetAppsRequest,
    TargetedManagedAppPolicyAssignment,
};

use super::DeviceAppManagementRequestBuilder;

resource! {
    /// `/deviceAppManagement/managedAppPolicies`
    pub enum ManagedAppPolicies => ManagedAppPolicy, "managedAppPolicies", key "managedAppPolicy%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/androidManagedAppProtections`
    pub enum AndroidManagedAppProtections => ManagedAppProtection, "androidManagedAppProtections", key "androidManagedAppProtection%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/iosManagedAppProtections`
    pub enum IosManagedAppProtections => ManagedAppProtection, "iosManagedAppProtections", key "iosManagedAppProtection%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/defaultManagedAppProtections`
    pub enum DefaultManagedAppProtections => ManagedAppProtection, "defaultManagedAppProtections", key "defaultManagedAppProtection%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../apps` below a MAM policy.
    pub enum ManagedMobileApps => ManagedMobileApp, "apps", key "managedMobileApp%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../assignments` below a MAM policy or WIP policy.
    pub enum TargetedManagedAppPolicyAssignments => TargetedManagedAppPolicyAssignment, "assignments", key "targetedManagedAppPolicyAssignment%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../deploymentSummary` below a MAM policy.
    pub enum DeploymentSummary => ManagedAppPolicyDeploymentSummary, "deploymentSummary";
    Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/managedAppRegistrations`
    pub enum ManagedAppRegistrations => ManagedAppRegistration, "managedAppRegistrations", key "managedAppRegistration%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../managedAppRegistrations/{id}/appliedPolicies`
    pub enum AppliedPolicies => ManagedAppPolicy, "appliedPolicies", key "managedAppPolicy%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../managedAppRegistrations/{id}/intendedPolicies`
    pub enum IntendedPolicies => ManagedAppPolicy, "intendedPolicies", key "managedAppPolicy%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `.../managedAppRegistrations/{id}/operations`
    pub enum ManagedAppOperations => ManagedAppOperation, "operations", key "managedAppOperation%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/managedAppStatuses`
    pub enum ManagedAppStatuses => ManagedAppStatus, "managedAppStatuses", key "managedAppStatus%2Did";
    Creatable, Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// Every MAM policy, whatever its flavour.
    pub fn managed_app_policies(&self) -> CollectionRequestBuilder<'a, ManagedAppPolicies> {
        self.base().collection()
    }

    pub fn android_managed_app_protections(&self) -> CollectionRequestBuilder<'a, AndroidManagedAppProtections> {
        self.base().collection()
    }

    pub fn ios_managed_app_protections(&self) -> CollectionRequestBuilder<'a, IosManagedAppProtections> {
        self.base().collection()
    }

    /// Protections applied to users who are not targeted by any other policy.
    pub fn default_managed_app_protections(&self) -> CollectionRequestBuilder<'a, DefaultManagedAppProtections> {
        self.base().collection()
    }

    pub fn managed_app_registrations(&self) -> CollectionRequestBuilder<'a, ManagedAppRegistrations> {
        self.base().collection()
    }

    pub fn managed_app_statuses(&self) -> CollectionRequestBuilder<'a, ManagedAppStatuses> {
        self.base().collection()
    }
}

/// Adds the navigation shared by targeted MAM policies to the item
/// builder of each resource named.
macro_rules! targeted_policy_navigation {
    ($($resource:ty),+ $(,)?) => {$(
        impl<'a> $crate::builders::ItemRequestBuilder<'a, $resource> {
            /// Apps the policy applies to.
            pub fn apps(&self) -> $crate::builders::CollectionRequestBuilder<'a, $crate::device_app_management::ManagedMobileApps> {
                self.base().collection()
            }

            pub fn assignments(
                &self,
            ) -> $crate::builders::CollectionRequestBuilder<'a, $crate::device_app_management::TargetedManagedAppPolicyAssignments> {
                self.base().collection()
            }

            pub fn deployment_summary(
                &self,
            ) -> $crate::builders::ItemRequestBuilder<'a, $crate::device_app_management::DeploymentSummary> {
                self.base().single()
            }

            /// `POST .../assign`. Replaces the policy's assignments.
            pub fn assign(
                &self,
            ) -> $crate::builders::ActionRequestBuilder<'a, $crate::models::TargetedManagedAppPolicyAssignRequest> {
                self.base().action("assign")
            }

            /// `POST .../targetApps`. Replaces the policy's app list.
            pub fn target_apps(&self) -> $crate::builders::ActionRequestBuilder<'a, $crate::models::TargetAppsRequest> {
                self.base().action("targetApps")
            }
        }
    )+};
}

pub(crate) use targeted_policy_navigation;

targeted_policy_navigation!(AndroidManagedAppProtections, IosManagedAppProtections);

impl<'a> ItemRequestBuilder<'a, DefaultManagedAppProtections> {
    pub fn apps(&self) -> CollectionRequestBuilder<'a, ManagedMobileApps> {
        self.base().collection()
    }

    pub fn deployment_summary(&self) -> ItemRequestBuilder<'a, DeploymentSummary> {
        self.base().single()
    }
}

impl<'a> ItemRequestBuilder<'a, ManagedAppPolicies> {
    /// `POST .../managedAppPolicies/{id}/targetApps`. Only `apps` is read;
    /// leave `app_group_type` unset.
    pub fn target_apps(&self) -> ActionRequestBuilder<'a, TargetAppsRequest> {
        self.base().action("targetApps")
    }
}

impl<'a> ItemRequestBuilder<'a, ManagedAppRegistrations> {
    /// Policies currently applied to the registered app.
    pub fn applied_policies(&self) -> CollectionRequestBuilder<'a, AppliedPolicies> {
        self.base().collection()
    }

    /// Policies the registered app should receive.
    pub fn intended_policies(&self) -> CollectionRequestBuilder<'a, IntendedPolicies> {
        self.base().collection()
    }

    pub fn operations(&self) -> CollectionRequestBuilder<'a, ManagedAppOperations> {
        self.base().collection()
    }
}

impl<'a> CollectionRequestBuilder<'a, ManagedAppRegistrations> {
    /// `GET .../managedAppRegistrations/getUserIdsWithFlaggedAppRegistration()`.
    ///
    /// Ids of users with at least one flagged registration (jailbroken or
    /// rooted device).
    pub fn get_user_ids_with_flagged_app_registration(&self) -> FunctionRequestBuilder<'a, String> {
        self.base().function("getUserIdsWithFlaggedAppRegistration()")
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::TokenProvider;
    use crate::client::GraphClient;
    use crate::models::{TargetAppsRequest, TargetedManagedAppGroupType};

    fn client() -> GraphClient {
        GraphClient::with_base_url(TokenProvider::with_token("t"), "https://graph.test/v1.0").unwrap()
    }

    #[test]
    fn ios_protection_target_apps_posts_body() {
        let client = client();
        let action = client
            .device_app_management()
            .ios_managed_app_protections()
            .by_id("T_1")
            .target_apps();
        let body = TargetAppsRequest {
            apps: Vec::new(),
            app_group_type: Some(TargetedManagedAppGroupType::AllApps),
        };
        let info = action.to_post_request_information(&body, None).unwrap();
        assert_eq!(
            info.url_template,
            "{+baseurl}/deviceAppManagement/iosManagedAppProtections/{iosManagedAppProtection%2Did}/targetApps"
        );
        assert_eq!(info.content.unwrap()["appGroupType"], "allApps");
    }

    #[test]
    fn flagged_registration_function_template() {
        let client = client();
        let function = client
            .device_app_management()
            .managed_app_registrations()
            .get_user_ids_with_flagged_app_registration();
        assert_eq!(
            function.url_template(),
            "{+baseurl}/deviceAppManagement/managedAppRegistrations/getUserIdsWithFlaggedAppRegistration(){?%24count,%24filter,%24search,%24skip,%24top}"
        );
    }

    #[test]
    fn registration_operations_nest_under_registration_key() {
        let client = client();
        let op = client
            .device_app_management()
            .managed_app_registrations()
            .by_id("reg-1")
            .operations()
            .by_id("op-1");
        assert_eq!(
            op.to_get_request_information(None).url().unwrap().as_str(),
            "https://graph.test/v1.0/deviceAppManagement/managedAppRegistrations/reg-1/operations/op-1"
        );
    }

    #[test]
    fn default_protection_deployment_summary() {
        let client = client();
        let summary = client
            .device_app_management()
            .default_managed_app_protections()
            .by_id("d-1")
            .deployment_summary();
        assert_eq!(
            summary.url_template(),
            "{+baseurl}/deviceAppManagement/defaultManagedAppProtections/{defaultManagedAppProtection%2Did}/deploymentSummary{?%24expand,%24select}"
        );
    }
}
