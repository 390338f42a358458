//! `mobileApps` and `mobileAppCategories`.

use crate::builders::{ActionRequestBuilder, CollectionRequestBuilder, ItemRequestBuilder, resource};
use crate::models::{MobileApp, MobileAppAssignRequest, MobileAppAssignment, MobileAppCategory};

use super::DeviceAppManagementRequestBuilder;

resource! {
    /// `/deviceAppManagement/mobileApps`
    pub enum MobileApps => MobileApp, "mobileApps", key "mobileApp%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/mobileApps/{id}/assignments`
    pub enum MobileAppAssignments => MobileAppAssignment, "assignments", key "mobileAppAssignment%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// `/deviceAppManagement/mobileApps/{id}/categories`, read-only links to
    /// the categories an app is filed under.
    pub enum AssignedCategories => MobileAppCategory, "categories", key "mobileAppCategory%2Did"
}

resource! {
    /// `/deviceAppManagement/mobileAppCategories`
    pub enum MobileAppCategories => MobileAppCategory, "mobileAppCategories", key "mobileAppCategory%2Did";
    Creatable, Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// Apps managed by Intune.
    pub fn mobile_apps(&self) -> CollectionRequestBuilder<'a, MobileApps> {
        self.base().collection()
    }

    /// Company Portal categories.
    pub fn mobile_app_categories(&self) -> CollectionRequestBuilder<'a, MobileAppCategories> {
        self.base().collection()
    }
}

impl<'a> ItemRequestBuilder<'a, MobileApps> {
    pub fn assignments(&self) -> CollectionRequestBuilder<'a, MobileAppAssignments> {
        self.base().collection()
    }

    pub fn categories(&self) -> CollectionRequestBuilder<'a, AssignedCategories> {
        self.base().collection()
    }

    /// `POST .../mobileApps/{id}/assign`. Replaces the app's assignments.
    pub fn assign(&self) -> ActionRequestBuilder<'a, MobileAppAssignRequest> {
        self.base().action("assign")
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::TokenProvider;
    use crate::client::GraphClient;

    fn client() -> GraphClient {
        GraphClient::with_base_url(TokenProvider::with_token("t"), "https://graph.test/v1.0").unwrap()
    }

    #[test]
    fn nested_assignment_template_binds_both_keys() {
        let client = client();
        let item = client
            .device_app_management()
            .mobile_apps()
            .by_id("app-1")
            .assignments()
            .by_id("asg-1");
        assert_eq!(
            item.url_template(),
            "{+baseurl}/deviceAppManagement/mobileApps/{mobileApp%2Did}/assignments/{mobileAppAssignment%2Did}{?%24expand,%24select}"
        );
        let url = item.to_get_request_information(None).url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.test/v1.0/deviceAppManagement/mobileApps/app-1/assignments/asg-1"
        );
    }

    #[test]
    fn app_categories_are_reachable_by_id() {
        let client = client();
        let category = client
            .device_app_management()
            .mobile_apps()
            .by_id("app-1")
            .categories()
            .by_id("cat-1");
        assert_eq!(
            category.url_template(),
            "{+baseurl}/deviceAppManagement/mobileApps/{mobileApp%2Did}/categories/{mobileAppCategory%2Did}{?%24expand,%24select}"
        );
    }
}
