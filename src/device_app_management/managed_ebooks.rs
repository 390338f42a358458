//! `managedEBooks`.

use crate::builders::{ActionRequestBuilder, CollectionRequestBuilder, ItemRequestBuilder, resource};
use crate::models::{
    DeviceInstallState, EBookInstallSummary, ManagedEBook, ManagedEBookAssignRequest,
    ManagedEBookAssignment, UserInstallStateSummary,
};

use super::DeviceAppManagementRequestBuilder;

resource! {
    /// `/deviceAppManagement/managedEBooks`
    pub enum ManagedEBooks => ManagedEBook, "managedEBooks", key "managedEBook%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum ManagedEBookAssignments => ManagedEBookAssignment, "assignments", key "managedEBookAssignment%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    /// Per-device install states, below a book or a user summary.
    pub enum DeviceStates => DeviceInstallState, "deviceStates", key "deviceInstallState%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum UserStateSummaries => UserInstallStateSummary, "userStateSummary", key "userInstallStateSummary%2Did";
    Creatable, Updatable, Deletable
}

resource! {
    pub enum InstallSummary => EBookInstallSummary, "installSummary";
    Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    pub fn managed_e_books(&self) -> CollectionRequestBuilder<'a, ManagedEBooks> {
        self.base().collection()
    }
}

impl<'a> ItemRequestBuilder<'a, ManagedEBooks> {
    pub fn assignments(&self) -> CollectionRequestBuilder<'a, ManagedEBookAssignments> {
        self.base().collection()
    }

    pub fn device_states(&self) -> CollectionRequestBuilder<'a, DeviceStates> {
        self.base().collection()
    }

    pub fn user_state_summary(&self) -> CollectionRequestBuilder<'a, UserStateSummaries> {
        self.base().collection()
    }

    pub fn install_summary(&self) -> ItemRequestBuilder<'a, InstallSummary> {
        self.base().single()
    }

    /// `POST .../managedEBooks/{id}/assign`.
    pub fn assign(&self) -> ActionRequestBuilder<'a, ManagedEBookAssignRequest> {
        self.base().action("assign")
    }
}

impl<'a> ItemRequestBuilder<'a, UserStateSummaries> {
    /// Devices of this user with the book.
    pub fn device_states(&self) -> CollectionRequestBuilder<'a, DeviceStates> {
        self.base().collection()
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::TokenProvider;
    use crate::client::GraphClient;

    #[test]
    fn user_summary_device_states_nest_three_keys() {
        let client =
            GraphClient::with_base_url(TokenProvider::with_token("t"), "https://graph.test/v1.0").unwrap();
        let state = client
            .device_app_management()
            .managed_e_books()
            .by_id("book")
            .user_state_summary()
            .by_id("user")
            .device_states()
            .by_id("dev");
        assert_eq!(
            state.url_template(),
            "{+baseurl}/deviceAppManagement/managedEBooks/{managedEBook%2Did}/userStateSummary/{userInstallStateSummary%2Did}/deviceStates/{deviceInstallState%2Did}{?%24expand,%24select}"
        );
        assert_eq!(
            state.to_delete_request_information(None).url().unwrap().as_str(),
            "https://graph.test/v1.0/deviceAppManagement/managedEBooks/book/userStateSummary/user/deviceStates/dev"
        );
    }
}
