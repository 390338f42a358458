//! `vppTokens`.

use crate::builders::{ActionRequestBuilder, CollectionRequestBuilder, FunctionRequestBuilder, ItemRequestBuilder, resource};
use crate::models::{VppToken, VppTokenLicenseSummary};

use super::DeviceAppManagementRequestBuilder;

resource! {
    /// `/deviceAppManagement/vppTokens`
    pub enum VppTokens => VppToken, "vppTokens", key "vppToken%2Did";
    Creatable, Updatable, Deletable
}

impl<'a> DeviceAppManagementRequestBuilder<'a> {
    /// Apple Volume Purchase Program tokens.
    pub fn vpp_tokens(&self) -> CollectionRequestBuilder<'a, VppTokens> {
        self.base().collection()
    }
}

impl<'a> CollectionRequestBuilder<'a, VppTokens> {
    /// `GET .../vppTokens/getLicensesForApp(bundleId='{bundleId}')`.
    pub fn get_licenses_for_app(&self, bundle_id: &str) -> FunctionRequestBuilder<'a, VppTokenLicenseSummary> {
        self.base()
            .clone()
            .with_parameter("bundleId", bundle_id)
            .function("getLicensesForApp(bundleId='{bundleId}')")
    }
}

impl<'a> ItemRequestBuilder<'a, VppTokens> {
    /// `POST .../vppTokens/{id}/syncLicenses`. Answers with the token as it
    /// stands after the sync was queued.
    pub fn sync_licenses(&self) -> ActionRequestBuilder<'a, (), VppToken> {
        self.base().action("syncLicenses")
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::TokenProvider;
    use crate::client::GraphClient;

    #[test]
    fn licenses_for_app_quotes_bundle_id() {
        let client =
            GraphClient::with_base_url(TokenProvider::with_token("t"), "https://graph.test/v1.0").unwrap();
        let function = client
            .device_app_management()
            .vpp_tokens()
            .get_licenses_for_app("com.contoso.app");
        assert_eq!(
            function.url_template(),
            "{+baseurl}/deviceAppManagement/vppTokens/getLicensesForApp(bundleId='{bundleId}'){?%24count,%24filter,%24search,%24skip,%24top}"
        );
        assert_eq!(
            function.to_get_request_information(None).url().unwrap().as_str(),
            "https://graph.test/v1.0/deviceAppManagement/vppTokens/getLicensesForApp(bundleId='com.contoso.app')"
        );
    }

    #[test]
    fn sync_licenses_has_no_body() {
        let client =
            GraphClient::with_base_url(TokenProvider::with_token("t"), "https://graph.test/v1.0").unwrap();
        let info = client
            .device_app_management()
            .vpp_tokens()
            .by_id("tok")
            .sync_licenses()
            .to_post_request_information(&(), None)
            .unwrap();
        assert!(info.content.is_none());
        assert_eq!(
            info.url().unwrap().as_str(),
            "https://graph.test/v1.0/deviceAppManagement/vppTokens/tok/syncLicenses"
        );
    }
}
