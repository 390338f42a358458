//! Generic request builders.
//!
//! Every REST path under `/deviceAppManagement` is one of five shapes:
//!
//! - a collection (`GET` list, `POST` create, `/$count`, `/{id}`),
//! - an item or single-valued navigation property (`GET`, `PATCH`, `DELETE`),
//! - the `/$count` segment of a collection,
//! - a bound action (`POST` with an optional body and response),
//! - a bound function (`GET` returning a collection).
//!
//! Instead of one struct per path, each shape is a generic builder
//! parameterised by a resource marker declared with [`resource!`]. The
//! marker carries the entity type, the path segment and (for collections)
//! the key path parameter. Marker traits [`Creatable`], [`Updatable`] and
//! [`Deletable`] decide which verbs exist for a resource, so calling
//! `delete` on a read-only collection does not compile.
//!
//! Each verb has a `to_<verb>_request_information` counterpart that builds
//! the [`RequestInformation`] without sending it.

mod paging;

pub use paging::PageIterator;

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use reqwest::Method;
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::client::GraphClient;
use crate::error::{ErrorMappings, GraphError, Result};
use crate::models::CollectionResponse;
use crate::query::{CountQuery, FunctionQuery, ItemQuery, ListQuery, RequestConfiguration};
use crate::request::{BASE_URL_KEY, RequestInformation};

/// Query suffix of collection `GET` templates.
pub const LIST_QUERY: &str =
    "{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
/// Query suffix of item `GET` templates.
pub const ITEM_QUERY: &str = "{?%24expand,%24select}";
/// Query suffix of `/$count` templates.
pub const COUNT_QUERY: &str = "{?%24filter,%24search}";
/// Query suffix of collection-returning function templates.
pub const FUNCTION_QUERY: &str = "{?%24count,%24filter,%24search,%24skip,%24top}";

const TEXT: &str = "text/plain";

// ── Resource markers ───────────────────────────────────────────────────

/// A REST resource reachable as a path segment.
pub trait Resource {
    /// Shape of one entity of the resource.
    type Entity: Serialize + DeserializeOwned;
    /// Path segment below the parent, e.g. `mobileApps`.
    const SEGMENT: &'static str;
}

/// A collection whose members are addressed by a key segment.
pub trait Keyed: Resource {
    /// Path parameter name of the key, e.g. `mobileApp%2Did`.
    const KEY: &'static str;
}

/// `POST` to the collection creates an entity.
pub trait Creatable: Resource {}

/// `PATCH` on an item updates it.
pub trait Updatable: Resource {}

/// `DELETE` on an item removes it.
pub trait Deletable: Resource {}

/// Declares an uninhabited resource marker and its trait impls.
///
/// ```ignore
/// resource! {
///     /// `/deviceAppManagement/mobileApps`
///     pub enum MobileApps => MobileApp, "mobileApps", key "mobileApp%2Did";
///     Creatable, Updatable, Deletable
/// }
/// ```
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $entity:ty, $segment:literal $(, key $key:literal)?
        $(; $($marker:ident),+)?
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::builders::Resource for $name {
            type Entity = $entity;
            const SEGMENT: &'static str = $segment;
        }

        $(
            impl $crate::builders::Keyed for $name {
                const KEY: &'static str = $key;
            }
        )?

        $($(
            impl $crate::builders::$marker for $name {}
        )+)?
    };
}

pub(crate) use resource;

// ── Base builder ───────────────────────────────────────────────────────

/// Path template plus bound path parameters, shared by every builder.
#[derive(Clone)]
pub struct BaseRequestBuilder<'a> {
    client: &'a GraphClient,
    path: String,
    path_parameters: BTreeMap<String, String>,
}

impl fmt::Debug for BaseRequestBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRequestBuilder")
            .field("path", &self.path)
            .field("path_parameters", &self.path_parameters)
            .finish()
    }
}

impl<'a> BaseRequestBuilder<'a> {
    /// Builder for `{+baseurl}{path}` with the client's base URL bound.
    pub(crate) fn root(client: &'a GraphClient, path: &str) -> Self {
        let mut path_parameters = BTreeMap::new();
        path_parameters.insert(BASE_URL_KEY.to_string(), client.base_url().to_string());
        BaseRequestBuilder {
            client,
            path: format!("{{+baseurl}}{path}"),
            path_parameters,
        }
    }

    /// Appends a literal segment (which may itself contain `{var}`s).
    pub(crate) fn child(&self, segment: &str) -> Self {
        let mut next = self.clone();
        next.path.push('/');
        next.path.push_str(segment);
        next
    }

    /// Appends a `{key}` segment and binds `id` to it.
    pub(crate) fn child_with_key(&self, key: &str, id: &str) -> Self {
        let mut next = self.child(&format!("{{{key}}}"));
        next.path_parameters.insert(key.to_string(), id.to_string());
        next
    }

    /// Binds an extra path parameter without changing the path.
    pub(crate) fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.path_parameters.insert(name.to_string(), value.to_string());
        self
    }

    /// The collection `R` below this path.
    pub(crate) fn collection<R: Resource>(&self) -> CollectionRequestBuilder<'a, R> {
        CollectionRequestBuilder::new(self.child(R::SEGMENT))
    }

    /// The single-valued navigation property `R` below this path.
    pub(crate) fn single<R: Resource>(&self) -> ItemRequestBuilder<'a, R> {
        ItemRequestBuilder::new(self.child(R::SEGMENT))
    }

    /// The bound action `name` below this path.
    pub(crate) fn action<B, T>(&self, name: &str) -> ActionRequestBuilder<'a, B, T> {
        ActionRequestBuilder::new(self.child(name))
    }

    /// The bound function `call` (e.g. `getUserIdsWithFlaggedAppRegistration()`)
    /// below this path.
    pub(crate) fn function<T>(&self, call: &str) -> FunctionRequestBuilder<'a, T> {
        FunctionRequestBuilder::new(self.child(call))
    }

    fn request(&self, method: Method, query_suffix: &str) -> RequestInformation {
        RequestInformation::new(
            method,
            &format!("{}{query_suffix}", self.path),
            self.path_parameters.clone(),
        )
    }
}

fn require<T>(value: Option<T>, request: &RequestInformation) -> Result<T> {
    value.ok_or_else(|| GraphError::EmptyResponse {
        operation: request.operation(),
    })
}

// ── Collections ────────────────────────────────────────────────────────

/// A collection of `R` entities.
pub struct CollectionRequestBuilder<'a, R> {
    base: BaseRequestBuilder<'a>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for CollectionRequestBuilder<'_, R> {
    fn clone(&self) -> Self {
        CollectionRequestBuilder {
            base: self.base.clone(),
            resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for CollectionRequestBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CollectionRequestBuilder").field(&self.base).finish()
    }
}

impl<'a, R: Resource> CollectionRequestBuilder<'a, R> {
    pub(crate) fn new(base: BaseRequestBuilder<'a>) -> Self {
        CollectionRequestBuilder {
            base,
            resource: PhantomData,
        }
    }

    /// Shared path state.
    pub fn base(&self) -> &BaseRequestBuilder<'a> {
        &self.base
    }

    /// Template used by `GET`.
    pub fn url_template(&self) -> String {
        format!("{}{LIST_QUERY}", self.base.path)
    }

    /// The member of the collection with the given id.
    pub fn by_id(&self, id: &str) -> ItemRequestBuilder<'a, R>
    where
        R: Keyed,
    {
        ItemRequestBuilder::new(self.base.child_with_key(R::KEY, id))
    }

    /// The `/$count` segment of the collection.
    pub fn count(&self) -> CountRequestBuilder<'a> {
        CountRequestBuilder::new(self.base.child("$count"))
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<ListQuery>>,
    ) -> RequestInformation {
        self.base
            .request(Method::GET, LIST_QUERY)
            .accept_json()
            .configure(config)
    }

    /// Lists one page of the collection.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<ListQuery>>,
    ) -> Result<CollectionResponse<R::Entity>> {
        let request = self.to_get_request_information(config);
        let page = self
            .base
            .client
            .send(&request, &ErrorMappings::odata())
            .await?;
        require(page, &request)
    }

    /// Iterates every page of the collection, following `@odata.nextLink`.
    pub fn pages(&self, config: Option<&RequestConfiguration<ListQuery>>) -> PageIterator<'a, R::Entity> {
        PageIterator::new(self.base.client, self.to_get_request_information(config))
    }

    pub fn to_post_request_information(
        &self,
        body: &R::Entity,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation>
    where
        R: Creatable,
    {
        self.base
            .request(Method::POST, "")
            .accept_json()
            .configure(config)
            .with_json_body(body)
    }

    /// Creates a new entity and returns it as stored by the service.
    pub async fn post(&self, body: &R::Entity, config: Option<&RequestConfiguration>) -> Result<R::Entity>
    where
        R: Creatable,
    {
        let request = self.to_post_request_information(body, config)?;
        let created = self
            .base
            .client
            .send(&request, &ErrorMappings::odata())
            .await?;
        require(created, &request)
    }
}

// ── Items ──────────────────────────────────────────────────────────────

/// A single `R` entity: a collection member or a single-valued navigation
/// property such as `deploymentSummary`.
pub struct ItemRequestBuilder<'a, R> {
    base: BaseRequestBuilder<'a>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ItemRequestBuilder<'_, R> {
    fn clone(&self) -> Self {
        ItemRequestBuilder {
            base: self.base.clone(),
            resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ItemRequestBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemRequestBuilder").field(&self.base).finish()
    }
}

impl<'a, R: Resource> ItemRequestBuilder<'a, R> {
    pub(crate) fn new(base: BaseRequestBuilder<'a>) -> Self {
        ItemRequestBuilder {
            base,
            resource: PhantomData,
        }
    }

    /// Shared path state.
    pub fn base(&self) -> &BaseRequestBuilder<'a> {
        &self.base
    }

    /// Template used by `GET`.
    pub fn url_template(&self) -> String {
        format!("{}{ITEM_QUERY}", self.base.path)
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<ItemQuery>>,
    ) -> RequestInformation {
        self.base
            .request(Method::GET, ITEM_QUERY)
            .accept_json()
            .configure(config)
    }

    /// Reads the entity.
    pub async fn get(&self, config: Option<&RequestConfiguration<ItemQuery>>) -> Result<R::Entity> {
        let request = self.to_get_request_information(config);
        let entity = self
            .base
            .client
            .send(&request, &ErrorMappings::odata())
            .await?;
        require(entity, &request)
    }

    pub fn to_patch_request_information(
        &self,
        body: &R::Entity,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation>
    where
        R: Updatable,
    {
        self.base
            .request(Method::PATCH, "")
            .accept_json()
            .configure(config)
            .with_json_body(body)
    }

    /// Updates the properties set in `body`. Graph usually answers 204, in
    /// which case `None` is returned.
    pub async fn patch(
        &self,
        body: &R::Entity,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<R::Entity>>
    where
        R: Updatable,
    {
        let request = self.to_patch_request_information(body, config)?;
        self.base
            .client
            .send(&request, &ErrorMappings::odata())
            .await
    }

    pub fn to_delete_request_information(&self, config: Option<&RequestConfiguration>) -> RequestInformation
    where
        R: Deletable,
    {
        self.base
            .request(Method::DELETE, "")
            .accept_json()
            .configure(config)
    }

    /// Deletes the entity.
    pub async fn delete(&self, config: Option<&RequestConfiguration>) -> Result<()>
    where
        R: Deletable,
    {
        let request = self.to_delete_request_information(config);
        self.base
            .client
            .send_no_content(&request, &ErrorMappings::odata())
            .await
    }
}

// ── $count ─────────────────────────────────────────────────────────────

/// `/$count` of a collection. Answers with a bare integer.
#[derive(Debug, Clone)]
pub struct CountRequestBuilder<'a> {
    base: BaseRequestBuilder<'a>,
}

impl<'a> CountRequestBuilder<'a> {
    pub(crate) fn new(base: BaseRequestBuilder<'a>) -> Self {
        CountRequestBuilder { base }
    }

    /// Template used by `GET`.
    pub fn url_template(&self) -> String {
        format!("{}{COUNT_QUERY}", self.base.path)
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<CountQuery>>,
    ) -> RequestInformation {
        self.base
            .request(Method::GET, COUNT_QUERY)
            .accept(TEXT)
            .configure(config)
    }

    /// Number of entities in the collection (after `$filter`/`$search`).
    pub async fn get(&self, config: Option<&RequestConfiguration<CountQuery>>) -> Result<i64> {
        let request = self.to_get_request_information(config);
        let count = self
            .base
            .client
            .send_primitive(&request, &ErrorMappings::odata())
            .await?;
        require(count, &request)
    }
}

// ── Actions and functions ──────────────────────────────────────────────

/// A bound action: `POST` with a `B` body, answering with an optional `T`.
///
/// Actions without a body use `B = ()`; actions without a response keep the
/// default `T = IgnoredAny` and can drop the returned `Option`.
pub struct ActionRequestBuilder<'a, B, T = IgnoredAny> {
    base: BaseRequestBuilder<'a>,
    shape: PhantomData<fn(&B) -> T>,
}

impl<B, T> Clone for ActionRequestBuilder<'_, B, T> {
    fn clone(&self) -> Self {
        ActionRequestBuilder {
            base: self.base.clone(),
            shape: PhantomData,
        }
    }
}

impl<B, T> fmt::Debug for ActionRequestBuilder<'_, B, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionRequestBuilder").field(&self.base).finish()
    }
}

impl<'a, B, T> ActionRequestBuilder<'a, B, T> {
    pub(crate) fn new(base: BaseRequestBuilder<'a>) -> Self {
        ActionRequestBuilder {
            base,
            shape: PhantomData,
        }
    }
}

impl<B: Serialize, T: DeserializeOwned> ActionRequestBuilder<'_, B, T> {
    /// Template used by `POST`.
    pub fn url_template(&self) -> String {
        self.base.path.clone()
    }

    pub fn to_post_request_information(
        &self,
        body: &B,
        config: Option<&RequestConfiguration>,
    ) -> Result<RequestInformation> {
        self.base
            .request(Method::POST, "")
            .accept_json()
            .configure(config)
            .with_json_body(body)
    }

    /// Invokes the action.
    pub async fn post(&self, body: &B, config: Option<&RequestConfiguration>) -> Result<Option<T>> {
        let request = self.to_post_request_information(body, config)?;
        self.base
            .client
            .send(&request, &ErrorMappings::odata())
            .await
    }
}

/// A bound function returning a collection of `T`.
pub struct FunctionRequestBuilder<'a, T> {
    base: BaseRequestBuilder<'a>,
    item: PhantomData<fn() -> T>,
}

impl<T> Clone for FunctionRequestBuilder<'_, T> {
    fn clone(&self) -> Self {
        FunctionRequestBuilder {
            base: self.base.clone(),
            item: PhantomData,
        }
    }
}

impl<T> fmt::Debug for FunctionRequestBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FunctionRequestBuilder").field(&self.base).finish()
    }
}

impl<'a, T> FunctionRequestBuilder<'a, T> {
    pub(crate) fn new(base: BaseRequestBuilder<'a>) -> Self {
        FunctionRequestBuilder {
            base,
            item: PhantomData,
        }
    }
}

impl<'a, T: DeserializeOwned> FunctionRequestBuilder<'a, T> {
    /// Template used by `GET`.
    pub fn url_template(&self) -> String {
        format!("{}{FUNCTION_QUERY}", self.base.path)
    }

    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<FunctionQuery>>,
    ) -> RequestInformation {
        self.base
            .request(Method::GET, FUNCTION_QUERY)
            .accept_json()
            .configure(config)
    }

    /// Invokes the function.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<FunctionQuery>>,
    ) -> Result<CollectionResponse<T>> {
        let request = self.to_get_request_information(config);
        let page = self
            .base
            .client
            .send(&request, &ErrorMappings::odata())
            .await?;
        require(page, &request)
    }

    /// Iterates every page of the function result.
    pub fn pages(&self, config: Option<&RequestConfiguration<FunctionQuery>>) -> PageIterator<'a, T> {
        PageIterator::new(self.base.client, self.to_get_request_information(config))
    }
}
