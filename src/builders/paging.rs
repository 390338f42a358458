use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::GraphClient;
use crate::error::{ErrorMappings, GraphError, Result};
use crate::models::CollectionResponse;
use crate::request::RequestInformation;

/// Walks a paged collection by following `@odata.nextLink`.
///
/// The first request is the builder's `GET`; every later request targets
/// the link verbatim (it already carries the query options) and reuses the
/// first request's headers. A `nextLink` equal to the URL just fetched
/// ends the walk.
pub struct PageIterator<'a, T> {
    client: &'a GraphClient,
    next: Option<RequestInformation>,
    pages_fetched: usize,
    item: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> PageIterator<'a, T> {
    pub(crate) fn new(client: &'a GraphClient, first: RequestInformation) -> Self {
        PageIterator {
            client,
            next: Some(first),
            pages_fetched: 0,
            item: PhantomData,
        }
    }

    /// Fetches the next page, or `None` once the last page has been read.
    pub async fn next_page(&mut self) -> Result<Option<CollectionResponse<T>>> {
        let Some(request) = self.next.take() else {
            return Ok(None);
        };
        let fetched = request.url().ok();
        let page: CollectionResponse<T> = self
            .client
            .send(&request, &ErrorMappings::odata())
            .await?
            .ok_or_else(|| GraphError::EmptyResponse {
                operation: request.operation(),
            })?;
        self.pages_fetched += 1;
        debug!(
            page = self.pages_fetched,
            items = page.value.len(),
            more = page.next_link.is_some(),
            "fetched page"
        );

        if let Some(link) = &page.next_link {
            let mut next = RequestInformation::from_raw_url(Method::GET, link);
            if next.url().ok().is_some_and(|url| Some(&url) == fetched.as_ref()) {
                warn!(%link, "nextLink points at the page just fetched, stopping");
            } else {
                next.headers = request.headers;
                self.next = Some(next);
            }
        }
        Ok(Some(page))
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Reads every remaining page and flattens the items.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.value);
        }
        Ok(items)
    }
}
