//! Generic CRUD access to farm-scoped resources.
//!
//! Each resource type implements [`Resource`], which fixes its path, request
//! bodies and list envelope at compile time. A
//! [`CrudApi`] then provides the five operations for it:
//!
//! ```ignore
//! let animals = client.resource::<Animal>().list(farm_id, &PageRequest::default()).await?;
//! let breeds = client.resource::<Breed>().list(farm_id, &()).await?;
//! ```

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use super::client::{ApiClient, Result};
use crate::models::{Page, PageRequest};

/// The envelope a list endpoint answers with.
pub trait ListShape {
    /// Parameters the caller supplies for a list call.
    type Params: Sync;

    /// What a list call returns for resource `R`.
    type Output<R: DeserializeOwned>: DeserializeOwned;

    fn query(params: &Self::Params) -> Vec<(&'static str, String)>;
}

/// `{items, paginationInfo}` with `page`/`size` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct Paginated;

/// A bare JSON array.
#[derive(Debug, Clone, Copy)]
pub struct Simple;

impl ListShape for Paginated {
    type Params = PageRequest;
    type Output<R: DeserializeOwned> = Page<R>;

    fn query(params: &PageRequest) -> Vec<(&'static str, String)> {
        vec![
            ("page", params.page.to_string()),
            ("size", params.size.to_string()),
        ]
    }
}

impl ListShape for Simple {
    type Params = ();
    type Output<R: DeserializeOwned> = Vec<R>;

    fn query(_params: &()) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// A server-owned entity living under `/api/farm/{farmId}/{PATH}`.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Path segment after the farm id, e.g. `animals`.
    const PATH: &'static str;

    type Shape: ListShape;

    /// Body for create calls.
    type Draft: Serialize + Sync;

    /// Body for update calls, sent with `PUT`.
    type Update: Serialize + Sync;

    fn validate_draft(_draft: &Self::Draft) -> Result<()> {
        Ok(())
    }

    fn validate_update(_update: &Self::Update) -> Result<()> {
        Ok(())
    }
}

/// Type alias for the list result of resource `R`.
pub type ListOutput<R> = <<R as Resource>::Shape as ListShape>::Output<R>;

/// Type alias for the list parameters of resource `R`.
pub type ListParams<R> = <<R as Resource>::Shape as ListShape>::Params;

/// CRUD operations for one resource type. Borrowed from an [`ApiClient`].
pub struct CrudApi<'a, R> {
    client: &'a ApiClient,
    marker: PhantomData<fn() -> R>,
}

impl ApiClient {
    pub fn resource<R: Resource>(&self) -> CrudApi<'_, R> {
        CrudApi {
            client: self,
            marker: PhantomData,
        }
    }
}

impl<'a, R: Resource> CrudApi<'a, R> {
    fn collection_path(farm_id: i64) -> String {
        format!("/api/farm/{}/{}", farm_id, R::PATH)
    }

    fn item_path(farm_id: i64, id: i64) -> String {
        format!("/api/farm/{}/{}/{}", farm_id, R::PATH, id)
    }

    /// Fetch the collection. Paginated resources return a [`Page`], simple
    /// ones a `Vec`.
    #[instrument(skip(self, params), fields(resource = R::PATH))]
    pub async fn list(&self, farm_id: i64, params: &ListParams<R>) -> Result<ListOutput<R>> {
        let query = <R::Shape as ListShape>::query(params);
        self.client
            .get_json(&Self::collection_path(farm_id), query)
            .await
    }

    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get(&self, farm_id: i64, id: i64) -> Result<R> {
        self.client
            .get_json(&Self::item_path(farm_id, id), Vec::new())
            .await
    }

    #[instrument(skip(self, draft), fields(resource = R::PATH))]
    pub async fn create(&self, farm_id: i64, draft: &R::Draft) -> Result<R> {
        R::validate_draft(draft)?;
        let created = self
            .client
            .send_json(Method::POST, &Self::collection_path(farm_id), draft)
            .await?;
        debug!("Created");
        Ok(created)
    }

    #[instrument(skip(self, update), fields(resource = R::PATH))]
    pub async fn update(&self, farm_id: i64, id: i64, update: &R::Update) -> Result<R> {
        R::validate_update(update)?;
        self.client
            .send_json(Method::PUT, &Self::item_path(farm_id, id), update)
            .await
    }

    /// Delete one item. Any response body is ignored.
    #[instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete(&self, farm_id: i64, id: i64) -> Result<()> {
        self.client.delete_path(&Self::item_path(farm_id, id)).await
    }
}
