//! `reqwest`-backed gateway implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::wire::{FailureBody, PageEnvelope, StatusPatch};
use crate::backend::{OrderReader, OrderWriter, PageResult, StudentReader, StudentWriter};
use crate::config::ConsoleConfig;
use crate::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::query::CollectionQuery;

const STUDENTS: &str = "students";
const ORDERS: &str = "orders";

/// HTTP gateway speaking to the backend's collection endpoints.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &ConsoleConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| BackendError::Unexpected(format!("failed to build HTTP client: {err}")))?;
        let base_url = Url::parse(&config.backend_url)
            .map_err(|err| BackendError::Unexpected(format!("invalid backend url: {err}")))?;
        Ok(Self { client, base_url })
    }

    fn collection_url(&self, resource: &str) -> BackendResult<Url> {
        self.url(&[resource])
    }

    fn entity_url(&self, resource: &str, id: i64) -> BackendResult<Url> {
        self.url(&[resource, &id.to_string()])
    }

    fn url(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BackendError::Unexpected("backend url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Lists one page of `resource`. Unconstrained filters are omitted from
    /// the request entirely; `CollectionQuery` guarantees that.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &CollectionQuery,
    ) -> BackendResult<PageResult<T>> {
        let response = self
            .client
            .get(self.collection_url(resource)?)
            .query(&query.params())
            .send()
            .await?;
        let envelope: PageEnvelope<T> = Self::decode(response).await?;
        Ok(envelope.into())
    }

    async fn delete_entity(&self, resource: &str, id: i64) -> BackendResult<()> {
        let response = self
            .client
            .delete(self.entity_url(resource, id)?)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        Ok(response.json().await?)
    }

    async fn failure(response: Response) -> BackendError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return BackendError::NotFound;
        }
        // A structured body with a message becomes a rejection the UI can
        // show verbatim; anything else is a transport-level failure.
        match response.json::<FailureBody>().await {
            Ok(FailureBody {
                message: Some(message),
            }) => BackendError::Rejected(message),
            _ => BackendError::Transport(format!("backend answered {status}")),
        }
    }
}

#[async_trait]
impl StudentReader for HttpGateway {
    async fn list_students(&self, query: &CollectionQuery) -> BackendResult<PageResult<Student>> {
        self.fetch_page(STUDENTS, query).await
    }
}

#[async_trait]
impl StudentWriter for HttpGateway {
    async fn create_student(&self, new_student: &NewStudent) -> BackendResult<Student> {
        let response = self
            .client
            .post(self.collection_url(STUDENTS)?)
            .json(new_student)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_student(&self, id: i64, updates: &UpdateStudent) -> BackendResult<Student> {
        let response = self
            .client
            .put(self.entity_url(STUDENTS, id)?)
            .json(updates)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_student(&self, id: i64) -> BackendResult<()> {
        self.delete_entity(STUDENTS, id).await
    }
}

#[async_trait]
impl OrderReader for HttpGateway {
    async fn list_orders(&self, query: &CollectionQuery) -> BackendResult<PageResult<Order>> {
        self.fetch_page(ORDERS, query).await
    }
}

#[async_trait]
impl OrderWriter for HttpGateway {
    async fn create_order(&self, new_order: &NewOrder) -> BackendResult<Order> {
        let response = self
            .client
            .post(self.collection_url(ORDERS)?)
            .json(new_order)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_order(&self, id: i64, updates: &UpdateOrder) -> BackendResult<Order> {
        let response = self
            .client
            .put(self.entity_url(ORDERS, id)?)
            .json(updates)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> BackendResult<Order> {
        let response = self
            .client
            .patch(self.entity_url(ORDERS, id)?)
            .json(&StatusPatch { status })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_order(&self, id: i64) -> BackendResult<()> {
        self.delete_entity(ORDERS, id).await
    }
}
