//! Gateway boundary towards the REST backend.
//!
//! The backend is an opaque paginated-query service; the console talks to it
//! exclusively through the reader/writer traits below. [`http::HttpGateway`]
//! is the production implementation; tests substitute mocks.

use async_trait::async_trait;

use crate::backend::errors::BackendResult;
use crate::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::query::CollectionQuery;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod wire;

/// One fetched page of a collection. All values are server-reported; the
/// console never recomputes them locally.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Zero-indexed page the server actually returned (it may clamp an
    /// out-of-range request).
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            total_pages: 0,
            total_count: 0,
            page_size: 0,
        }
    }
}

#[async_trait]
pub trait StudentReader: Send + Sync {
    async fn list_students(&self, query: &CollectionQuery) -> BackendResult<PageResult<Student>>;
}

#[async_trait]
pub trait StudentWriter: Send + Sync {
    async fn create_student(&self, new_student: &NewStudent) -> BackendResult<Student>;
    async fn update_student(&self, id: i64, updates: &UpdateStudent) -> BackendResult<Student>;
    async fn delete_student(&self, id: i64) -> BackendResult<()>;
}

#[async_trait]
pub trait OrderReader: Send + Sync {
    async fn list_orders(&self, query: &CollectionQuery) -> BackendResult<PageResult<Order>>;
}

#[async_trait]
pub trait OrderWriter: Send + Sync {
    async fn create_order(&self, new_order: &NewOrder) -> BackendResult<Order>;
    async fn update_order(&self, id: i64, updates: &UpdateOrder) -> BackendResult<Order>;
    /// Partial update flipping only the status field.
    async fn set_order_status(&self, id: i64, status: OrderStatus) -> BackendResult<Order>;
    async fn delete_order(&self, id: i64) -> BackendResult<()>;
}
