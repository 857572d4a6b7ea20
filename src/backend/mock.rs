//! Mock gateway implementations for isolating controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{OrderReader, OrderWriter, PageResult, StudentReader, StudentWriter};
use crate::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::query::CollectionQuery;

mock! {
    pub Gateway {}

    #[async_trait]
    impl StudentReader for Gateway {
        async fn list_students(&self, query: &CollectionQuery) -> BackendResult<PageResult<Student>>;
    }

    #[async_trait]
    impl StudentWriter for Gateway {
        async fn create_student(&self, new_student: &NewStudent) -> BackendResult<Student>;
        async fn update_student(&self, id: i64, updates: &UpdateStudent) -> BackendResult<Student>;
        async fn delete_student(&self, id: i64) -> BackendResult<()>;
    }

    #[async_trait]
    impl OrderReader for Gateway {
        async fn list_orders(&self, query: &CollectionQuery) -> BackendResult<PageResult<Order>>;
    }

    #[async_trait]
    impl OrderWriter for Gateway {
        async fn create_order(&self, new_order: &NewOrder) -> BackendResult<Order>;
        async fn update_order(&self, id: i64, updates: &UpdateOrder) -> BackendResult<Order>;
        async fn set_order_status(&self, id: i64, status: OrderStatus) -> BackendResult<Order>;
        async fn delete_order(&self, id: i64) -> BackendResult<()>;
    }
}
