//! Scripted gateway doubles shared by the controller unit tests.
//!
//! Responses are queued ahead of each call; an unscripted call is a test
//! bug and panics. Gated pages resolve only when the test fires their
//! sender, which lets tests interleave in-flight fetches.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{OrderReader, OrderWriter, PageResult, StudentReader, StudentWriter};
use crate::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::domain::student::{NewStudent, Student, UpdateStudent};
use crate::query::CollectionQuery;

enum PageScript<T> {
    Ready(BackendResult<PageResult<T>>),
    Gated(oneshot::Receiver<BackendResult<PageResult<T>>>),
}

pub(crate) struct ScriptedGateway<T> {
    pages: Mutex<VecDeque<PageScript<T>>>,
    saves: Mutex<VecDeque<BackendResult<T>>>,
    deletes: Mutex<VecDeque<BackendResult<()>>>,
    list_queries: Mutex<Vec<CollectionQuery>>,
}

impl<T> ScriptedGateway<T> {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(VecDeque::new()),
            saves: Mutex::new(VecDeque::new()),
            deletes: Mutex::new(VecDeque::new()),
            list_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn push_page(&self, result: BackendResult<PageResult<T>>) {
        self.pages
            .lock()
            .unwrap()
            .push_back(PageScript::Ready(result));
    }

    /// Queues a page fetch that stays in flight until the returned sender
    /// fires.
    pub fn push_gated_page(&self) -> oneshot::Sender<BackendResult<PageResult<T>>> {
        let (tx, rx) = oneshot::channel();
        self.pages.lock().unwrap().push_back(PageScript::Gated(rx));
        tx
    }

    pub fn push_save(&self, result: BackendResult<T>) {
        self.saves.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: BackendResult<()>) {
        self.deletes.lock().unwrap().push_back(result);
    }

    pub fn list_call_count(&self) -> usize {
        self.list_queries.lock().unwrap().len()
    }

    pub fn last_list_query(&self) -> Option<CollectionQuery> {
        self.list_queries.lock().unwrap().last().cloned()
    }

    async fn next_page(&self, query: &CollectionQuery) -> BackendResult<PageResult<T>> {
        self.list_queries.lock().unwrap().push(query.clone());
        let script = self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted list fetch");
        match script {
            PageScript::Ready(result) => result,
            PageScript::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(BackendError::Transport("sender dropped".to_string()))),
        }
    }

    fn next_save(&self) -> BackendResult<T> {
        self.saves
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted save")
    }

    fn next_delete(&self) -> BackendResult<()> {
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted delete")
    }
}

#[async_trait]
impl StudentReader for ScriptedGateway<Student> {
    async fn list_students(&self, query: &CollectionQuery) -> BackendResult<PageResult<Student>> {
        self.next_page(query).await
    }
}

#[async_trait]
impl StudentWriter for ScriptedGateway<Student> {
    async fn create_student(&self, _new_student: &NewStudent) -> BackendResult<Student> {
        self.next_save()
    }

    async fn update_student(&self, _id: i64, _updates: &UpdateStudent) -> BackendResult<Student> {
        self.next_save()
    }

    async fn delete_student(&self, _id: i64) -> BackendResult<()> {
        self.next_delete()
    }
}

#[async_trait]
impl OrderReader for ScriptedGateway<Order> {
    async fn list_orders(&self, query: &CollectionQuery) -> BackendResult<PageResult<Order>> {
        self.next_page(query).await
    }
}

#[async_trait]
impl OrderWriter for ScriptedGateway<Order> {
    async fn create_order(&self, _new_order: &NewOrder) -> BackendResult<Order> {
        self.next_save()
    }

    async fn update_order(&self, _id: i64, _updates: &UpdateOrder) -> BackendResult<Order> {
        self.next_save()
    }

    async fn set_order_status(&self, _id: i64, _status: OrderStatus) -> BackendResult<Order> {
        self.next_save()
    }

    async fn delete_order(&self, _id: i64) -> BackendResult<()> {
        self.next_delete()
    }
}
