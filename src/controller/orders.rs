use std::sync::Arc;

use crate::backend::{OrderReader, OrderWriter};
use crate::controller::CollectionState;
use crate::domain::order::{NewOrder, Order, OrderFilter, UpdateOrder};
use crate::query::{QueryState, SortDirection};

/// Controller behind the orders list view.
pub struct OrderController<G> {
    gateway: Arc<G>,
    state: CollectionState<Order>,
}

impl<G> OrderController<G>
where
    G: OrderReader + OrderWriter,
{
    /// A fresh orders view lists most-recent-first.
    pub fn new(gateway: Arc<G>, page_size: usize) -> Self {
        Self {
            gateway,
            state: CollectionState::new(QueryState::new(
                "createdAt",
                SortDirection::Descending,
                page_size,
            )),
        }
    }

    /// The list state the view renders from.
    pub fn state(&self) -> &CollectionState<Order> {
        &self.state
    }

    /// Fetches `page` under the current filters and sort. Success replaces
    /// the displayed page wholesale; failure keeps the last good page
    /// visible and surfaces an error message instead.
    pub async fn refresh(&self, page: usize) {
        let (seq, query) = self.state.begin_fetch(page);
        let result = self.gateway.list_orders(&query).await;
        self.state.finish_fetch(seq, result, "Failed to load orders");
    }

    /// Applies a new filter set and reloads from the first page.
    pub async fn apply_filters(&self, filter: &OrderFilter) {
        self.state.with_query(|query| {
            filter.apply_to(query);
            query.reset_to_first_page();
        });
        self.refresh(0).await;
    }

    /// Sorts by `column` (re-selecting the active column flips direction)
    /// and reloads from the first page.
    pub async fn apply_sort(&self, column: &str) {
        self.state.with_query(|query| {
            query.set_sort(column);
            query.reset_to_first_page();
        });
        self.refresh(0).await;
    }

    /// Navigates to `page`. Requests beyond the last page or for the page
    /// already shown are ignored without touching the gateway.
    pub async fn change_page(&self, page: usize) {
        if page >= self.state.total_pages() || page == self.state.page_index() {
            return;
        }
        self.refresh(page).await;
    }

    /// Creates an order, then re-fetches the current page so totals and
    /// positions reflect the server's view.
    pub async fn create(&self, new_order: &NewOrder) {
        self.state.clear_error();
        match self.gateway.create_order(new_order).await {
            Ok(_) => {
                let current = self.state.page_index();
                self.refresh(current).await;
            }
            Err(err) => self.state.record_failure(&err, "Failed to create order"),
        }
    }

    /// Saves an edit and swaps the row in place.
    pub async fn update(&self, id: i64, updates: &UpdateOrder) {
        self.state.clear_error();
        match self.gateway.update_order(id, updates).await {
            Ok(saved) => self.state.replace_item_by(|order| order.id == Some(id), saved),
            Err(err) => self.state.record_failure(&err, "Failed to update order"),
        }
    }

    /// Flips the order between pending and paid through the partial-update
    /// endpoint and swaps the row in place. Unsaved orders have nothing to
    /// patch and are ignored.
    pub async fn toggle_status(&self, order: &Order) {
        let Some(id) = order.id else {
            return;
        };
        self.state.clear_error();
        match self
            .gateway
            .set_order_status(id, order.status.toggled())
            .await
        {
            Ok(saved) => self.state.replace_item_by(|order| order.id == Some(id), saved),
            Err(err) => self.state.record_failure(&err, "Failed to update order"),
        }
    }

    /// Deletes an order, then re-fetches so counts stay correct.
    pub async fn remove(&self, id: i64) {
        self.state.clear_error();
        match self.gateway.delete_order(id).await {
            Ok(()) => {
                let current = self.state.page_index();
                self.refresh(current).await;
            }
            Err(err) => self.state.record_failure(&err, "Failed to delete order"),
        }
    }
}
