use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::query::QueryState;

/// Two-valued order lifecycle state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
}

impl OrderStatus {
    /// The other status; used by the one-click toggle in the orders list.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            OrderStatus::Pending => OrderStatus::Paid,
            OrderStatus::Paid => OrderStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier; `None` until the record is persisted.
    pub id: Option<i64>,
    pub student_id: i64,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub student_id: i64,
    pub total: f64,
    pub status: OrderStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    pub student_id: i64,
    pub total: f64,
    pub status: OrderStatus,
}

/// Constraint set of the orders list view.
///
/// The total bounds are inclusive; a bound is unset at `None`, not at zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderFilter {
    pub student_id: Option<i64>,
    pub status: Option<OrderStatus>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
}

impl OrderFilter {
    /// Renders this filter set onto the query state. Absent fields clear
    /// their key.
    pub fn apply_to(&self, query: &mut QueryState) {
        set_or_clear(query, "studentId", self.student_id.map(|id| id.to_string()));
        set_or_clear(
            query,
            "status",
            self.status.map(|s| s.as_str().to_string()),
        );
        set_or_clear(query, "minTotal", self.min_total.map(|t| t.to_string()));
        set_or_clear(query, "maxTotal", self.max_total.map(|t| t.to_string()));
    }
}

fn set_or_clear(query: &mut QueryState, key: &str, value: Option<String>) {
    match value {
        Some(value) => query.set_filter(key, &value),
        None => query.clear_filter(key),
    }
}
