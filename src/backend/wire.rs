//! Serde DTOs for the backend's JSON shapes.

use serde::{Deserialize, Serialize};

use crate::backend::PageResult;
use crate::domain::order::OrderStatus;

/// Spring-style page envelope returned by the collection endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub content: Vec<T>,
    /// Zero-indexed page number.
    pub number: usize,
    pub total_pages: usize,
    pub total_elements: usize,
    pub size: usize,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

impl<T> From<PageEnvelope<T>> for PageResult<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self {
            items: envelope.content,
            page: envelope.number,
            total_pages: envelope.total_pages,
            total_count: envelope.total_elements,
            page_size: envelope.size,
        }
    }
}

/// Body of the status-toggle `PATCH` request.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    pub status: OrderStatus,
}

/// Structured failure body; the `message` field is optional and its absence
/// must not break error handling.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FailureBody {
    #[serde(default)]
    pub message: Option<String>,
}
