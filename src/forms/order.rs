use serde::Deserialize;
use validator::Validate;

use crate::domain::order::{NewOrder, OrderStatus, UpdateOrder};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data shared by the add and edit order dialogs.
pub struct OrderForm {
    #[validate(range(min = 1))]
    pub student_id: i64,
    #[validate(range(min = 0.01))]
    pub total: f64,
    pub status: OrderStatus,
}

impl From<&OrderForm> for NewOrder {
    fn from(form: &OrderForm) -> Self {
        NewOrder {
            student_id: form.student_id,
            total: form.total,
            status: form.status,
        }
    }
}

impl From<&OrderForm> for UpdateOrder {
    fn from(form: &OrderForm) -> Self {
        UpdateOrder {
            student_id: form.student_id,
            total: form.total,
            status: form.status,
        }
    }
}
