//! In-memory gateway with real filter/sort/pagination semantics, standing in
//! for the REST backend in integration tests.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use campus_console::backend::errors::{BackendError, BackendResult};
use campus_console::backend::{
    OrderReader, OrderWriter, PageResult, StudentReader, StudentWriter,
};
use campus_console::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use campus_console::domain::student::{NewStudent, Student, UpdateStudent};
use campus_console::query::CollectionQuery;

pub fn timestamp(offset_secs: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + TimeDelta::seconds(offset_secs)
}

pub fn student(id: i64, name: &str, grade: &str, school: &str) -> Student {
    Student {
        id: Some(id),
        name: name.to_string(),
        grade: grade.to_string(),
        school: school.to_string(),
        created_at: Some(timestamp(id)),
    }
}

pub fn order(id: i64, student_id: i64, total: f64, status: OrderStatus) -> Order {
    Order {
        id: Some(id),
        student_id,
        total,
        status,
        created_at: Some(timestamp(id)),
    }
}

#[derive(Default)]
pub struct InMemoryBackend {
    students: Mutex<Vec<Student>>,
    orders: Mutex<Vec<Order>>,
    next_id: Mutex<i64>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1_000),
            ..Self::default()
        }
    }

    pub fn seed_students(&self, students: Vec<Student>) {
        *self.students.lock().unwrap() = students;
    }

    pub fn seed_orders(&self, orders: Vec<Order>) {
        *self.orders.lock().unwrap() = orders;
    }

    pub fn order_by_id(&self, id: i64) -> Option<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == Some(id))
            .cloned()
    }

    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

/// Sorts, then slices the requested page; an out-of-range page clamps to the
/// last page the way the real backend does.
fn paginate<T>(items: Vec<T>, query: &CollectionQuery) -> PageResult<T> {
    let size = query.size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(size);
    let page = if total_pages == 0 {
        0
    } else {
        query.page.min(total_pages - 1)
    };
    let items = items.into_iter().skip(page * size).take(size).collect();
    PageResult {
        items,
        page,
        total_pages,
        total_count,
        page_size: size,
    }
}

fn directed(ordering: Ordering, sort: &str) -> Ordering {
    match sort.split_once(',').map(|(_, d)| d) {
        Some("desc") => ordering.reverse(),
        _ => ordering,
    }
}

fn sort_column(sort: &str) -> &str {
    sort.split_once(',').map(|(c, _)| c).unwrap_or(sort)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl StudentReader for InMemoryBackend {
    async fn list_students(&self, query: &CollectionQuery) -> BackendResult<PageResult<Student>> {
        let mut students: Vec<Student> = self
            .students
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                query
                    .filters
                    .get("name")
                    .is_none_or(|v| contains_ci(&s.name, v))
                    && query
                        .filters
                        .get("grade")
                        .is_none_or(|v| contains_ci(&s.grade, v))
                    && query
                        .filters
                        .get("school")
                        .is_none_or(|v| contains_ci(&s.school, v))
            })
            .cloned()
            .collect();

        students.sort_by(|a, b| {
            let ordering = match sort_column(&query.sort) {
                "grade" => a.grade.cmp(&b.grade),
                "school" => a.school.cmp(&b.school),
                "createdAt" => a.created_at.cmp(&b.created_at),
                _ => a.name.cmp(&b.name),
            };
            directed(ordering, &query.sort)
        });

        Ok(paginate(students, query))
    }
}

#[async_trait]
impl StudentWriter for InMemoryBackend {
    async fn create_student(&self, new_student: &NewStudent) -> BackendResult<Student> {
        if new_student.name.is_empty() {
            return Err(BackendError::Rejected("name is required".to_string()));
        }
        let id = self.allocate_id();
        let student = Student {
            id: Some(id),
            name: new_student.name.clone(),
            grade: new_student.grade.clone(),
            school: new_student.school.clone(),
            created_at: Some(timestamp(id)),
        };
        self.students.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn update_student(&self, id: i64, updates: &UpdateStudent) -> BackendResult<Student> {
        let mut students = self.students.lock().unwrap();
        let student = students
            .iter_mut()
            .find(|s| s.id == Some(id))
            .ok_or(BackendError::NotFound)?;
        student.name = updates.name.clone();
        student.grade = updates.grade.clone();
        student.school = updates.school.clone();
        Ok(student.clone())
    }

    async fn delete_student(&self, id: i64) -> BackendResult<()> {
        let mut students = self.students.lock().unwrap();
        let before = students.len();
        students.retain(|s| s.id != Some(id));
        if students.len() == before {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl OrderReader for InMemoryBackend {
    async fn list_orders(&self, query: &CollectionQuery) -> BackendResult<PageResult<Order>> {
        let mut orders: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| {
                query
                    .filters
                    .get("studentId")
                    .is_none_or(|v| v.parse::<i64>().is_ok_and(|id| o.student_id == id))
                    && query
                        .filters
                        .get("status")
                        .is_none_or(|v| o.status.as_str() == v)
                    && query
                        .filters
                        .get("minTotal")
                        .is_none_or(|v| v.parse::<f64>().is_ok_and(|min| o.total >= min))
                    && query
                        .filters
                        .get("maxTotal")
                        .is_none_or(|v| v.parse::<f64>().is_ok_and(|max| o.total <= max))
            })
            .cloned()
            .collect();

        orders.sort_by(|a, b| {
            let ordering = match sort_column(&query.sort) {
                "total" => a.total.partial_cmp(&b.total).unwrap_or(Ordering::Equal),
                "status" => a.status.as_str().cmp(b.status.as_str()),
                "studentId" => a.student_id.cmp(&b.student_id),
                _ => a.created_at.cmp(&b.created_at),
            };
            directed(ordering, &query.sort)
        });

        Ok(paginate(orders, query))
    }
}

#[async_trait]
impl OrderWriter for InMemoryBackend {
    async fn create_order(&self, new_order: &NewOrder) -> BackendResult<Order> {
        if new_order.total <= 0.0 {
            return Err(BackendError::Rejected("total must be positive".to_string()));
        }
        let id = self.allocate_id();
        let order = Order {
            id: Some(id),
            student_id: new_order.student_id,
            total: new_order.total,
            status: new_order.status,
            created_at: Some(timestamp(id)),
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update_order(&self, id: i64, updates: &UpdateOrder) -> BackendResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == Some(id))
            .ok_or(BackendError::NotFound)?;
        order.student_id = updates.student_id;
        order.total = updates.total;
        order.status = updates.status;
        Ok(order.clone())
    }

    async fn set_order_status(&self, id: i64, status: OrderStatus) -> BackendResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == Some(id))
            .ok_or(BackendError::NotFound)?;
        order.status = status;
        Ok(order.clone())
    }

    async fn delete_order(&self, id: i64) -> BackendResult<()> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != Some(id));
        if orders.len() == before {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }
}
