use std::sync::Arc;

use crate::backend::{StudentReader, StudentWriter};
use crate::controller::CollectionState;
use crate::domain::student::{NewStudent, Student, StudentFilter, UpdateStudent};
use crate::query::{QueryState, SortDirection};

/// Controller behind the students list view.
pub struct StudentController<G> {
    gateway: Arc<G>,
    state: CollectionState<Student>,
}

impl<G> StudentController<G>
where
    G: StudentReader + StudentWriter,
{
    /// A fresh students view lists alphabetically by name.
    pub fn new(gateway: Arc<G>, page_size: usize) -> Self {
        Self {
            gateway,
            state: CollectionState::new(QueryState::new(
                "name",
                SortDirection::Ascending,
                page_size,
            )),
        }
    }

    /// The list state the view renders from.
    pub fn state(&self) -> &CollectionState<Student> {
        &self.state
    }

    /// Fetches `page` under the current filters and sort. Success replaces
    /// the displayed page wholesale; failure keeps the last good page
    /// visible and surfaces an error message instead.
    pub async fn refresh(&self, page: usize) {
        let (seq, query) = self.state.begin_fetch(page);
        let result = self.gateway.list_students(&query).await;
        self.state.finish_fetch(seq, result, "Failed to load students");
    }

    /// Applies a new filter set and reloads from the first page — the old
    /// position may not exist under the narrowed scope.
    pub async fn apply_filters(&self, filter: &StudentFilter) {
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

    /// Creates a student, then re-fetches the current page so totals and
    /// positions reflect the server's view.
    pub async fn create(&self, new_student: &NewStudent) {
        self.state.clear_error();
        match self.gateway.create_student(new_student).await {
            Ok(_) => {
                let current = self.state.page_index();
                self.refresh(current).await;
            }
            Err(err) => self.state.record_failure(&err, "Failed to create student"),
        }
    }

    /// Saves an edit and swaps the row in place; an edit changes neither
    /// counts nor the page position.
    pub async fn update(&self, id: i64, updates: &UpdateStudent) {
        self.state.clear_error();
        match self.gateway.update_student(id, updates).await {
            Ok(saved) => self
                .state
                .replace_item_by(|student| student.id == Some(id), saved),
            Err(err) => self.state.record_failure(&err, "Failed to update student"),
        }
    }

    /// Deletes a student, then re-fetches so the page, count and page total
    /// stay consistent (the server may clamp the page index if the last row
    /// of the last page went away).
    pub async fn remove(&self, id: i64) {
        self.state.clear_error();
        match self.gateway.delete_student(id).await {
            Ok(()) => {
                let current = self.state.page_index();
                self.refresh(current).await;
            }
            Err(err) => self.state.record_failure(&err, "Failed to delete student"),
        }
    }
}
