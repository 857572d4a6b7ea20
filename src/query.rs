//! Query-state tracking for paginated list views.
//!
//! [`QueryState`] is the single source of truth for "what should the next
//! fetch ask for": current page, page size, active filters and active sort.
//! It records intent only — deciding when a change invalidates the page
//! position (and triggering the actual fetch) is the controller's job.

use std::collections::BTreeMap;

/// Direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Normalized request descriptor consumed by the backend gateway.
///
/// Filters contain only constrained keys; the gateway must omit everything
/// else from the request rather than sending empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    pub page: usize,
    pub size: usize,
    /// Rendered as `"<column>,<asc|desc>"`.
    pub sort: String,
    pub filters: BTreeMap<String, String>,
}

impl CollectionQuery {
    /// Flattens the descriptor into `(key, value)` request parameters.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
            ("sort".to_string(), self.sort.clone()),
        ];
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }
}

/// Mutable query state owned by one list view.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    page: usize,
    page_size: usize,
    sort_column: String,
    sort_direction: SortDirection,
    filters: BTreeMap<String, String>,
}

impl QueryState {
    /// Creates the state for a freshly activated view: page 0, no filters,
    /// the view's initial sort.
    pub fn new(
        sort_column: impl Into<String>,
        sort_direction: SortDirection,
        page_size: usize,
    ) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            sort_column: sort_column.into(),
            sort_direction,
            filters: BTreeMap::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> (&str, SortDirection) {
        (&self.sort_column, self.sort_direction)
    }

    /// Stores a filter value, or clears the key when the trimmed value is
    /// empty. An empty input means "no constraint", never an empty match.
    pub fn set_filter(&mut self, key: impl Into<String>, value: &str) {
        let key = key.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, trimmed.to_string());
        }
    }

    /// Removes a filter constraint entirely.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// Sorts by `column`. Re-selecting the active column flips the
    /// direction; a new column always starts ascending.
    pub fn set_sort(&mut self, column: &str) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = column.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Invoked by the controller whenever filters or sort change: a narrowed
    /// query scope could leave the current index past the last page.
    pub fn reset_to_first_page(&mut self) {
        self.page = 0;
    }

    /// Renders the descriptor for the next fetch.
    pub fn to_query(&self) -> CollectionQuery {
        CollectionQuery {
            page: self.page,
            size: self.page_size,
            sort: format!("{},{}", self.sort_column, self.sort_direction.as_str()),
            filters: self.filters.clone(),
        }
    }
}
