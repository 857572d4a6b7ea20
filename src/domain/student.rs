use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::query::QueryState;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned identifier; `None` until the record is persisted.
    pub id: Option<i64>,
    pub name: String,
    pub grade: String,
    pub school: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub grade: String,
    pub school: String,
}

impl NewStudent {
    #[must_use]
    pub fn new(name: String, grade: String, school: String) -> Self {
        Self {
            name: name.trim().to_string(),
            grade: grade.trim().to_string(),
            school: school.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateStudent {
    pub name: String,
    pub grade: String,
    pub school: String,
}

impl UpdateStudent {
    #[must_use]
    pub fn new(name: String, grade: String, school: String) -> Self {
        Self {
            name: name.trim().to_string(),
            grade: grade.trim().to_string(),
            school: school.trim().to_string(),
        }
    }
}

/// Constraint set of the students list view. Absent fields are unconstrained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentFilter {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub school: Option<String>,
}

impl StudentFilter {
    /// Renders this filter set onto the query state. Absent or blank fields
    /// clear their key.
    pub fn apply_to(&self, query: &mut QueryState) {
        query.set_filter("name", self.name.as_deref().unwrap_or(""));
        query.set_filter("grade", self.grade.as_deref().unwrap_or(""));
        query.set_filter("school", self.school.as_deref().unwrap_or(""));
    }
}
