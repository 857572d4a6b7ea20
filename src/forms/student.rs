use serde::Deserialize;
use validator::Validate;

use crate::domain::student::{NewStudent, UpdateStudent};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data shared by the add and edit student dialogs.
pub struct StudentForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 20))]
    pub grade: String,
    #[validate(length(min = 1, max = 150))]
    pub school: String,
}

impl From<&StudentForm> for NewStudent {
    fn from(form: &StudentForm) -> Self {
        NewStudent::new(form.name.clone(), form.grade.clone(), form.school.clone())
    }
}

impl From<&StudentForm> for UpdateStudent {
    fn from(form: &StudentForm) -> Self {
        UpdateStudent::new(form.name.clone(), form.grade.clone(), form.school.clone())
    }
}
