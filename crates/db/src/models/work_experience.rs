//! Work history entries.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::mutation::{Changeset, FieldSet};

/// A row from the `work_experience` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkExperience {
    pub id: DbId,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a work experience entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkExperience {
    #[validate(length(min = 1, max = 200))]
    pub company: String,
    #[validate(length(min = 1, max = 200))]
    pub position: String,
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: Option<bool>,
    pub display_order: Option<i32>,
}

/// DTO for updating a work experience entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkExperience {
    #[validate(length(min = 1, max = 200))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub position: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_current: Option<bool>,
    pub display_order: Option<i32>,
}

impl Changeset for UpdateWorkExperience {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("company", self.company.clone())
            .set_opt("position", self.position.clone())
            .set_opt("description", self.description.clone())
            .set_opt("start_date", self.start_date)
            .set_opt("end_date", self.end_date)
            .set_opt("is_current", self.is_current)
            .set_opt("display_order", self.display_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_touches_nothing() {
        assert!(UpdateWorkExperience::default().changeset().is_empty());
    }

    #[test]
    fn only_supplied_fields_are_written() {
        let input = UpdateWorkExperience {
            position: Some("Staff Engineer".into()),
            is_current: Some(false),
            ..Default::default()
        };
        let columns: Vec<_> = input.changeset().columns().collect();
        assert_eq!(columns, vec!["position", "is_current"]);
    }
}
