//! Portfolio projects and their technology links.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use crate::models::skill::Skill;
use crate::mutation::{Changeset, FieldSet};

/// A row from the `portfolio_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioProject {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub image_file_id: Option<DbId>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_ongoing: bool,
    pub team_size: Option<i32>,
    pub role: String,
    pub featured: bool,
    pub features: Json<Vec<String>>,
    pub challenges: Json<Vec<String>>,
    pub learnings: Json<Vec<String>>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its cover image URL and technologies resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioProjectView {
    #[serde(flatten)]
    pub project: PortfolioProject,
    pub image_url: Option<String>,
    pub technologies: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_file_id: Option<DbId>,
    #[validate(url)]
    pub github_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_ongoing: Option<bool>,
    #[validate(range(min = 1))]
    pub team_size: Option<i32>,
    pub role: Option<String>,
    pub featured: Option<bool>,
    pub features: Option<Vec<String>>,
    pub challenges: Option<Vec<String>>,
    pub learnings: Option<Vec<String>>,
    pub display_order: Option<i32>,
    /// Skill ids to link as technologies.
    pub technology_ids: Option<Vec<DbId>>,
}

/// DTO for updating a project. All fields are optional.
///
/// `technology_ids`, when present, replaces the whole technology link set in
/// the same transaction as the column update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_file_id: Option<DbId>,
    #[validate(url)]
    pub github_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_ongoing: Option<bool>,
    #[validate(range(min = 1))]
    pub team_size: Option<i32>,
    pub role: Option<String>,
    pub featured: Option<bool>,
    pub features: Option<Vec<String>>,
    pub challenges: Option<Vec<String>>,
    pub learnings: Option<Vec<String>>,
    pub display_order: Option<i32>,
    pub technology_ids: Option<Vec<DbId>>,
}

impl Changeset for UpdatePortfolioProject {
    fn changeset(&self) -> FieldSet {
        FieldSet::new()
            .set_opt("title", self.title.clone())
            .set_opt("category", self.category.clone())
            .set_opt("description", self.description.clone())
            .set_opt("long_description", self.long_description.clone())
            .set_opt("image_file_id", self.image_file_id)
            .set_opt("github_url", self.github_url.clone())
            .set_opt("live_url", self.live_url.clone())
            .set_opt("start_date", self.start_date)
            .set_opt("end_date", self.end_date)
            .set_opt("is_ongoing", self.is_ongoing)
            .set_opt("team_size", self.team_size)
            .set_opt("role", self.role.clone())
            .set_opt("featured", self.featured)
            .set_opt("features", self.features.clone())
            .set_opt("challenges", self.challenges.clone())
            .set_opt("learnings", self.learnings.clone())
            .set_opt("display_order", self.display_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technology_ids_are_not_a_column() {
        let input = UpdatePortfolioProject {
            technology_ids: Some(vec![1, 2]),
            ..Default::default()
        };
        assert!(input.changeset().is_empty());
    }

    #[test]
    fn list_fields_are_written_whole() {
        let input = UpdatePortfolioProject {
            features: Some(vec![]),
            featured: Some(true),
            ..Default::default()
        };
        let columns: Vec<_> = input.changeset().columns().collect();
        assert_eq!(columns, vec!["featured", "features"]);
    }
}
