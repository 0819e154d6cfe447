use crate::{
    domain::project::{Project, ProjectId, ProjectStatus},
    error::Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod memory;

#[cfg(feature = "http-gateway")]
pub mod http;

/// Gateway to the tracker's persistence layer
///
/// The board seeds itself once from `fetch_projects` and calls
/// `persist_status` for every confirmed drag transition. Saves carry a
/// project id and the desired status, so a later save for the same project
/// simply supersedes an earlier one (last write wins).
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetches every project for seeding the board
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Durably updates a single project's status
    async fn persist_status(&self, id: &ProjectId, status: ProjectStatus) -> Result<()>;
}

/// A project row as the tracker API serializes it
///
/// The status arrives as a raw token so that a row with an unrecognized
/// value can be skipped instead of failing the whole fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Converts the wire row into a domain project
    pub fn into_project(self) -> Result<Project> {
        let status = ProjectStatus::from_str(&self.status)?;
        Ok(Project {
            id: self.id,
            title: self.title,
            description: self.description,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Converts fetched rows into projects, skipping rows whose status token is
/// not one of the board's lanes
///
/// A skipped row is a data-integrity problem in the store, not a render
/// failure; it is logged and the rest of the fetch goes through.
pub fn records_into_projects(records: Vec<ProjectRecord>) -> Vec<Project> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            let token = record.status.clone();
            match record.into_project() {
                Ok(project) => Some(project),
                Err(_) => {
                    tracing::warn!(
                        project_id = %id,
                        status = %token,
                        "skipping project with unrecognized status"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: &str) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::new(id),
            title: format!("Project {}", id),
            description: None,
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_conversion() {
        let project = record("a", "IN_PROGRESS").into_project().unwrap();
        assert_eq!(project.id.as_str(), "a");
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_record_with_unknown_status_fails() {
        assert!(record("a", "ON_HOLD").into_project().is_err());
    }

    #[test]
    fn test_unknown_status_rows_are_skipped_not_fatal() {
        let records = vec![
            record("a", "IDEA"),
            record("b", "ON_HOLD"),
            record("c", "STABLE"),
        ];

        let projects = records_into_projects(records);

        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_record_parses_api_json() {
        let json = r#"{
            "id": "cmb7xk2vg0000abcd",
            "title": "Habit tracker",
            "description": "Small CLI habit tracker",
            "status": "STABLE",
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-05T09:30:00Z"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        let project = record.into_project().unwrap();

        assert_eq!(project.title, "Habit tracker");
        assert_eq!(project.status, ProjectStatus::Stable);
    }

    #[test]
    fn test_record_description_is_optional() {
        let json = r#"{
            "id": "x",
            "title": "No description",
            "status": "IDEA",
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-01T12:00:00Z"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.description.is_none());
    }
}
