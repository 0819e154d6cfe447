use crate::{
    domain::project::{Project, ProjectId, ProjectStatus},
    error::Result,
    gateway::{records_into_projects, ProjectGateway, ProjectRecord},
};
use async_trait::async_trait;
use serde::Serialize;

/// REST gateway against the tracker API
///
/// Fetches the seed list from `GET {base}/api/projects` and persists status
/// changes with `PATCH {base}/api/projects`, the tracker's partial-update
/// endpoint.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct StatusPatch<'a> {
    id: &'a str,
    status: ProjectStatus,
}

impl HttpGateway {
    /// Creates a gateway for the API at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn projects_url(&self) -> String {
        format!("{}/api/projects", self.base_url)
    }
}

#[async_trait]
impl ProjectGateway for HttpGateway {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let records: Vec<ProjectRecord> = self
            .client
            .get(self.projects_url())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(records_into_projects(records))
    }

    async fn persist_status(&self, id: &ProjectId, status: ProjectStatus) -> Result<()> {
        self.client
            .patch(self.projects_url())
            .json(&StatusPatch {
                id: id.as_str(),
                status,
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let gateway = HttpGateway::new("http://localhost:3000/");
        assert_eq!(gateway.projects_url(), "http://localhost:3000/api/projects");
    }

    #[test]
    fn test_status_patch_shape() {
        let patch = StatusPatch {
            id: "a",
            status: ProjectStatus::InProgress,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"id":"a","status":"IN_PROGRESS"}"#);
    }
}
