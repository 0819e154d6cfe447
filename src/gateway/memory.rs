use crate::{
    domain::project::{Project, ProjectId, ProjectStatus},
    error::{Result, SidetrackError},
    gateway::ProjectGateway,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory gateway implementation
///
/// Backs the board in tests and demos: it stores projects, applies
/// persisted status changes to its store, and records every persist call so
/// callers can assert on them. Two knobs exercise the board's optimistic
/// semantics: a gate that parks persist calls until released, and a failure
/// mode that rejects every save.
pub struct MemoryGateway {
    projects: Mutex<Vec<Project>>,
    persist_calls: Mutex<Vec<(ProjectId, ProjectStatus)>>,
    gate: Option<Arc<Notify>>,
    fail_persists: bool,
}

impl MemoryGateway {
    /// Creates a gateway over the given projects
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            persist_calls: Mutex::new(Vec::new()),
            gate: None,
            fail_persists: false,
        }
    }

    /// Creates a gateway whose persist calls park until the returned gate
    /// is notified, one notification per call
    pub fn gated(projects: Vec<Project>) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let gateway = Self {
            projects: Mutex::new(projects),
            persist_calls: Mutex::new(Vec::new()),
            gate: Some(gate.clone()),
            fail_persists: false,
        };
        (gateway, gate)
    }

    /// Creates a gateway that rejects every persist call
    pub fn failing(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            persist_calls: Mutex::new(Vec::new()),
            gate: None,
            fail_persists: true,
        }
    }

    /// Every persist call seen so far, in order
    pub fn persist_calls(&self) -> Vec<(ProjectId, ProjectStatus)> {
        self.persist_calls.lock().unwrap().clone()
    }

    /// The status of a project as currently stored
    pub fn stored_status(&self, id: &ProjectId) -> Option<ProjectStatus> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.status)
    }
}

#[async_trait]
impl ProjectGateway for MemoryGateway {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn persist_status(&self, id: &ProjectId, status: ProjectStatus) -> Result<()> {
        self.persist_calls
            .lock()
            .unwrap()
            .push((id.clone(), status));

        if self.fail_persists {
            return Err(SidetrackError::GatewayError(
                "persist rejected by test gateway".to_string(),
            ));
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let mut projects = self.projects.lock().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| SidetrackError::ProjectNotFound(id.to_string()))?;
        project.set_status(status);
        Ok(())
    }
}
