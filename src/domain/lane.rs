use crate::domain::project::{Project, ProjectStatus};

/// One column of the status board
///
/// A lane is a status, its header label, and the projects currently in that
/// status, borrowed from the board's project list in their list order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane<'a> {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub projects: Vec<&'a Project>,
}

impl Lane<'_> {
    /// Whether the lane has no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Groups projects into lanes by status
///
/// Produces the four lanes in their fixed board order. Every project lands
/// in exactly one lane, and projects keep their relative order within a
/// lane. Pure function of its input, cheap enough to recompute on every
/// render.
pub fn partition(projects: &[Project]) -> Vec<Lane<'_>> {
    let mut lanes: Vec<Lane<'_>> = ProjectStatus::ALL
        .iter()
        .map(|status| Lane {
            status: *status,
            label: status.label(),
            projects: Vec::new(),
        })
        .collect();

    for project in projects {
        let slot = match project.status {
            ProjectStatus::Idea => 0,
            ProjectStatus::InProgress => 1,
            ProjectStatus::Stable => 2,
            ProjectStatus::Complete => 3,
        };
        lanes[slot].projects.push(project);
    }

    lanes
}
