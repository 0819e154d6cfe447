use crate::{
    board::drag::{DragEnd, DragSession, StatusChange},
    board::geometry::{LaneTarget, Point},
    domain::lane,
    domain::project::{Project, ProjectId, ProjectStatus},
    error::Result,
    gateway::ProjectGateway,
};
use std::sync::Arc;

pub mod drag;
pub mod geometry;

/// What the rendering layer should do after a pointer release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The gesture was a plain click; open the project's edit view
    Navigate(ProjectId),
    /// The card was dropped on a new lane; local state is already updated
    /// and the save is in flight
    Moved(StatusChange),
    /// The drag ended without a transition
    Cancelled,
}

/// One card as the rendering layer should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub project: &'a Project,
    /// Draw at reduced opacity; the overlay copy is following the pointer
    pub dragging: bool,
}

/// One lane as the rendering layer should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct LaneView<'a> {
    pub status: ProjectStatus,
    pub label: &'static str,
    /// Highlight the lane; a dragged card is hovering over it
    pub hovered: bool,
    pub cards: Vec<CardView<'a>>,
}

impl LaneView<'_> {
    /// Whether to show the empty-lane placeholder
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The overlay copy of the dragged card, drawn at the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragOverlay<'a> {
    pub project: &'a Project,
    pub position: Point,
}

/// Interactive state for the project status board
///
/// Owns the local project list (seeded once from the gateway), the drag
/// session, and the gateway handle used to persist confirmed transitions.
/// All mutation happens synchronously inside the pointer-event methods; the
/// only asynchronous work is the detached save spawned on drop.
pub struct Board {
    projects: Vec<Project>,
    drag: DragSession,
    gateway: Arc<dyn ProjectGateway>,
}

impl Board {
    /// Seeds a board from the gateway's fetch result, newest project first
    pub async fn load(gateway: Arc<dyn ProjectGateway>) -> Result<Self> {
        let mut projects = gateway.fetch_projects().await?;
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Self::with_projects(projects, gateway))
    }

    /// Builds a board over an already-fetched project list
    pub fn with_projects(projects: Vec<Project>, gateway: Arc<dyn ProjectGateway>) -> Self {
        Self {
            projects,
            drag: DragSession::new(),
            gateway,
        }
    }

    /// The local project list, in seed order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The card currently being dragged, if any
    pub fn active_project_id(&self) -> Option<&ProjectId> {
        self.drag.active_project()
    }

    /// Pointer pressed on a card
    ///
    /// Presses on ids not in the local list are ignored.
    pub fn pointer_down(&mut self, id: &ProjectId, at: Point) {
        let Some(project) = self.projects.iter().find(|p| &p.id == id) else {
            tracing::debug!(project_id = %id, "ignoring press on unknown project");
            return;
        };
        self.drag.press(project.id.clone(), project.status, at);
    }

    /// Pointer moved; `targets` are the lane boxes as currently measured
    pub fn pointer_move(&mut self, at: Point, targets: &[LaneTarget]) {
        self.drag.update(at, targets);
    }

    /// Pointer released
    ///
    /// A confirmed transition rewrites the local list immediately and then
    /// spawns the save onto the ambient tokio runtime; the caller never
    /// waits on persistence. Returns `None` when no gesture was active.
    pub fn pointer_up(&mut self) -> Option<DropOutcome> {
        match self.drag.release()? {
            DragEnd::Click(id) => Some(DropOutcome::Navigate(id)),
            DragEnd::Dropped(change) => {
                self.apply_status(&change);
                self.spawn_persist(change.clone());
                Some(DropOutcome::Moved(change))
            }
            DragEnd::Cancelled => Some(DropOutcome::Cancelled),
        }
    }

    /// Abandons any active drag without a transition (e.g. escape)
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Lanes in fixed board order, flagged for rendering
    pub fn lanes(&self) -> Vec<LaneView<'_>> {
        let hover = self.drag.hover_lane();
        let active = self.drag.active_project();

        lane::partition(&self.projects)
            .into_iter()
            .map(|lane| LaneView {
                status: lane.status,
                label: lane.label,
                hovered: hover == Some(lane.status),
                cards: lane
                    .projects
                    .into_iter()
                    .map(|project| CardView {
                        project,
                        dragging: active == Some(&project.id),
                    })
                    .collect(),
            })
            .collect()
    }

    /// The drag-preview overlay, present only while a drag is active
    pub fn drag_overlay(&self) -> Option<DragOverlay<'_>> {
        let id = self.drag.active_project()?;
        let position = self.drag.position()?;
        let project = self.projects.iter().find(|p| &p.id == id)?;
        Some(DragOverlay { project, position })
    }

    fn apply_status(&mut self, change: &StatusChange) {
        if let Some(project) = self
            .projects
            .iter_mut()
            .find(|p| p.id == change.project_id)
        {
            project.set_status(change.status);
            tracing::debug!(
                project_id = %change.project_id,
                status = %change.status,
                "applied status change locally"
            );
        }
    }

    /// Fires the save without awaiting it
    ///
    /// Saves are keyed to a project id and status value; a later save for
    /// the same project supersedes this one at the gateway, so in-flight
    /// saves are never cancelled. A failed save is logged and the
    /// optimistic local state is kept until the next full reload.
    fn spawn_persist(&self, change: StatusChange) {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(err) = gateway
                .persist_status(&change.project_id, change.status)
                .await
            {
                tracing::warn!(
                    project_id = %change.project_id,
                    status = %change.status,
                    error = %err,
                    "failed to persist status change, keeping local state"
                );
            }
        });
    }
}
