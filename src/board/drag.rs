use crate::board::geometry::{hovered_lane, LaneTarget, Point};
use crate::domain::project::{ProjectId, ProjectStatus};

/// Pointer movement (in logical pixels) required before a press becomes a
/// drag. Anything shorter is a click.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

/// A confirmed status transition produced by a completed drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub project_id: ProjectId,
    pub status: ProjectStatus,
}

/// How a drag session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEnd {
    /// The press never crossed the activation distance; treat as a click
    Click(ProjectId),
    /// The card was released over a lane other than its source
    Dropped(StatusChange),
    /// Released outside every lane, back onto the source lane, or
    /// explicitly cancelled
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
enum DragState {
    Idle,
    Pressed {
        project_id: ProjectId,
        from: ProjectStatus,
        origin: Point,
    },
    Dragging {
        project_id: ProjectId,
        from: ProjectStatus,
        position: Point,
        hover_lane: Option<ProjectStatus>,
    },
}

/// Tracks one card drag from press to release
///
/// The session is a small state machine: `Idle` until a card is pressed,
/// `Pressed` until the pointer travels the activation distance, then
/// `Dragging` with a continuously updated hover lane. Releasing or
/// cancelling always returns it to `Idle`. At most one session is active at
/// a time; a press while one is in flight is ignored.
#[derive(Debug)]
pub struct DragSession {
    state: DragState,
    activation_distance_squared: f64,
}

impl DragSession {
    pub fn new() -> Self {
        Self::with_activation_distance(DEFAULT_ACTIVATION_DISTANCE)
    }

    /// Creates a session with a custom activation distance
    pub fn with_activation_distance(distance: f64) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance_squared: distance * distance,
        }
    }

    /// Arms the session on pointer-down over a card
    pub fn press(&mut self, project_id: ProjectId, from: ProjectStatus, at: Point) {
        if self.state != DragState::Idle {
            return;
        }
        self.state = DragState::Pressed {
            project_id,
            from,
            origin: at,
        };
    }

    /// Advances the session on pointer movement
    ///
    /// `targets` are the lane bounding boxes as currently measured by the
    /// rendering layer.
    pub fn update(&mut self, at: Point, targets: &[LaneTarget]) {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        self.state = match state {
            DragState::Idle => DragState::Idle,
            DragState::Pressed {
                project_id,
                from,
                origin,
            } => {
                if origin.distance_squared(at) >= self.activation_distance_squared {
                    tracing::debug!(project_id = %project_id, "drag activated");
                    DragState::Dragging {
                        project_id,
                        from,
                        position: at,
                        hover_lane: hovered_lane(at, targets),
                    }
                } else {
                    DragState::Pressed {
                        project_id,
                        from,
                        origin,
                    }
                }
            }
            DragState::Dragging {
                project_id, from, ..
            } => DragState::Dragging {
                project_id,
                from,
                position: at,
                hover_lane: hovered_lane(at, targets),
            },
        };
    }

    /// Ends the session on pointer release
    ///
    /// Emits at most one transition: a release over a lane that differs
    /// from the card's source status. A release below the activation
    /// distance is a click, everything else is a cancellation. Returns
    /// `None` when no session was active.
    pub fn release(&mut self) -> Option<DragEnd> {
        let state = std::mem::replace(&mut self.state, DragState::Idle);
        match state {
            DragState::Idle => None,
            DragState::Pressed { project_id, .. } => Some(DragEnd::Click(project_id)),
            DragState::Dragging {
                project_id,
                from,
                hover_lane,
                ..
            } => match hover_lane {
                Some(lane) if lane != from => Some(DragEnd::Dropped(StatusChange {
                    project_id,
                    status: lane,
                })),
                _ => Some(DragEnd::Cancelled),
            },
        }
    }

    /// Abandons the session without emitting anything (e.g. escape)
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// The card currently being dragged, once past the activation distance
    pub fn active_project(&self) -> Option<&ProjectId> {
        match &self.state {
            DragState::Dragging { project_id, .. } => Some(project_id),
            _ => None,
        }
    }

    /// The lane currently under the pointer, while dragging
    pub fn hover_lane(&self) -> Option<ProjectStatus> {
        match &self.state {
            DragState::Dragging { hover_lane, .. } => *hover_lane,
            _ => None,
        }
    }

    /// The pointer position, while dragging
    pub fn position(&self) -> Option<Point> {
        match &self.state {
            DragState::Dragging { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}
