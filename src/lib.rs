//! # Sidetrack Core
//!
//! Core board logic and domain models for Sidetrack side-project tracking.
//!
//! This crate provides the project status board: the lane model that groups
//! projects by status, the drag session state machine that turns pointer
//! input into status transitions, and the board state that applies
//! transitions optimistically while persisting them through a gateway.
//! It carries no dependency on any specific UI or storage implementation.

pub mod board;
pub mod domain;
pub mod error;
pub mod gateway;

// Re-export commonly used types
pub use board::{
    drag::{DragEnd, DragSession, StatusChange},
    geometry::{LaneTarget, Point, Rect},
    Board, CardView, DragOverlay, DropOutcome, LaneView,
};
pub use domain::{
    lane::{partition, Lane},
    project::{Project, ProjectId, ProjectStatus},
};
pub use error::{Result, SidetrackError};
pub use gateway::ProjectGateway;
