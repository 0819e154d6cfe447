use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a project
///
/// Ids are opaque strings minted by whichever storage layer created the
/// project; this crate never inspects their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wraps an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a project on the board
///
/// The serialized form matches the tracker API's enum tokens
/// (`IDEA`, `IN_PROGRESS`, `STABLE`, `COMPLETE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Idea,
    InProgress,
    Stable,
    Complete,
}

impl ProjectStatus {
    /// All statuses in fixed lane order
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Idea,
        ProjectStatus::InProgress,
        ProjectStatus::Stable,
        ProjectStatus::Complete,
    ];

    /// Display label for the lane header
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idea => "Idea",
            Self::InProgress => "In Progress",
            Self::Stable => "Stable",
            Self::Complete => "Complete",
        }
    }

    /// API token for this status
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Idea => "IDEA",
            Self::InProgress => "IN_PROGRESS",
            Self::Stable => "STABLE",
            Self::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = crate::error::SidetrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDEA" => Ok(Self::Idea),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "STABLE" => Ok(Self::Stable),
            "COMPLETE" => Ok(Self::Complete),
            _ => Err(crate::error::SidetrackError::UnknownStatus(s.to_string())),
        }
    }
}

/// A tracked side project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with the given title
    ///
    /// New projects start in the `Idea` lane.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: None,
            status: ProjectStatus::Idea,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description
    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
        self.updated_at = Utc::now();
    }

    /// Moves the project to a new status
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
