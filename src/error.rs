use thiserror::Error;

pub type Result<T> = std::result::Result<T, SidetrackError>;

#[derive(Debug, Error)]
pub enum SidetrackError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    #[error("Gateway error: {0}")]
    GatewayError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "http-gateway")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}
