pub mod lane;
pub mod project;

pub use lane::{partition, Lane};
pub use project::{Project, ProjectId, ProjectStatus};
