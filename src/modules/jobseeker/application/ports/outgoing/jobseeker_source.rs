use async_trait::async_trait;

use crate::jobseeker::application::domain::entities::JobseekerTable;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JobseekerSourceError {
    #[error("Dataset file not found: {0}")]
    FileNotFound(String),

    #[error("Dataset could not be read: {0}")]
    Unreadable(String),

    #[error("Dataset is malformed: {0}")]
    Malformed(String),
}

/// Read-only access to the jobseeker dataset. Each call loads a fresh table.
#[async_trait]
pub trait JobseekerSource: Send + Sync {
    async fn load(&self) -> Result<JobseekerTable, JobseekerSourceError>;
}
