use async_trait::async_trait;

use crate::insights::application::domain::report::InsightsReport;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildInsightsError {
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Dataset could not be read: {0}")]
    DatasetUnreadable(String),

    #[error("Dataset is malformed: {0}")]
    DatasetMalformed(String),
}

#[async_trait]
pub trait BuildInsightsUseCase: Send + Sync {
    async fn execute(&self) -> Result<InsightsReport, BuildInsightsError>;
}
