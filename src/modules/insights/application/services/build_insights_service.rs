use async_trait::async_trait;
use tracing::{error, warn};

use crate::{
    insights::application::{
        domain::{blocks::build_blocks, preprocessing::REMOVED_COLUMNS, report::InsightsReport},
        ports::incoming::use_cases::{BuildInsightsError, BuildInsightsUseCase},
    },
    jobseeker::application::ports::outgoing::{JobseekerSource, JobseekerSourceError},
};

/// Loads the dataset fresh on every call and runs all blocks over it.
#[derive(Debug, Clone)]
pub struct BuildInsightsService<S>
where
    S: JobseekerSource + Send + Sync,
{
    source: S,
}

impl<S> BuildInsightsService<S>
where
    S: JobseekerSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> BuildInsightsUseCase for BuildInsightsService<S>
where
    S: JobseekerSource + Send + Sync,
{
    async fn execute(&self) -> Result<InsightsReport, BuildInsightsError> {
        let table = self.source.load().await.map_err(|e| {
            error!(error = %e, "Failed to load jobseeker dataset");
            match e {
                JobseekerSourceError::FileNotFound(path) => {
                    BuildInsightsError::DatasetNotFound(path)
                }
                JobseekerSourceError::Unreadable(msg) => BuildInsightsError::DatasetUnreadable(msg),
                JobseekerSourceError::Malformed(msg) => BuildInsightsError::DatasetMalformed(msg),
            }
        })?;

        if table.is_empty() {
            warn!("Jobseeker dataset has no rows");
        }

        let blocks = build_blocks(&table);

        for block in &blocks {
            if let Some(notice) = &block.notice {
                warn!(
                    block = block.id,
                    level = notice.level.as_str(),
                    "{}",
                    notice.message
                );
            }
        }

        Ok(InsightsReport {
            row_count: table.len(),
            removed_columns: &REMOVED_COLUMNS,
            blocks,
        })
    }
}
