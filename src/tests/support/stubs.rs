use async_trait::async_trait;

use crate::insights::application::{
    domain::report::InsightsReport,
    ports::incoming::use_cases::{BuildInsightsError, BuildInsightsUseCase},
};
use crate::tests::support::fixtures::sample_report;

#[derive(Clone)]
pub struct StubBuildInsightsUseCase {
    result: Result<InsightsReport, BuildInsightsError>,
}

impl StubBuildInsightsUseCase {
    pub fn success(report: InsightsReport) -> Self {
        Self { result: Ok(report) }
    }

    pub fn failure(err: BuildInsightsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubBuildInsightsUseCase {
    fn default() -> Self {
        Self::success(sample_report())
    }
}

#[async_trait]
impl BuildInsightsUseCase for StubBuildInsightsUseCase {
    async fn execute(&self) -> Result<InsightsReport, BuildInsightsError> {
        self.result.clone()
    }
}
