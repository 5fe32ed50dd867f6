use std::sync::Arc;

use actix_web::web;

use crate::insights::application::ports::incoming::use_cases::BuildInsightsUseCase;
use crate::schema_reference::application::{
    ports::incoming::use_cases::GetColumnCatalogUseCase, services::GetColumnCatalogService,
};
use crate::tests::support::stubs::StubBuildInsightsUseCase;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_column_catalog: Option<Arc<dyn GetColumnCatalogUseCase + Send + Sync>>,
    build_insights: Option<Arc<dyn BuildInsightsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_column_catalog: Some(Arc::new(GetColumnCatalogService::new())),
            build_insights: Some(Arc::new(StubBuildInsightsUseCase::default())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_build_insights(
        mut self,
        uc: impl BuildInsightsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.build_insights = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_column_catalog_use_case: self
                .get_column_catalog
                .expect("get_column_catalog_use_case not set"),
            build_insights_use_case: self
                .build_insights
                .expect("build_insights_use_case not set"),
        })
    }
}
