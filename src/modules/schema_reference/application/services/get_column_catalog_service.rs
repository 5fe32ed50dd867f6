use async_trait::async_trait;

use crate::schema_reference::application::{
    domain::column_catalog::ColumnCatalog, ports::incoming::use_cases::GetColumnCatalogUseCase,
};

#[derive(Debug, Clone, Default)]
pub struct GetColumnCatalogService;

impl GetColumnCatalogService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GetColumnCatalogUseCase for GetColumnCatalogService {
    async fn execute(&self) -> ColumnCatalog {
        ColumnCatalog::portal()
    }
}
