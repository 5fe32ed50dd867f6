use async_trait::async_trait;

use crate::schema_reference::application::domain::column_catalog::ColumnCatalog;

#[async_trait]
pub trait GetColumnCatalogUseCase: Send + Sync {
    async fn execute(&self) -> ColumnCatalog;
}
