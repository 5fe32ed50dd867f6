mod get_column_catalog_service;

pub use get_column_catalog_service::GetColumnCatalogService;
