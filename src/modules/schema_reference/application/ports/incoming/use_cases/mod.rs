mod get_column_catalog_use_case;

pub use get_column_catalog_use_case::GetColumnCatalogUseCase;
