mod about_page;
pub mod get_schema;

pub use about_page::about_page_handler;
pub use get_schema::{
    get_schema_handler, ColumnDescriptionResponse, DatasetOverviewResponse, SchemaResponse,
};
