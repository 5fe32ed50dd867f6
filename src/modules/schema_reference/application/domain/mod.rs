pub mod column_catalog;
