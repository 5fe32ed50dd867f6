pub mod insights;
pub mod jobseeker;
pub mod schema_reference;
