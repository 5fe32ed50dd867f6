mod csv_jobseeker_source;

pub use csv_jobseeker_source::CsvJobseekerSource;
