mod jobseeker_source;

pub use jobseeker_source::{JobseekerSource, JobseekerSourceError};
