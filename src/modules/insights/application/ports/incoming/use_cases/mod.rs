mod build_insights_use_case;

pub use build_insights_use_case::{BuildInsightsError, BuildInsightsUseCase};
