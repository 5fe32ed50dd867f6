mod build_insights_service;

pub use build_insights_service::BuildInsightsService;
