pub mod get_insights;
mod insights_page;

pub use get_insights::{
    get_insights_handler, InsightBlockResponse, InsightsResponse, NoticeResponse,
    RemovedColumnsResponse,
};
pub use insights_page::insights_page_handler;
