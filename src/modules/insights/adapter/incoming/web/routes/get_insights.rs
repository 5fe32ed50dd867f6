use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::insights::application::{
    domain::{
        charts::ChartSpec,
        report::{InsightBlock, InsightsReport, Notice},
    },
    ports::incoming::use_cases::BuildInsightsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct InsightsResponse {
    /// Number of rows read from the dataset
    #[schema(example = 100000)]
    pub row_count: usize,

    /// Column groups excluded during preprocessing
    pub removed_columns: Vec<RemovedColumnsResponse>,

    /// Analysis blocks in page order
    pub blocks: Vec<InsightBlockResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovedColumnsResponse {
    #[schema(example = json!(["usernameEdistrict"]))]
    pub columns: Vec<String>,

    #[schema(example = "100% null")]
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InsightBlockResponse {
    #[schema(example = "days_to_login")]
    pub id: String,

    #[schema(example = "Distribution of Time Taken by Users to Log In After Signup")]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Average time to login: 1.42 days")]
    pub headline: Option<String>,

    /// Plotly figure (`data` + `layout`)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub chart: Option<ChartSpec>,

    /// Present when the block could not be drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoticeResponse {
    #[schema(example = "warning")]
    pub level: String,

    #[schema(example = "Column 'js_browser_name' not found in the dataset.")]
    pub message: String,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level.as_str().to_string(),
            message: notice.message,
        }
    }
}

impl From<InsightBlock> for InsightBlockResponse {
    fn from(block: InsightBlock) -> Self {
        Self {
            id: block.id.to_string(),
            title: block.title.to_string(),
            headline: block.headline,
            chart: block.chart,
            notice: block.notice.map(NoticeResponse::from),
            summary: block.summary.map(str::to_string),
        }
    }
}

impl From<InsightsReport> for InsightsResponse {
    fn from(report: InsightsReport) -> Self {
        Self {
            row_count: report.row_count,
            removed_columns: report
                .removed_columns
                .iter()
                .map(|group| RemovedColumnsResponse {
                    columns: group.columns.iter().map(|c| c.to_string()).collect(),
                    reason: group.reason.to_string(),
                })
                .collect(),
            blocks: report
                .blocks
                .into_iter()
                .map(InsightBlockResponse::from)
                .collect(),
        }
    }
}

/// Jobseeker insights
///
/// Loads the dataset and returns every analysis block with its chart figure.
#[utoipa::path(
    get,
    path = "/api/insights",
    tag = "insights",
    responses(
        (status = 200, description = "Insights computed", body = inline(SuccessResponse<InsightsResponse>)),
        (status = 503, description = "Dataset file not found", body = ErrorResponse),
        (status = 500, description = "Dataset unreadable or malformed", body = ErrorResponse),
    )
)]
#[get("/api/insights")]
pub async fn get_insights_handler(data: web::Data<AppState>) -> impl Responder {
    match data.build_insights_use_case.execute().await {
        Ok(report) => ApiResponse::success(InsightsResponse::from(report)),
        Err(err) => {
            error!(error = %err, "Failed to build insights");
            map_build_insights_error(err)
        }
    }
}

fn map_build_insights_error(err: BuildInsightsError) -> HttpResponse {
    match err {
        BuildInsightsError::DatasetNotFound(path) => ApiResponse::service_unavailable(
            "DATASET_NOT_FOUND",
            &format!("Dataset file not found: {path}"),
        ),
        BuildInsightsError::DatasetUnreadable(msg) => ApiResponse::internal(
            "DATASET_UNREADABLE",
            &format!("Dataset could not be read: {msg}"),
        ),
        BuildInsightsError::DatasetMalformed(msg) => ApiResponse::internal(
            "DATASET_MALFORMED",
            &format!("Dataset is malformed: {msg}"),
        ),
    }
}
