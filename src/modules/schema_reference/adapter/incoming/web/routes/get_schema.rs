use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::schema_reference::application::domain::column_catalog::ColumnCatalog;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaResponse {
    pub overview: DatasetOverviewResponse,

    /// Raw portal columns in dictionary order
    pub columns: Vec<ColumnDescriptionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DatasetOverviewResponse {
    #[schema(example = "Sewayojan Portal - Jobseeker Data Overview")]
    pub title: String,
    pub introduction: String,
    pub capabilities: Vec<String>,
    pub focus: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColumnDescriptionResponse {
    #[schema(example = "LoginAttempts")]
    pub name: String,

    #[schema(example = "Number of login attempts made.")]
    pub description: String,
}

impl From<ColumnCatalog> for SchemaResponse {
    fn from(catalog: ColumnCatalog) -> Self {
        let overview = catalog.overview;
        Self {
            overview: DatasetOverviewResponse {
                title: overview.title.to_string(),
                introduction: overview.introduction.to_string(),
                capabilities: overview
                    .capabilities
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                focus: overview.focus.to_string(),
            },
            columns: catalog
                .columns
                .iter()
                .map(|column| ColumnDescriptionResponse {
                    name: column.name.to_string(),
                    description: column.description.to_string(),
                })
                .collect(),
        }
    }
}

/// Dataset column dictionary
///
/// Returns the overview text and every raw portal column with its description.
#[utoipa::path(
    get,
    path = "/api/schema",
    tag = "schema",
    responses(
        (status = 200, description = "Column dictionary", body = inline(SuccessResponse<SchemaResponse>)),
    )
)]
#[get("/api/schema")]
pub async fn get_schema_handler(data: web::Data<AppState>) -> impl Responder {
    let catalog = data.get_column_catalog_use_case.execute().await;
    ApiResponse::success(SchemaResponse::from(catalog))
}
