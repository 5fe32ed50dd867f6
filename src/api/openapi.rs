use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

use crate::insights::adapter::incoming::web::routes::{
    InsightBlockResponse, InsightsResponse, NoticeResponse, RemovedColumnsResponse,
};
use crate::schema_reference::adapter::incoming::web::routes::{
    ColumnDescriptionResponse, DatasetOverviewResponse, SchemaResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sewayojan Jobseeker Insights API",
        version = "0.1.0",
        description = "Column dictionary and login/registration analytics for the Sewayojan jobseeker dataset"
    ),
    paths(
        crate::schema_reference::adapter::incoming::web::routes::get_schema::get_schema_handler,
        crate::insights::adapter::incoming::web::routes::get_insights::get_insights_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Schema reference
            SchemaResponse,
            DatasetOverviewResponse,
            ColumnDescriptionResponse,

            // Insights
            InsightsResponse,
            RemovedColumnsResponse,
            InsightBlockResponse,
            NoticeResponse
        )
    ),
    tags(
        (name = "schema", description = "Dataset column dictionary"),
        (name = "insights", description = "Jobseeker analytics blocks"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn api_doc_lists_json_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/schema"));
        assert!(doc.paths.paths.contains_key("/api/insights"));
    }

    #[actix_web::test]
    async fn openapi_json_is_served() {
        let app = test::init_service(App::new().service(openapi_json)).await;

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "Sewayojan Jobseeker Insights API");
    }
}
