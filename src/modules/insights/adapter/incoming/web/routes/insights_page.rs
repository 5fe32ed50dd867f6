use actix_web::{get, http::StatusCode, web, Responder};
use tracing::error;

use crate::insights::adapter::incoming::web::view::{render_dataset_error, render_insights};
use crate::insights::application::ports::incoming::use_cases::BuildInsightsError;
use crate::shared::web::{html_response, render_page, NavItem};
use crate::AppState;

const PAGE_TITLE: &str = "Insights";

#[get("/insights")]
pub async fn insights_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.build_insights_use_case.execute().await {
        Ok(report) => html_response(
            StatusCode::OK,
            render_page(PAGE_TITLE, NavItem::Insights, &render_insights(&report)),
        ),
        Err(err) => {
            error!(error = %err, "Failed to render insights page");
            let status = dataset_error_status(&err);
            html_response(
                status,
                render_page(
                    PAGE_TITLE,
                    NavItem::Insights,
                    &render_dataset_error(&err.to_string()),
                ),
            )
        }
    }
}

fn dataset_error_status(err: &BuildInsightsError) -> StatusCode {
    match err {
        BuildInsightsError::DatasetNotFound(_) => StatusCode::SERVICE_UNAVAILABLE,
        BuildInsightsError::DatasetUnreadable(_) | BuildInsightsError::DatasetMalformed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, fixtures::sample_report,
        stubs::StubBuildInsightsUseCase,
    };

    async fn read_html(resp: actix_web::dev::ServiceResponse) -> String {
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn insights_page_renders_every_block() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_build_insights(StubBuildInsightsUseCase::success(sample_report()))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(insights_page_handler)).await;

        let req = test::TestRequest::get().uri("/insights").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = read_html(resp).await;
        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains("Login Behavior: Users Who Logged In vs Never Logged In"));
        assert!(html.contains("Daily User Registrations Over Time"));
        assert!(html.contains("<a href=\"/insights\" class=\"active\">"));
    }

    #[actix_web::test]
    async fn insights_page_missing_dataset_shows_error_panel() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_build_insights(StubBuildInsightsUseCase::failure(
                BuildInsightsError::DatasetNotFound("Preprocessed_DataJobSeeker.csv".into()),
            ))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(insights_page_handler)).await;

        let req = test::TestRequest::get().uri("/insights").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let html = read_html(resp).await;
        assert!(html.contains("notice error"));
        assert!(html.contains("Dataset not found: Preprocessed_DataJobSeeker.csv"));
        assert!(!html.contains("<section class=\"block\""));
    }

    #[actix_web::test]
    async fn unreadable_and_malformed_are_server_errors() {
        assert_eq!(
            dataset_error_status(&BuildInsightsError::DatasetUnreadable("io".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            dataset_error_status(&BuildInsightsError::DatasetMalformed("row".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
