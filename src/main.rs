pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::insights;
pub use modules::jobseeker;
pub use modules::schema_reference;

use crate::insights::application::{
    ports::incoming::use_cases::BuildInsightsUseCase, services::BuildInsightsService,
};
use crate::jobseeker::adapter::outgoing::CsvJobseekerSource;
use crate::schema_reference::application::{
    ports::incoming::use_cases::GetColumnCatalogUseCase, services::GetColumnCatalogService,
};
use crate::shared::config::DashboardConfig;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_column_catalog_use_case: Arc<dyn GetColumnCatalogUseCase + Send + Sync>,
    pub build_insights_use_case: Arc<dyn BuildInsightsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = DashboardConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let server_url = config.server_url();
    info!(
        address = %server_url,
        dataset = %config.dataset_path.display(),
        environment = %env,
        "Server configured"
    );

    let jobseeker_source = CsvJobseekerSource::new(config.dataset_path.clone());

    let state = AppState {
        get_column_catalog_use_case: Arc::new(GetColumnCatalogService::new()),
        build_insights_use_case: Arc::new(BuildInsightsService::new(jobseeker_source)),
    };

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(config_data.clone())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // OpenAPI
    cfg.service(crate::api::openapi::openapi_json);
    // Schema reference
    cfg.service(crate::schema_reference::adapter::incoming::web::routes::about_page_handler);
    cfg.service(crate::schema_reference::adapter::incoming::web::routes::get_schema_handler);
    // Insights
    cfg.service(crate::insights::adapter::incoming::web::routes::insights_page_handler);
    cfg.service(crate::insights::adapter::incoming::web::routes::get_insights_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
