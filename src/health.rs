use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

use crate::shared::config::DashboardConfig;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    dataset: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Dataset file must exist and be a regular file
#[get("/ready")]
pub async fn readiness(config: web::Data<DashboardConfig>) -> impl Responder {
    let dataset_status = dataset_status(&config.dataset_path).await;

    if dataset_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            dataset: dataset_status,
        })
    } else {
        warn!(
            path = %config.dataset_path.display(),
            dataset = dataset_status,
            "Readiness check failed"
        );
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            dataset: dataset_status,
        })
    }
}

async fn dataset_status(path: &Path) -> &'static str {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => "ok",
        Ok(_) => "not_a_file",
        Err(_) => "missing",
    }
}
