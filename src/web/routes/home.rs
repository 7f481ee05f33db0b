use axum::Json;

use crate::web::types::{HealthStatus, RootStatus};

pub async fn home() -> Json<RootStatus> {
    Json(RootStatus {
        message: "Welcome to MonoFrame Studio API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
