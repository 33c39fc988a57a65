//! Liveness endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use confdeck_telemetry::build_sha;
use serde::Serialize;

use crate::state::ApiState;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) build: &'static str,
    pub(crate) configurations: usize,
}

pub(crate) async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let configurations = state.catalog.read().await.len();
    Json(HealthResponse {
        status: "ok",
        build: build_sha(),
        configurations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdeck_model::Catalog;

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let state = Arc::new(ApiState::new(Catalog::seeded()));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.configurations, 4);
        assert!(!body.build.is_empty());
    }
}
