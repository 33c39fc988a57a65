//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, Request, header::CONTENT_TYPE},
    routing::{get, put},
};
use confdeck_model::Catalog;
use confdeck_telemetry::{HEADER_REQUEST_ID, build_sha};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{Span, info, warn};

use crate::error::{ApiServerError, ApiServerResult};
use crate::http::configurations::{
    find_properties, get_configuration, get_property, list_configurations, list_keys,
    put_property, remove_property, update_configuration,
};
use crate::http::constants::{REST_PREFIX, UI_ENTRY_POINT};
use crate::http::errors::ApiError;
use crate::http::health::health;
use crate::state::ApiState;

/// Options controlling what the server mounts besides the REST routes.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Directory holding the built UI bundle; served with an `index.html`
    /// fallback so client-side routes survive a reload.
    pub ui_dir: Option<PathBuf>,
}

/// Axum router wrapper that hosts the Confdeck REST service.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Build the router over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiServerError::UiBundleMissing`] when `options.ui_dir` is set
    /// but contains no `index.html`.
    pub fn new(catalog: Catalog, options: ServerOptions) -> ApiServerResult<Self> {
        let state = Arc::new(ApiState::new(catalog));
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, HeaderName::from_static(HEADER_REQUEST_ID)]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(confdeck_telemetry::propagate_request_id_layer())
            .layer(confdeck_telemetry::set_request_id_layer())
            .layer(trace_layer);

        let router = Router::new()
            .route("/health", get(health))
            .nest(REST_PREFIX, Self::rest_routes());
        let router = Self::mount_ui(router, options.ui_dir)?;
        let router = router
            .layer(cors_layer)
            .layer(layered)
            .with_state(state);

        Ok(Self { router })
    }

    fn rest_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/configurations", get(list_configurations))
            .route(
                "/configurations/{name}",
                get(get_configuration).put(update_configuration),
            )
            .route("/configurations/properties", get(find_properties))
            .route("/configurations/{name}/keys", get(list_keys))
            .route("/configurations/{name}/property", put(put_property))
            .route(
                "/configurations/{name}/property/{property}",
                get(get_property).delete(remove_property),
            )
            .fallback(unknown_route)
    }

    fn mount_ui(
        router: Router<Arc<ApiState>>,
        ui_dir: Option<PathBuf>,
    ) -> ApiServerResult<Router<Arc<ApiState>>> {
        let Some(dir) = ui_dir else {
            return Ok(router.fallback(unknown_route));
        };
        let entry_point = dir.join(UI_ENTRY_POINT);
        if !entry_point.is_file() {
            return Err(ApiServerError::UiBundleMissing { path: entry_point });
        }
        info!(ui_dir = %dir.display(), "serving ui bundle");
        let assets = ServeDir::new(&dir).fallback(ServeFile::new(entry_point));
        Ok(router.fallback_service(assets))
    }

    /// Serve the API on `addr` until ctrl-c is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> ApiServerResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ApiServerError::Bind { addr, source })?;
        info!(%addr, "starting api");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|source| ApiServerError::Serve { source })
    }

    /// Consume the server and return the underlying router.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }
}

async fn unknown_route() -> ApiError {
    ApiError::not_found("no such resource")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable; serving until the process is killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
