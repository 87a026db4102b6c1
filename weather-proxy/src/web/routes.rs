//! HTTP routes.

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::response::{ProxyResponse, QueryParams};
use super::state::AppState;

/// Create the application router.
///
/// Every API path answers `GET` and an `OPTIONS` preflight.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/airport", get(airport).options(preflight))
        .route(
            "/api/airports/search",
            get(airport_search).options(preflight),
        )
        .route("/api/metar", get(metar).options(preflight))
        .route("/api/winds-aloft", get(winds_aloft).options(preflight))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn preflight() -> ProxyResponse {
    ProxyResponse::preflight()
}

async fn airport(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ProxyResponse {
    handlers::airport_lookup(&state, &params).await
}

async fn airport_search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ProxyResponse {
    handlers::airport_search(&state, &params).await
}

async fn metar(State(state): State<AppState>, Query(params): Query<QueryParams>) -> ProxyResponse {
    handlers::metar(&state, &params).await
}

async fn winds_aloft(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ProxyResponse {
    handlers::winds_aloft(&state, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::handlers::test_support::{params, state_for};
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use wiremock::MockServer;

    #[tokio::test]
    async fn preflight_is_empty_with_cors() {
        let resp = preflight().await.into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let headers = resp.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET,OPTIONS");
        assert!(headers.get(header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn handler_response_carries_status_and_headers() {
        let server = MockServer::start().await;
        let state = state_for(&server);

        let resp = airport(State(state), Query(params(&[("icao", "X")])))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn router_builds() {
        let server = MockServer::start().await;
        let _router = create_router(state_for(&server));
        assert_eq!(health().await, "ok");
    }
}
