//! Airport search over the cached US airport list.

use std::num::IntErrorKind;

use tracing::info;

use crate::airports::AirportRecord;
use crate::web::response::{ApiError, ProxyResponse, QueryParams};
use crate::web::state::AppState;

const CACHE_CONTROL: &str = "max-age=3600";

const DEFAULT_LIMIT: usize = 15;
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 50;

/// Queries shorter than this return nothing without touching the directory.
const MIN_QUERY_CHARS: usize = 2;

/// Search airports by identifier prefix or name (`q`, `limit`).
pub async fn airport_search(state: &AppState, params: &QueryParams) -> ProxyResponse {
    search(state, params)
        .await
        .unwrap_or_else(ApiError::into_proxy_response)
}

async fn search(state: &AppState, params: &QueryParams) -> Result<ProxyResponse, ApiError> {
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    let limit = parse_limit(params.get("limit").map(String::as_str));
    info!(query, limit, "Searching airports");

    if query.chars().count() < MIN_QUERY_CHARS {
        return ProxyResponse::json(&[] as &[AirportRecord], None).map_err(search_failed);
    }

    let results = state.airports.search(query, limit).await;
    info!(query, count = results.len(), "Airport search complete");

    ProxyResponse::json(&results, Some(CACHE_CONTROL)).map_err(search_failed)
}

fn search_failed(e: serde_json::Error) -> ApiError {
    ApiError::Internal(format!("Failed to search airports: {e}"))
}

/// Parse the `limit` parameter, clamped to 1..=50.
///
/// A missing or non-numeric value gives the default of 15. Values too large
/// for an integer clamp to the nearest bound.
pub fn parse_limit(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_LIMIT;
    };

    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(MIN_LIMIT, MAX_LIMIT) as usize,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => MAX_LIMIT as usize,
            IntErrorKind::NegOverflow => MIN_LIMIT as usize,
            _ => DEFAULT_LIMIT,
        },
    }
}
