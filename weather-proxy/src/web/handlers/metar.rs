//! Raw METAR pass-through.

use tracing::info;

use crate::domain::IcaoCode;
use crate::web::response::{ApiError, ProxyResponse, QueryParams};
use crate::web::state::AppState;

const CACHE_CONTROL: &str = "max-age=300";

const DEFAULT_ICAO: &str = "KBOS";

const INVALID_ICAO: &str = "Invalid ICAO code. Must be 3-4 characters (e.g., KBOS, KJFK)";

/// Return the raw METAR text for `icao` (default `KBOS`) unchanged.
pub async fn metar(state: &AppState, params: &QueryParams) -> ProxyResponse {
    fetch(state, params)
        .await
        .unwrap_or_else(ApiError::into_proxy_response)
}

async fn fetch(state: &AppState, params: &QueryParams) -> Result<ProxyResponse, ApiError> {
    let raw = params
        .get("icao")
        .map(String::as_str)
        .unwrap_or(DEFAULT_ICAO);
    info!(icao = raw, "Fetching METAR");

    let icao = IcaoCode::parse_normalized(raw)
        .map_err(|_| ApiError::InvalidInput(INVALID_ICAO.to_string()))?;

    let text = state
        .aviation
        .metar_raw(&icao)
        .await
        .map_err(|e| ApiError::from_upstream(e, "METAR", "weather"))?;

    info!(%icao, length = text.len(), "Fetched METAR");
    Ok(ProxyResponse::text(text, CACHE_CONTROL))
}
