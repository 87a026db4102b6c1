//! Single-airport metadata lookup.

use tracing::{info, warn};

use crate::domain::IcaoCode;
use crate::web::dto::AirportResponse;
use crate::web::response::{ApiError, ProxyResponse, QueryParams};
use crate::web::state::AppState;

/// Airport metadata changes rarely: let clients keep it for a day.
const CACHE_CONTROL: &str = "max-age=86400";

const INVALID_ICAO: &str = "Invalid ICAO code. Must be 3-4 characters (e.g., KBOS, KJFK)";

/// Resolve `icao` to station metadata.
pub async fn airport_lookup(state: &AppState, params: &QueryParams) -> ProxyResponse {
    lookup(state, params)
        .await
        .unwrap_or_else(ApiError::into_proxy_response)
}

async fn lookup(state: &AppState, params: &QueryParams) -> Result<ProxyResponse, ApiError> {
    let raw = params.get("icao").map(String::as_str).unwrap_or_default();
    info!(icao = raw, "Fetching airport data");

    let icao = IcaoCode::parse_normalized(raw)
        .map_err(|_| ApiError::InvalidInput(INVALID_ICAO.to_string()))?;

    let stations = state
        .aviation
        .station_info(&[icao.as_str()])
        .await
        .map_err(|e| ApiError::from_upstream(e, "airport", "aviation"))?;

    let Some(station) = stations.into_iter().next() else {
        warn!(%icao, "Airport not found");
        return Err(ApiError::NotFound(format!(
            "Airport {icao} not found in FAA database"
        )));
    };

    let airport = AirportResponse::from_station(station, &icao);
    info!(%icao, name = %airport.name, "Fetched airport data");

    ProxyResponse::json(&airport, Some(CACHE_CONTROL))
        .map_err(|e| ApiError::Internal(format!("Internal server error: {e}")))
}
