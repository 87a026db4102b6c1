//! Winds-aloft bulletin proxy with station coordinates.

use tracing::info;

use crate::domain::{ForecastPeriod, Region};
use crate::web::dto::WindsAloftResponse;
use crate::web::response::{ApiError, ProxyResponse, QueryParams};
use crate::web::state::AppState;
use crate::winds::{extract_station_codes, fetch_station_coordinates};

const CACHE_CONTROL: &str = "max-age=1800";

const DEFAULT_REGION: &str = "bos";
const DEFAULT_FCST: &str = "6";

/// Fetch the low-level bulletin for `region`/`fcst` and attach the
/// coordinates of its stations.
pub async fn winds_aloft(state: &AppState, params: &QueryParams) -> ProxyResponse {
    fetch(state, params)
        .await
        .unwrap_or_else(ApiError::into_proxy_response)
}

async fn fetch(state: &AppState, params: &QueryParams) -> Result<ProxyResponse, ApiError> {
    let region = params
        .get("region")
        .map(String::as_str)
        .unwrap_or(DEFAULT_REGION);
    let fcst = params
        .get("fcst")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FCST);
    info!(region, fcst, "Fetching winds aloft");

    let region = Region::parse(region).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    let fcst = ForecastPeriod::parse(fcst).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let raw = state
        .aviation
        .winds_aloft_raw(region, fcst)
        .await
        .map_err(|e| ApiError::from_upstream(e, "winds aloft", "weather"))?;
    info!(length = raw.len(), "Fetched winds aloft data");

    let codes = extract_station_codes(&raw);
    info!(count = codes.len(), ?codes, "Found stations");

    let station_coords =
        fetch_station_coordinates(&state.aviation, &state.station_coords, &codes).await;
    info!(count = station_coords.len(), "Resolved station coordinates");

    ProxyResponse::json(
        &WindsAloftResponse {
            raw,
            station_coords,
        },
        Some(CACHE_CONTROL),
    )
    .map_err(|e| ApiError::Internal(format!("Internal server error: {e}")))
}
