//! Response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aviation::StationInfoDto;
use crate::domain::IcaoCode;
use crate::winds::StationCoordinate;

/// Metres to feet.
const FEET_PER_METRE: f64 = 3.28084;

/// Airport lookup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportResponse {
    pub icao: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Elevation in feet
    pub elevation: Option<i64>,
    pub state: String,
    pub country: String,
}

impl AirportResponse {
    /// Project a station-info entry, falling back to the requested code
    /// when the entry has no identifier.
    pub fn from_station(station: StationInfoDto, requested: &IcaoCode) -> Self {
        Self {
            icao: station
                .icao_id
                .unwrap_or_else(|| requested.as_str().to_string()),
            name: station.site.unwrap_or_else(|| "Unknown".to_string()),
            lat: station.lat,
            lon: station.lon,
            elevation: station.elev.map(metres_to_feet),
            state: station.state.unwrap_or_default(),
            country: station.country.unwrap_or_default(),
        }
    }
}

/// Convert metres to whole feet, rounding halves to even.
pub fn metres_to_feet(metres: f64) -> i64 {
    (metres * FEET_PER_METRE).round_ties_even() as i64
}

/// Winds-aloft bulletin with coordinates for its stations.
#[derive(Debug, Serialize)]
pub struct WindsAloftResponse {
    pub raw: String,
    #[serde(rename = "stationCoords")]
    pub station_coords: BTreeMap<String, StationCoordinate>,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
