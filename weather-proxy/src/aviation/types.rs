//! Wire types for the station info endpoint.

use serde::Deserialize;

/// One entry of a `stationinfo?format=json` response.
///
/// Only the fields the proxy reshapes are modelled; everything is optional
/// because the API omits fields it has no data for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfoDto {
    pub icao_id: Option<String>,
    /// Station name.
    pub site: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Elevation in metres.
    pub elev: Option<f64>,
    pub state: Option<String>,
    pub country: Option<String>,
}
