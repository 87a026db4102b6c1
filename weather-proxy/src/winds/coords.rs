//! Station coordinate resolution for winds-aloft stations.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::aviation::AviationClient;
use crate::cache::{MemoCache, Resolved};
use crate::domain::StationCode;

/// Position of a station as reported by the station API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationCoordinate {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Station code -> coordinate, or absent once a lookup has come back empty.
pub type CoordinateCache = MemoCache<StationCode, StationCoordinate>;

/// Resolve coordinates for `codes`, consulting `cache` first.
///
/// Uncached codes are looked up in one batched station-info request using
/// their `K`-prefixed ICAO form. Codes missing from the response, or all of
/// them if the request fails, are cached as absent and never retried.
///
/// The result holds every code with a known coordinate.
pub async fn fetch_station_coordinates(
    client: &AviationClient,
    cache: &CoordinateCache,
    codes: &BTreeSet<StationCode>,
) -> BTreeMap<String, StationCoordinate> {
    let mut coords = BTreeMap::new();
    let mut to_fetch = BTreeSet::new();

    for code in codes {
        match cache.lookup(code).await {
            Some(Resolved::Found(coord)) => {
                coords.insert(code.as_str().to_string(), coord);
            }
            Some(Resolved::Absent) => {}
            None => {
                to_fetch.insert(code.clone());
            }
        }
    }

    if to_fetch.is_empty() {
        return coords;
    }

    debug!(
        count = to_fetch.len(),
        "looking up uncached station coordinates"
    );
    let icao_ids: Vec<String> = to_fetch.iter().map(StationCode::to_icao).collect();

    match client.station_info(&icao_ids[..]).await {
        Ok(stations) => {
            for station in stations {
                let icao = station.icao_id.as_deref().unwrap_or_default();
                let Ok(code) = StationCode::from_icao(icao) else {
                    continue;
                };
                if !to_fetch.contains(&code) {
                    continue;
                }

                let coord = StationCoordinate {
                    lat: station.lat,
                    lon: station.lon,
                };
                coords.insert(code.as_str().to_string(), coord);
                cache.insert(code, coord).await;
            }

            for code in to_fetch {
                if !coords.contains_key(code.as_str()) {
                    cache.mark_absent(code).await;
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch station coordinates");
            for code in to_fetch {
                cache.mark_absent(code).await;
            }
        }
    }

    coords
}
