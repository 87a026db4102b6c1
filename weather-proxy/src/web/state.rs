//! Application state for the web layer.

use std::sync::Arc;

use crate::airports::AirportDirectory;
use crate::aviation::AviationClient;
use crate::winds::CoordinateCache;

/// Shared application state.
///
/// Both caches live for the whole process and are shared by every request.
#[derive(Clone)]
pub struct AppState {
    /// Station information, METAR and winds-aloft client
    pub aviation: AviationClient,

    /// Lazily loaded US airport list
    pub airports: Arc<AirportDirectory>,

    /// Coordinates of winds-aloft stations
    pub station_coords: Arc<CoordinateCache>,
}

impl AppState {
    pub fn new(
        aviation: AviationClient,
        airports: AirportDirectory,
        station_coords: CoordinateCache,
    ) -> Self {
        Self {
            aviation,
            airports: Arc::new(airports),
            station_coords: Arc::new(station_coords),
        }
    }
}
