//! Domain types for the weather proxy.
//!
//! Request parameters are validated into these types at the handler
//! boundary, so code that receives them can trust their validity.

mod icao;
mod station_code;
mod winds;

pub use icao::{IcaoCode, InvalidIcao};
pub use station_code::{InvalidStationCode, StationCode};
pub use winds::{ForecastPeriod, InvalidForecast, InvalidRegion, Region};
