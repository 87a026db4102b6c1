//! Aviation Weather Center data API client.
//!
//! Station lookups are keyed by comma-separated ICAO ids. METAR and
//! winds-aloft products are fetched in raw-text mode and passed through
//! untouched; only station info is parsed.

mod client;
mod error;
mod types;

pub use client::{AviationClient, AviationConfig};
pub use error::AviationError;
pub use types::StationInfoDto;
