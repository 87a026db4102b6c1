//! Winds-aloft bulletin enrichment.
//!
//! Bulletins are passed through as raw text; alongside them we return the
//! coordinates of every station row so the frontend can plot them without
//! further lookups.

mod coords;
mod extract;

pub use coords::{CoordinateCache, StationCoordinate, fetch_station_coordinates};
pub use extract::extract_station_codes;
