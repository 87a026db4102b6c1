//! US airport reference list and search.
//!
//! The list comes from the OurAirports open dataset, downloaded once and
//! held in memory for prefix and substring search.

mod client;
mod directory;
mod error;
mod parse;
mod search;

pub use client::{DatasetClient, DatasetConfig};
pub use directory::{AirportDirectory, ReferenceCache};
pub use error::DatasetError;
pub use parse::{AirportRecord, parse_airports};
pub use search::search_airports;
