//! Request handlers.
//!
//! Each handler takes the shared state and the raw query parameters and
//! always produces a complete response; failures are shaped into a JSON
//! error body rather than propagated.

mod airport;
mod airport_search;
mod metar;
mod winds_aloft;

pub use airport::airport_lookup;
pub use airport_search::{airport_search, parse_limit};
pub use metar::metar;
pub use winds_aloft::winds_aloft;
