//! Web layer for the weather proxy.
//!
//! Exposes the airport, search, METAR and winds-aloft endpoints.

mod dto;
pub mod handlers;
mod response;
mod routes;
mod state;

pub use dto::*;
pub use response::{ApiError, ProxyResponse, QueryParams};
pub use routes::create_router;
pub use state::AppState;
