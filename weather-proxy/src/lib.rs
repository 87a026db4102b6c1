//! Aviation weather proxy.
//!
//! A small HTTP service that fronts the Aviation Weather data API and the
//! OurAirports dataset: airport lookup and search, raw METARs, and
//! winds-aloft bulletins annotated with station coordinates.

pub mod airports;
pub mod aviation;
pub mod cache;
pub mod config;
pub mod domain;
pub mod web;
pub mod winds;
