//! Station code extraction from raw winds-aloft bulletins.

use std::collections::BTreeSet;

use crate::domain::StationCode;

/// Line prefixes that mark bulletin headers rather than station rows.
const HEADER_PREFIXES: [&str; 5] = ["(", "FD", "DATA", "VALID", "FT"];

fn is_header(line: &str) -> bool {
    HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) || line.contains("TEMPS NEG")
}

/// Collect the 3-letter station codes that start each data row.
///
/// Blank and header lines are skipped. Only the first whitespace-delimited
/// token of a line is considered.
pub fn extract_station_codes(raw: &str) -> BTreeSet<StationCode> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_header(line))
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|token| StationCode::parse(token).ok())
        .collect()
}
