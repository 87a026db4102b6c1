//! Parsing the airports CSV into [`AirportRecord`]s.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Airport types kept for search; heliports, seaplane bases etc. are dropped.
const KEPT_TYPES: [&str; 3] = ["large_airport", "medium_airport", "small_airport"];

/// A searchable US airport.
///
/// `icao` is the best available identifier: the ICAO code when the dataset
/// has one, otherwise the dataset's local identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportRecord {
    pub icao: String,
    pub name: String,
    /// Two-letter state code, empty if unknown
    pub state: String,
    pub lat: f64,
    pub lon: f64,
}

/// The subset of `airports.csv` columns we use.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct AirportRow {
    ident: String,
    #[serde(rename = "type")]
    kind: String,
    name: String,
    latitude_deg: String,
    longitude_deg: String,
    iso_country: String,
    iso_region: String,
    icao_code: String,
}

impl Default for AirportRow {
    fn default() -> Self {
        Self {
            ident: String::new(),
            kind: String::new(),
            name: "Unknown".to_string(),
            latitude_deg: "0".to_string(),
            longitude_deg: "0".to_string(),
            iso_country: String::new(),
            iso_region: String::new(),
            icao_code: String::new(),
        }
    }
}

impl AirportRow {
    /// Convert to a record, or `None` if the row should not be searchable.
    fn into_record(self) -> Option<AirportRecord> {
        if self.iso_country != "US" {
            return None;
        }

        let ident = if self.icao_code.is_empty() {
            self.ident
        } else {
            self.icao_code
        };
        if ident.chars().count() < 3 {
            return None;
        }

        if !KEPT_TYPES.contains(&self.kind.as_str()) {
            return None;
        }

        let lat = self.latitude_deg.trim().parse::<f64>().ok()?;
        let lon = self.longitude_deg.trim().parse::<f64>().ok()?;

        // iso_region is "US-XX"
        let state = self
            .iso_region
            .split('-')
            .nth(1)
            .unwrap_or_default()
            .to_string();

        Some(AirportRecord {
            icao: ident.to_uppercase(),
            name: self.name,
            state,
            lat,
            lon,
        })
    }
}

/// Parse the airports CSV, keeping US airports sorted by identifier.
///
/// Rows that fail to parse are skipped rather than failing the whole file.
pub fn parse_airports(csv_text: &str) -> Vec<AirportRecord> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut skipped = 0usize;

    let mut airports: Vec<AirportRecord> = reader
        .deserialize::<AirportRow>()
        .filter_map(|row| match row {
            Ok(row) => row.into_record(),
            Err(e) => {
                skipped += 1;
                debug!(error = %e, "skipping malformed airport row");
                None
            }
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "malformed airport rows skipped");
    }

    airports.sort_by(|a, b| a.icao.cmp(&b.icao));
    airports
}
