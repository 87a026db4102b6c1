//! Three-letter US station codes as they appear in winds-aloft bulletins.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A 3-letter domestic station code such as `BOS`.
///
/// The ICAO form is obtained by prefixing `K` (see [`StationCode::to_icao`]).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code. The input must be exactly 3 alphabetic characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.chars().count() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !s.chars().all(char::is_alphabetic) {
            return Err(InvalidStationCode {
                reason: "must be alphabetic",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Recover the station code from an ICAO identifier returned by the
    /// station API. A leading `K` is stripped only from 4-character ids.
    pub fn from_icao(icao: &str) -> Result<Self, InvalidStationCode> {
        let code = match icao.strip_prefix('K') {
            Some(rest) if icao.chars().count() == 4 => rest,
            _ => icao,
        };
        Self::parse(code)
    }

    /// ICAO form of this code (`BOS` -> `KBOS`).
    pub fn to_icao(&self) -> String {
        format!("K{}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
