//! Winds-aloft request parameters.

use std::fmt;

/// Error for a region outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid region. Must be one of: {}", Region::allowed())]
pub struct InvalidRegion;

/// Error for a forecast period outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Invalid forecast period. Must be one of: {}",
    ForecastPeriod::allowed()
)]
pub struct InvalidForecast;

/// Bulletin region accepted by the winds-aloft product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Bos,
    Mia,
    Chi,
    Dfw,
    Slc,
    Sfo,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Bos,
        Region::Mia,
        Region::Chi,
        Region::Dfw,
        Region::Slc,
        Region::Sfo,
    ];

    /// Parse a region. Matching is exact: `BOS` is not accepted.
    pub fn parse(s: &str) -> Result<Self, InvalidRegion> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or(InvalidRegion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Bos => "bos",
            Region::Mia => "mia",
            Region::Chi => "chi",
            Region::Dfw => "dfw",
            Region::Slc => "slc",
            Region::Sfo => "sfo",
        }
    }

    /// Comma-separated list of accepted values.
    pub fn allowed() -> String {
        Self::ALL.map(Region::as_str).join(", ")
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast lead time in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastPeriod {
    Six,
    Twelve,
    TwentyFour,
}

impl ForecastPeriod {
    pub const ALL: [ForecastPeriod; 3] = [
        ForecastPeriod::Six,
        ForecastPeriod::Twelve,
        ForecastPeriod::TwentyFour,
    ];

    pub fn parse(s: &str) -> Result<Self, InvalidForecast> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(InvalidForecast)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ForecastPeriod::Six => "6",
            ForecastPeriod::Twelve => "12",
            ForecastPeriod::TwentyFour => "24",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(ForecastPeriod::as_str).join(", ")
    }
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
