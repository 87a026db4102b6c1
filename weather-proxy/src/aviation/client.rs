//! Aviation Weather HTTP client.
//!
//! Wraps the three data endpoints the proxy uses: station info (JSON),
//! METAR (raw text) and winds/temps aloft (raw text).

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::domain::{ForecastPeriod, IcaoCode, Region};

use super::error::AviationError;
use super::types::StationInfoDto;

/// Default base URL for the Aviation Weather Center data API.
const DEFAULT_BASE_URL: &str = "https://aviationweather.gov";

/// Default User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = "Website-Weather-Proxy/1.0";

/// Single-station lookups should be quick; give up after this long.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Aviation Weather client.
#[derive(Debug, Clone)]
pub struct AviationConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl AviationConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for AviationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Aviation Weather data API.
#[derive(Debug, Clone)]
pub struct AviationClient {
    http: reqwest::Client,
    base_url: String,
}

impl AviationClient {
    pub fn new(config: AviationConfig) -> Result<Self, AviationError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up station metadata for one or more ICAO ids.
    ///
    /// The ids are sent as a single comma-separated batch. An empty payload
    /// (the API's answer for unknown stations) yields an empty list.
    pub async fn station_info<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<StationInfoDto>, AviationError> {
        let ids = ids
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        let body = self
            .get_text(
                "/api/data/stationinfo",
                &[("ids", ids.as_str()), ("format", "json")],
            )
            .await?;

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stations: Option<Vec<StationInfoDto>> =
            serde_json::from_str(&body).map_err(|e| AviationError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(stations.unwrap_or_default())
    }

    /// Fetch the raw METAR text for a station.
    pub async fn metar_raw(&self, icao: &IcaoCode) -> Result<String, AviationError> {
        self.get_text(
            "/api/data/metar",
            &[("ids", icao.as_str()), ("format", "raw")],
        )
        .await
    }

    /// Fetch the raw low-level winds/temps aloft bulletin for a region.
    pub async fn winds_aloft_raw(
        &self,
        region: Region,
        fcst: ForecastPeriod,
    ) -> Result<String, AviationError> {
        self.get_text(
            "/api/data/windtemp",
            &[
                ("region", region.as_str()),
                ("fcst", fcst.as_str()),
                ("level", "low"),
                ("format", "raw"),
            ],
        )
        .await
    }

    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, AviationError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "aviation weather response");

        if !status.is_success() {
            return Err(status_error(status));
        }

        Ok(response.text().await?)
    }
}

fn status_error(status: StatusCode) -> AviationError {
    AviationError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}
