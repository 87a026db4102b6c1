//! Client for the OurAirports open dataset.

use std::time::Duration;

use super::error::DatasetError;

/// Default location of the global airports CSV.
const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/davidmegginson/ourairports-data/main/airports.csv";

const DEFAULT_USER_AGENT: &str = "Website-Airport-Search/1.0";

/// Configuration for the dataset client.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Full URL of the CSV file
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl DatasetConfig {
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom dataset URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Downloads the raw airports CSV.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    url: String,
}

impl DatasetClient {
    pub fn new(config: DatasetConfig) -> Result<Self, DatasetError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch the whole CSV file as text.
    pub async fn fetch_csv(&self) -> Result<String, DatasetError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DatasetError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.text().await?)
    }
}
