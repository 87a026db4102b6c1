//! In-memory directory of US airports.

use std::sync::Arc;

use tracing::{error, info};

use crate::cache::MemoCache;

use super::client::DatasetClient;
use super::error::DatasetError;
use super::parse::{AirportRecord, parse_airports};
use super::search::search_airports;

/// The full airport list, loaded once and kept for the life of the process.
pub type ReferenceCache = MemoCache<(), Arc<[AirportRecord]>>;

/// Airport list backed by the OurAirports dataset.
///
/// The dataset is downloaded lazily on first use. A failed download is not
/// cached, so the next request tries again; a successful one is never
/// refreshed.
pub struct AirportDirectory {
    client: DatasetClient,
    cache: ReferenceCache,
}

impl AirportDirectory {
    pub fn new(client: DatasetClient) -> Self {
        Self {
            client,
            cache: ReferenceCache::new(),
        }
    }

    /// Whether the dataset has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cache.contains(&())
    }

    /// All US airports sorted by identifier.
    ///
    /// Returns an empty list if the dataset cannot be fetched.
    pub async fn all_airports(&self) -> Arc<[AirportRecord]> {
        match self.cache.get_or_try_fetch((), || self.load()).await {
            Ok(Some(airports)) => airports,
            Ok(None) => Arc::from(Vec::new()),
            Err(e) => {
                error!(error = %e, "Failed to fetch airports");
                Arc::from(Vec::new())
            }
        }
    }

    /// Search the directory. See [`search_airports`] for ordering rules.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<AirportRecord> {
        let airports = self.all_airports().await;
        search_airports(&airports, query, limit)
    }

    async fn load(&self) -> Result<Option<Arc<[AirportRecord]>>, DatasetError> {
        info!("Fetching airports from OurAirports");
        let text = self.client.fetch_csv().await?;
        let airports = parse_airports(&text);
        info!(count = airports.len(), "Loaded US airports");
        Ok(Some(Arc::from(airports)))
    }
}
