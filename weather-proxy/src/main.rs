use weather_proxy::airports::{AirportDirectory, DatasetClient};
use weather_proxy::aviation::AviationClient;
use weather_proxy::config::ProxyConfig;
use weather_proxy::web::{AppState, create_router};
use weather_proxy::winds::CoordinateCache;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env().expect("Invalid configuration");

    let aviation =
        AviationClient::new(config.aviation()).expect("Failed to create Aviation Weather client");
    let dataset = DatasetClient::new(config.dataset()).expect("Failed to create dataset client");

    let state = AppState::new(
        aviation,
        AirportDirectory::new(dataset),
        CoordinateCache::new(),
    );

    if config.prefetch_airports {
        let airports = state.airports.clone();
        tokio::spawn(async move {
            let count = airports.all_airports().await.len();
            tracing::info!(count, "Prefetched airport list");
        });
    }

    let app = create_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "Weather proxy listening");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/airport?icao=KBOS");
    tracing::info!("  GET  /api/airports/search?q=bos&limit=15");
    tracing::info!("  GET  /api/metar?icao=KBOS");
    tracing::info!("  GET  /api/winds-aloft?region=bos&fcst=6");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
