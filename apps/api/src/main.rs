mod catalog;
mod config;
mod errors;
mod geo;
mod llm_client;
mod routes;
mod state;
mod text;
mod translate;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::geo::cache::MemoryCityCache;
use crate::geo::geonames::GeoNamesClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sira API v{}", env!("CARGO_PKG_VERSION"));

    // Static reference tables; a malformed bundle refuses to start.
    let catalog = Arc::new(Catalog::load()?);
    info!(
        "Catalog loaded: {} skills, {} job titles, {} countries, {} world entries, {} organizations",
        catalog.skills_en.len(),
        catalog.job_titles_en.len(),
        catalog.countries_en.len(),
        catalog.world.len(),
        catalog.organizations.len()
    );

    let geonames = GeoNamesClient::new(config.geonames_user.clone());
    if config.geonames_user.is_none() {
        info!("GEONAMES_USER not set; /api/cities/ar will report 'not configured'");
    }

    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    if config.openai_api_key.is_none() {
        info!("OPENAI_API_KEY not set; /api/translate-resume will report 'not configured'");
    }

    let state = AppState {
        catalog,
        geonames,
        city_cache: Arc::new(MemoryCityCache::default()),
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
