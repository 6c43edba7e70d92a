use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::geo::cache::CityCache;
use crate::geo::geonames::GeoNamesClient;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static reference tables, immutable after startup.
    pub catalog: Arc<Catalog>,
    pub geonames: GeoNamesClient,
    /// Pluggable city cache for the GeoNames proxy. Default: in-memory,
    /// unbounded, process lifetime.
    pub city_cache: Arc<dyn CityCache>,
    pub llm: LlmClient,
    pub config: Config,
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::config::DEFAULT_RESULT_CAP;
    use crate::geo::cache::MemoryCityCache;

    // No upstream credentials: any test that reaches an outbound call gets
    // the "not configured" path instead of network I/O.
    let config = Config {
        port: 3000,
        geonames_user: None,
        openai_api_key: None,
        result_cap: DEFAULT_RESULT_CAP,
        rust_log: "info".to_string(),
    };

    AppState {
        catalog: Arc::new(Catalog::load().expect("bundled tables must parse")),
        geonames: GeoNamesClient::new(config.geonames_user.clone()),
        city_cache: Arc::new(MemoryCityCache::default()),
        llm: LlmClient::new(config.openai_api_key.clone()),
        config,
    }
}
