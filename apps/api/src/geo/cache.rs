//! City cache seam for the GeoNames proxy.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Key-value store from uppercased ISO2 code to an already-deduplicated,
/// already-sorted city list. Implement this to swap in a bounded or TTL
/// cache without touching the routing layer.
///
/// Carried in `AppState` as `Arc<dyn CityCache>`.
#[async_trait]
pub trait CityCache: Send + Sync {
    async fn get(&self, iso2: &str) -> Option<Vec<String>>;
    async fn put(&self, iso2: String, cities: Vec<String>);
}

/// Unbounded in-process cache: no eviction, no TTL, entries live until
/// restart. Concurrent writers for one key store identical data, so the
/// last write winning needs no coordination.
#[derive(Default)]
pub struct MemoryCityCache {
    entries: RwLock<HashMap<String, Vec<String>>>,
}

#[async_trait]
impl CityCache for MemoryCityCache {
    async fn get(&self, iso2: &str) -> Option<Vec<String>> {
        self.entries.read().await.get(iso2).cloned()
    }

    async fn put(&self, iso2: String, cities: Vec<String>) {
        self.entries.write().await.insert(iso2, cities);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = MemoryCityCache::default();
        assert!(cache.get("JO").await.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrips() {
        let cache = MemoryCityCache::default();
        let cities = vec!["عمان".to_string(), "إربد".to_string()];
        cache.put("JO".to_string(), cities.clone()).await;
        assert_eq!(cache.get("JO").await, Some(cities));
    }

    #[tokio::test]
    async fn test_overwrite_is_last_write_wins() {
        let cache = MemoryCityCache::default();
        cache.put("JO".to_string(), vec!["a".to_string()]).await;
        cache.put("JO".to_string(), vec!["b".to_string()]).await;
        assert_eq!(cache.get("JO").await, Some(vec!["b".to_string()]));
    }
}
