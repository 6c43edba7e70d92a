//! World-table and city endpoints, including the GeoNames proxy.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::geo::geonames::GeoNamesError;
use crate::state::AppState;
use crate::text::{arabic_eq, sort_arabic};

#[derive(Deserialize)]
pub struct CountryQuery {
    pub country: Option<String>,
}

/// GET /api/world-countries
pub async fn handle_world_countries(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .world
            .iter()
            .map(|country| country.name.clone())
            .collect(),
    )
}

/// GET /api/cities — exact case-insensitive match on the English name,
/// returning the full city list for that country.
pub async fn handle_cities(
    State(state): State<AppState>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let country = required_country(&params)?;
    let target = country.to_lowercase();

    let entry = state
        .catalog
        .world
        .iter()
        .find(|candidate| candidate.name.to_lowercase() == target)
        .ok_or_else(|| AppError::NotFound("Country not found".into()))?;

    Ok(Json(entry.cities.clone()))
}

/// GET /api/cities/ar
///
/// Resolves the Arabic country name to its ISO2 code by normalized
/// equality, then serves the city list from cache or from GeoNames.
/// Cached entries are stored post-dedup and post-sort and served verbatim.
pub async fn handle_cities_ar(
    State(state): State<AppState>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let country = required_country(&params)?;

    let record = state
        .catalog
        .countries_ar
        .iter()
        .find(|candidate| arabic_eq(&candidate.name, country))
        .ok_or_else(|| AppError::NotFound("Country not found in Arabic list".into()))?;
    let iso2 = record.code.to_uppercase();

    if let Some(cities) = state.city_cache.get(&iso2).await {
        return Ok(Json(cities));
    }

    let names = state
        .geonames
        .populated_places(&iso2, "ar", state.config.result_cap)
        .await
        .map_err(|e| match e {
            GeoNamesError::Unconfigured => AppError::Unconfigured("GEONAMES_USER"),
            GeoNamesError::Upstream { status } => AppError::Upstream {
                service: "geonames",
                status,
            },
            GeoNamesError::Http(e) => {
                AppError::Internal(anyhow::Error::new(e).context("GeoNames request failed"))
            }
        })?;

    let cities = dedup_and_sort(names);
    state.city_cache.put(iso2, cities.clone()).await;
    Ok(Json(cities))
}

/// Set-dedup (exact equality) then Arabic base-letter sort. The resulting
/// order is part of the endpoint contract, not an implementation detail.
fn dedup_and_sort(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<String> = names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    sort_arabic(&mut unique);
    unique
}

fn required_country(params: &CountryQuery) -> Result<&str, AppError> {
    params
        .country
        .as_deref()
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Missing country query param".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::extract::{Query, State};

    fn country(name: &str) -> Query<CountryQuery> {
        Query(CountryQuery {
            country: Some(name.to_string()),
        })
    }

    #[test]
    fn test_dedup_and_sort_orders_and_uniquifies() {
        let names = vec![
            "عمان".to_string(),
            "إربد".to_string(),
            "عمان".to_string(),
            "الزرقاء".to_string(),
        ];
        assert_eq!(dedup_and_sort(names), vec!["إربد", "الزرقاء", "عمان"]);
    }

    #[test]
    fn test_dedup_is_exact_diacritics_survive_as_distinct() {
        // Dedup is by exact string equality; the collation only drives order.
        let names = vec!["مَدرسة".to_string(), "مدرسة".to_string()];
        assert_eq!(dedup_and_sort(names).len(), 2);
    }

    #[tokio::test]
    async fn test_world_countries_lists_all_names() {
        let state = test_state();
        let expected = state.catalog.world.len();
        let Json(results) = handle_world_countries(State(state)).await;
        assert_eq!(results.len(), expected);
        assert!(results.contains(&"Jordan".to_string()));
    }

    #[tokio::test]
    async fn test_cities_requires_country_param() {
        let err = handle_cities(State(test_state()), Query(CountryQuery { country: None }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_cities_unknown_country_is_404() {
        let err = handle_cities(State(test_state()), country("Atlantis"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cities_match_is_case_insensitive_exact() {
        let Json(lower) = handle_cities(State(test_state()), country("Jordan"))
            .await
            .unwrap();
        let Json(upper) = handle_cities(State(test_state()), country("JORDAN"))
            .await
            .unwrap();
        assert_eq!(lower, upper);
        assert!(lower.contains(&"Amman".to_string()));

        // Substrings must not match.
        let err = handle_cities(State(test_state()), country("Jord"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cities_ar_requires_country_param() {
        let err = handle_cities_ar(State(test_state()), Query(CountryQuery { country: None }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_cities_ar_unknown_country_is_404() {
        let err = handle_cities_ar(State(test_state()), country("بلد غير موجود"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cities_ar_unconfigured_is_surfaced_before_any_call() {
        // test_state has no GEONAMES_USER and an empty cache.
        let err = handle_cities_ar(State(test_state()), country("الأردن"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unconfigured("GEONAMES_USER")));
    }

    #[tokio::test]
    async fn test_cities_ar_cache_hit_skips_the_remote_call() {
        let state = test_state();
        let cached = vec!["إربد".to_string(), "عمان".to_string()];
        state.city_cache.put("JO".to_string(), cached.clone()).await;

        // GEONAMES_USER is unset, so reaching FETCH_REMOTE would error;
        // a cache hit must answer without it.
        let Json(first) = handle_cities_ar(State(state.clone()), country("الأردن"))
            .await
            .unwrap();
        assert_eq!(first, cached);

        // Alef-variant spelling resolves to the same ISO2 and the same entry.
        let Json(second) = handle_cities_ar(State(state), country("الاردن"))
            .await
            .unwrap();
        assert_eq!(second, first);
    }
}
