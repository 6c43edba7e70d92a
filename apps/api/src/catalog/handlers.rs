//! Handlers for the static-catalog endpoints. Each is one instantiation of
//! the generic search routine; the key-vs-value choice and the dedup flag
//! are part of the endpoint contract.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::search::{map_side, search, MapSide};
use crate::catalog::tables::CountryRecord;
use crate::errors::AppError;
use crate::state::AppState;
use crate::text::MatchMode;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct UniversitiesQuery {
    pub country: Option<String>,
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct CertificationsQuery {
    pub organization_name: Option<String>,
}

#[derive(Serialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
}

/// GET /api/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.skills_en.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/skillsar — matches against the displayed Arabic values.
pub async fn handle_skills_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        map_side(&state.catalog.skills_ar, MapSide::Values),
        &params.q,
        MatchMode::Arabic,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/hobbies
pub async fn handle_hobbies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.hobbies_en.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/hobbies-ar
pub async fn handle_hobbies_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.hobbies_ar.iter().map(String::as_str),
        &params.q,
        MatchMode::Arabic,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/specializations
pub async fn handle_specializations(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.specializations_en.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/specializations/ar
pub async fn handle_specializations_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.specializations_ar.iter().map(String::as_str),
        &params.q,
        MatchMode::Arabic,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/jobtitles — matches against the English keys.
pub async fn handle_job_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        map_side(&state.catalog.job_titles_en, MapSide::Keys),
        &params.q,
        MatchMode::English,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/jobtitlesar — matches against the Arabic values.
pub async fn handle_job_titles_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        map_side(&state.catalog.job_titles_ar, MapSide::Values),
        &params.q,
        MatchMode::Arabic,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/countries
pub async fn handle_countries(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<CountrySummary>> {
    Json(filter_countries(
        &state.catalog.countries_en,
        &params.q,
        MatchMode::English,
        state.config.result_cap,
    ))
}

/// GET /api/countriesar
pub async fn handle_countries_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<CountrySummary>> {
    Json(filter_countries(
        &state.catalog.countries_ar,
        &params.q,
        MatchMode::Arabic,
        state.config.result_cap,
    ))
}

/// GET /api/universities
pub async fn handle_universities(
    State(state): State<AppState>,
    Query(params): Query<UniversitiesQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    universities_for(
        &state.catalog.countries_en,
        &params,
        MatchMode::English,
        state.config.result_cap,
    )
    .map(Json)
}

/// GET /api/universitiesar
pub async fn handle_universities_ar(
    State(state): State<AppState>,
    Query(params): Query<UniversitiesQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    universities_for(
        &state.catalog.countries_ar,
        &params,
        MatchMode::Arabic,
        state.config.result_cap,
    )
    .map(Json)
}

/// GET /api/languages — English labels are the map keys.
pub async fn handle_languages(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        map_side(&state.catalog.languages, MapSide::Keys),
        &params.q,
        MatchMode::English,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/languagesar — Arabic display names are the map values.
pub async fn handle_languages_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        map_side(&state.catalog.languages, MapSide::Values),
        &params.q,
        MatchMode::Arabic,
        false,
        state.config.result_cap,
    ))
}

/// GET /api/bachelor — deduplicated; the source list repeats entries.
pub async fn handle_bachelor(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.bachelor.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/bachelor/ar
pub async fn handle_bachelor_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.bachelor_ar.iter().map(String::as_str),
        &params.q,
        MatchMode::Arabic,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/masters
pub async fn handle_masters(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.masters.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/masters/ar
pub async fn handle_masters_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.masters_ar.iter().map(String::as_str),
        &params.q,
        MatchMode::Arabic,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/doctors
pub async fn handle_doctors(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.doctors.iter().map(String::as_str),
        &params.q,
        MatchMode::English,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/doctors/ar
pub async fn handle_doctors_ar(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<Vec<String>> {
    Json(search(
        state.catalog.doctors_ar.iter().map(String::as_str),
        &params.q,
        MatchMode::Arabic,
        true,
        state.config.result_cap,
    ))
}

/// GET /api/organizations
pub async fn handle_organizations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .organizations
            .iter()
            .map(|org| org.organization_name.clone())
            .collect(),
    )
}

/// GET /api/certifications — exact organization-name match.
pub async fn handle_certifications(
    State(state): State<AppState>,
    Query(params): Query<CertificationsQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let org_name = params
        .organization_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("organization_name is required".into()))?;

    let org = state
        .catalog
        .organizations
        .iter()
        .find(|org| org.organization_name == org_name)
        .ok_or_else(|| AppError::NotFound("Organization not found".into()))?;

    Ok(Json(org.name.clone()))
}

fn filter_countries(
    records: &[CountryRecord],
    query: &str,
    mode: MatchMode,
    cap: usize,
) -> Vec<CountrySummary> {
    let normalized_query = mode.normalize(query);
    records
        .iter()
        .filter(|record| mode.contains(&record.name, &normalized_query))
        .take(cap)
        .map(|record| CountrySummary {
            code: record.code.clone(),
            name: record.name.clone(),
        })
        .collect()
}

fn universities_for(
    records: &[CountryRecord],
    params: &UniversitiesQuery,
    mode: MatchMode,
    cap: usize,
) -> Result<Vec<String>, AppError> {
    let code = params
        .country
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Missing country code".into()))?
        .to_uppercase();

    let country = records
        .iter()
        .find(|record| record.code == code)
        .ok_or_else(|| AppError::NotFound("Country not found".into()))?;

    Ok(search(
        country.data.keys().map(String::as_str),
        &params.q,
        mode,
        false,
        cap,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::extract::{Query, State};

    fn q(q: &str) -> Query<SearchQuery> {
        Query(SearchQuery { q: q.to_string() })
    }

    #[tokio::test]
    async fn test_skills_empty_query_lists_whole_table() {
        let state = test_state();
        let expected = state.catalog.skills_en.len();
        let Json(results) = handle_skills(State(state), q("")).await;
        assert_eq!(results.len(), expected);
    }

    #[tokio::test]
    async fn test_skills_filter_is_case_insensitive_substring() {
        let Json(results) = handle_skills(State(test_state()), q("SCRIPT")).await;
        assert!(results.contains(&"JavaScript".to_string()));
        assert!(results.contains(&"TypeScript".to_string()));
        assert!(!results.contains(&"Rust".to_string()));
    }

    #[tokio::test]
    async fn test_skills_ar_matches_arabic_values_with_alef_folding() {
        let Json(results) = handle_skills_ar(State(test_state()), q("ادارة")).await;
        assert!(results.contains(&"إدارة المشاريع".to_string()));
    }

    #[tokio::test]
    async fn test_job_titles_search_keys_not_values() {
        let Json(results) = handle_job_titles(State(test_state()), q("engineer")).await;
        assert!(results.contains(&"Software Engineer".to_string()));
        // Values are Arabic; an Arabic query must not match the EN endpoint.
        let Json(none) = handle_job_titles(State(test_state()), q("مهندس")).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_job_titles_ar_search_values() {
        let Json(results) = handle_job_titles_ar(State(test_state()), q("مهندس")).await;
        assert!(results.contains(&"مهندس برمجيات".to_string()));
    }

    #[tokio::test]
    async fn test_languages_keys_and_values_are_siblings() {
        let Json(en) = handle_languages(State(test_state()), q("arab")).await;
        assert_eq!(en, vec!["Arabic".to_string()]);

        let Json(ar) = handle_languages_ar(State(test_state()), q("العربية")).await;
        assert!(ar.contains(&"العربية".to_string()));
    }

    #[tokio::test]
    async fn test_countries_return_code_name_objects() {
        let Json(results) = handle_countries(State(test_state()), q("jordan")).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "JO");
        assert_eq!(results[0].name, "Jordan");
    }

    #[tokio::test]
    async fn test_countries_ar_matches_normalized_arabic() {
        let Json(results) = handle_countries_ar(State(test_state()), q("الاردن")).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "JO");
    }

    #[tokio::test]
    async fn test_universities_requires_country() {
        let state = test_state();
        let err = handle_universities(
            State(state),
            Query(UniversitiesQuery {
                country: None,
                q: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_universities_unknown_country_is_404() {
        let err = handle_universities(
            State(test_state()),
            Query(UniversitiesQuery {
                country: Some("XX".into()),
                q: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_universities_uppercases_country_code() {
        let Json(results) = handle_universities(
            State(test_state()),
            Query(UniversitiesQuery {
                country: Some("jo".into()),
                q: "science".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            results,
            vec!["Jordan University of Science and Technology".to_string()]
        );
    }

    #[tokio::test]
    async fn test_universities_ar_filters_arabic_names() {
        let Json(results) = handle_universities_ar(
            State(test_state()),
            Query(UniversitiesQuery {
                country: Some("JO".into()),
                q: "الاردنية".into(),
            }),
        )
        .await
        .unwrap();
        assert!(results.contains(&"الجامعة الأردنية".to_string()));
    }

    #[tokio::test]
    async fn test_bachelor_is_deduplicated() {
        let Json(results) = handle_bachelor(State(test_state()), q("")).await;
        let mut sorted = results.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), results.len());
    }

    #[tokio::test]
    async fn test_organizations_lists_names() {
        let Json(results) = handle_organizations(State(test_state())).await;
        assert!(results.contains(&"Cisco".to_string()));
    }

    #[tokio::test]
    async fn test_certifications_requires_organization_name() {
        let err = handle_certifications(
            State(test_state()),
            Query(CertificationsQuery {
                organization_name: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_certifications_unknown_org_is_404() {
        let err = handle_certifications(
            State(test_state()),
            Query(CertificationsQuery {
                organization_name: Some("Acme".into()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_certifications_returns_exact_org_list() {
        let state = test_state();
        let expected = state
            .catalog
            .organizations
            .iter()
            .find(|org| org.organization_name == "Cisco")
            .unwrap()
            .name
            .clone();
        let Json(results) = handle_certifications(
            State(state),
            Query(CertificationsQuery {
                organization_name: Some("Cisco".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_result_cap_bounds_every_endpoint() {
        let mut state = test_state();
        state.config.result_cap = 3;
        let Json(results) = handle_skills(State(state.clone()), q("")).await;
        assert_eq!(results.len(), 3);
        let Json(countries) = handle_countries(State(state), q("")).await;
        assert_eq!(countries.len(), 3);
    }
}
