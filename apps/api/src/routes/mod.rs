pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::geo::handlers as geo;
use crate::state::AppState;
use crate::translate;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static catalog
        .route("/api/skills", get(catalog::handle_skills))
        .route("/api/skillsar", get(catalog::handle_skills_ar))
        .route("/api/hobbies", get(catalog::handle_hobbies))
        .route("/api/hobbies-ar", get(catalog::handle_hobbies_ar))
        .route("/api/specializations", get(catalog::handle_specializations))
        .route(
            "/api/specializations/ar",
            get(catalog::handle_specializations_ar),
        )
        .route("/api/jobtitles", get(catalog::handle_job_titles))
        .route("/api/jobtitlesar", get(catalog::handle_job_titles_ar))
        .route("/api/countries", get(catalog::handle_countries))
        .route("/api/countriesar", get(catalog::handle_countries_ar))
        .route("/api/universities", get(catalog::handle_universities))
        .route("/api/universitiesar", get(catalog::handle_universities_ar))
        .route("/api/languages", get(catalog::handle_languages))
        .route("/api/languagesar", get(catalog::handle_languages_ar))
        .route("/api/bachelor", get(catalog::handle_bachelor))
        .route("/api/bachelor/ar", get(catalog::handle_bachelor_ar))
        .route("/api/masters", get(catalog::handle_masters))
        .route("/api/masters/ar", get(catalog::handle_masters_ar))
        .route("/api/doctors", get(catalog::handle_doctors))
        .route("/api/doctors/ar", get(catalog::handle_doctors_ar))
        .route("/api/organizations", get(catalog::handle_organizations))
        .route("/api/certifications", get(catalog::handle_certifications))
        // World table + GeoNames proxy
        .route("/api/world-countries", get(geo::handle_world_countries))
        .route("/api/cities", get(geo::handle_cities))
        .route("/api/cities/ar", get(geo::handle_cities_ar))
        // LLM proxy
        .route(
            "/api/translate-resume",
            post(translate::handle_translate_resume),
        )
        .with_state(state)
}
