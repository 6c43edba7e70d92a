//! GeoNames search client — the single point of entry for geocoding calls.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

const GEONAMES_URL: &str = "http://api.geonames.org/searchJSON";
/// featureClass=P restricts results to populated places.
const FEATURE_CLASS: &str = "P";

#[derive(Debug, Error)]
pub enum GeoNamesError {
    #[error("GEONAMES_USER is not configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geonames error: {status}")]
    Upstream { status: u16 },
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    geonames: Vec<GeoNameEntry>,
}

#[derive(Debug, Deserialize)]
struct GeoNameEntry {
    #[serde(default)]
    name: String,
}

#[derive(Clone)]
pub struct GeoNamesClient {
    client: reqwest::Client,
    username: Option<String>,
}

impl GeoNamesClient {
    pub fn new(username: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            username,
        }
    }

    /// Fetches populated-place names for one ISO2 country in the requested
    /// display language. Entries with blank names are discarded here;
    /// dedup and ordering are the caller's concern. One request, no retries.
    pub async fn populated_places(
        &self,
        iso2: &str,
        lang: &str,
        max_rows: usize,
    ) -> Result<Vec<String>, GeoNamesError> {
        let username = self.username.as_deref().ok_or(GeoNamesError::Unconfigured)?;

        let response = self
            .client
            .get(GEONAMES_URL)
            .query(&[
                ("country", iso2),
                ("featureClass", FEATURE_CLASS),
                ("maxRows", &max_rows.to_string()),
                ("lang", lang),
                ("username", username),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GeoNames returned {status} for country {iso2}");
            return Err(GeoNamesError::Upstream {
                status: status.as_u16(),
            });
        }

        let parsed: SearchResponse = response.json().await?;
        let names = clean_names(parsed);
        debug!("GeoNames returned {} places for {iso2}", names.len());
        Ok(names)
    }
}

fn clean_names(parsed: SearchResponse) -> Vec<String> {
    parsed
        .geonames
        .into_iter()
        .map(|entry| entry.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_missing_names_are_discarded() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{
                "totalResultsCount": 4,
                "geonames": [
                    {"name": "عمان", "geonameId": 250441},
                    {"name": "  ", "geonameId": 1},
                    {"geonameId": 2},
                    {"name": " إربد ", "geonameId": 250258}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(clean_names(parsed), vec!["عمان", "إربد"]);
    }

    #[test]
    fn test_missing_geonames_array_parses_as_empty() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"status": {"message": "user does not exist"}}"#).unwrap();
        assert!(clean_names(parsed).is_empty());
    }
}
