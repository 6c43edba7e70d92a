//! Bundled reference tables and their startup loader.
//!
//! Every table ships inside the binary via `include_str!` and is parsed into
//! a fixed shape exactly once. A malformed bundle refuses to start the
//! service instead of becoming a request-time branch.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// One country with its university roster, joined to the sibling-language
/// table through the ISO2 code.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    /// University name → metadata (empty objects in the bundled tables).
    /// Keys keep their source order (`serde_json` with `preserve_order`).
    pub data: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorldCountry {
    pub name: String,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRecord {
    pub organization_name: String,
    /// Certification names. The field name mirrors the bundled file.
    pub name: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SpecializationFile {
    specializations: Vec<String>,
}

/// All static reference tables, immutable for the process lifetime.
pub struct Catalog {
    pub skills_en: Vec<String>,
    pub skills_ar: Vec<(String, String)>,
    pub hobbies_en: Vec<String>,
    pub hobbies_ar: Vec<String>,
    pub specializations_en: Vec<String>,
    pub specializations_ar: Vec<String>,
    pub job_titles_en: Vec<(String, String)>,
    pub job_titles_ar: Vec<(String, String)>,
    /// English label → Arabic display name; one table backs both language
    /// endpoints (keys for English, values for Arabic).
    pub languages: Vec<(String, String)>,
    pub bachelor: Vec<String>,
    pub bachelor_ar: Vec<String>,
    pub masters: Vec<String>,
    pub masters_ar: Vec<String>,
    pub doctors: Vec<String>,
    pub doctors_ar: Vec<String>,
    pub countries_en: Vec<CountryRecord>,
    pub countries_ar: Vec<CountryRecord>,
    pub world: Vec<WorldCountry>,
    pub organizations: Vec<OrganizationRecord>,
}

impl Catalog {
    /// Parses every bundled table, failing fast on the first mismatch.
    pub fn load() -> Result<Self> {
        let mut countries_en: Vec<CountryRecord> = parse(
            "countries_universities_english",
            include_str!("../../data/countries_universities_english.json"),
        )?;
        let mut countries_ar: Vec<CountryRecord> = parse(
            "countries_universities_arabic",
            include_str!("../../data/countries_universities_arabic.json"),
        )?;
        // Lookups compare against uppercased ISO2 codes.
        for record in countries_en.iter_mut().chain(countries_ar.iter_mut()) {
            record.code = record.code.to_uppercase();
        }

        Ok(Catalog {
            skills_en: parse("skills_english", include_str!("../../data/skills_english.json"))?,
            skills_ar: parse_pairs("skills_arabic", include_str!("../../data/skills_arabic.json"))?,
            hobbies_en: parse(
                "hobbies_english",
                include_str!("../../data/hobbies_english.json"),
            )?,
            hobbies_ar: parse(
                "hobbies_arabic",
                include_str!("../../data/hobbies_arabic.json"),
            )?,
            specializations_en: parse::<SpecializationFile>(
                "specializations_english",
                include_str!("../../data/specializations_english.json"),
            )?
            .specializations,
            specializations_ar: parse::<SpecializationFile>(
                "specializations_arabic",
                include_str!("../../data/specializations_arabic.json"),
            )?
            .specializations,
            job_titles_en: parse_pairs(
                "job_titles_english",
                include_str!("../../data/job_titles_english.json"),
            )?,
            job_titles_ar: parse_pairs(
                "job_titles_arabic",
                include_str!("../../data/job_titles_arabic.json"),
            )?,
            languages: parse_pairs("languages", include_str!("../../data/languages.json"))?,
            bachelor: parse(
                "majors_bachelor",
                include_str!("../../data/majors_bachelor.json"),
            )?,
            bachelor_ar: parse(
                "majors_bachelor_arabic",
                include_str!("../../data/majors_bachelor_arabic.json"),
            )?,
            masters: parse(
                "majors_masters",
                include_str!("../../data/majors_masters.json"),
            )?,
            masters_ar: parse(
                "majors_masters_arabic",
                include_str!("../../data/majors_masters_arabic.json"),
            )?,
            doctors: parse(
                "majors_doctor",
                include_str!("../../data/majors_doctor.json"),
            )?,
            doctors_ar: parse(
                "majors_doctor_arabic",
                include_str!("../../data/majors_doctor_arabic.json"),
            )?,
            countries_en,
            countries_ar,
            world: parse("world_cities", include_str!("../../data/world_cities.json"))?,
            organizations: parse(
                "organization_certifications",
                include_str!("../../data/organization_certifications.json"),
            )?,
        })
    }
}

fn parse<T: serde::de::DeserializeOwned>(table: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Malformed bundled table '{table}'"))
}

/// Parses a JSON object into ordered key/value pairs, requiring every value
/// to be a string. Source order is preserved.
fn parse_pairs(table: &str, raw: &str) -> Result<Vec<(String, String)>> {
    let map: serde_json::Map<String, Value> = parse(table, raw)?;
    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(anyhow!(
                "Malformed bundled table '{table}': value for '{key}' is not a string ({other})"
            )),
        })
        .collect()
}
