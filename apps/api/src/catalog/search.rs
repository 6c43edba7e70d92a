//! The generic filter-and-cap routine behind every list endpoint.
//!
//! Each endpoint is one configured instantiation: a source iterator, a
//! matching mode, a dedup flag, and the deployment-wide cap. Source order is
//! always preserved.

use std::collections::HashSet;

use crate::text::MatchMode;

/// Which side of a bilingual map participates in matching. Part of each
/// endpoint's contract: it decides whether the displayed string or the
/// internal key is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSide {
    Keys,
    Values,
}

/// Filters `items` by substring containment of `query` under `mode`,
/// optionally dropping repeated entries (first occurrence wins), stopping
/// after `cap` results.
pub fn search<'a, I>(items: I, query: &str, mode: MatchMode, dedup: bool, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized_query = mode.normalize(query);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut results = Vec::new();

    for item in items {
        if results.len() >= cap {
            break;
        }
        if !mode.contains(item, &normalized_query) {
            continue;
        }
        if dedup && !seen.insert(item) {
            continue;
        }
        results.push(item.to_string());
    }

    results
}

/// Projects a bilingual map onto one of its sides.
pub fn map_side(pairs: &[(String, String)], side: MapSide) -> impl Iterator<Item = &str> {
    pairs.iter().map(move |(key, value)| match side {
        MapSide::Keys => key.as_str(),
        MapSide::Values => value.as_str(),
    })
}
