//! Bilingual text normalization — the single matching policy shared by every
//! search endpoint.
//!
//! English matching lowercases both sides; Arabic matching composes to NFC,
//! folds the three hamza/madda alef variants to bare alef, and collapses
//! whitespace. Every `-ar` endpoint uses the same Arabic policy.

use unicode_normalization::UnicodeNormalization;

/// Matching policy for one endpoint. Carried per-instantiation by the generic
/// search routine, never chosen per-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    English,
    Arabic,
}

impl MatchMode {
    /// Normalizes one operand under this policy. Idempotent.
    pub fn normalize(self, s: &str) -> String {
        match self {
            Self::English => s.to_lowercase(),
            Self::Arabic => normalize_arabic(s),
        }
    }

    /// Substring containment between a candidate and an already-normalized
    /// query. An empty query matches every candidate.
    pub fn contains(self, candidate: &str, normalized_query: &str) -> bool {
        if normalized_query.is_empty() {
            return true;
        }
        self.normalize(candidate).contains(normalized_query)
    }
}

/// NFC-composes, folds أ/إ/آ to ا, collapses whitespace runs to a single
/// space, and trims.
pub fn normalize_arabic(s: &str) -> String {
    let folded: String = s
        .nfc()
        .map(|c| match c {
            '\u{0623}' | '\u{0625}' | '\u{0622}' => '\u{0627}',
            c => c,
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Equality under the Arabic normalization. Used to resolve a caller-supplied
/// country name against the Arabic country table.
pub fn arabic_eq(a: &str, b: &str) -> bool {
    normalize_arabic(a) == normalize_arabic(b)
}

/// Collation key for base-letter Arabic ordering: NFD, then tashkil,
/// tatweel, and the hamza/madda combining marks are dropped. Sorting by this
/// key ignores diacritics while the original strings stay intact.
pub fn arabic_sort_key(s: &str) -> String {
    s.nfd().filter(|&c| !is_arabic_ignorable(c)).collect()
}

/// Sorts in place by the base-letter collation key, tie-broken by the
/// original string so the order is total and stable across runs.
pub fn sort_arabic(names: &mut [String]) {
    names.sort_by(|a, b| {
        arabic_sort_key(a)
            .cmp(&arabic_sort_key(b))
            .then_with(|| a.cmp(b))
    });
}

fn is_arabic_ignorable(c: char) -> bool {
    // Fathatan..sukun + superscript alef, tatweel, and the combining
    // hamza above/below and madda that NFD splits off the alef variants.
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{0640}' | '\u{0653}'..='\u{0655}')
}
