//! Citation cleanup: strip bracketed reference markers like "[1][2]".

use regex::Regex;

lazy_static::lazy_static! {
    // One bracketed integer, optionally chained with more, no separators.
    static ref CITATION_MARKERS: Regex = Regex::new(r"\[\d+\](?:\[\d+\])*").unwrap();
}

/// Remove chained citation markers, then trim surrounding whitespace.
/// Idempotent: cleaning already-clean text is a no-op. Applied to every
/// string that ends up in a result field, whatever path produced it.
pub fn clean(text: &str) -> String {
    CITATION_MARKERS.replace_all(text, "").trim().to_string()
}
