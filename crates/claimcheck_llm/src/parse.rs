//! Response interpreter: recover a structured verdict from free-form model
//! output.
//!
//! Strategies run in strict priority order, each a pure function returning
//! `Option<FactCheckResult>`: JSON object, labeled sections, keyword
//! heuristic, then a fallback that always yields a complete record.

use claimcheck_core::FactCheckResult;
use regex::Regex;

use crate::sanitize::clean;

const VERDICT_MARKER: &str = "VERDICT:";
const EXPLANATION_MARKER: &str = "EXPLANATION:";
const CORRECTIONS_MARKER: &str = "CORRECTIONS:";

lazy_static::lazy_static! {
    // Substring cues, matched case-insensitively anywhere in the text.
    // Positive is evaluated before negative; "incorrect" therefore hits the
    // positive set first via "correct". That precedence is the contract.
    static ref POSITIVE_CUES: Regex = Regex::new(r"(?i)true|accurate|correct|factual").unwrap();
    static ref NEGATIVE_CUES: Regex = Regex::new(r"(?i)false|inaccurate|incorrect|misleading").unwrap();
}

/// Interpret raw model output. Never fails: a strategy miss falls through to
/// the next one, and a panic anywhere is downgraded to an Error record.
pub fn interpret(raw: &str) -> FactCheckResult {
    std::panic::catch_unwind(|| {
        parse_structured(raw)
            .or_else(|| parse_labeled(raw))
            .or_else(|| parse_keywords(raw))
            .unwrap_or_else(|| {
                FactCheckResult::new(
                    "Undetermined",
                    clean(raw),
                    "Unable to determine specific corrections.",
                )
            })
    })
    .unwrap_or_else(|_| {
        FactCheckResult::new("Error", clean(raw), "Error parsing the fact-check response.")
    })
}

/// Strategy 1: the whole response is a JSON object carrying all three
/// fields as non-empty strings. Anything else is a miss, not an error.
fn parse_structured(raw: &str) -> Option<FactCheckResult> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let object = value.as_object()?;
    let field = |key: &str| object.get(key)?.as_str().filter(|s| !s.is_empty());
    let verdict = field("verdict")?;
    let explanation = field("explanation")?;
    let corrections = field("corrections")?;
    Some(FactCheckResult::new(
        clean(verdict),
        clean(explanation),
        clean(corrections),
    ))
}

/// Strategy 2: the VERDICT/EXPLANATION/CORRECTIONS layout the system prompt
/// asks for. Requires all three markers; sections may span lines. An empty
/// section gets a per-field fallback instead of an empty string.
fn parse_labeled(raw: &str) -> Option<FactCheckResult> {
    if !(raw.contains(VERDICT_MARKER)
        && raw.contains(EXPLANATION_MARKER)
        && raw.contains(CORRECTIONS_MARKER))
    {
        return None;
    }

    let verdict = section(raw, VERDICT_MARKER, Some(EXPLANATION_MARKER)).trim();
    let explanation = section(raw, EXPLANATION_MARKER, Some(CORRECTIONS_MARKER)).trim();
    let corrections = section(raw, CORRECTIONS_MARKER, None).trim();

    Some(FactCheckResult::new(
        if verdict.is_empty() {
            "Undetermined".to_string()
        } else {
            clean(verdict)
        },
        if explanation.is_empty() {
            clean(raw)
        } else {
            clean(explanation)
        },
        if corrections.is_empty() {
            "No corrections provided.".to_string()
        } else {
            clean(corrections)
        },
    ))
}

/// Text after the first `marker`, up to the first `stop` inside that
/// remainder (or to the end when `stop` is absent there).
fn section<'a>(text: &'a str, marker: &str, stop: Option<&str>) -> &'a str {
    let start = match text.find(marker) {
        Some(index) => index + marker.len(),
        None => return "",
    };
    let rest = &text[start..];
    match stop.and_then(|m| rest.find(m)) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Strategy 3: keyword scan over the full text, positive cues first. Blocks
/// are paragraphs separated by a blank line.
fn parse_keywords(raw: &str) -> Option<FactCheckResult> {
    let blocks: Vec<&str> = raw.split("\n\n").collect();

    if POSITIVE_CUES.is_match(raw) {
        let last_block = *blocks.last()?;
        let explanation = if blocks.len() > 1 {
            match raw.rfind(last_block) {
                Some(index) => clean(&raw[..index]),
                None => clean(raw),
            }
        } else {
            clean(raw)
        };
        return Some(FactCheckResult::new(
            "Likely True",
            explanation,
            "No corrections needed.",
        ));
    }

    if NEGATIVE_CUES.is_match(raw) {
        let first_block = *blocks.first()?;
        let corrections = if blocks.len() > 1 {
            clean(&raw[first_block.len()..])
        } else {
            "No specific corrections provided.".to_string()
        };
        return Some(FactCheckResult::new(
            "Likely False",
            clean(first_block),
            corrections,
        ));
    }

    None
}
