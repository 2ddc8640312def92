//! Result persistence: plain-text records under the results directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use claimcheck_core::FactCheckResult;
use regex::Regex;

lazy_static::lazy_static! {
    static ref SLUG_STRIP: Regex = Regex::new(r"[^\w\s-]").unwrap();
    static ref SLUG_COLLAPSE: Regex = Regex::new(r"[-\s]+").unwrap();
}

/// Listing entry for `claimcheck history`.
pub struct SavedResult {
    pub name: String,
    pub saved_at: String,
}

/// Filename-safe slug from the first 30 characters of the claim.
fn slugify(claim: &str) -> String {
    let head: String = claim.chars().take(30).collect();
    let stripped = SLUG_STRIP.replace_all(&head, "");
    SLUG_COLLAPSE
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// Write a plain-text record of the result. The filename defaults to a
/// claim slug plus a timestamp suffix so repeated checks never collide.
/// Returns the path written.
pub fn save_result(
    claim: &str,
    result: &FactCheckResult,
    results_dir: &Path,
    filename: Option<String>,
) -> Result<PathBuf> {
    let now = Local::now();
    let filename = filename
        .unwrap_or_else(|| format!("fact-check-{}-{}.txt", slugify(claim), now.timestamp()));

    fs::create_dir_all(results_dir)
        .with_context(|| format!("create results directory {}", results_dir.display()))?;
    let path = results_dir.join(filename);

    let record = format!(
        "FACT CHECK RESULTS\n\
         =================\n\n\
         CLAIM: {claim}\n\n\
         VERDICT: {verdict}\n\n\
         EXPLANATION:\n{explanation}\n\n\
         CORRECTIONS:\n{corrections}\n\n\
         Timestamp: {timestamp}\n",
        verdict = result.verdict,
        explanation = result.explanation,
        corrections = result.corrections,
        timestamp = now.format("%Y-%m-%d %H:%M:%S"),
    );
    fs::write(&path, record).with_context(|| format!("write result to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved fact-check result");
    Ok(path)
}

/// List saved records, newest first. A missing directory just means
/// nothing has been saved yet.
pub fn list_results(results_dir: &Path) -> Result<Vec<SavedResult>> {
    let dir = match fs::read_dir(results_dir) {
        Ok(dir) => dir,
        Err(_) => return Ok(Vec::new()),
    };

    let mut entries: Vec<(SystemTime, SavedResult)> = Vec::new();
    for entry in dir {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let saved_at = DateTime::<Local>::from(modified)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((modified, SavedResult { name, saved_at }));
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(entries.into_iter().map(|(_, saved)| saved).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> FactCheckResult {
        FactCheckResult::new("Likely True", "Backed by sources.", "No corrections needed.")
    }

    #[test]
    fn slug_keeps_words_and_hyphens() {
        assert_eq!(slugify("The Earth is flat!"), "The-Earth-is-flat");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn slug_truncates_long_claims() {
        let claim = "a".repeat(100);
        assert_eq!(slugify(&claim).len(), 30);
    }

    #[test]
    fn slug_of_punctuation_only_is_empty() {
        assert_eq!(slugify("?!?"), "");
    }

    #[test]
    fn save_writes_complete_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = save_result("Water boils at 100C", &sample_result(), dir.path(), None)
            .expect("save result");

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("fact-check-Water-boils-at-100C"));
        assert!(name.ends_with(".txt"));

        let contents = fs::read_to_string(&path).expect("read record");
        assert!(contents.contains("CLAIM: Water boils at 100C"));
        assert!(contents.contains("VERDICT: Likely True"));
        assert!(contents.contains("EXPLANATION:\nBacked by sources."));
        assert!(contents.contains("CORRECTIONS:\nNo corrections needed."));
        assert!(contents.contains("Timestamp: "));
    }

    #[test]
    fn save_honors_explicit_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = save_result(
            "claim",
            &sample_result(),
            dir.path(),
            Some("my-check.txt".to_string()),
        )
        .expect("save result");
        assert_eq!(path.file_name().unwrap(), "my-check.txt");
    }

    #[test]
    fn list_results_missing_dir_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("never_created");
        assert!(list_results(&missing).expect("list").is_empty());
    }

    #[test]
    fn list_results_sees_saved_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        save_result("first claim", &sample_result(), dir.path(), None).expect("save");
        fs::write(dir.path().join("notes.md"), "not a result").expect("write noise");

        let entries = list_results(dir.path()).expect("list");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].name.starts_with("fact-check-first-claim"));
    }
}
