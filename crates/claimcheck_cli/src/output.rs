//! Terminal output helpers, dual-mode: styled text for humans, structured
//! JSON lines for machines.
//!
//! Uses `console` for colors (respects NO_COLOR, auto-disables when piped),
//! `indicatif` for the progress spinner and `comfy-table` for listings.

use std::sync::atomic::{AtomicBool, Ordering};

use claimcheck_core::{FactCheckResult, VerdictTone};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), text);
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Render a fact-check result with verdict-dependent emphasis.
pub fn display_result(claim: &str, result: &FactCheckResult) {
    if is_json() {
        let value = serde_json::json!({
            "claim": claim,
            "verdict": result.verdict,
            "explanation": result.explanation,
            "corrections": result.corrections,
        });
        emit_json("result", "fact-check result", Some(&value));
        return;
    }

    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{}", style("FACT CHECK RESULTS").bold().cyan());
    println!("{rule}\n");

    println!("{}", style("CLAIM:").bold().yellow());
    println!("{claim}\n");

    let verdict = result.verdict.as_str();
    let styled_verdict = match result.tone() {
        VerdictTone::Affirmed => style(verdict).green().bold(),
        VerdictTone::Refuted => style(verdict).red().bold(),
        VerdictTone::Partial => style(verdict).yellow().bold(),
        VerdictTone::Neutral => style(verdict).bold(),
    };
    println!("{}", style("VERDICT:").bold().cyan());
    println!("{styled_verdict}\n");

    println!("{}", style("EXPLANATION:").bold().cyan());
    println!("{}\n", result.explanation);

    println!("{}", style("CORRECTIONS:").bold().cyan());
    println!("{}\n", result.corrections);
}

// ── Tables ─────────────────────────────────────────────────────────

pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn table_header(table: &mut Table, col1: &str, col2: &str) {
    table.set_header(vec![
        Cell::new(col1)
            .fg(Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
        Cell::new(col2)
            .fg(Color::Cyan)
            .add_attribute(comfy_table::Attribute::Bold),
    ]);
}

pub fn table_row(table: &mut Table, name: &str, desc: &str) {
    table.add_row(vec![Cell::new(name).fg(Color::Green), Cell::new(desc)]);
}

/// Print a table (JSON mode emits an items array instead).
pub fn table_print(table: &Table, items: &[(&str, &str)]) {
    if is_json() {
        let items: Vec<_> = items
            .iter()
            .map(|(name, saved_at)| serde_json::json!({ "file": name, "saved_at": saved_at }))
            .collect();
        let data = serde_json::json!({ "items": items });
        emit_json("list", "", Some(&data));
    } else {
        println!("{table}");
    }
}

// ── Spinner ────────────────────────────────────────────────────────

/// Spinner shown while the completion call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
