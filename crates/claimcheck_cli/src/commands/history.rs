//! `claimcheck history` - list previously saved results.

use std::path::Path;

use anyhow::Result;

use crate::output;
use crate::storage;

pub fn handle(results_dir: &Path) -> Result<()> {
    let entries = storage::list_results(results_dir)?;
    if entries.is_empty() {
        output::dim("No saved results yet.");
        return Ok(());
    }

    output::header("Saved fact-check results");

    let mut table = output::table();
    output::table_header(&mut table, "File", "Saved at");
    for entry in &entries {
        output::table_row(&mut table, &entry.name, &entry.saved_at);
    }
    let items: Vec<(&str, &str)> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.saved_at.as_str()))
        .collect();
    output::table_print(&table, &items);

    Ok(())
}
