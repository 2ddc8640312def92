//! Interactive session loop: prompt, check, display, offer to save.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use claimcheck_core::Settings;
use claimcheck_llm::{FactChecker, PerplexityClient};

use crate::commands::run_check;
use crate::output;
use crate::storage;

pub async fn handle(settings: Settings, results_dir: &Path) -> Result<()> {
    output::header("=== FACT CHECKING ASSISTANT ===");
    output::dim("Verify the accuracy of statements and claims. Type 'exit' to quit.");

    let checker = FactChecker::new(PerplexityClient::new(&settings));

    loop {
        println!("\n{}", "-".repeat(60));
        let line = match prompt_line("Enter the statement or claim to fact-check\n> ")? {
            Some(line) => line,
            None => break,
        };
        let claim = line.trim().to_string();

        if matches!(claim.to_lowercase().as_str(), "exit" | "quit" | "q") {
            break;
        }
        if claim.is_empty() {
            output::warning("Please enter a statement or claim to fact-check.");
            continue;
        }

        let result = run_check(&checker, &claim).await;
        output::display_result(&claim, &result);

        if confirm("Do you want to save this fact-check result? (y/n): ")? {
            match storage::save_result(&claim, &result, results_dir, None) {
                Ok(path) => output::success(&format!("Result saved to {}", path.display())),
                Err(error) => output::error(&format!("Could not save result: {error:#}")),
            }
        }

        if !confirm("Do you want to fact-check another statement? (y/n): ")? {
            break;
        }
    }

    output::dim("Thank you for using the Fact Checking Assistant. Goodbye!");
    Ok(())
}

/// Prompt and read one line. `None` means end of input, which ends the
/// session like an explicit quit.
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = std::io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn confirm(prompt: &str) -> Result<bool> {
    match prompt_line(prompt)? {
        Some(line) => Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}
