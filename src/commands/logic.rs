//! Logic command - heuristic compound AND/OR flagger.
//!
//! Surfaces prompts whose "Automatic fail" bullets may be incorrectly
//! split compound AND conditions. Informational only: the command always
//! exits 0 regardless of findings.

use std::fs;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use evalcheck_core::error::Result;
use evalcheck_core::layout::Layout;
use evalcheck_core::logic::{analyze_prompt, PromptAnalysis, RiskLevel};
use evalcheck_core::record;

/// Execute the logic command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let layout = Layout::resolve(root)?;

    let mut results = Vec::new();
    for path in record::prompt_lint_targets(&layout.prompts_dir)? {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let content = fs::read_to_string(&path)?;
        results.push(analyze_prompt(name, &content));
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        output_human(cli, &results);
    }

    // Informational only, never a failure
    Ok(())
}

fn output_human(cli: &Cli, results: &[PromptAnalysis]) {
    let review: Vec<_> = results
        .iter()
        .filter(|r| r.risk_level == RiskLevel::Review)
        .collect();
    let low_risk = results.len() - review.len();

    println!("Analyzed {} prompt files", results.len());
    println!();
    println!("Low risk (single bullet or all have AND): {low_risk}");
    println!("Review candidates: {}", review.len());
    println!();

    if review.is_empty() {
        return;
    }

    println!("{}", "=".repeat(60));
    println!("CANDIDATES FOR MANUAL AND/OR LOGIC REVIEW");
    println!("{}", "=".repeat(60));
    println!();

    for analysis in &review {
        println!(
            "{} ({} bullets, {} with AND)",
            analysis.filename, analysis.bullet_count, analysis.bullets_with_and
        );
        for flag in &analysis.flags {
            println!("  > {flag}");
        }

        if cli.verbose && !analysis.bullets.is_empty() {
            println!("  Bullets:");
            for bullet in &analysis.bullets {
                let truncated = if bullet.chars().count() > 100 {
                    format!("{}...", bullet.chars().take(100).collect::<String>())
                } else {
                    bullet.clone()
                };
                let has_and = if bullet.contains(" AND ") { " [AND]" } else { "" };
                println!("    - {truncated}{has_and}");
            }
        }
        println!();
    }

    println!("{}", "-".repeat(60));
    println!("NOTE: This is a heuristic flag, not a definitive error.");
    println!("Review each candidate to verify OR logic is intentional.");
    println!("{}", "-".repeat(60));
}
