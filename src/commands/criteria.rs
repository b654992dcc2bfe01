//! Criteria command - benchmark inclusion/exclusion criteria format lint.
//!
//! Checks that every benchmark document (except the sentinel placeholder)
//! carries folded-scalar criteria fields with the required clauses.

use std::fs;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use evalcheck_core::criteria::check_criteria;
use evalcheck_core::error::{EvalError, Result};
use evalcheck_core::layout::{Layout, SENTINEL_BENCHMARK};
use evalcheck_core::record;

/// Execute the criteria command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let layout = Layout::resolve(root)?;

    let mut checked = 0usize;
    let mut problems: Vec<(String, Vec<String>)> = Vec::new();

    for path in record::document_files(&layout.benchmarks_dir, "yaml")? {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if name == SENTINEL_BENCHMARK {
            continue;
        }

        checked += 1;
        let content = fs::read_to_string(&path)?;
        let issues = check_criteria(&content);
        if !issues.is_empty() {
            problems.push((name, issues));
        }
    }

    output_result(cli, checked, &problems);

    if problems.is_empty() {
        Ok(())
    } else {
        Err(EvalError::IssuesFound {
            count: problems.len(),
        })
    }
}

fn output_result(cli: &Cli, checked: usize, problems: &[(String, Vec<String>)]) {
    if cli.format == OutputFormat::Json {
        let problems: Vec<_> = problems
            .iter()
            .map(|(file, issues)| serde_json::json!({ "file": file, "issues": issues }))
            .collect();
        println!(
            "{}",
            serde_json::json!({ "checked": checked, "problems": problems })
        );
        return;
    }

    if problems.is_empty() {
        if !cli.quiet {
            println!("PASS: All {checked} benchmarks have valid criteria format.");
        }
        return;
    }

    println!("Benchmark criteria format issues:");
    println!();
    for (file, issues) in problems {
        println!("{file}:");
        for issue in issues {
            println!("  - {issue}");
        }
    }
    println!();
    println!("{} of {checked} benchmarks have issues.", problems.len());
}
