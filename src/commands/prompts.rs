//! Prompts command - structural lint for judge prompt documents.
//!
//! Every `*_prompt.md` must carry the fixed required sections and the
//! structured-verdict instruction. `--file` checks a single document,
//! resolved relative to the root.

use std::fs;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use evalcheck_core::error::{EvalError, Result};
use evalcheck_core::layout::Layout;
use evalcheck_core::prompt_lint::missing_sections;
use evalcheck_core::record;

/// Execute the prompts command
pub fn execute(cli: &Cli, root: &Path, file: Option<&Path>) -> Result<()> {
    if let Some(file) = file {
        return check_single_file(cli, root, file);
    }

    let layout = Layout::resolve(root)?;
    let targets = record::prompt_lint_targets(&layout.prompts_dir)?;

    let mut failures: Vec<(String, Vec<String>)> = Vec::new();
    for path in &targets {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let content = fs::read_to_string(path)?;
        let missing = missing_sections(&content);
        if !missing.is_empty() {
            failures.push((name, missing));
        }
    }

    output_all(cli, targets.len(), &failures);

    if failures.is_empty() {
        Ok(())
    } else {
        Err(EvalError::IssuesFound {
            count: failures.len(),
        })
    }
}

fn check_single_file(cli: &Cli, root: &Path, file: &Path) -> Result<()> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    };
    if !path.is_file() {
        return Err(EvalError::FileNotFound { path });
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let content = fs::read_to_string(&path)?;
    let missing = missing_sections(&content);

    if cli.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({ "file": name, "missing": missing })
        );
    } else if missing.is_empty() {
        if !cli.quiet {
            println!("PASS: {name}");
        }
    } else {
        println!("FAIL: {name}");
        for m in &missing {
            println!("  - Missing: {m}");
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EvalError::IssuesFound { count: 1 })
    }
}

fn output_all(cli: &Cli, checked: usize, failures: &[(String, Vec<String>)]) {
    if cli.format == OutputFormat::Json {
        let failures: Vec<_> = failures
            .iter()
            .map(|(file, missing)| serde_json::json!({ "file": file, "missing": missing }))
            .collect();
        println!(
            "{}",
            serde_json::json!({ "checked": checked, "failures": failures })
        );
        return;
    }

    println!("Checked {checked} prompt files");
    println!();

    if failures.is_empty() {
        if !cli.quiet {
            println!("PASS: All prompts have required sections.");
        }
        return;
    }

    println!("FAIL: {} prompts have missing sections:", failures.len());
    println!();
    for (file, missing) in failures {
        println!("  {file}:");
        for m in missing {
            println!("    - Missing: {m}");
        }
    }
}
