//! Check command - full consistency validation across the three layers.
//!
//! Loads the rubric and benchmark mappings and the discovered prompt set,
//! runs every check over the immutable snapshot, and renders the report.
//! Exit status follows the issue list: non-empty means failure, whether or
//! not the report was written to a file.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use evalcheck_core::error::{EvalError, Result};
use evalcheck_core::layout::{Layout, NON_PROMPT_FILES, SENTINEL_BENCHMARK};
use evalcheck_core::record;
use evalcheck_core::report::{self, ConsistencyReport};

/// Execute the check command
pub fn execute(cli: &Cli, root: &Path, report_path: Option<&Path>) -> Result<()> {
    let layout = Layout::resolve(root)?;

    let rubrics = record::load_records(&layout.rubrics_dir, "yaml", &[])?;
    let benchmarks =
        record::load_records(&layout.benchmarks_dir, "yaml", &[SENTINEL_BENCHMARK])?;
    let prompts = record::discover_prompts(&layout.prompts_dir);

    tracing::debug!(
        rubrics = rubrics.len(),
        benchmarks = benchmarks.len(),
        prompts = prompts.len(),
        "loaded"
    );

    let result = report::run_checks(&rubrics, &benchmarks, &prompts, NON_PROMPT_FILES);
    output_result(cli, root, &result, report_path)?;

    if result.has_issues() {
        Err(EvalError::IssuesFound {
            count: result.issues.len(),
        })
    } else {
        Ok(())
    }
}

fn output_result(
    cli: &Cli,
    root: &Path,
    result: &ConsistencyReport,
    report_path: Option<&Path>,
) -> Result<()> {
    // Writing a report file does not change the pass/fail outcome
    if let Some(path) = report_path {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        };
        report::write_report(&path, &result.render(NON_PROMPT_FILES))?;
        if !cli.quiet {
            println!("Report written to {}", path.display());
        }
        return Ok(());
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Human => println!("{}", result.render(NON_PROMPT_FILES)),
    }

    Ok(())
}
