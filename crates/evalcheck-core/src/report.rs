//! Issue aggregation and report rendering.
//!
//! Merges the outputs of every check into one deterministic list: sorted,
//! deduplicated, rendered as a markdown summary. The exit status of the
//! check command follows `has_issues()` regardless of whether the report
//! goes to stdout or to a file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::record::Record;
use crate::{orphans, refs, schema, shared};

/// Aggregated outcome of a full consistency run
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    /// Rubrics loaded
    pub rubric_count: usize,
    /// Benchmarks loaded
    pub benchmark_count: usize,
    /// Prompts discovered, excluding known non-prompt documents
    pub prompt_count: usize,
    /// Merged, sorted, deduplicated issue list
    pub issues: Vec<String>,
}

impl ConsistencyReport {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Render the markdown report
    pub fn render(&self, exclusions: &[&str]) -> String {
        let mut out = String::new();
        out.push_str("# Consistency Validation Report\n\n");
        out.push_str("## Summary\n\n");
        out.push_str(&format!("- **Rubrics**: {}\n", self.rubric_count));
        out.push_str(&format!("- **Benchmarks**: {}\n", self.benchmark_count));
        out.push_str(&format!(
            "- **Prompts**: {} (excluding {})\n",
            self.prompt_count,
            exclusions.join(", ")
        ));
        out.push_str(&format!("- **Issues Found**: {}\n\n", self.issues.len()));
        out.push_str("## Issues\n\n");

        if self.issues.is_empty() {
            out.push_str("No issues found.\n");
        } else {
            for issue in &self.issues {
                out.push_str(&format!("- {issue}\n"));
            }
        }

        out
    }
}

/// Run every check over an immutable snapshot of the three mappings.
///
/// The checks are independent and commutative; only the final sort gives
/// the issue list its order.
pub fn run_checks(
    rubrics: &BTreeMap<String, Record>,
    benchmarks: &BTreeMap<String, Record>,
    prompts: &BTreeSet<String>,
    exclusions: &[&str],
) -> ConsistencyReport {
    let mut issues = Vec::new();

    for (code, rubric) in rubrics {
        issues.extend(schema::validate_rubric(code, rubric));
    }
    for (code, benchmark) in benchmarks {
        issues.extend(schema::validate_benchmark(code, benchmark));
    }
    issues.extend(refs::rubric_references(rubrics, benchmarks));
    issues.extend(refs::benchmark_references(benchmarks, rubrics, prompts));
    issues.extend(orphans::find_orphans(benchmarks, prompts, exclusions));
    issues.extend(refs::bidirectional(rubrics, benchmarks));
    issues.extend(shared::shared_prompt_conflicts(benchmarks));

    issues.sort();
    issues.dedup();

    ConsistencyReport {
        rubric_count: rubrics.len(),
        benchmark_count: benchmarks.len(),
        prompt_count: prompts
            .iter()
            .filter(|p| !exclusions.contains(&p.as_str()))
            .count(),
        issues,
    }
}

/// Write a rendered report, creating parent directories as needed
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    Ok(())
}
