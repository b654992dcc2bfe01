//! Cross-layer reference checks.
//!
//! All checks run independently over a complete, immutable snapshot of the
//! loaded mappings; their outputs are merged by the report aggregator. No
//! ordering dependency exists between them.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::{base_name, Record};

/// Rubric -> benchmark forward references
pub fn rubric_references(
    rubrics: &BTreeMap<String, Record>,
    benchmarks: &BTreeMap<String, Record>,
) -> Vec<String> {
    let mut issues = Vec::new();

    for (code, rubric) in rubrics {
        for reference in rubric.get_str_list("benchmarks") {
            if !benchmarks.contains_key(&reference) {
                issues.push(format!(
                    "RUBRIC {code}: references benchmark '{reference}' which does not exist"
                ));
            }
        }
    }

    issues
}

/// Benchmark -> rubric and benchmark -> prompt references.
///
/// Judge-backed evaluator types (`llm_judge`, `hybrid`) require an
/// `llm_prompt_file`. A set `llm_prompt_file` must resolve, by base file
/// name, to a discovered prompt.
pub fn benchmark_references(
    benchmarks: &BTreeMap<String, Record>,
    rubrics: &BTreeMap<String, Record>,
    prompts: &BTreeSet<String>,
) -> Vec<String> {
    let mut issues = Vec::new();

    for (code, benchmark) in benchmarks {
        if let Some(parent) = benchmark.get_str("parent_rubric") {
            if !parent.is_empty() && !rubrics.contains_key(parent) {
                issues.push(format!(
                    "BENCHMARK {code}: parent_rubric '{parent}' does not exist"
                ));
            }
        }

        let evaluator = benchmark.get_str("evaluator_type");
        let prompt_file = benchmark.get_str("llm_prompt_file").filter(|f| !f.is_empty());

        if matches!(evaluator, Some("llm_judge" | "hybrid")) && prompt_file.is_none() {
            issues.push(format!(
                "BENCHMARK {code}: evaluator_type '{}' requires llm_prompt_file",
                evaluator.unwrap_or_default()
            ));
        }

        if let Some(file) = prompt_file {
            if !prompts.contains(base_name(file)) {
                issues.push(format!(
                    "BENCHMARK {code}: llm_prompt_file '{file}' does not exist"
                ));
            }
        }
    }

    issues
}

/// Bidirectional consistency: a benchmark's declared parent must list the
/// benchmark back in its `benchmarks[]`. Mismatch is advisory, not a hard
/// error, so it is emitted with a WARNING prefix.
pub fn bidirectional(
    rubrics: &BTreeMap<String, Record>,
    benchmarks: &BTreeMap<String, Record>,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for (code, benchmark) in benchmarks {
        let Some(parent) = benchmark.get_str("parent_rubric") else {
            continue;
        };
        let Some(rubric) = rubrics.get(parent) else {
            continue;
        };

        if !rubric.get_str_list("benchmarks").iter().any(|b| b == code) {
            warnings.push(format!(
                "WARNING: benchmark '{code}' claims parent '{parent}' but is not listed in rubric's benchmarks[]"
            ));
        }
    }

    warnings
}
