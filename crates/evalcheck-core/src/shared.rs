//! Shared-prompt conflict detection.
//!
//! One prompt resource is assumed to encode exactly one evaluation
//! behavior. Benchmarks that share a prompt but disagree on threshold or
//! criticality are a modeling smell, flagged as a warning rather than a
//! hard error.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::{base_name, Record};

/// Remediation note appended to every shared-prompt warning
const REMEDIATION: &str =
    "Consider separate prompts per 'single behavior per judge' principle.";

/// One warning per prompt shared by benchmarks with divergent threshold or
/// criticality, listing every member with its values
pub fn shared_prompt_conflicts(benchmarks: &BTreeMap<String, Record>) -> Vec<String> {
    // Group benchmarks by prompt base name; BTreeMap keeps group order stable
    let mut by_prompt: BTreeMap<String, Vec<(&str, &Record)>> = BTreeMap::new();
    for (code, benchmark) in benchmarks {
        if let Some(file) = benchmark.get_str("llm_prompt_file").filter(|f| !f.is_empty()) {
            by_prompt
                .entry(base_name(file).to_string())
                .or_default()
                .push((code.as_str(), benchmark));
        }
    }

    let mut warnings = Vec::new();
    for (prompt, members) in &by_prompt {
        if members.len() < 2 {
            continue;
        }

        let thresholds: BTreeSet<String> = members
            .iter()
            .map(|(_, b)| threshold_repr(b))
            .collect();
        let criticalities: BTreeSet<&str> = members
            .iter()
            .map(|(_, b)| b.get_str("criticality").unwrap_or("none"))
            .collect();

        if thresholds.len() > 1 || criticalities.len() > 1 {
            let details = members
                .iter()
                .map(|(code, b)| {
                    format!(
                        "{code}(t={}, {})",
                        threshold_repr(b),
                        b.get_str("criticality").unwrap_or("none")
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            warnings.push(format!(
                "SHARED_PROMPT: '{prompt}' used by benchmarks with different thresholds/criticality: {details}. {REMEDIATION}"
            ));
        }
    }

    warnings
}

fn threshold_repr(benchmark: &Record) -> String {
    benchmark
        .get_f64("threshold")
        .map(|t| t.to_string())
        .unwrap_or_else(|| "none".to_string())
}
