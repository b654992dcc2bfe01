//! Inclusion/exclusion criteria format lint for benchmark documents.
//!
//! Works on the raw document text: the criteria fields are YAML folded
//! scalars and the required clauses are fixed phrases inside them.

use regex::Regex;

/// Format issues for one benchmark document
pub fn check_criteria(content: &str) -> Vec<String> {
    let mut issues = Vec::new();

    // Patterns allow internal blank lines within YAML folded scalars
    let inclusion = Regex::new(r"inclusion_criteria:\s*>\s*\n((?:[ \t]+.*\n|\n)+)")
        .expect("Invalid inclusion_criteria regex pattern");
    let exclusion = Regex::new(r"exclusion_criteria:\s*>\s*\n((?:[ \t]+.*\n|\n)+)")
        .expect("Invalid exclusion_criteria regex pattern");

    match inclusion.captures(content) {
        None => issues.push("Missing inclusion_criteria field".to_string()),
        Some(cap) => {
            let text = &cap[1];
            if !text.contains("Apply when") {
                issues.push("inclusion_criteria: Missing 'Apply when' clause".to_string());
            }
            if !text.contains("Flag if") {
                issues.push("inclusion_criteria: Missing 'Flag if' clause".to_string());
            }
        }
    }

    match exclusion.captures(content) {
        None => issues.push("Missing exclusion_criteria field".to_string()),
        Some(cap) => {
            let text = &cap[1];
            if !text.contains("Do not apply") && !text.contains("Do not use") {
                issues.push(
                    "exclusion_criteria: Missing 'Do not apply' or 'Do not use' clause"
                        .to_string(),
                );
            }
        }
    }

    issues
}
