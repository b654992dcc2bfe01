//! Orphan prompt detection.
//!
//! An orphan is a discovered prompt that no benchmark references, minus a
//! fixed set of documentation files that legitimately live in the prompt
//! directory.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::{base_name, Record};

/// One issue per orphaned prompt, sorted lexicographically
pub fn find_orphans(
    benchmarks: &BTreeMap<String, Record>,
    prompts: &BTreeSet<String>,
    exclusions: &[&str],
) -> Vec<String> {
    let referenced: BTreeSet<&str> = benchmarks
        .values()
        .filter_map(|b| b.get_str("llm_prompt_file"))
        .filter(|f| !f.is_empty())
        .map(base_name)
        .collect();

    prompts
        .iter()
        .filter(|p| !referenced.contains(p.as_str()) && !exclusions.contains(&p.as_str()))
        .map(|p| format!("ORPHAN: prompt '{p}' not referenced by any benchmark"))
        .collect()
}
