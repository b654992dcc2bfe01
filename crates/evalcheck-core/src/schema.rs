//! Per-record schema validation.
//!
//! Pure functions over a single record: required fields, enum-constrained
//! fields, and the benchmark threshold range. Issues are returned as
//! strings; nothing here is fatal.

use serde_yaml::Value;

use crate::record::{value_repr, Record};

pub const REQUIRED_RUBRIC_FIELDS: &[&str] = &[
    "code",
    "label",
    "weight",
    "aggregation_method",
    "passing_threshold",
    "benchmarks",
];

pub const REQUIRED_BENCHMARK_FIELDS: &[&str] = &[
    "code",
    "parent_rubric",
    "label",
    "concept",
    "weight",
    "threshold",
    "criticality",
];

pub const VALID_AGGREGATION: &[&str] = &["WEIGHTED_AVERAGE", "MINIMUM", "MAXIMUM", "MEAN"];
pub const VALID_CRITICALITY: &[&str] = &["hard_gate", "threshold_gate"];
pub const VALID_EVALUATOR_TYPES: &[&str] = &["code", "llm_judge", "hybrid", "manual_sme"];

/// Generic schema check: required fields plus enum-constrained fields.
pub fn validate(
    kind: &str,
    code: &str,
    record: &Record,
    required: &[&str],
    enums: &[(&str, &[&str])],
) -> Vec<String> {
    let mut issues = Vec::new();

    for field in required {
        if !record.has(field) {
            issues.push(format!("{kind} {code}: missing required field '{field}'"));
        }
    }

    for (field, allowed) in enums {
        let Some(value) = record.get(field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if !value.as_str().is_some_and(|s| allowed.contains(&s)) {
            issues.push(format!(
                "{kind} {code}: invalid {field} '{}' (valid: {allowed:?})",
                value_repr(value)
            ));
        }
    }

    issues
}

/// Schema issues for a rubric record
pub fn validate_rubric(code: &str, record: &Record) -> Vec<String> {
    validate(
        "RUBRIC",
        code,
        record,
        REQUIRED_RUBRIC_FIELDS,
        &[("aggregation_method", VALID_AGGREGATION)],
    )
}

/// Schema issues for a benchmark record, including the threshold range
pub fn validate_benchmark(code: &str, record: &Record) -> Vec<String> {
    let mut issues = validate(
        "BENCHMARK",
        code,
        record,
        REQUIRED_BENCHMARK_FIELDS,
        &[
            ("criticality", VALID_CRITICALITY),
            ("evaluator_type", VALID_EVALUATOR_TYPES),
        ],
    );

    if let Some(value) = record.get("threshold") {
        issues.extend(check_threshold(code, value));
    }

    issues
}

fn check_threshold(code: &str, value: &Value) -> Option<String> {
    if value.is_null() {
        return None;
    }
    match value.as_f64() {
        Some(t) if !(0.0..=1.0).contains(&t) => Some(format!(
            "BENCHMARK {code}: threshold {t} out of range [0.0, 1.0]"
        )),
        Some(_) => None,
        None => Some(format!(
            "BENCHMARK {code}: threshold '{}' is not numeric",
            value_repr(value)
        )),
    }
}
