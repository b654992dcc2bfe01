//! Integration tests for the evalcheck CLI
//!
//! These tests run the evalcheck binary over tempdir fixtures and verify
//! output and exit codes.

mod common;

use common::{evalcheck, write_benchmark, write_fixture, write_prompt, write_rubric};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    evalcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: evalcheck"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("criteria"))
        .stdout(predicate::str::contains("prompts"))
        .stdout(predicate::str::contains("logic"));
}

#[test]
fn test_version_flag() {
    evalcheck().arg("--version").assert().success();
}

// ============================================================================
// Check command
// ============================================================================

#[test]
fn test_check_consistent_tree() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Consistency Validation Report"))
        .stdout(predicate::str::contains("- **Rubrics**: 1"))
        .stdout(predicate::str::contains("- **Benchmarks**: 1"))
        .stdout(predicate::str::contains("- **Prompts**: 1"))
        .stdout(predicate::str::contains("No issues found."));
}

#[test]
fn test_check_dangling_benchmark_reference() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_rubric(
        dir.path(),
        "accuracy.yaml",
        &common::RUBRIC.replace("- B1", "- B1\n  - B9"),
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "RUBRIC R1: references benchmark 'B9' which does not exist",
        ));
}

#[test]
fn test_check_missing_layout() {
    let dir = tempdir().unwrap();

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("layout not found"));
}

#[test]
fn test_check_json_format() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["--format", "json", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rubric_count\": 1"))
        .stdout(predicate::str::contains("\"issues\": []"));
}

#[test]
fn test_check_report_file() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["check", "--report", "reports/consistency.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let written = std::fs::read_to_string(dir.path().join("reports/consistency.md")).unwrap();
    assert!(written.contains("No issues found."));
}

#[test]
fn test_check_report_file_keeps_failure_status() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_rubric(
        dir.path(),
        "accuracy.yaml",
        &common::RUBRIC.replace("- B1", "- B9"),
    );

    // Writing the report must not mask the non-zero status
    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["check", "--report", "reports/consistency.md"])
        .assert()
        .code(1);

    let written = std::fs::read_to_string(dir.path().join("reports/consistency.md")).unwrap();
    assert!(written.contains("references benchmark 'B9'"));
}

#[test]
fn test_check_rerun_byte_identical() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_prompt(dir.path(), "stale_prompt.md", common::COMPLETE_PROMPT);

    let run = || {
        evalcheck()
            .args(["--root"])
            .arg(dir.path())
            .arg("check")
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_check_orphan_prompt() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_prompt(dir.path(), "unused_prompt.md", common::COMPLETE_PROMPT);

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "ORPHAN: prompt 'unused_prompt.md' not referenced by any benchmark",
        ));
}

#[test]
fn test_check_malformed_record_excluded_not_fatal() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_benchmark(dir.path(), "broken.yaml", "code: [unclosed\n  - nope");

    // One corrupt file must not block validation of the rest
    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Benchmarks**: 1"));
}

#[test]
fn test_check_bidirectional_warning() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    // B2 claims R1 as parent, but R1's benchmarks[] only lists B1
    write_benchmark(
        dir.path(),
        "tone.yaml",
        &common::BENCHMARK.replace("code: B1", "code: B2"),
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "WARNING: benchmark 'B2' claims parent 'R1' but is not listed in rubric's benchmarks[]",
        ));
}

#[test]
fn test_check_shared_prompt_conflict() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_rubric(
        dir.path(),
        "accuracy.yaml",
        &common::RUBRIC.replace("- B1", "- B1\n  - B2"),
    );
    write_benchmark(
        dir.path(),
        "tone.yaml",
        &common::BENCHMARK
            .replace("code: B1", "code: B2")
            .replace("threshold: 0.8", "threshold: 0.5"),
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("SHARED_PROMPT:"))
        .stdout(predicate::str::contains("B1(t=0.8, hard_gate)"))
        .stdout(predicate::str::contains("B2(t=0.5, hard_gate)"));
}

// ============================================================================
// Criteria command
// ============================================================================

#[test]
fn test_criteria_pass() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("criteria")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "PASS: All 1 benchmarks have valid criteria format.",
        ));
}

#[test]
fn test_criteria_failure() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_benchmark(
        dir.path(),
        "tone.yaml",
        "code: B2\nlabel: No criteria here\n",
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("criteria")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Benchmark criteria format issues:"))
        .stdout(predicate::str::contains("tone.yaml:"))
        .stdout(predicate::str::contains("Missing inclusion_criteria field"))
        .stdout(predicate::str::contains("1 of 2 benchmarks have issues."));
}

#[test]
fn test_criteria_skips_sentinel() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    // NONE.yaml has no criteria fields but must not be counted or flagged

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("criteria")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 benchmarks"));
}

// ============================================================================
// Prompts command
// ============================================================================

#[test]
fn test_prompts_pass() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("prompts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 1 prompt files"))
        .stdout(predicate::str::contains(
            "PASS: All prompts have required sections.",
        ));
}

#[test]
fn test_prompts_missing_section() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_prompt(
        dir.path(),
        "negation_simple_prompt.md",
        &common::COMPLETE_PROMPT.replace("Uncertainty policy:", "Policy:"),
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("prompts")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL: 1 prompts have missing sections:"))
        .stdout(predicate::str::contains(
            "Missing: Uncertainty policy section ('Uncertainty policy:')",
        ));
}

#[test]
fn test_prompts_single_file_pass() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args([
            "prompts",
            "--file",
            "evaluators/llm-judge/negation_simple_prompt.md",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS: negation_simple_prompt.md"));
}

#[test]
fn test_prompts_single_file_missing() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["prompts", "--file", "evaluators/llm-judge/gone_prompt.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

// ============================================================================
// Logic command
// ============================================================================

#[test]
fn test_logic_low_risk_exits_zero() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("logic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzed 1 prompt files"))
        .stdout(predicate::str::contains("Review candidates: 0"));
}

#[test]
fn test_logic_review_candidates_still_exit_zero() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_prompt(
        dir.path(),
        "negation_simple_prompt.md",
        &common::COMPLETE_PROMPT.replace(
            "- The negation is dropped.",
            "- The negation is dropped.\n- The polarity is inverted.",
        ),
    );

    // Heuristic flagger is informational only
    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .arg("logic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Review candidates: 1"))
        .stdout(predicate::str::contains(
            "CANDIDATES FOR MANUAL AND/OR LOGIC REVIEW",
        ))
        .stdout(predicate::str::contains(
            "2 bullets without explicit AND",
        ));
}

#[test]
fn test_logic_verbose_shows_bullets() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    write_prompt(
        dir.path(),
        "negation_simple_prompt.md",
        &common::COMPLETE_PROMPT.replace(
            "- The negation is dropped.",
            "- The negation is dropped.\n- The polarity is inverted.",
        ),
    );

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["--verbose", "logic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bullets:"))
        .stdout(predicate::str::contains("- The polarity is inverted."));
}

// ============================================================================
// Quiet mode
// ============================================================================

#[test]
fn test_quiet_suppresses_pass_line() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());

    evalcheck()
        .args(["--root"])
        .arg(dir.path())
        .args(["--quiet", "criteria"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
