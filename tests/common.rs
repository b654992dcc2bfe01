use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn evalcheck() -> Command {
    cargo_bin_cmd!("evalcheck")
}

/// A complete judge prompt satisfying the structural lint, with a single
/// automatic-fail bullet (low risk for the logic flagger)
pub const COMPLETE_PROMPT: &str = r#"SYSTEM: You are an evaluation judge.

BEHAVIOR: negation_simple

DESCRIPTION: Checks that simple negation is preserved.

EVALUATION SCOPE:
Include: negation statements
Ignore: unrelated content

RUBRIC

Automatic fail if any of the following are true:
- The negation is dropped.

Pass conditions (all must be satisfied):
- The negation is preserved.

Acceptable variations (still treated as pass):
- Paraphrased negation.

Uncertainty policy:
- When unsure, fail.

Respond with {"pass": true, "reason": "..."}.
"#;

pub const RUBRIC: &str = "\
code: R1
label: Core accuracy behaviors
weight: 1.0
aggregation_method: WEIGHTED_AVERAGE
passing_threshold: 0.8
benchmarks:
  - B1
";

pub const BENCHMARK: &str = "\
code: B1
parent_rubric: R1
label: Negation handling
concept: Simple negation must be preserved
weight: 1.0
threshold: 0.8
criticality: hard_gate
evaluator_type: llm_judge
llm_prompt_file: evaluators/llm-judge/negation_simple_prompt.md
inclusion_criteria: >
  Apply when the response restates a negated claim.

  Flag if the negation is dropped or inverted.
exclusion_criteria: >
  Do not apply to double negatives or rhetorical questions.
";

/// Write a consistent evaluation config tree under `root`
pub fn write_fixture(root: &Path) {
    fs::create_dir_all(root.join("rubrics")).unwrap();
    fs::create_dir_all(root.join("benchmarks/a-component")).unwrap();
    fs::create_dir_all(root.join("evaluators/llm-judge")).unwrap();

    fs::write(root.join("rubrics/accuracy.yaml"), RUBRIC).unwrap();
    fs::write(
        root.join("benchmarks/a-component/negation_simple.yaml"),
        BENCHMARK,
    )
    .unwrap();
    fs::write(
        root.join("benchmarks/a-component/NONE.yaml"),
        "# placeholder - no benchmarks apply to this component\n",
    )
    .unwrap();
    fs::write(
        root.join("evaluators/llm-judge/negation_simple_prompt.md"),
        COMPLETE_PROMPT,
    )
    .unwrap();
    fs::write(
        root.join("evaluators/llm-judge/PROMPT_SPECS.md"),
        "# Prompt authoring guide\n",
    )
    .unwrap();
}

#[allow(dead_code)]
pub fn write_benchmark(root: &Path, file: &str, content: &str) {
    fs::write(root.join("benchmarks/a-component").join(file), content).unwrap();
}

#[allow(dead_code)]
pub fn write_rubric(root: &Path, file: &str, content: &str) {
    fs::write(root.join("rubrics").join(file), content).unwrap();
}

#[allow(dead_code)]
pub fn write_prompt(root: &Path, file: &str, content: &str) {
    fs::write(root.join("evaluators/llm-judge").join(file), content).unwrap();
}
