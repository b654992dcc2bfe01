//! Directory layout for an evaluation config tree.
//!
//! The layout is resolved under an explicit root path (the `--root` flag,
//! defaulting to the current directory). Failure to resolve it is an
//! environment error, reported with its own exit code - it is never mixed
//! into the validation issue list.

use std::path::{Path, PathBuf};

use crate::error::{EvalError, Result};

/// Rubric documents, relative to the root
pub const RUBRICS_DIR: &str = "rubrics";

/// Benchmark documents, relative to the root
pub const BENCHMARKS_DIR: &str = "benchmarks/a-component";

/// Judge prompt documents, relative to the root
pub const PROMPTS_DIR: &str = "evaluators/llm-judge";

/// Documentation files that live in the prompt directory but are not prompts
pub const NON_PROMPT_FILES: &[&str] = &["PROMPT_SPECS.md", "AGENTS.md"];

/// Placeholder benchmark file exempt from validation
pub const SENTINEL_BENCHMARK: &str = "NONE.yaml";

/// Resolved directory layout of an evaluation config tree
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub rubrics_dir: PathBuf,
    pub benchmarks_dir: PathBuf,
    pub prompts_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout under an explicit root.
    ///
    /// All three subdirectories must exist.
    pub fn resolve(root: &Path) -> Result<Self> {
        let layout = Layout {
            root: root.to_path_buf(),
            rubrics_dir: root.join(RUBRICS_DIR),
            benchmarks_dir: root.join(BENCHMARKS_DIR),
            prompts_dir: root.join(PROMPTS_DIR),
        };

        if !layout.rubrics_dir.is_dir()
            || !layout.benchmarks_dir.is_dir()
            || !layout.prompts_dir.is_dir()
        {
            return Err(EvalError::LayoutNotFound {
                root: root.to_path_buf(),
            });
        }

        Ok(layout)
    }
}
