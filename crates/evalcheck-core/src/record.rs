//! Record loading for rubric and benchmark documents.
//!
//! Records are loaded generically: a document is a flat mapping of field
//! name to YAML value, keyed in the working set by its `code` field.
//! Malformed documents and documents without a `code` are skipped rather
//! than failing the run - one corrupt config must not block validation of
//! the rest.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use walkdir::WalkDir;

use crate::error::Result;

/// A loaded document: field name to YAML value
#[derive(Debug, Clone)]
pub struct Record {
    value: Value,
}

impl Record {
    /// Parse a document into `(code, record)`.
    ///
    /// Returns `None` when the document is not valid YAML or lacks a
    /// string `code` field.
    pub fn parse(content: &str) -> Option<(String, Self)> {
        let value: Value = serde_yaml::from_str(content).ok()?;
        let code = value.get("code")?.as_str()?.to_string();
        Some((code, Record { value }))
    }

    /// Whether the field is present (a key explicitly set to null counts
    /// as present)
    pub fn has(&self, field: &str) -> bool {
        self.value.get(field).is_some()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.value.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.value.get(field).and_then(Value::as_str)
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.value.get(field).and_then(Value::as_f64)
    }

    /// String items of a sequence field; non-string items are ignored
    pub fn get_str_list(&self, field: &str) -> Vec<String> {
        self.value
            .get(field)
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Display form of a YAML value for issue messages
pub(crate) fn value_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => format!("{other:?}"),
    }
}

/// The base file name of a (possibly directory-qualified) path reference
pub fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Documents in `dir` with the given extension, sorted by path
pub fn document_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every parseable document in `dir` into a code-keyed map.
///
/// Files named in `skip` and documents that fail to parse (or lack a
/// `code`) are excluded from the map; exclusions are logged at debug level.
pub fn load_records(
    dir: &Path,
    extension: &str,
    skip: &[&str],
) -> Result<BTreeMap<String, Record>> {
    let mut records = BTreeMap::new();

    for path in document_files(dir, extension)? {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if skip.contains(&name) {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable document");
                continue;
            }
        };

        match Record::parse(&content) {
            Some((code, record)) => {
                records.insert(code, record);
            }
            None => {
                tracing::debug!(path = %path.display(), "skipping document without parseable code");
            }
        }
    }

    Ok(records)
}

/// Discovered prompt resources: the set of markdown base file names
pub fn discover_prompts(dir: &Path) -> BTreeSet<String> {
    let mut prompts = BTreeSet::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                prompts.insert(name.to_string());
            }
        }
    }

    prompts
}

/// Prompt documents eligible for the structural lints, sorted by path
pub fn prompt_lint_targets(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_prompt = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with("_prompt.md"));
        if path.is_file() && is_prompt {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
