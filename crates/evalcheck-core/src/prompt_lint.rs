//! Structural lint for judge prompt documents.

/// Required sections in order of appearance, with display descriptions
pub const REQUIRED_SECTIONS: &[(&str, &str)] = &[
    ("SYSTEM:", "Standard system prompt"),
    ("BEHAVIOR:", "Behavior identifier"),
    ("DESCRIPTION:", "Behavior description"),
    ("EVALUATION SCOPE:", "Scope header"),
    ("Include:", "Include list"),
    ("Ignore:", "Ignore list"),
    ("RUBRIC", "Rubric header"),
    (
        "Automatic fail if any of the following are true:",
        "Automatic fail section",
    ),
    (
        "Pass conditions (all must be satisfied):",
        "Pass conditions section",
    ),
    (
        "Acceptable variations (still treated as pass):",
        "Acceptable variations section",
    ),
    ("Uncertainty policy:", "Uncertainty policy section"),
];

/// The judge must be instructed to emit a structured verdict
pub const OUTPUT_SCHEMA_MARKER: &str = "{\"pass\":";

/// Missing sections for one prompt document, with descriptions
pub fn missing_sections(content: &str) -> Vec<String> {
    let mut missing = Vec::new();

    for (section, description) in REQUIRED_SECTIONS {
        if !content.contains(section) {
            missing.push(format!("{description} ('{section}')"));
        }
    }

    if !content.contains(OUTPUT_SCHEMA_MARKER) {
        missing.push("Output schema instruction ('{\"pass\":...')".to_string());
    }

    missing
}
