//! Heuristic compound AND/OR flagger for automatic-fail bullets.
//!
//! Surfaces prompts for manual review where "Automatic fail" bullets may
//! be incorrectly split compound AND conditions. This is a heuristic, not
//! a definitive validator: its findings are informational only.

use regex::Regex;
use serde::Serialize;

/// Classification of a prompt's automatic-fail bullet pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Single bullet, or every bullet carries an explicit AND
    Low,
    /// Pattern needs manual review
    Review,
}

/// Analysis of one prompt's automatic-fail section
#[derive(Debug, Clone, Serialize)]
pub struct PromptAnalysis {
    pub filename: String,
    pub bullet_count: usize,
    pub bullets_with_and: usize,
    pub risk_level: RiskLevel,
    pub flags: Vec<String>,
    pub bullets: Vec<String>,
}

/// Extract bullet items from the "Automatic fail" section
pub fn extract_auto_fail_bullets(content: &str) -> Vec<String> {
    let section = Regex::new(r"Automatic fail if any of the following are true:\n((?:- .+\n?)+)")
        .expect("Invalid automatic-fail section regex pattern");

    let Some(cap) = section.captures(content) else {
        return Vec::new();
    };

    cap[1]
        .split("\n- ")
        .enumerate()
        .filter_map(|(i, raw)| {
            let mut cleaned = raw.trim();
            if i == 0 {
                cleaned = cleaned.trim_start_matches(['-', ' ']);
            }
            // Example lines illustrate a bullet rather than adding one
            (!cleaned.is_empty() && !cleaned.starts_with("Example:"))
                .then(|| cleaned.to_string())
        })
        .collect()
}

/// Analyze a prompt for AND/OR logic patterns
pub fn analyze_prompt(filename: &str, content: &str) -> PromptAnalysis {
    let bullets = extract_auto_fail_bullets(content);
    let bullets_with_and = bullets.iter().filter(|b| b.contains(" AND ")).count();

    let mut flags = Vec::new();
    let mut risk_level = RiskLevel::Low;

    if bullets.is_empty() {
        flags.push("No Automatic fail bullets found".to_string());
        risk_level = RiskLevel::Review;
    } else if bullets.len() > 1 {
        if bullets_with_and == 0 {
            flags.push(format!(
                "{} bullets without explicit AND - verify these are independent failure modes",
                bullets.len()
            ));
            risk_level = RiskLevel::Review;
        } else if bullets_with_and < bullets.len() {
            flags.push(format!(
                "{bullets_with_and}/{} bullets have AND - verify consistency",
                bullets.len()
            ));
            risk_level = RiskLevel::Review;
        }
    }

    PromptAnalysis {
        filename: filename.to_string(),
        bullet_count: bullets.len(),
        bullets_with_and,
        risk_level,
        flags,
        bullets,
    }
}
