//! Score formulas for the input-sensitive categories and the overall score.

use crate::analysis::models::KeywordMatch;

/// Repetition never reports below this, however many verbs are overused.
pub const REPETITION_FLOOR: u32 = 60;
const REPETITION_PENALTY_PER_WORD: u32 = 5;

pub const KEYWORD_WEIGHT: f64 = 0.4;
pub const REPETITION_WEIGHT: f64 = 0.2;
pub const PLACEHOLDER_WEIGHT: f64 = 0.4;

/// Partitions `job_keywords` into those found in `resume_keywords` and those missing.
///
/// Comparison is case-insensitive; both outputs keep the job keyword order.
/// Returns `None` when there are no job keywords, since the ratio is undefined.
pub fn match_keywords(job_keywords: &[String], resume_keywords: &[String]) -> Option<KeywordMatch> {
    if job_keywords.is_empty() {
        return None;
    }

    let (matches, missing): (Vec<String>, Vec<String>) =
        job_keywords.iter().cloned().partition(|keyword| {
            resume_keywords
                .iter()
                .any(|rk| rk.to_lowercase() == keyword.to_lowercase())
        });

    let ratio = matches.len() as f64 / (matches.len() + missing.len()) as f64;
    let score = (ratio * 100.0).round().min(100.0) as u32;

    Some(KeywordMatch {
        score,
        matches,
        missing,
    })
}

/// `min(100, max(60, 100 - 5 * overused))`
pub fn repetition_score(overused_count: usize) -> u32 {
    let penalty = (overused_count as u32).saturating_mul(REPETITION_PENALTY_PER_WORD);
    100u32.saturating_sub(penalty).max(REPETITION_FLOOR).min(100)
}

/// Weighted blend of keyword match, repetition and a placeholder draw in `[60, 80)`.
pub fn overall_score(keyword_match: u32, repetition: u32, placeholder: f64) -> u32 {
    let blended = keyword_match as f64 * KEYWORD_WEIGHT
        + repetition as f64 * REPETITION_WEIGHT
        + placeholder * PLACEHOLDER_WEIGHT;
    blended.round().clamp(0.0, 100.0) as u32
}
