//! Analysis engine — the single entry point that scores a résumé against a job description.
//!
//! Pure apart from the caller-supplied random generator: no I/O, no shared state.
//! Six of the eight categories are placeholders whose scores are random draws in
//! `[60, 100)` and whose payloads never change with the input. The overall score
//! also mixes in a `[60, 80)` draw. Draw order is fixed, so a seeded generator
//! reproduces a result exactly.

use rand::Rng;
use thiserror::Error;

use crate::analysis::keywords::{extract_keywords, find_overused_words};
use crate::analysis::models::{
    AnalysisResult, Buzzwords, Categories, Feedback, FillerWords, Repetition, Spelling,
    UnnecessarySections,
};
use crate::analysis::recommendations::build_recommendations;
use crate::analysis::scoring::{match_keywords, overall_score, repetition_score};

const JOB_FIT_FEEDBACK: &str = "Your resume shows good alignment with the job requirements, but could be improved by highlighting more specific achievements.";
const GROWTH_SIGNALS_FEEDBACK: &str =
    "Consider adding more quantifiable achievements to demonstrate career progression.";
const FILLER_WORDS: &[&str] = &["very", "successfully", "effectively", "various"];
const SPELLING_ERRORS: &[&str] = &["recieved", "accomodate", "occassionally"];
const APPROPRIATE_BUZZWORDS: &[&str] = &["full-stack", "agile", "microservices"];
const EXCESSIVE_BUZZWORDS: &[&str] = &["synergy", "disruptive", "cutting-edge"];
const UNNECESSARY_SECTIONS: &[&str] = &["Objective", "References"];

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Scores `resume_text` against `job_description_text`.
///
/// Fails with [`AnalysisError::InvalidInput`] when the job description yields no
/// keywords, because the keyword match ratio has no denominator.
pub fn analyze<R: Rng>(
    resume_text: &str,
    job_description_text: &str,
    rng: &mut R,
) -> Result<AnalysisResult, AnalysisError> {
    let job_keywords = extract_keywords(job_description_text);
    let resume_keywords = extract_keywords(resume_text);

    let keyword_match = match_keywords(&job_keywords, &resume_keywords).ok_or_else(|| {
        AnalysisError::InvalidInput(
            "job description contains no extractable keywords".to_string(),
        )
    })?;

    let overused_words = find_overused_words(resume_text);
    let repetition = repetition_score(overused_words.len());

    let placeholder: f64 = rng.gen_range(60.0..80.0);
    let overall = overall_score(keyword_match.score, repetition, placeholder);

    let recommendations = build_recommendations(&keyword_match.missing, &overused_words);

    let categories = Categories {
        keyword_match,
        repetition: Repetition {
            score: repetition,
            overused_words,
        },
        job_fit: Feedback {
            score: placeholder_score(rng),
            feedback: JOB_FIT_FEEDBACK.to_string(),
        },
        filler_words: FillerWords {
            score: placeholder_score(rng),
            words: to_strings(FILLER_WORDS),
        },
        growth_signals: Feedback {
            score: placeholder_score(rng),
            feedback: GROWTH_SIGNALS_FEEDBACK.to_string(),
        },
        spelling: Spelling {
            score: placeholder_score(rng),
            errors: to_strings(SPELLING_ERRORS),
        },
        buzzwords: Buzzwords {
            score: placeholder_score(rng),
            appropriate: to_strings(APPROPRIATE_BUZZWORDS),
            excessive: to_strings(EXCESSIVE_BUZZWORDS),
        },
        unnecessary_sections: UnnecessarySections {
            score: placeholder_score(rng),
            sections: to_strings(UNNECESSARY_SECTIONS),
        },
    };

    debug_assert!(categories.scores().iter().all(|s| *s <= 100));

    Ok(AnalysisResult {
        overall_score: overall,
        categories,
        recommendations,
    })
}

fn placeholder_score<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(60..100)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const JOB: &str = "Looking for a Python developer with AWS experience";
    const RESUME: &str = "Experienced Python developer skilled in AWS and Docker";

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_python_aws_example() {
        let result = analyze(RESUME, JOB, &mut seeded(1)).unwrap();
        let km = &result.categories.keyword_match;
        for kw in ["python", "developer", "aws"] {
            assert!(km.matches.contains(&kw.to_string()), "{kw} not matched");
        }
        for kw in ["looking", "experience"] {
            assert!(km.missing.contains(&kw.to_string()), "{kw} not missing");
        }
    }

    #[test]
    fn test_structural_fields_stable_across_calls() {
        let a = analyze(RESUME, JOB, &mut seeded(1)).unwrap();
        let b = analyze(RESUME, JOB, &mut seeded(999)).unwrap();
        assert_eq!(a.categories.keyword_match, b.categories.keyword_match);
        assert_eq!(a.categories.repetition, b.categories.repetition);
        assert_eq!(a.recommendations, b.recommendations);
    }

    #[test]
    fn test_same_seed_reproduces_full_result() {
        let a = analyze(RESUME, JOB, &mut seeded(42)).unwrap();
        let b = analyze(RESUME, JOB, &mut seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partition_property() {
        let cases = [
            (RESUME, JOB),
            ("", "Rust engineer building distributed systems in Rust"),
            (
                "Managed teams. Managed budgets. Managed vendors. Managed roadmaps.",
                "Manager responsible for budgets and vendor relationships",
            ),
        ];
        for (resume, job) in cases {
            let result = analyze(resume, job, &mut seeded(7)).unwrap();
            let km = &result.categories.keyword_match;
            let matches: HashSet<_> = km.matches.iter().collect();
            let missing: HashSet<_> = km.missing.iter().collect();
            assert!(matches.is_disjoint(&missing));

            let union: HashSet<_> = matches.union(&missing).cloned().cloned().collect();
            let expected: HashSet<String> = extract_keywords(job).into_iter().collect();
            assert_eq!(union, expected);
        }
    }

    #[test]
    fn test_scores_within_bounds() {
        for seed in 0..200 {
            let result = analyze(RESUME, JOB, &mut seeded(seed)).unwrap();
            assert!(result.overall_score <= 100);
            for score in result.categories.scores() {
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_placeholder_scores_in_range() {
        for seed in 0..200 {
            let c = analyze(RESUME, JOB, &mut seeded(seed)).unwrap().categories;
            for score in &c.scores()[2..] {
                assert!((60..100).contains(score), "placeholder score {score}");
            }
        }
    }

    #[test]
    fn test_overall_score_range_for_full_match() {
        // keyword 100, repetition 100, placeholder in [60, 80) → [84, 92]
        let text = "Rust engineer with Kubernetes";
        for seed in 0..100 {
            let result = analyze(text, text, &mut seeded(seed)).unwrap();
            assert_eq!(result.categories.keyword_match.score, 100);
            assert!((84..=92).contains(&result.overall_score));
        }
    }

    #[test]
    fn test_repetition_reports_overused_verbs() {
        let resume = "Developed APIs. Developed tools. Developed services. Developed pipelines. \
                      Delivered delivered delivered delivered delivered.";
        let result = analyze(resume, JOB, &mut seeded(3)).unwrap();
        assert_eq!(result.categories.repetition.overused_words, vec!["developed"]);
        assert_eq!(result.categories.repetition.score, 95);
        assert!(result
            .recommendations
            .contains(&"Vary your action verbs to avoid repetition.".to_string()));
    }

    #[test]
    fn test_placeholder_payloads_are_fixed() {
        let c = analyze(RESUME, JOB, &mut seeded(5)).unwrap().categories;
        assert_eq!(c.filler_words.words, FILLER_WORDS);
        assert_eq!(c.spelling.errors, SPELLING_ERRORS);
        assert_eq!(c.buzzwords.appropriate, APPROPRIATE_BUZZWORDS);
        assert_eq!(c.buzzwords.excessive, EXCESSIVE_BUZZWORDS);
        assert_eq!(c.unnecessary_sections.sections, UNNECESSARY_SECTIONS);
        assert_eq!(c.job_fit.feedback, JOB_FIT_FEEDBACK);
        assert_eq!(c.growth_signals.feedback, GROWTH_SIGNALS_FEEDBACK);
    }

    #[test]
    fn test_recommendations_length() {
        let full = analyze(JOB, JOB, &mut seeded(1)).unwrap();
        assert_eq!(full.recommendations.len(), 3);

        let partial = analyze(RESUME, JOB, &mut seeded(1)).unwrap();
        assert_eq!(partial.recommendations.len(), 4);
    }

    #[test]
    fn test_empty_job_description_is_invalid_input() {
        let err = analyze(RESUME, "", &mut seeded(1)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_stop_word_job_description_is_invalid_input() {
        let err = analyze(RESUME, "the and of to it", &mut seeded(1)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_resume_scores_zero_match() {
        let result = analyze("", JOB, &mut seeded(1)).unwrap();
        assert_eq!(result.categories.keyword_match.score, 0);
        assert!(result.categories.keyword_match.matches.is_empty());
        assert_eq!(result.categories.repetition.score, 100);
    }

    #[test]
    fn test_categories_serialize_with_camel_case_keys() {
        let result = analyze(RESUME, JOB, &mut seeded(1)).unwrap();
        let json = serde_json::to_value(&result.categories).unwrap();
        for key in [
            "keywordMatch",
            "repetition",
            "jobFit",
            "fillerWords",
            "growthSignals",
            "spelling",
            "buzzwords",
            "unnecessarySections",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["repetition"].get("overusedWords").is_some());
    }
}
