use serde::{Deserialize, Serialize};

/// Keyword overlap between the job description and the résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub score: u32,
    /// Job keywords also found among the résumé keywords, in job order.
    pub matches: Vec<String>,
    /// Job keywords absent from the résumé keywords, in job order.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repetition {
    pub score: u32,
    pub overused_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub score: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerWords {
    pub score: u32,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spelling {
    pub score: u32,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buzzwords {
    pub score: u32,
    pub appropriate: Vec<String>,
    pub excessive: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnnecessarySections {
    pub score: u32,
    pub sections: Vec<String>,
}

/// The eight fixed sub-scores of an analysis.
///
/// Stored as jsonb with camelCase keys (`keywordMatch`, `overusedWords`, ...).
/// Only `keyword_match` and `repetition` depend on the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub keyword_match: KeywordMatch,
    pub repetition: Repetition,
    pub job_fit: Feedback,
    pub filler_words: FillerWords,
    pub growth_signals: Feedback,
    pub spelling: Spelling,
    pub buzzwords: Buzzwords,
    pub unnecessary_sections: UnnecessarySections,
}

impl Categories {
    /// Every category score in display order.
    pub fn scores(&self) -> [u32; 8] {
        [
            self.keyword_match.score,
            self.repetition.score,
            self.job_fit.score,
            self.filler_words.score,
            self.growth_signals.score,
            self.spelling.score,
            self.buzzwords.score,
            self.unnecessary_sections.score,
        ]
    }
}

/// Result of one résumé / job-description analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub categories: Categories,
    pub recommendations: Vec<String>,
}
