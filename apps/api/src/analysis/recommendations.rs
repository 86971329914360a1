pub const ADD_KEYWORDS: &str = "Add more keywords from the job description.";
pub const VARY_VERBS: &str = "Vary your action verbs to avoid repetition.";

const STANDARD_RECOMMENDATIONS: &[&str] = &[
    "Quantify your achievements with metrics.",
    "Remove filler words to make your resume more concise.",
    "Focus more on relevant skills and experience.",
];

/// Builds the ordered recommendation list (3 to 5 entries).
pub fn build_recommendations(missing: &[String], overused_words: &[String]) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(STANDARD_RECOMMENDATIONS.len() + 2);

    if !missing.is_empty() {
        recommendations.push(ADD_KEYWORDS.to_string());
    }
    if !overused_words.is_empty() {
        recommendations.push(VARY_VERBS.to_string());
    }
    recommendations.extend(STANDARD_RECOMMENDATIONS.iter().map(|s| s.to_string()));

    recommendations
}
