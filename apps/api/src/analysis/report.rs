//! Markdown report for a stored analysis. Pure formatter over the analysis fields.

use crate::models::analysis::AnalysisRow;

pub const REPORT_FILE_NAME: &str = "resume-analysis-report.md";

/// Renders the downloadable analysis report.
pub fn render_report(analysis: &AnalysisRow) -> String {
    let c = &analysis.categories.0;

    let mut md = String::from("# Resume Analysis Report\n\n");
    md.push_str(&format!("- **Resume:** {}\n", inline_text(&analysis.resume_name)));
    md.push_str(&format!("- **Job:** {}\n\n", inline_text(&analysis.job_title)));
    md.push_str(&format!(
        "## Overall Score: {}/100\n\n",
        analysis.overall_score
    ));

    push_category(
        &mut md,
        "keywordMatch",
        c.keyword_match.score,
        &[
            ("Matching Keywords", c.keyword_match.matches.join(", ")),
            ("Missing Keywords", c.keyword_match.missing.join(", ")),
        ],
    );
    push_category(
        &mut md,
        "repetition",
        c.repetition.score,
        &[("Overused Words", c.repetition.overused_words.join(", "))],
    );
    push_category(
        &mut md,
        "jobFit",
        c.job_fit.score,
        &[("Feedback", c.job_fit.feedback.clone())],
    );
    push_category(
        &mut md,
        "fillerWords",
        c.filler_words.score,
        &[("Words", c.filler_words.words.join(", "))],
    );
    push_category(
        &mut md,
        "growthSignals",
        c.growth_signals.score,
        &[("Feedback", c.growth_signals.feedback.clone())],
    );
    push_category(
        &mut md,
        "spelling",
        c.spelling.score,
        &[("Errors", c.spelling.errors.join(", "))],
    );
    push_category(
        &mut md,
        "buzzwords",
        c.buzzwords.score,
        &[
            ("Appropriate Terms", c.buzzwords.appropriate.join(", ")),
            ("Excessive Terms", c.buzzwords.excessive.join(", ")),
        ],
    );
    push_category(
        &mut md,
        "unnecessarySections",
        c.unnecessary_sections.score,
        &[(
            "Sections to Review",
            c.unnecessary_sections.sections.join(", "),
        )],
    );

    md.push_str("## Recommendations\n\n");
    for recommendation in &analysis.recommendations {
        md.push_str(&format!("- {recommendation}\n"));
    }

    md.push_str(&format!(
        "\n_Report generated on: {}_\n",
        analysis.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md
}

fn push_category(md: &mut String, key: &str, score: u32, details: &[(&str, String)]) {
    md.push_str(&format!("### {}\n\n", display_name(key)));
    md.push_str(&format!("- **Score:** {score}/100\n"));
    for (label, value) in details {
        let value: &str = if value.is_empty() { "none" } else { value };
        md.push_str(&format!("- **{label}:** {value}\n"));
    }
    md.push('\n');
}

/// Collapses user-supplied text onto one line and escapes Markdown control characters.
fn inline_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for ch in word.chars() {
            if matches!(ch, '\\' | '`' | '*' | '_' | '#' | '[' | ']' | '<' | '>' | '|') {
                out.push('\\');
            }
            out.push(ch);
        }
    }
    out
}

/// `keywordMatch` → `Keyword Match`
fn display_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            name.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            name.push(' ');
            name.push(ch);
        } else {
            name.push(ch);
        }
    }
    name
}
