//! Analysis service — loads the stored inputs, runs the engine, persists the result.
//!
//! Fresh analyses and re-analyses of an existing pair both go through `run_analysis`,
//! so the engine has exactly one call site.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::analyze;
use crate::analysis::store::{get_analysis, insert_analysis};
use crate::errors::AppError;
use crate::job_descriptions::store::get_job_description;
use crate::models::analysis::AnalysisRow;
use crate::resumes::store::get_resume;

/// Hands out one generator per analysis so requests never share RNG state.
///
/// With a seed every analysis draws the same placeholder scores, which keeps
/// demo and test deployments reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngSource {
    pub seed: Option<u64>,
}

impl RngSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub async fn run_analysis(
    pool: &PgPool,
    rng_source: &RngSource,
    user_id: Uuid,
    resume_id: Uuid,
    job_description_id: Uuid,
) -> Result<AnalysisRow, AppError> {
    let resume = get_resume(pool, user_id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let jd = get_job_description(pool, user_id, job_description_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Job description {job_description_id} not found"))
        })?;

    let result = analyze(&resume.content, &jd.content, &mut rng_source.rng())?;
    info!(
        "Analyzed resume {resume_id} against job description {job_description_id}: {} matched, {} missing",
        result.categories.keyword_match.matches.len(),
        result.categories.keyword_match.missing.len()
    );

    Ok(insert_analysis(pool, &resume, &jd, result).await?)
}

/// Re-runs a stored analysis's (résumé, job description) pair and stores the new result.
pub async fn rerun_analysis(
    pool: &PgPool,
    rng_source: &RngSource,
    user_id: Uuid,
    analysis_id: Uuid,
) -> Result<AnalysisRow, AppError> {
    let previous = get_analysis(pool, user_id, analysis_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {analysis_id} not found")))?;

    run_analysis(
        pool,
        rng_source,
        user_id,
        previous.resume_id,
        previous.job_description_id,
    )
    .await
}
