use sqlx::PgPool;

use crate::analysis::service::RngSource;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Per-request generator factory for the analysis engine's placeholder draws.
    pub rng_source: RngSource,
}
