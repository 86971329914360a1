// Résumé / job-description analysis.
// The engine (keywords, scoring, recommendations) is pure; the service and
// store layers wrap it with persistence, and report renders stored results.

pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod recommendations;
pub mod report;
pub mod scoring;
pub mod service;
pub mod store;
