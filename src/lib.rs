pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod db;
pub(crate) mod repositories;
pub(crate) mod schemas;
pub(crate) mod services;

#[cfg(test)]
mod test_support;

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::services::plagiarism::evaluation;

/// Threshold used by the synthetic evaluation when none is given.
pub const DEFAULT_EVAL_THRESHOLD: f64 = evaluation::DEFAULT_THRESHOLD;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let db_pool = db::init_pool(&settings).await?;
    db::run_migrations(&db_pool).await?;

    let state = AppState::new(settings, db_pool);
    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        threshold = state.settings().plagiarism().threshold,
        "Picrete plagiarism API listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Scores the synthetic pair set at `threshold` and prints the confusion
/// matrix with precision, recall and F1.
pub fn run_evaluation(threshold: f64, seed: u64) -> anyhow::Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        anyhow::bail!("threshold must be a non-negative number, got {threshold}");
    }

    let report = evaluation::evaluate(threshold, seed);

    println!("threshold: {:.2} (seed {seed})", report.threshold);
    println!("TP: {}  FP: {}", report.true_positives, report.false_positives);
    println!("FN: {}  TN: {}", report.false_negatives, report.true_negatives);
    println!("precision: {:.2}", report.precision);
    println!("recall:    {:.2}", report.recall);
    println!("f1:        {:.2}", report.f1);
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}
