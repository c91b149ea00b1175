use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentReviewer;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::plagiarism::PlagiarismReportQuery;
use crate::services::plagiarism::{self, AnalysisError, PlagiarismAlert, PlagiarismPolicy};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/:exam_id/plagiarism", get(plagiarism_report))
}

async fn plagiarism_report(
    CurrentReviewer(reviewer): CurrentReviewer,
    State(state): State<AppState>,
    Path(exam_id): Path<String>,
    Query(query): Query<PlagiarismReportQuery>,
) -> Result<Json<Vec<PlagiarismAlert>>, ApiError> {
    query.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if query.threshold.is_some_and(|threshold| !threshold.is_finite()) {
        return Err(ApiError::BadRequest("threshold must be between 0 and 1".to_string()));
    }

    let exam = repositories::exams::find_by_id(state.db(), &exam_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load exam"))?
        .ok_or_else(|| ApiError::NotFound("Exam not found".to_string()))?;

    let mut policy = PlagiarismPolicy::from(state.settings().plagiarism());
    if let Some(threshold) = query.threshold {
        policy = policy.with_threshold(threshold);
    }

    tracing::info!(
        exam_id = %exam.id,
        reviewer_id = %reviewer.id,
        threshold = policy.threshold,
        "Building plagiarism report"
    );

    let alerts = plagiarism::analyze_exam(state.db(), &exam.id, &policy)
        .await
        .map_err(|e| match e {
            AnalysisError::Fetch(err) => ApiError::internal(err, "Failed to load exam answers"),
            malformed @ AnalysisError::MalformedAnswer { .. } => {
                ApiError::internal(malformed, "Failed to build plagiarism report")
            }
        })?;

    Ok(Json(alerts))
}
