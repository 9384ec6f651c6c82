use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobPostingOut};
use crate::models::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /jobsend/
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<CreatedResponse>, AppError> {
    posting.validate()?;

    let id = state.jobs.insert(&posting).await?;
    tracing::info!("stored job posting {id} for role {}", posting.role);

    Ok(Json(CreatedResponse {
        message: "Job data created successfully".to_string(),
        id,
    }))
}

/// GET /jobs/
pub async fn handle_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingOut>>, AppError> {
    let jobs = state
        .jobs
        .find_all()
        .await?
        .into_iter()
        .map(JobPostingOut::from)
        .collect();
    Ok(Json(jobs))
}

/// GET /jobs/:id
pub async fn handle_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPostingOut>, AppError> {
    let job = state
        .jobs
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(job.into()))
}

/// PUT /jobs/:id. Updates are whole-document replaces; there is no PATCH.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<MessageResponse>, AppError> {
    posting.validate()?;

    if !state.jobs.replace_by_id(&id, &posting).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Job data updated successfully".to_string(),
    }))
}

/// DELETE /jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.jobs.delete_by_id(&id).await? {
        return Err(AppError::NotFound("Job not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Job data deleted successfully".to_string(),
    }))
}
