use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::resume::ResumeSummary;
use crate::models::{CreatedResponse, MessageResponse};
use crate::resume::{ingest, payload};
use crate::state::AppState;

/// POST /upload/
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CreatedResponse>, AppError> {
    let fields = ingest::collect_upload(&mut multipart).await?;
    let response = ingest::ingest(&state, fields).await?;
    Ok(Json(response))
}

/// GET /resumes/
pub async fn handle_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let resumes = state
        .resumes
        .find_all()
        .await?
        .into_iter()
        .map(ResumeSummary::from)
        .collect();
    Ok(Json(resumes))
}

/// GET /resume/:id
pub async fn handle_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeSummary>, AppError> {
    let resume = state
        .resumes
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(resume.into()))
}

/// DELETE /resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.resumes.delete_by_id(&id).await? {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}

/// GET /download/:id
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    serve_resume(&state, &id, Disposition::Attachment).await
}

/// GET /view/:id
pub async fn handle_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    serve_resume(&state, &id, Disposition::Inline).await
}

enum Disposition {
    Attachment,
    Inline,
}

impl Disposition {
    fn header_value(&self) -> &'static str {
        match self {
            Disposition::Attachment => "attachment; filename=\"resume.pdf\"",
            Disposition::Inline => "inline",
        }
    }
}

/// Decodes the stored payload and streams it straight from memory; the two
/// serving endpoints differ only in the disposition header.
async fn serve_resume(
    state: &AppState,
    id: &str,
    disposition: Disposition,
) -> Result<Response, AppError> {
    let stored = state
        .resumes
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let bytes = payload::decode(&stored.doc.resume)
        .map_err(|e| anyhow::anyhow!("stored resume payload for {id} is not valid base64: {e}"))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, disposition.header_value()),
        ],
        bytes,
    )
        .into_response())
}
