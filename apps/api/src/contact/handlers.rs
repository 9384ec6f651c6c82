use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use crate::errors::AppError;
use crate::mailer::{send_best_effort, templates};
use crate::models::contact::{ContactSubmission, ContactSummary};
use crate::models::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(form): Json<ContactSubmission>,
) -> Result<Json<CreatedResponse>, AppError> {
    form.validate()?;

    let id = state.contacts.insert(&form).await?;
    tracing::info!("stored contact submission {id} from {}", form.email);

    let (subject, html) = templates::contact_ack(&form.name, &form.message);
    send_best_effort(state.mailer.as_ref(), &form.email, &subject, &html).await;

    Ok(Json(CreatedResponse {
        message: "Contact form submitted successfully".to_string(),
        id,
    }))
}

/// GET /submissions
pub async fn handle_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSummary>>, AppError> {
    let submissions = state
        .contacts
        .find_all()
        .await?
        .into_iter()
        .map(ContactSummary::from)
        .collect();
    Ok(Json(submissions))
}

/// DELETE /delete/:id
pub async fn handle_delete_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.contacts.delete_by_id(&id).await? {
        return Err(AppError::NotFound("Submission not found".to_string()));
    }
    Ok(Json(MessageResponse {
        message: "Submission deleted successfully".to_string(),
    }))
}
