//! Resume ingestion pipeline: multipart form -> encoded document -> insert ->
//! retrieval URL -> best-effort notifications.

use axum::extract::Multipart;
use bytes::Bytes;
use chrono::Utc;
use validator::Validate;

use crate::errors::AppError;
use crate::mailer::{send_best_effort, templates};
use crate::models::resume::{ResumeApplication, UploadForm};
use crate::models::CreatedResponse;
use crate::resume::payload;
use crate::state::AppState;

/// Upload size cap, enforced before the file is encoded.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

pub struct UploadFields {
    pub form: UploadForm,
    pub file: Bytes,
}

/// Drains the multipart stream into the expected fields.
/// Unknown fields are ignored; missing required fields are validation errors.
pub async fn collect_upload(multipart: &mut Multipart) -> Result<UploadFields, AppError> {
    let mut name = None;
    let mut phone = None;
    let mut email = None;
    let mut role = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field, "name").await?),
            "phone" => phone = Some(read_text(field, "phone").await?),
            "email" => email = Some(read_text(field, "email").await?),
            "role" => role = Some(read_text(field, "role").await?),
            "resume" => {
                file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume file: {e}"))
                })?)
            }
            other => tracing::debug!("ignoring unexpected multipart field '{other}'"),
        }
    }

    Ok(UploadFields {
        form: UploadForm {
            name: required(name, "name")?,
            phone: required(phone, "phone")?,
            email: required(email, "email")?,
            role: required(role, "role")?,
        },
        file: required(file, "resume")?,
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read field '{name}': {e}")))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("missing required field '{name}'")))
}

/// Encodes the file, persists the application, and fires the applicant and
/// admin notifications. Notification failure never fails the upload.
pub async fn ingest(state: &AppState, fields: UploadFields) -> Result<CreatedResponse, AppError> {
    fields.form.validate()?;

    if fields.file.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(format!(
            "resume file exceeds the {} byte limit",
            MAX_RESUME_BYTES
        )));
    }

    let UploadForm {
        name,
        phone,
        email,
        role,
    } = fields.form;

    let application = ResumeApplication {
        name,
        phone,
        email,
        role,
        applied_at: Utc::now(),
        resume: payload::encode(&fields.file),
    };

    let id = state.resumes.insert(&application).await?;
    tracing::info!(
        "stored resume application {id} for role {} ({} bytes)",
        application.role,
        fields.file.len()
    );

    let resume_url = format!("{}/download/{id}", state.config.public_base_url);

    let (subject, html) = templates::applicant_ack(&application.name, &application.role);
    send_best_effort(state.mailer.as_ref(), &application.email, &subject, &html).await;

    let (subject, html) = templates::admin_alert(&application, &resume_url);
    send_best_effort(state.mailer.as_ref(), &state.config.admin_email, &subject, &html).await;

    Ok(CreatedResponse {
        message: "Resume uploaded successfully".to_string(),
        id,
    })
}
