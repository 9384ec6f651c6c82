use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::export::xlsx;
use crate::models::contact::ContactSummary;
use crate::models::resume::ResumeSummary;
use crate::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn xlsx_response(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// GET /contacts-excel
pub async fn handle_contacts_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows: Vec<ContactSummary> = state
        .contacts
        .find_all()
        .await?
        .into_iter()
        .map(ContactSummary::from)
        .collect();

    if rows.is_empty() {
        return Err(AppError::NotFound(
            "No contact data found to export".to_string(),
        ));
    }

    let bytes = xlsx::contacts_workbook(&rows)?;
    Ok(xlsx_response(bytes, "contact_data.xlsx"))
}

/// GET /career/excel
pub async fn handle_career_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows: Vec<ResumeSummary> = state
        .resumes
        .find_all()
        .await?
        .into_iter()
        .map(ResumeSummary::from)
        .collect();

    if rows.is_empty() {
        return Err(AppError::NotFound("No data found to export".to_string()));
    }

    let bytes = xlsx::applications_workbook(&rows, &state.config.public_base_url)?;
    Ok(xlsx_response(bytes, "user_data.xlsx"))
}
