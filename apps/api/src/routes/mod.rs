pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::resume::ingest::MAX_RESUME_BYTES;
use crate::state::AppState;
use crate::{contact, export, job, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/favicon.ico", get(health::favicon_handler))
        // Contact form
        .route("/submit", post(contact::handlers::handle_submit))
        .route("/submissions", get(contact::handlers::handle_submissions))
        .route("/delete/:id", delete(contact::handlers::handle_delete_submission))
        .route("/contacts-excel", get(export::handlers::handle_contacts_export))
        // Job applications
        .route("/upload/", post(resume::handlers::handle_upload))
        .route("/resumes/", get(resume::handlers::handle_resumes))
        .route(
            "/resume/:id",
            get(resume::handlers::handle_resume).delete(resume::handlers::handle_delete_resume),
        )
        .route("/download/:id", get(resume::handlers::handle_download))
        .route("/view/:id", get(resume::handlers::handle_view))
        .route("/career/excel", get(export::handlers::handle_career_export))
        // Job postings
        .route("/jobsend/", post(job::handlers::handle_create_job))
        .route("/jobs/", get(job::handlers::handle_jobs))
        .route(
            "/jobs/:id",
            get(job::handlers::handle_job)
                .put(job::handlers::handle_update_job)
                .delete(job::handlers::handle_delete_job),
        )
        // Uploads are the only large bodies; cap everything with headroom for
        // multipart framing.
        .layer(DefaultBodyLimit::max(MAX_RESUME_BYTES + 64 * 1024))
        .with_state(state)
}
