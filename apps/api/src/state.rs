use std::sync::Arc;

use crate::config::Config;
use crate::mailer::Mailer;
use crate::models::contact::ContactSubmission;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeApplication;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Stores and the mailer are held behind trait objects so tests can swap in
/// in-memory doubles.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn DocumentStore<ContactSubmission>>,
    pub resumes: Arc<dyn DocumentStore<ResumeApplication>>,
    pub jobs: Arc<dyn DocumentStore<JobPosting>>,
    pub mailer: Arc<dyn Mailer>,
    pub config: Config,
}
