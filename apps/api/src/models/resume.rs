use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Stored;

/// A job application as stored in the `resumes` collection.
///
/// `phone` and `resume` are absent on legacy documents; the serde defaults
/// normalize them to empty strings at read time. No write-back is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeApplication {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    pub role: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub applied_at: DateTime<Utc>,
    /// Base64-encoded bytes of the uploaded file.
    #[serde(default)]
    pub resume: String,
}

/// Applicant metadata carried alongside the uploaded file.
#[derive(Debug, Validate)]
pub struct UploadForm {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: String,
}

/// Wire shape of an application: everything except the encoded payload,
/// which is served through the download/view endpoints instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub applied_at: DateTime<Utc>,
}

impl From<Stored<ResumeApplication>> for ResumeSummary {
    fn from(stored: Stored<ResumeApplication>) -> Self {
        ResumeSummary {
            id: stored.id,
            name: stored.doc.name,
            phone: stored.doc.phone,
            email: stored.doc.email,
            role: stored.doc.role,
            applied_at: stored.doc.applied_at,
        }
    }
}
