use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Stored;

/// A job posting as stored in the `job_data` collection.
/// Doubles as the create/update request body; updates replace the whole document.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(nested)]
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
}

/// Wire shape of a posting: the stored fields plus its id.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobPostingOut {
    pub id: String,
    pub role: String,
    pub description: String,
    pub location: Location,
}

impl From<Stored<JobPosting>> for JobPostingOut {
    fn from(stored: Stored<JobPosting>) -> Self {
        JobPostingOut {
            id: stored.id,
            role: stored.doc.role,
            description: stored.doc.description,
            location: stored.doc.location,
        }
    }
}
