use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Stored;

/// A contact-form submission as stored in the `contact_forms` collection.
/// Doubles as the POST /submit request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

/// Wire shape of a submission: the stored fields plus its id.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<Stored<ContactSubmission>> for ContactSummary {
    fn from(stored: Stored<ContactSubmission>) -> Self {
        ContactSummary {
            id: stored.id,
            name: stored.doc.name,
            email: stored.doc.email,
            message: stored.doc.message,
        }
    }
}
