//! Mail client: the single point of entry for all outbound email.
//!
//! Notifications are best-effort everywhere: a failed or slow send is logged
//! and swallowed, never surfaced to the request that triggered it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod templates;

const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";
/// Bound on a single send so an unreachable mail provider cannot stall a
/// request indefinitely.
const SEND_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },
}

/// Delivers one HTML email to one recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError>;
}

/// Sends a notification and logs the outcome. Failure is non-fatal: the write
/// that triggered the notification has already succeeded and must be reported
/// as successful regardless.
pub async fn send_best_effort(mailer: &dyn Mailer, to: &str, subject: &str, html: &str) {
    match mailer.send(to, subject, html).await {
        Ok(()) => debug!("notification sent to {to}: {subject}"),
        Err(e) => warn!("failed to send notification to {to}: {e}"),
    }
}

#[derive(Debug, Serialize)]
struct SendGridRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// SendGrid v3 mail client with a bounded per-send timeout.
#[derive(Clone)]
pub struct SendGridMailer {
    client: Client,
    api_key: String,
    from_email: String,
}

impl SendGridMailer {
    pub fn new(api_key: String, from_email: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(SEND_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            from_email,
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let request_body = SendGridRequest {
            personalizations: vec![Personalization {
                to: vec![Address { email: to }],
            }],
            from: Address {
                email: &self.from_email,
            },
            subject,
            content: vec![Content {
                content_type: "text/html",
                value: html,
            }],
        };

        let response = self
            .client
            .post(SENDGRID_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
