mod config;
mod contact;
mod db;
mod errors;
mod export;
mod job;
mod mailer;
mod models;
mod resume;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use mongodb::bson::Document;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_client;
use crate::mailer::{Mailer, SendGridMailer};
use crate::models::contact::ContactSubmission;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeApplication;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::mongo::MongoStore;
use crate::store::DocumentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careers API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize MongoDB. Each record type keeps its own database and collection.
    let mongo = create_client(&config.mongo_uri).await?;
    let contacts: Arc<dyn DocumentStore<ContactSubmission>> =
        Arc::new(MongoStore::<ContactSubmission>::new(
            mongo
                .database("contact_database")
                .collection::<Document>("contact_forms"),
        ));
    let resumes: Arc<dyn DocumentStore<ResumeApplication>> =
        Arc::new(MongoStore::<ResumeApplication>::new(
            mongo
                .database("resume_database")
                .collection::<Document>("resumes"),
        ));
    let jobs: Arc<dyn DocumentStore<JobPosting>> = Arc::new(MongoStore::<JobPosting>::new(
        mongo.database("job_database").collection::<Document>("job_data"),
    ));

    // Initialize the mail client
    let mailer: Arc<dyn Mailer> = Arc::new(SendGridMailer::new(
        config.sendgrid_api_key.clone(),
        config.from_email.clone(),
    ));
    info!("SendGrid mail client initialized");

    // Build app state
    let state = AppState {
        contacts,
        resumes,
        jobs,
        mailer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
