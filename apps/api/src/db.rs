use anyhow::Result;
use mongodb::{options::ClientOptions, Client};
use tracing::info;

/// Creates and returns a MongoDB client.
pub async fn create_client(mongo_uri: &str) -> Result<Client> {
    info!("Connecting to MongoDB...");

    let options = ClientOptions::parse(mongo_uri).await?;
    let client = Client::with_options(options)?;

    info!("MongoDB client initialized");
    Ok(client)
}
