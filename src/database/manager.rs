use bson::doc;
use mongodb::{Client, Database};
use std::sync::OnceLock;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.")]
    NotConfigured,

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// Lazily-initialized handle to the configured MongoDB database.
/// The driver manages its own connection pool; this just caches the client.
pub struct DatabaseManager {
    client: RwLock<Option<Client>>,
}

impl DatabaseManager {
    fn instance() -> &'static DatabaseManager {
        static INSTANCE: OnceLock<DatabaseManager> = OnceLock::new();
        INSTANCE.get_or_init(|| DatabaseManager {
            client: RwLock::new(None),
        })
    }

    /// Get the configured database handle, creating the client on first use
    pub async fn database() -> Result<Database, DatabaseError> {
        let (url, name) = Self::connection_settings()?;
        let client = Self::instance().get_client(&url).await?;
        Ok(client.database(&name))
    }

    fn connection_settings() -> Result<(String, String), DatabaseError> {
        let database = &crate::config::config().database;
        match (&database.url, &database.name) {
            (Some(url), Some(name)) => Ok((url.clone(), name.clone())),
            _ => Err(DatabaseError::NotConfigured),
        }
    }

    /// Get existing client or create a new one lazily
    async fn get_client(&self, url: &str) -> Result<Client, DatabaseError> {
        // Fast path: try read lock
        {
            let client = self.client.read().await;
            if let Some(client) = client.as_ref() {
                return Ok(client.clone());
            }
        }

        let client = Client::with_uri_str(url).await?;

        // Store in cache
        {
            let mut cached = self.client.write().await;
            *cached = Some(client.clone());
        }

        info!("Created MongoDB client");
        Ok(client)
    }

    /// Pings the configured database to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let database = Self::database().await?;
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_without_configuration_is_not_configured() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DATABASE_NAME");

        let result = DatabaseManager::health_check().await;
        assert!(matches!(result, Err(DatabaseError::NotConfigured)));
    }
}
