//! Database Module
//!
//! SurrealDB connection (any engine: `mem://`, `ws://`, ...) and the
//! repositories on top of it.

pub mod models;
pub mod repository;
pub mod schema;

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::{Config, ServerError};

/// Database service - owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, sign in, select namespace/database and apply the schema.
    ///
    /// The whole sequence is bounded by `db_connect_timeout_ms`; there is no
    /// retry, the caller decides whether a failure is fatal.
    pub async fn connect(config: &Config) -> Result<Self, ServerError> {
        let timeout = Duration::from_millis(config.db_connect_timeout_ms);

        let db = tokio::time::timeout(timeout, Self::open(config))
            .await
            .map_err(|_| ServerError::ConnectTimeout(config.db_connect_timeout_ms))??;

        tracing::info!(
            url = %config.database_url,
            namespace = %config.db_namespace,
            database = %config.db_database,
            "Database connection established"
        );

        Ok(Self { db })
    }

    async fn open(config: &Config) -> Result<Surreal<Any>, ServerError> {
        let db = any::connect(config.database_url.as_str())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        if let (Some(username), Some(password)) = (&config.db_username, &config.db_password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| ServerError::Database(format!("Failed to sign in: {e}")))?;
        }

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_database.as_str())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select database: {e}")))?;

        schema::apply(&db)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(db)
    }
}
