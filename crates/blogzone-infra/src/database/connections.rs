#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Host and database name of the deployment; only credentials come from the environment.
pub const DEFAULT_DB_HOST: &str = "cluster0.blogzone.internal:5432";
pub const DEFAULT_DB_NAME: &str = "blog_zone";

/// Configuration for the database pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Build the connection URL from credentials against the fixed host.
    pub fn from_credentials(user: &str, password: &str) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            user, password, DEFAULT_DB_HOST, DEFAULT_DB_NAME
        )
    }
}

/// The single shared database handle.
///
/// Created once at startup, handed to repositories by clone (the pool is
/// shared), and closed explicitly when the server stops.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(not(feature = "postgres"))]
pub struct DatabaseConnections;

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the connection pool from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let main = Database::connect(opts).await?;
        main.ping().await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self { main })
    }

    /// Release the pool. Outstanding clones held by repositories stop working.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.close_by_ref().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
