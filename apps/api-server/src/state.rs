//! Application state - shared across all handlers.

use std::sync::Arc;

use blogzone_core::ports::{BlogRepository, CommentRepository, TokenService, WishlistRepository};
use blogzone_infra::database::DatabaseConnections;
use blogzone_infra::{
    InMemoryBlogRepository, InMemoryCommentRepository, InMemoryWishlistRepository,
    JwtTokenService,
};

#[cfg(feature = "postgres")]
use blogzone_infra::database::{
    PostgresBlogRepository, PostgresCommentRepository, PostgresWishlistRepository,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub wishlist: Arc<dyn WishlistRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => {
                        let conn = connections.main.clone();
                        tracing::info!("Application state initialized (postgres)");
                        return Self {
                            blogs: Arc::new(PostgresBlogRepository::new(conn.clone())),
                            wishlist: Arc::new(PostgresWishlistRepository::new(conn.clone())),
                            comments: Arc::new(PostgresCommentRepository::new(conn)),
                            tokens,
                            db: Some(Arc::new(connections)),
                        };
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!(
                    "No database configured (DATABASE_URL or DB_user/DB_pass). Running in-memory."
                );
            }
        }

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        tracing::info!("Application state initialized (in-memory)");
        Self::in_memory(tokens)
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            wishlist: Arc::new(InMemoryWishlistRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            tokens,
            db: None,
        }
    }
}
