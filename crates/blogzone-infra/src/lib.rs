//! # Blog Zone Infrastructure
//!
//! Concrete implementations of the ports defined in `blogzone-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled; with none, storage is in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - JWT session tokens

pub mod database;
pub mod memory;
pub mod redact;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConnections;
pub use memory::{InMemoryBlogRepository, InMemoryCommentRepository, InMemoryWishlistRepository};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
