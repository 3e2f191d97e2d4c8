use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogFields, BlogPost, Comment, WishlistEntry};
use crate::error::RepoError;

/// Result of an update keyed by identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Generic repository trait over one collection.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find a document by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new document, returning it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete a document by its ID, returning how many were removed.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<BlogPost, Uuid> {
    /// The `limit` most recently inserted posts, newest first.
    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError>;

    /// Every post in insertion order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Posts whose title contains `needle`, ignoring case.
    async fn search_by_title(&self, needle: &str) -> Result<Vec<BlogPost>, RepoError>;

    /// Replace all five editable fields of the post with `id`.
    async fn replace_fields(&self, id: Uuid, fields: BlogFields) -> Result<UpdateOutcome, RepoError>;
}

/// Wishlist repository.
#[async_trait]
pub trait WishlistRepository: BaseRepository<WishlistEntry, Uuid> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistEntry>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments whose `id` reference equals `blog_id` verbatim.
    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError>;
}
