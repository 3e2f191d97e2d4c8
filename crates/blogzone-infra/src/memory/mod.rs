//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogzone_core::domain::{BlogFields, BlogPost, Comment, WishlistEntry};
use blogzone_core::error::RepoError;
use blogzone_core::ports::{
    BaseRepository, BlogRepository, CommentRepository, UpdateOutcome, WishlistRepository,
};

use crate::redact::mask_email;

/// A document that can live in an in-memory collection.
pub trait Document: Clone + Send + Sync + 'static {
    fn document_id(&self) -> Uuid;
}

impl Document for BlogPost {
    fn document_id(&self) -> Uuid {
        self.id
    }
}

impl Document for WishlistEntry {
    fn document_id(&self) -> Uuid {
        self.id
    }
}

impl Document for Comment {
    fn document_id(&self) -> Uuid {
        self.id
    }
}

/// A collection held in insertion order behind an async RwLock.
pub struct InMemoryRepository<T> {
    store: RwLock<Vec<T>>,
}

impl<T: Document> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Clone every document matching `predicate`, in insertion order.
    async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let store = self.store.read().await;
        store.iter().filter(|doc| predicate(doc)).cloned().collect()
    }
}

impl<T: Document> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|doc| doc.document_id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|doc| doc.document_id() == entity.document_id()) {
            return Err(RepoError::Constraint("Document already exists".to_string()));
        }

        store.push(entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|doc| doc.document_id() != id);
        Ok((before - store.len()) as u64)
    }
}

/// In-memory blog post repository.
pub type InMemoryBlogRepository = InMemoryRepository<BlogPost>;

/// In-memory wishlist repository.
pub type InMemoryWishlistRepository = InMemoryRepository<WishlistEntry>;

/// In-memory comment repository.
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn search_by_title(&self, needle: &str) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self
            .filter(|post: &BlogPost| post.fields.title_contains(needle))
            .await)
    }

    async fn replace_fields(&self, id: Uuid, fields: BlogFields) -> Result<UpdateOutcome, RepoError> {
        let mut store = self.store.write().await;

        let Some(post) = store.iter_mut().find(|post| post.id == id) else {
            return Ok(UpdateOutcome::default());
        };

        let modified = u64::from(post.fields != fields);
        post.fields = fields;

        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistEntry>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding wishlist by email");

        Ok(self
            .filter(|entry: &WishlistEntry| entry.wishlist_email == email)
            .await)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self
            .filter(|comment: &Comment| comment.blog_id == blog_id)
            .await)
    }
}
