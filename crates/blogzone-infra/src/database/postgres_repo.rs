//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use blogzone_core::domain::{BlogFields, BlogPost, Comment, WishlistEntry};
use blogzone_core::error::RepoError;
use blogzone_core::ports::{BlogRepository, CommentRepository, UpdateOutcome, WishlistRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::wishlist::{self, Entity as WishlistEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};
use crate::redact::mask_email;

/// PostgreSQL blog post repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL wishlist repository.
pub type PostgresWishlistRepository = PostgresBaseRepository<WishlistEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Build a `LIKE` pattern matching `needle` anywhere, with wildcards escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_recent(&self, limit: u64) -> Result<Vec<BlogPost>, RepoError> {
        // UUIDv7 keys: descending id is newest first.
        let result = BlogEntity::find()
            .order_by_desc(blog::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogEntity::find()
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search_by_title(&self, needle: &str) -> Result<Vec<BlogPost>, RepoError> {
        tracing::debug!(needle, "Searching blogs by title");

        let pattern = contains_pattern(&needle.to_lowercase());
        let result = BlogEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(blog::Column::Title))).like(pattern))
            .order_by_asc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace_fields(&self, id: Uuid, fields: BlogFields) -> Result<UpdateOutcome, RepoError> {
        let result = BlogEntity::update_many()
            .col_expr(blog::Column::Title, Expr::value(fields.title))
            .col_expr(blog::Column::ImageUrl, Expr::value(fields.image_url))
            .col_expr(
                blog::Column::ShortDescription,
                Expr::value(fields.short_description),
            )
            .col_expr(
                blog::Column::LongDescription,
                Expr::value(fields.long_description),
            )
            .col_expr(blog::Column::Category, Expr::value(fields.category))
            .filter(blog::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        // PostgreSQL reports touched rows only; a matched row counts as modified.
        Ok(UpdateOutcome {
            matched: result.rows_affected,
            modified: result.rows_affected,
        })
    }
}

#[async_trait]
impl WishlistRepository for PostgresWishlistRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistEntry>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding wishlist by email");

        let result = WishlistEntity::find()
            .filter(wishlist::Column::WishlistEmail.eq(email))
            .order_by_asc(wishlist::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::BlogId.eq(blog_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
