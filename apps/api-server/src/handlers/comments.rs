//! Comment handlers.

use actix_web::{HttpResponse, web};

use blogzone_core::domain::Comment;
use blogzone_shared::dto::{CommentRequest, IdQuery, InsertOneResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /add-comment
pub async fn add_comment(
    state: web::Data<AppState>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let comment = state
        .comments
        .insert(Comment::new(req.id, req.content)?)
        .await?;
    tracing::info!(comment_id = %comment.id, blog_id = %comment.blog_id, "Comment added");

    Ok(HttpResponse::Created().json(InsertOneResponse::new(comment.id)))
}

/// GET /comments?id=
///
/// `id` is matched as text against each comment's post reference.
pub async fn list_comments(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.find_by_blog_id(&query.id).await?;
    Ok(HttpResponse::Ok().json(comments))
}
