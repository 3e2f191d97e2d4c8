//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blogzone_core::domain::{BlogFields, BlogPost, parse_document_id};
use blogzone_shared::dto::{BlogRequest, IdQuery, InsertOneResponse, TitleQuery, UpdateOneResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Number of posts on the landing page.
const RECENT_LIMIT: u64 = 6;

fn into_fields(req: BlogRequest) -> BlogFields {
    BlogFields {
        title: req.title,
        image_url: req.image_url,
        short_description: req.short_description,
        long_description: req.long_description,
        category: req.category,
    }
}

/// GET /recent-blogs
pub async fn recent_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.find_recent(RECENT_LIMIT).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /all-blogs
pub async fn all_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /search-blogs?title=
pub async fn search_blogs(
    state: web::Data<AppState>,
    query: web::Query<TitleQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.blogs.search_by_title(&query.title).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blog/{id} - Protected route
///
/// Responds `null` when no post has that id.
pub async fn get_blog(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_document_id(&path)?;
    let post: Option<BlogPost> = state.blogs.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /add-blog
pub async fn add_blog(
    state: web::Data<AppState>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let fields = into_fields(body.into_inner());
    fields.validate()?;

    let post = state.blogs.insert(BlogPost::new(fields)).await?;
    tracing::info!(blog_id = %post.id, "Blog created");

    Ok(HttpResponse::Created().json(InsertOneResponse::new(post.id)))
}

/// PATCH /update?id=
///
/// Replaces all five fields; an unknown id matches nothing.
pub async fn update_blog(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_document_id(&query.id)?;
    let fields = into_fields(body.into_inner());
    fields.validate()?;

    let outcome = state.blogs.replace_fields(id, fields).await?;
    tracing::info!(blog_id = %id, matched = outcome.matched, "Blog updated");

    Ok(HttpResponse::Ok().json(UpdateOneResponse {
        acknowledged: true,
        matched_count: outcome.matched,
        modified_count: outcome.modified,
    }))
}
