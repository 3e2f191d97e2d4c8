//! Wishlist handlers.

use actix_web::{HttpResponse, web};

use blogzone_core::domain::{WishlistEntry, parse_document_id};
use blogzone_infra::redact::mask_email;
use blogzone_shared::dto::{DeleteOneResponse, EmailQuery, IdQuery, InsertOneResponse, WishlistRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /add-wishlist
pub async fn add_wishlist(
    state: web::Data<AppState>,
    body: web::Json<WishlistRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let entry = WishlistEntry::new(req.wishlist_email, req.blog)?;

    let entry = state.wishlist.insert(entry).await?;
    tracing::info!(
        entry_id = %entry.id,
        user_email = %mask_email(&entry.wishlist_email),
        "Wishlist entry added"
    );

    Ok(HttpResponse::Created().json(InsertOneResponse::new(entry.id)))
}

/// GET /wishlist?email= - Protected route, owner only
pub async fn list_wishlist(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<EmailQuery>,
) -> AppResult<HttpResponse> {
    if let Err(e) = identity.ensure_email(&query.email) {
        tracing::warn!(
            requested = %mask_email(&query.email),
            "Wishlist read for another user's email"
        );
        return Err(e.into());
    }

    let entries = state.wishlist.find_by_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// DELETE /remove-wishlist?id=
pub async fn remove_wishlist(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> AppResult<HttpResponse> {
    let id = parse_document_id(&query.id)?;
    let deleted = state.wishlist.delete(id).await?;
    tracing::info!(entry_id = %id, deleted, "Wishlist entry removed");

    Ok(HttpResponse::Ok().json(DeleteOneResponse {
        acknowledged: true,
        deleted_count: deleted,
    }))
}
