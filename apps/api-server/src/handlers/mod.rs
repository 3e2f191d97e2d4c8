//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod comments;
mod health;
mod wishlist;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::{json_error, query_error};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        // Liveness
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // Session token
        .route("/jwt", web::post().to(auth::issue_token))
        .route("/logout", web::post().to(auth::logout))
        // Blogs
        .route("/recent-blogs", web::get().to(blogs::recent_blogs))
        .route("/all-blogs", web::get().to(blogs::all_blogs))
        .route("/search-blogs", web::get().to(blogs::search_blogs))
        .route("/blog/{id}", web::get().to(blogs::get_blog))
        .route("/add-blog", web::post().to(blogs::add_blog))
        .route("/update", web::patch().to(blogs::update_blog))
        // Wishlist
        .route("/add-wishlist", web::post().to(wishlist::add_wishlist))
        .route("/wishlist", web::get().to(wishlist::list_wishlist))
        .route("/remove-wishlist", web::delete().to(wishlist::remove_wishlist))
        // Comments
        .route("/add-comment", web::post().to(comments::add_comment))
        .route("/comments", web::get().to(comments::list_comments));
}
