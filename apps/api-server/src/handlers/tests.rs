use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use blogzone_core::ports::TokenService;
use blogzone_infra::{JwtConfig, JwtTokenService};

use crate::config::DEFAULT_CORS_ORIGINS;
use crate::state::AppState;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "handler-test-secret".to_string(),
        expiration_secs: 3600,
        issuer: "blog-zone-test".to_string(),
    }
}

fn test_state() -> AppState {
    AppState::in_memory(Arc::new(JwtTokenService::new(jwt_config())))
}

/// Build the full route table over in-memory state.
macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(super::configure_routes),
        )
        .await
    };
}

/// Create a post through the API and return its id.
macro_rules! create_blog {
    ($app:expr, $title:expr) => {{
        let req = test::TestRequest::post()
            .uri("/add-blog")
            .set_json(blog_body($title))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        assert_eq!(body["acknowledged"], true);
        body["insertedId"].as_str().unwrap().to_string()
    }};
}

fn session_for(email: &str) -> Cookie<'static> {
    let claims = json!({ "email": email }).as_object().cloned().unwrap();
    let token = JwtTokenService::new(jwt_config())
        .issue_token(claims)
        .unwrap();
    Cookie::new("token", token)
}

fn blog_body(title: &str) -> Value {
    json!({
        "title": title,
        "image_url": "u",
        "short_description": "s",
        "long_description": "l",
        "category": "c"
    })
}

#[actix_rt::test]
async fn test_root_liveness() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, web::Bytes::from_static(b"Blog zone is running"));
}

#[actix_rt::test]
async fn test_create_then_get_returns_submitted_fields() {
    let app = test_app!();
    let id = create_blog!(&app, "A");

    let req = test::TestRequest::get()
        .uri(&format!("/blog/{id}"))
        .cookie(session_for("reader@example.com"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;

    let mut expected = blog_body("A");
    expected["_id"] = json!(id);
    assert_eq!(post, expected);
}

#[actix_rt::test]
async fn test_get_unknown_blog_is_null() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri(&format!("/blog/{}", uuid::Uuid::now_v7()))
        .cookie(session_for("reader@example.com"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(post, Value::Null);
}

#[actix_rt::test]
async fn test_malformed_id_is_bad_request() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/blog/not-an-id")
        .cookie(session_for("reader@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_missing_fields_are_bad_request() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/add-blog")
        .set_json(json!({ "title": "only a title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
}

#[actix_rt::test]
async fn test_recent_blogs_newest_first_at_most_six() {
    let app = test_app!();
    for i in 0..8 {
        create_blog!(&app, &format!("post {i}"));
    }

    let req = test::TestRequest::get().uri("/recent-blogs").to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let titles: Vec<_> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["post 7", "post 6", "post 5", "post 4", "post 3", "post 2"]
    );

    let req = test::TestRequest::get().uri("/all-blogs").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 8);
    assert_eq!(all[0]["title"], "post 0");
}

#[actix_rt::test]
async fn test_update_replaces_all_fields() {
    let app = test_app!();
    let id = create_blog!(&app, "Before");

    let new_body = json!({
        "title": "After",
        "image_url": "u2",
        "short_description": "s2",
        "long_description": "l2",
        "category": "c2"
    });
    let req = test::TestRequest::patch()
        .uri(&format!("/update?id={id}"))
        .set_json(&new_body)
        .to_request();
    let ack: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/blog/{id}"))
        .cookie(session_for("reader@example.com"))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;

    let mut expected = new_body;
    expected["_id"] = json!(id);
    assert_eq!(post, expected);
}

#[actix_rt::test]
async fn test_search_by_title_is_case_insensitive() {
    let app = test_app!();
    create_blog!(&app, "Learning Rust");
    create_blog!(&app, "Gardening");
    create_blog!(&app, "Rusty Tools");

    let req = test::TestRequest::get()
        .uri("/search-blogs?title=RUST")
        .to_request();
    let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let titles: Vec<_> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Learning Rust", "Rusty Tools"]);
}

#[actix_rt::test]
async fn test_gated_route_without_cookie_is_unauthorized() {
    let app = test_app!();
    let id = create_blog!(&app, "A");

    let req = test::TestRequest::get()
        .uri(&format!("/blog/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "unauthorized access");
}

#[actix_rt::test]
async fn test_gated_route_rejects_tampered_and_expired_tokens() {
    let app = test_app!();

    let forged = JwtTokenService::new(JwtConfig {
        secret: "someone-elses-secret".to_string(),
        ..jwt_config()
    })
    .issue_token(json!({"email": "a@b.c"}).as_object().cloned().unwrap())
    .unwrap();
    let expired = JwtTokenService::new(JwtConfig {
        expiration_secs: -7200,
        ..jwt_config()
    })
    .issue_token(json!({"email": "a@b.c"}).as_object().cloned().unwrap())
    .unwrap();

    for token in [forged, expired] {
        let req = test::TestRequest::get()
            .uri("/wishlist?email=a@b.c")
            .cookie(Cookie::new("token", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_rt::test]
async fn test_wishlist_for_other_email_is_forbidden() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/wishlist?email=victim@example.com")
        .cookie(session_for("reader@example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "forbidden access");
}

#[actix_rt::test]
async fn test_remove_wishlist_then_list() {
    let app = test_app!();
    let owner = "reader@example.com";

    let mut ids = Vec::new();
    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/add-wishlist")
            .set_json(json!({ "wishlist_email": owner, "title": title }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(ack["insertedId"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/remove-wishlist?id={}", ids[0]))
        .to_request();
    let ack: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ack["deletedCount"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/wishlist?email={owner}"))
        .cookie(session_for(owner))
        .to_request();
    let entries: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["_id"], ids[1].as_str());
    assert_eq!(entries[0]["title"], "Second");
    assert_eq!(entries[0]["wishlist_email"], owner);
}

#[actix_rt::test]
async fn test_comments_are_listed_by_post_reference() {
    let app = test_app!();

    for (post, text) in [("post-1", "first!"), ("post-2", "other"), ("post-1", "second")] {
        let req = test::TestRequest::post()
            .uri("/add-comment")
            .set_json(json!({ "id": post, "comment": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/comments?id=post-1")
        .to_request();
    let comments: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let texts: Vec<_> = comments
        .iter()
        .map(|c| c["comment"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first!", "second"]);
    assert!(comments.iter().all(|c| c["id"] == "post-1"));
}

#[actix_rt::test]
async fn test_jwt_sets_cookie_and_logout_clears_it() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({ "email": "reader@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
        .unwrap();
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));

    // The issued cookie opens the gated wishlist read.
    let req = test::TestRequest::get()
        .uri("/wishlist?email=reader@example.com")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .unwrap();
    assert_eq!(cleared.value(), "");
}

#[actix_rt::test]
async fn test_jwt_rejects_non_object_claims() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!(["not", "an", "object"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

fn preflight(origin: &str) -> test::TestRequest {
    test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/all-blogs")
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
}

#[actix_rt::test]
async fn test_cors_allows_configured_origins_with_credentials() {
    let origins: Vec<String> = DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect();
    let app = test::init_service(
        App::new()
            .wrap(crate::cors_policy(&origins))
            .app_data(web::Data::new(test_state()))
            .configure(super::configure_routes),
    )
    .await;

    for origin in DEFAULT_CORS_ORIGINS {
        let resp = test::call_service(&app, preflight(origin).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            origin
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    let status = match test::try_call_service(&app, preflight("https://evil.example").to_request())
        .await
    {
        Ok(resp) => {
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
            assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
            resp.status()
        }
        Err(err) => err.as_response_error().status_code(),
    };
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
