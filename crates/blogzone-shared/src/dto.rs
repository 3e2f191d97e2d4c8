//! Data Transfer Objects - request/response types for the API.
//!
//! Acknowledgment bodies use camelCase keys (`insertedId`, `deletedCount`)
//! so clients written against a document database keep working.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Body of `POST /add-blog` and `PATCH /update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRequest {
    pub title: String,
    pub image_url: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
}

/// Query of `PATCH /update` and `DELETE /remove-wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// Query of `GET /search-blogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitleQuery {
    #[serde(default)]
    pub title: String,
}

/// Query of `GET /wishlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Body of `POST /add-wishlist`: the owner's email plus the blog reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistRequest {
    pub wishlist_email: String,
    #[serde(flatten)]
    pub blog: Map<String, Value>,
}

/// Body of `POST /add-comment`: the referenced post plus the comment itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub id: String,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

/// Acknowledgment of a single insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

impl InsertOneResponse {
    pub fn new(inserted_id: Uuid) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgment of a single update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOneResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a single delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOneResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// `{"success": true}` returned by the token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acknowledgments_use_camel_case() {
        let id = Uuid::nil();
        let json = serde_json::to_value(InsertOneResponse::new(id)).unwrap();
        assert_eq!(json, json!({"acknowledged": true, "insertedId": id.to_string()}));

        let json = serde_json::to_value(DeleteOneResponse {
            acknowledged: true,
            deleted_count: 1,
        })
        .unwrap();
        assert_eq!(json["deletedCount"], 1);
    }

    #[test]
    fn test_wishlist_request_collects_extra_fields() {
        let req: WishlistRequest = serde_json::from_value(json!({
            "wishlist_email": "a@b.c",
            "title": "A",
            "image_url": "u"
        }))
        .unwrap();

        assert_eq!(req.wishlist_email, "a@b.c");
        assert_eq!(req.blog.len(), 2);
        assert!(!req.blog.contains_key("wishlist_email"));
    }
}
