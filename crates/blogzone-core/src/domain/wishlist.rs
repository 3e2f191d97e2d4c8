use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// Wishlist entry - a blog reference saved by a user.
///
/// The blog reference is whatever object the client sent alongside the
/// owner's email; it is stored unvalidated and serialized back flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub wishlist_email: String,
    #[serde(flatten)]
    pub blog: Map<String, Value>,
}

impl WishlistEntry {
    pub fn new(wishlist_email: String, blog: Map<String, Value>) -> Result<Self, DomainError> {
        if !wishlist_email.contains('@') {
            return Err(DomainError::Validation(
                "wishlist_email must be an email address".to_string(),
            ));
        }

        Ok(Self {
            id: super::new_document_id(),
            wishlist_email,
            blog: super::strip_reserved(blog, &[super::DOCUMENT_ID_KEY, "wishlist_email"]),
        })
    }
}
