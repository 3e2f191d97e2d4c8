use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// Comment on a blog post.
///
/// `blog_id` is serialized as `id` and kept as plain text: it is matched
/// verbatim and never parsed as a post identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "id")]
    pub blog_id: String,
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl Comment {
    pub fn new(blog_id: String, content: Map<String, Value>) -> Result<Self, DomainError> {
        if blog_id.trim().is_empty() {
            return Err(DomainError::Validation("id must reference a post".to_string()));
        }

        Ok(Self {
            id: super::new_document_id(),
            blog_id,
            content: super::strip_reserved(content, &[super::DOCUMENT_ID_KEY, "id"]),
        })
    }
}
