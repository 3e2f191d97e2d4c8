use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// The five client-editable fields of a blog post.
///
/// Creation stores them as given; an update replaces all five at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFields {
    pub title: String,
    pub image_url: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
}

impl BlogFields {
    /// Reject a post without a title.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }

    /// Case-insensitive substring match against the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Blog post document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: BlogFields,
}

impl BlogPost {
    /// Create a new post with a freshly generated identifier.
    pub fn new(fields: BlogFields) -> Self {
        Self {
            id: super::new_document_id(),
            fields,
        }
    }
}
