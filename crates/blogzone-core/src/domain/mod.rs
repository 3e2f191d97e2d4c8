//! Domain entities - the documents stored in the three collections.

mod blog;
mod comment;
mod wishlist;

pub use blog::{BlogFields, BlogPost};
pub use comment::Comment;
pub use wishlist::WishlistEntry;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// JSON key under which a document's own identifier is serialized.
pub const DOCUMENT_ID_KEY: &str = "_id";

/// Generate a new document identifier.
///
/// UUIDv7 keys sort by creation time, so descending key order is
/// newest-first insertion order.
pub fn new_document_id() -> Uuid {
    Uuid::now_v7()
}

/// Parse a client-supplied document identifier.
pub fn parse_document_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

/// Strip keys the server owns from an open-ended client object.
fn strip_reserved(mut fields: Map<String, Value>, reserved: &[&str]) -> Map<String, Value> {
    for key in reserved {
        fields.remove(*key);
    }
    fields
}
