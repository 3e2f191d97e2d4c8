//! SeaORM entities, one per collection.

pub mod blog;
pub mod comment;
pub mod wishlist;

use serde_json::{Map, Value};

/// Read a JSONB column back as an object.
///
/// Rows are always written from objects; anything else found in the column
/// is kept under a `value` key rather than dropped.
pub(crate) fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}
