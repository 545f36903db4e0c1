//! Converting stored documents into their public shape.

use serde_json::Value;

use crate::core::RawDocument;

/// Store-internal identifier field.
pub const ID_FIELD: &str = "_id";

/// Identifier field exposed to clients.
pub const PUBLIC_ID_FIELD: &str = "id";

/// Replaces the store-internal `_id` with a public string `id`.
///
/// All other fields pass through unchanged. A document without `_id` is
/// returned as is.
pub fn to_public(mut document: RawDocument) -> RawDocument {
    if let Some(id) = document.remove(ID_FIELD) {
        document.insert(PUBLIC_ID_FIELD.to_string(), Value::String(stringify_id(&id)));
    }
    document
}

/// Renders a stored identifier as a string.
///
/// Strings pass through, extended-JSON ObjectIds (`{"$oid": "..."}`) become
/// their hex form, and anything else becomes its JSON text.
pub fn stringify_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Object(map) if map.len() == 1 => match map.get("$oid") {
            Some(Value::String(hex)) => hex.clone(),
            _ => id.to_string(),
        },
        other => other.to_string(),
    }
}
