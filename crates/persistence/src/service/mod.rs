//! Domain operations over a [`DocumentStore`](crate::core::DocumentStore).
//!
//! Each service holds a shared handle to the store and exposes one group of
//! operations:
//!
//! - [`ResourceCatalog`] - recommendations, lookup, search, import
//! - [`RoadmapService`] - create and partial update
//! - [`SavedItems`] - insert-if-absent bookmarks
//! - [`SeedData`] - bulk import of resources and users at startup

mod catalog;
mod roadmaps;
mod saved;
mod seed;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::core::RawDocument;

pub use catalog::ResourceCatalog;
pub use roadmaps::RoadmapService;
pub use saved::SavedItems;
pub use seed::{SeedData, SeedReport};

/// Field stamped when the service creates a document.
pub const CREATED_AT: &str = "created_at";

/// Field stamped whenever the service writes a document.
pub const UPDATED_AT: &str = "updated_at";

/// Current time as an RFC 3339 UTC string.
///
/// Fixed precision keeps lexicographic order equal to time order.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn stamp_created(document: &mut RawDocument) {
    let now = Value::String(now_timestamp());
    document.insert(CREATED_AT.to_string(), now.clone());
    document.insert(UPDATED_AT.to_string(), now);
}

pub(crate) fn stamp_updated(document: &mut RawDocument) {
    document.insert(UPDATED_AT.to_string(), Value::String(now_timestamp()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_stamp_created_sets_both_fields() {
        let mut doc = RawDocument::new();
        stamp_created(&mut doc);

        let created = doc.get(CREATED_AT).and_then(Value::as_str).unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(doc.get(CREATED_AT), doc.get(UPDATED_AT));
    }

    #[test]
    fn test_stamp_updated_leaves_created() {
        let mut doc = RawDocument::new();
        doc.insert(CREATED_AT.to_string(), Value::String("2020-01-01T00:00:00Z".into()));
        stamp_updated(&mut doc);

        assert_eq!(doc.get(CREATED_AT).unwrap(), "2020-01-01T00:00:00Z");
        assert!(doc.contains_key(UPDATED_AT));
    }

    #[test]
    fn test_timestamps_sort_lexicographically() {
        let a = now_timestamp();
        let b = now_timestamp();
        assert!(a <= b);
        assert!(a.ends_with('Z'));
    }
}
