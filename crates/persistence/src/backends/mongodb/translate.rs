//! Translates filters and sort directives into BSON query documents.
//!
//! User strings never reach MongoDB as patterns: they are escaped with
//! [`regex::escape`] before being embedded in a `$regex`.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, Document, doc};
use serde_json::Value;

use crate::error::StorageResult;
use crate::query::{Filter, SortDirection, SortDirective};
use crate::types::ID_FIELD;

/// Case-insensitive, literal, full-value match.
fn anchored_literal(value: &str) -> Document {
    doc! { "$regex": format!(r"\A{}\z", regex::escape(value)), "$options": "i" }
}

/// Case-insensitive, literal substring match.
fn contains_literal(needle: &str) -> Document {
    doc! { "$regex": regex::escape(needle), "$options": "i" }
}

/// Converts a filter into a MongoDB query document.
pub(crate) fn filter_to_document(filter: &Filter) -> StorageResult<Document> {
    let document = match filter {
        Filter::All => Document::new(),

        Filter::Eq { field, value } if field == ID_FIELD => match value {
            // Stored ids may be ObjectIds or plain strings.
            Value::String(s) => match ObjectId::parse_str(s) {
                Ok(oid) => doc! { ID_FIELD: { "$in": [oid, s.as_str()] } },
                Err(_) => doc! { ID_FIELD: s.as_str() },
            },
            other => doc! { ID_FIELD: bson::to_bson(other)? },
        },

        Filter::Eq { field, value } => doc! { field.as_str(): bson::to_bson(value)? },

        Filter::EqIgnoreCase { field, value } => {
            let mut condition = anchored_literal(value);
            condition.insert("$type", "string");
            doc! { field.as_str(): condition }
        }

        Filter::ContainsIgnoreCase { field, needle } => {
            let mut condition = contains_literal(needle);
            condition.insert("$type", "string");
            doc! { field.as_str(): condition }
        }

        Filter::AnyContainsIgnoreCase { field, needle } => {
            doc! { field.as_str(): { "$elemMatch": contains_literal(needle) } }
        }

        Filter::And(filters) if filters.is_empty() => Document::new(),
        Filter::And(filters) => doc! { "$and": translate_all(filters)? },

        // MongoDB rejects an empty $or.
        Filter::Or(filters) if filters.is_empty() => doc! { "$expr": false },
        Filter::Or(filters) => doc! { "$or": translate_all(filters)? },
    };
    Ok(document)
}

fn translate_all(filters: &[Filter]) -> StorageResult<Vec<Bson>> {
    filters
        .iter()
        .map(|f| filter_to_document(f).map(Bson::Document))
        .collect()
}

/// Converts sort directives into a sort document.
///
/// Ties fall back to `_id`, which follows insertion order for generated
/// ObjectIds.
pub(crate) fn sort_to_document(sort: &[SortDirective]) -> Document {
    let mut document = Document::new();
    for directive in sort {
        let direction = match directive.direction {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        };
        document.insert(directive.field.clone(), direction);
    }
    if !document.contains_key(ID_FIELD) {
        document.insert(ID_FIELD, 1);
    }
    document
}

/// Skip count accepted by the server, which stores it as a signed 64-bit
/// integer. Anything larger is past the end of every collection anyway.
pub(crate) fn skip_count(skip: u64) -> u64 {
    skip.min(i64::MAX as u64)
}

/// Limit as the driver's signed type.
pub(crate) fn limit_count(limit: u64) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
