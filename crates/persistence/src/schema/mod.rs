//! Entity schemas and payload validation.
//!
//! Payloads are decoded with serde into the typed entities below and then
//! checked by [`Validate`] for constraints serde cannot express (URL schemes,
//! numeric ranges, non-empty strings).
//!
//! | Entity | Collection | Written by |
//! |--------|------------|------------|
//! | [`User`] | `user` | seed import |
//! | [`Resource`] | `resource` | seed import |
//! | [`Roadmap`] | `roadmap` | `POST /api/roadmap`, [`RoadmapPatch`] |
//! | [`SavedItem`] | `saveditem` | `POST /api/saved` |

mod patch;
mod resource;
mod roadmap;
mod saved_item;
mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::core::RawDocument;
use crate::error::{BackendError, StorageResult, ValidationError, ValidationResult};

pub use patch::RoadmapPatch;
pub use resource::{Level, Provider, Resource, ResourceKind};
pub use roadmap::{Roadmap, RoadmapItem};
pub use saved_item::SavedItem;
pub use user::User;

/// Names of the models the service exposes, in declaration order.
pub const MODEL_NAMES: [&str; 4] = ["User", "Resource", "Roadmap", "SavedItem"];

/// Constraint checks applied after decoding.
pub trait Validate {
    /// Name used in error messages.
    const ENTITY: &'static str;

    /// Checks constraints the type system does not capture.
    fn validate(&self) -> ValidationResult<()>;
}

/// Decodes and validates an entity from a JSON value.
pub fn decode<T>(value: Value) -> ValidationResult<T>
where
    T: DeserializeOwned + Validate,
{
    let entity: T =
        serde_json::from_value(value).map_err(|e| ValidationError::InvalidDocument {
            entity: T::ENTITY.to_string(),
            message: e.to_string(),
        })?;
    entity.validate()?;
    Ok(entity)
}

/// Serializes an entity into a store document.
pub fn to_document<T: Serialize>(entity: &T) -> StorageResult<RawDocument> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::SerializationError {
            message: format!("expected a JSON object, got {}", other),
        }
        .into()),
    }
}

pub(crate) fn check_http_url(field: &str, url: &Url) -> ValidationResult<()> {
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        "http" | "https" => Err(ValidationError::field(field, "URL must have a host")),
        scheme => Err(ValidationError::field(
            field,
            format!("URL scheme must be http or https, got '{}'", scheme),
        )),
    }
}

pub(crate) fn check_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_progress(progress: f64) -> ValidationResult<()> {
    if !(0.0..=100.0).contains(&progress) {
        return Err(ValidationError::field(
            "progress",
            format!("must be between 0 and 100, got {}", progress),
        ));
    }
    Ok(())
}
