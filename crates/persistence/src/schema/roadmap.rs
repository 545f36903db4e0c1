//! User roadmaps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Validate, check_progress};
use crate::error::ValidationResult;

/// One step of a roadmap.
///
/// Fields other than `resourceId` and `done` are kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    /// The resource this step points at.
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    /// Whether the user completed this step.
    #[serde(default)]
    pub done: bool,
    /// Any other per-step annotations.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RoadmapItem {
    /// Creates an unfinished step for `resource_id`.
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            done: false,
            extra: Map::new(),
        }
    }
}

fn default_progress() -> Option<f64> {
    Some(0.0)
}

/// An ordered learning plan owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Owning user. Not checked against the user collection.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Display title.
    pub title: String,
    /// Ordered steps.
    pub items: Vec<RoadmapItem>,
    /// Completion percentage in `[0, 100]`; an explicit null is kept.
    #[serde(default = "default_progress")]
    pub progress: Option<f64>,
}

impl Validate for Roadmap {
    const ENTITY: &'static str = "Roadmap";

    fn validate(&self) -> ValidationResult<()> {
        if let Some(progress) = self.progress {
            check_progress(progress)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::schema::decode;
    use serde_json::json;

    #[test]
    fn test_decode_roadmap_defaults() {
        let roadmap: Roadmap = decode(json!({
            "userId": "u1",
            "title": "Learn Rust",
            "items": [{"resourceId": "r1"}]
        }))
        .unwrap();

        assert_eq!(roadmap.progress, Some(0.0));
        assert_eq!(roadmap.items, vec![RoadmapItem::new("r1")]);
    }

    #[test]
    fn test_item_extra_fields_kept() {
        let roadmap: Roadmap = decode(json!({
            "userId": "u1",
            "title": "Learn Rust",
            "items": [{"resourceId": "r1", "done": true, "note": "ch. 4", "order": 2}]
        }))
        .unwrap();

        let item = &roadmap.items[0];
        assert!(item.done);
        assert_eq!(item.extra.get("note"), Some(&json!("ch. 4")));

        let json = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(json["items"][0]["order"], 2);
        assert_eq!(json["items"][0]["resourceId"], "r1");
    }

    #[test]
    fn test_progress_bounds() {
        let err = decode::<Roadmap>(json!({
            "userId": "u1",
            "title": "t",
            "items": [],
            "progress": 120
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { ref field, .. } if field == "progress"));

        let roadmap: Roadmap = decode(json!({
            "userId": "u1",
            "title": "t",
            "items": [],
            "progress": null
        }))
        .unwrap();
        assert_eq!(roadmap.progress, None);
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(decode::<Roadmap>(json!({"title": "t", "items": []})).is_err());
        assert!(decode::<Roadmap>(json!({"userId": "u1", "title": "t"})).is_err());
        assert!(decode::<Roadmap>(json!({"userId": "u1", "title": "t", "items": [{"done": true}]})).is_err());
    }
}
