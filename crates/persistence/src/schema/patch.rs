//! Partial roadmap updates.

use serde_json::Value;

use super::roadmap::RoadmapItem;
use super::check_progress;
use crate::core::RawDocument;
use crate::error::{ValidationError, ValidationResult};
use crate::types::{ID_FIELD, PUBLIC_ID_FIELD};

/// A validated top-level field map for a roadmap update.
///
/// Each key replaces the stored value whole. Known roadmap fields are
/// checked against their type; other keys pass through unchecked.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPatch {
    fields: RawDocument,
}

impl RoadmapPatch {
    /// Validates the touched fields of `fields`.
    pub fn parse(fields: RawDocument) -> ValidationResult<Self> {
        if fields.is_empty() {
            return Err(ValidationError::InvalidDocument {
                entity: "RoadmapPatch".to_string(),
                message: "patch must set at least one field".to_string(),
            });
        }

        for (key, value) in &fields {
            check_key(key)?;
            check_value(key, value)?;
        }

        Ok(Self { fields })
    }

    /// Returns the validated fields.
    pub fn fields(&self) -> &RawDocument {
        &self.fields
    }

    /// Consumes the patch, returning the fields.
    pub fn into_fields(self) -> RawDocument {
        self.fields
    }
}

fn check_key(key: &str) -> ValidationResult<()> {
    if key == ID_FIELD || key == PUBLIC_ID_FIELD {
        return Err(ValidationError::field(key, "identifier cannot be changed"));
    }
    if key.is_empty() || key.starts_with('$') || key.contains('.') {
        return Err(ValidationError::field(
            key,
            "field names must be non-empty and must not start with '$' or contain '.'",
        ));
    }
    Ok(())
}

fn check_value(key: &str, value: &Value) -> ValidationResult<()> {
    match key {
        "userId" | "title" => {
            if !value.is_string() {
                return Err(ValidationError::field(key, "must be a string"));
            }
        }
        "items" => {
            serde_json::from_value::<Vec<RoadmapItem>>(value.clone())
                .map_err(|e| ValidationError::field(key, e.to_string()))?;
        }
        "progress" => match value {
            Value::Null => {}
            Value::Number(n) => {
                let progress = n
                    .as_f64()
                    .ok_or_else(|| ValidationError::field(key, "must be a number"))?;
                check_progress(progress)?;
            }
            _ => return Err(ValidationError::field(key, "must be a number or null")),
        },
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> RawDocument {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_valid_patch() {
        let patch = RoadmapPatch::parse(fields(json!({
            "progress": 40,
            "title": "Rust, again",
            "items": [{"resourceId": "r1", "done": true}]
        })))
        .unwrap();
        assert_eq!(patch.fields().len(), 3);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let patch = RoadmapPatch::parse(fields(json!({"color": "teal"}))).unwrap();
        assert_eq!(patch.into_fields().get("color"), Some(&json!("teal")));
    }

    #[test]
    fn test_empty_patch_rejected() {
        assert!(RoadmapPatch::parse(RawDocument::new()).is_err());
    }

    #[test]
    fn test_identifier_rejected() {
        assert!(RoadmapPatch::parse(fields(json!({"_id": "x"}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"id": "x"}))).is_err());
    }

    #[test]
    fn test_operator_and_dotted_keys_rejected() {
        assert!(RoadmapPatch::parse(fields(json!({"$set": {"a": 1}}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"items.0.done": true}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"": 1}))).is_err());
    }

    #[test]
    fn test_touched_fields_type_checked() {
        assert!(RoadmapPatch::parse(fields(json!({"progress": 101}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"progress": "half"}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"progress": null}))).is_ok());
        assert!(RoadmapPatch::parse(fields(json!({"title": 3}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"userId": null}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"items": "r1"}))).is_err());
        assert!(RoadmapPatch::parse(fields(json!({"items": [{"done": true}]}))).is_err());
    }
}
