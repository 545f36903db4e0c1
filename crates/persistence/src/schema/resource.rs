//! Learning resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use super::{Validate, check_http_url};
use crate::error::ValidationResult;

/// Where a resource is hosted. Literals are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// A YouTube video or playlist.
    YouTube,
    /// An online course.
    Course,
    /// A downloadable document.
    #[serde(rename = "PDF")]
    Pdf,
    /// A source repository.
    Repo,
    /// A written article.
    Article,
    /// Anything else.
    Other,
}

/// Media type of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ResourceKind {
    Video,
    Course,
    Pdf,
    Repo,
    Article,
    Other,
}

/// Difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// A learning resource.
///
/// Resources are imported from seed data and are read-only to the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Identifier assigned by the source the resource was imported from.
    /// Lookups by id match either this field or the store `_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Hosting provider.
    pub provider: Provider,
    /// Media type, stored as `type`.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Subject area, matched case-insensitively by the filters.
    pub category: String,
    /// Difficulty level.
    pub level: Level,
    /// Where the resource lives.
    pub link: Url,
    /// Preview image.
    #[serde(default)]
    pub thumbnail: Option<Url>,
    /// Free-form duration ("12m", "3h").
    #[serde(default)]
    pub duration: Option<String>,
    /// Ordered tags, searched by free text.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Open map of counters and other annotations (`views`, ...).
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for Resource {
    const ENTITY: &'static str = "Resource";

    fn validate(&self) -> ValidationResult<()> {
        check_http_url("link", &self.link)?;
        if let Some(thumbnail) = &self.thumbnail {
            check_http_url("thumbnail", thumbnail)?;
        }
        Ok(())
    }
}
