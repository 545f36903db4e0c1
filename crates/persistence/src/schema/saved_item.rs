//! Saved (bookmarked) resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Validate, check_non_empty};
use crate::error::ValidationResult;

/// A resource bookmarked by a user. At most one exists per
/// (`userId`, `resourceId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    /// The saving user.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// The saved resource.
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    /// Client-supplied save time.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Validate for SavedItem {
    const ENTITY: &'static str = "SavedItem";

    fn validate(&self) -> ValidationResult<()> {
        check_non_empty("userId", &self.user_id)?;
        check_non_empty("resourceId", &self.resource_id)?;
        Ok(())
    }
}
