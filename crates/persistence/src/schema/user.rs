//! Registered users.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use super::{Validate, check_http_url};
use crate::error::{ValidationError, ValidationResult};

fn default_true() -> bool {
    true
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Contact address; must contain `@`.
    pub email: String,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image.
    #[serde(rename = "avatarUrl", alias = "avatar_url", default)]
    pub avatar_url: Option<Url>,
    /// Preference signals such as favourite categories or levels.
    #[serde(default)]
    pub preferences: Map<String, Value>,
    /// Earned certificates.
    #[serde(default)]
    pub certificates: Vec<Map<String, Value>>,
    /// Whether the account is active.
    #[serde(rename = "isActive", alias = "is_active", default = "default_true")]
    pub is_active: bool,
}

impl Validate for User {
    const ENTITY: &'static str = "User";

    fn validate(&self) -> ValidationResult<()> {
        if !self.email.contains('@') {
            return Err(ValidationError::field("email", "must contain '@'"));
        }
        if let Some(avatar) = &self.avatar_url {
            check_http_url("avatarUrl", avatar)?;
        }
        Ok(())
    }
}
