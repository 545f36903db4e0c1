//! Collection names used by the service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named document collection.
///
/// Collection names are the lowercased model names, matching the layout the
/// service has always used in the document database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Registered users.
    User,
    /// Learning resources.
    Resource,
    /// User-created roadmaps.
    Roadmap,
    /// Saved/bookmarked resources.
    #[serde(rename = "saveditem")]
    SavedItem,
}

impl Collection {
    /// Every collection, in model declaration order.
    pub const ALL: [Collection; 4] = [
        Collection::User,
        Collection::Resource,
        Collection::Roadmap,
        Collection::SavedItem,
    ];

    /// Returns the collection name in the store.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::Resource => "resource",
            Collection::Roadmap => "roadmap",
            Collection::SavedItem => "saveditem",
        }
    }

    /// Returns the schema model name exposed to clients.
    pub fn model_name(&self) -> &'static str {
        match self {
            Collection::User => "User",
            Collection::Resource => "Resource",
            Collection::Roadmap => "Roadmap",
            Collection::SavedItem => "SavedItem",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
