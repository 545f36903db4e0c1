//! Test fixtures for persistence layer testing.
//!
//! Builders for learning resources with just the fields a test cares about.

use serde_json::{Value, json};

/// A learning resource fixture.
#[derive(Debug, Clone)]
pub struct ResourceFixture {
    /// Resource title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Level literal.
    pub level: String,
    /// Popularity counter, omitted when `None`.
    pub views: Option<i64>,
    /// Tags.
    pub tags: Vec<String>,
    /// Externally assigned id.
    pub external_id: Option<String>,
}

impl ResourceFixture {
    /// Creates a Beginner "Programming" resource with no views.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            views: None,
            tags: vec![],
            external_id: None,
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets `metadata.views`.
    pub fn with_views(mut self, views: i64) -> Self {
        self.views = Some(views);
        self
    }

    /// Sets the tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets an externally assigned `id`.
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    /// Builds the resource payload.
    pub fn build(&self) -> Value {
        let mut metadata = json!({});
        if let Some(views) = self.views {
            metadata["views"] = json!(views);
        }
        let mut value = json!({
            "title": self.title,
            "provider": "Article",
            "type": "article",
            "category": self.category,
            "level": self.level,
            "link": "https://example.com/resource",
            "tags": self.tags,
            "metadata": metadata,
        });
        if let Some(id) = &self.external_id {
            value["id"] = json!(id);
        }
        value
    }
}

/// Five programming resources with distinct view counts, inserted
/// least-viewed first.
pub fn five_programming_resources() -> Vec<ResourceFixture> {
    (1..=5)
        .map(|i| ResourceFixture::new(format!("Resource {}", i)).with_views(i * 10))
        .collect()
}
