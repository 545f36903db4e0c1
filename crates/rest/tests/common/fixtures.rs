//! Test data fixtures.

use serde_json::{Value, json};

/// A learning resource payload builder.
#[derive(Debug, Clone)]
pub struct ResourceFixture {
    title: String,
    category: String,
    level: String,
    views: Option<i64>,
    tags: Vec<String>,
    external_id: Option<String>,
}

impl ResourceFixture {
    /// A Beginner "Programming" article with no views.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            views: None,
            tags: Vec::new(),
            external_id: None,
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = Some(views);
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn external_id(mut self, id: &str) -> Self {
        self.external_id = Some(id.to_string());
        self
    }

    /// Builds the payload.
    pub fn build(&self) -> Value {
        let mut metadata = json!({});
        if let Some(views) = self.views {
            metadata["views"] = json!(views);
        }
        let mut value = json!({
            "title": self.title,
            "provider": "YouTube",
            "type": "video",
            "category": self.category,
            "level": self.level,
            "link": "https://www.youtube.com/watch?v=abc",
            "tags": self.tags,
            "metadata": metadata,
        });
        if let Some(id) = &self.external_id {
            value["id"] = json!(id);
        }
        value
    }
}

/// Five programming resources with views 10 to 50, least viewed first.
pub fn five_programming_resources() -> Vec<Value> {
    (1..=5)
        .map(|i| {
            ResourceFixture::new(format!("Resource {}", i))
                .views(i * 10)
                .build()
        })
        .collect()
}

/// A valid roadmap create payload.
pub fn roadmap_payload() -> Value {
    json!({
        "userId": "user-1",
        "title": "Backend in Rust",
        "items": [
            {"resourceId": "r1"},
            {"resourceId": "r2", "done": true, "note": "finished"}
        ],
        "progress": 10
    })
}

/// A saved item payload.
pub fn saved_item(user_id: &str, resource_id: &str) -> Value {
    json!({
        "userId": user_id,
        "resourceId": resource_id,
        "createdAt": "2024-05-01T12:00:00Z"
    })
}
