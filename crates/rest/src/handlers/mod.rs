//! HTTP request handlers.
//!
//! - [`resources`] - Recommendations, resource lookup and search
//! - [`roadmaps`] - Create and partially update roadmaps
//! - [`saved`] - Save a resource for a user
//! - [`info`] - Greetings, model names and the 404 fallback
//! - [`health`] - Health, liveness and readiness probes

pub mod health;
pub mod info;
pub mod resources;
pub mod roadmaps;
pub mod saved;

// Re-export handlers for convenience
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use info::{hello_handler, not_found_handler, root_handler, schema_handler};
pub use resources::{recommendations_handler, resource_handler, search_handler};
pub use roadmaps::{create_roadmap_handler, update_roadmap_handler};
pub use saved::save_item_handler;
