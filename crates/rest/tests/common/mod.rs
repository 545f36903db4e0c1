//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over an in-memory SQLite store
//! - [`fixtures`] - Resource, roadmap and saved item payloads
//! - [`failing_store`] - A store double whose every call fails

#![allow(dead_code)]

pub mod failing_store;
pub mod fixtures;
pub mod harness;
