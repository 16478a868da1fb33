//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Galaxy REST API over HTTP
//! - Fixture-backed in-memory Galaxy for offline use and tests
//! - CLI rendering boundary (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
