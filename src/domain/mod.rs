//! # Domain Layer
//!
//! Models, query state and the pure display-shaping services of the author page.
//! This layer is independent of HTTP clients and of the rendering boundary.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
