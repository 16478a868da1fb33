mod auth_service;
mod listing_service;
mod namespace_service;
mod navigator;
mod preferences_service;

pub use auth_service::*;
pub use listing_service::*;
pub use namespace_service::*;
pub use navigator::*;
pub use preferences_service::*;
