//! # Application Layer
//!
//! Service ports and the use cases orchestrating the author page.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
