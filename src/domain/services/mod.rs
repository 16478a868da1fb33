//! Pure services shaping API data for display.

mod item_enricher;
mod namespace_preparer;
mod relative_time;
mod response_normalizer;

pub use item_enricher::*;
pub use namespace_preparer::*;
pub use relative_time::*;
pub use response_normalizer::*;
