mod follow;
mod list_item;
mod namespace;
mod paginated;
mod preferences;
mod presentation;
mod query;

pub use follow::*;
pub use list_item::*;
pub use namespace::*;
pub use paginated::*;
pub use preferences::*;
pub use presentation::*;
pub use query::*;
