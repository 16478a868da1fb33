mod author_page;
mod follow_namespace;
mod resolve_author_route;

pub use author_page::*;
pub use follow_namespace::*;
pub use resolve_author_route::*;
