mod galaxy_api_client;
mod in_memory_galaxy;
mod recording_navigator;

pub use galaxy_api_client::*;
pub use in_memory_galaxy::*;
pub use recording_navigator::*;
