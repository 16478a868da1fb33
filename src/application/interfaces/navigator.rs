/// Receives navigation requests emitted by the page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

pub const NOT_FOUND_PATH: &str = "/not-found";
