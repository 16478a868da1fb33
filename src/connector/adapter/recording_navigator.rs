use std::sync::Mutex;

use tracing::info;

use crate::application::Navigator;

/// Navigator for non-browser hosts: logs each request and keeps the history.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigate to {}", path);
        if let Ok(mut history) = self.history.lock() {
            history.push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate("/a");
        navigator.navigate("/b");

        assert_eq!(navigator.history(), vec!["/a", "/b"]);
        assert_eq!(navigator.last().as_deref(), Some("/b"));
    }
}
