use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-user preferences. Only the followed-namespace list is interpreted here;
/// every other field is carried through a save unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub namespaces_followed: Vec<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserPreferences {
    pub fn following(namespaces: Vec<i64>) -> Self {
        Self {
            namespaces_followed: namespaces,
            extra: Map::new(),
        }
    }

    pub fn is_following(&self, namespace_id: i64) -> bool {
        self.namespaces_followed.contains(&namespace_id)
    }

    /// Removes the first occurrence of `namespace_id`. Returns whether one was found.
    pub fn unfollow(&mut self, namespace_id: i64) -> bool {
        match self
            .namespaces_followed
            .iter()
            .position(|id| *id == namespace_id)
        {
            Some(index) => {
                self.namespaces_followed.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn follow(&mut self, namespace_id: i64) {
        self.namespaces_followed.push(namespace_id);
    }
}

/// Response of the `me` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}
