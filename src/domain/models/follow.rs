use serde::{Deserialize, Serialize};

/// Follow button state for the current namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FollowState {
    Following,
    #[default]
    NotFollowing,
    /// A save is pending; the outcome is not known yet.
    InProgress,
}

impl FollowState {
    pub fn from_following(following: bool) -> Self {
        if following {
            FollowState::Following
        } else {
            FollowState::NotFollowing
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            FollowState::Following => "fa fa-user-times",
            FollowState::NotFollowing => "fa fa-user-plus",
            FollowState::InProgress => "fa fa-spin fa-spinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FollowState::Following => "Unfollow",
            FollowState::NotFollowing => "Follow",
            FollowState::InProgress => "Saving...",
        }
    }

    pub fn is_following(&self) -> bool {
        matches!(self, FollowState::Following)
    }
}

/// Follow status as rendered on the page. `available` is false for
/// anonymous visitors and until preferences have been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowStatus {
    pub available: bool,
    pub state: FollowState,
    pub icon_class: &'static str,
    pub label: &'static str,
}

impl FollowStatus {
    pub fn new(available: bool, state: FollowState) -> Self {
        Self {
            available,
            state,
            icon_class: state.icon_class(),
            label: state.label(),
        }
    }
}

impl Default for FollowStatus {
    fn default() -> Self {
        Self::new(false, FollowState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_per_state() {
        assert_eq!(FollowState::Following.icon_class(), "fa fa-user-times");
        assert_eq!(FollowState::NotFollowing.icon_class(), "fa fa-user-plus");
        assert_eq!(FollowState::InProgress.icon_class(), "fa fa-spin fa-spinner");
    }

    #[test]
    fn test_status_carries_button_class() {
        let status = FollowStatus::new(true, FollowState::InProgress);
        assert_eq!(status.icon_class, "fa fa-spin fa-spinner");
        assert_eq!(status.label, "Saving...");

        let anonymous = FollowStatus::default();
        assert!(!anonymous.available);
        assert_eq!(anonymous.icon_class, "fa fa-user-plus");
    }

    #[test]
    fn test_status_serializes_class_for_rendering() {
        let json = serde_json::to_value(FollowStatus::new(true, FollowState::Following)).unwrap();
        assert_eq!(json["state"], "following");
        assert_eq!(json["icon_class"], "fa fa-user-times");
        assert_eq!(json["label"], "Unfollow");
    }
}
