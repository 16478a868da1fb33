use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::application::PreferencesService;
use crate::domain::{DomainError, FollowState, FollowStatus, UserPreferences};

#[derive(Debug, Default)]
struct FollowSession {
    preferences: Option<UserPreferences>,
    state: FollowState,
}

/// Follow/unfollow of one namespace, edited optimistically and persisted
/// through the preferences service.
///
/// At most one save is in flight; a toggle issued while one is pending is
/// rejected with [`DomainError::Busy`]. A failed save restores the
/// preferences and state from before the toggle.
pub struct FollowNamespaceUseCase {
    namespace_id: i64,
    preferences_service: Arc<dyn PreferencesService>,
    session: Mutex<FollowSession>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl FollowNamespaceUseCase {
    pub fn new(namespace_id: i64, preferences_service: Arc<dyn PreferencesService>) -> Self {
        Self {
            namespace_id,
            preferences_service,
            session: Mutex::new(FollowSession::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Installs freshly fetched preferences and derives the follow state from them.
    pub fn load(&self, preferences: UserPreferences) -> FollowState {
        let mut session = self.session();
        session.state = FollowState::from_following(preferences.is_following(self.namespace_id));
        session.preferences = Some(preferences);
        session.state
    }

    pub fn status(&self) -> FollowStatus {
        let session = self.session();
        FollowStatus::new(session.preferences.is_some(), session.state)
    }

    pub fn preferences(&self) -> Option<UserPreferences> {
        self.session().preferences.clone()
    }

    pub async fn toggle(&self) -> Result<FollowState, DomainError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(DomainError::busy(format!(
                "follow update for namespace {} is still pending",
                self.namespace_id
            )));
        }
        let _guard = InFlightGuard(&self.in_flight);

        let (edited, previous) = {
            let mut session = self.session();
            let current = session.preferences.clone().ok_or_else(|| {
                DomainError::unauthenticated("preferences are not loaded; sign in to follow")
            })?;
            let previous = (current.clone(), session.state);

            let mut edited = current;
            if session.state.is_following() {
                edited.unfollow(self.namespace_id);
            } else {
                edited.follow(self.namespace_id);
            }

            session.preferences = Some(edited.clone());
            session.state = FollowState::InProgress;
            (edited, previous)
        };

        match self.preferences_service.save(&edited).await {
            Ok(saved) => {
                let state = self.load(saved);
                info!("Namespace {} follow state is now {:?}", self.namespace_id, state);
                Ok(state)
            }
            Err(e) => {
                warn!(
                    "Saving preferences failed for namespace {}: {}; restoring previous state",
                    self.namespace_id, e
                );
                let mut session = self.session();
                session.preferences = Some(previous.0);
                session.state = previous.1;
                Err(e)
            }
        }
    }

    fn session(&self) -> MutexGuard<'_, FollowSession> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
