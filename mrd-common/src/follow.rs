use thiserror::Error;

/// Whether the user currently follows an artist, as shown on the follow icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    Following,
    NotFollowing,
}

impl FollowState {
    pub fn from_followed(followed: bool) -> Self {
        if followed {
            FollowState::Following
        } else {
            FollowState::NotFollowing
        }
    }

    pub fn is_following(&self) -> bool {
        matches!(self, FollowState::Following)
    }
}

/// Request a click on the follow icon translates into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    /// State the icon ends up in once the request succeeds.
    pub fn target_state(&self) -> FollowState {
        match self {
            FollowAction::Follow => FollowState::Following,
            FollowAction::Unfollow => FollowState::NotFollowing,
        }
    }
}

/// Returned when a toggle is attempted while the previous request for the
/// same artist is still in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a follow request for this artist is already in flight")]
pub struct ToggleBusy;

/// Follow/unfollow state machine for a single artist.
///
/// The state is owned here and pushed to the icon, never read back from it.
/// At most one request is in flight at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowToggle {
    state: FollowState,
    in_flight: Option<FollowAction>,
}

impl FollowToggle {
    pub fn new(state: FollowState) -> Self {
        Self {
            state,
            in_flight: None,
        }
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a toggle. Returns the request to issue.
    pub fn begin(&mut self) -> Result<FollowAction, ToggleBusy> {
        if self.in_flight.is_some() {
            return Err(ToggleBusy);
        }
        let action = match self.state {
            FollowState::Following => FollowAction::Unfollow,
            FollowState::NotFollowing => FollowAction::Follow,
        };
        self.in_flight = Some(action);
        Ok(action)
    }

    /// Settle the in-flight request. A failed request leaves the state as it was.
    pub fn finish(&mut self, succeeded: bool) {
        if let Some(action) = self.in_flight.take() {
            if succeeded {
                self.state = action.target_state();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_then_unfollow() {
        let mut toggle = FollowToggle::new(FollowState::NotFollowing);
        assert_eq!(toggle.begin(), Ok(FollowAction::Follow));
        toggle.finish(true);
        assert_eq!(toggle.state(), FollowState::Following);

        assert_eq!(toggle.begin(), Ok(FollowAction::Unfollow));
        toggle.finish(true);
        assert_eq!(toggle.state(), FollowState::NotFollowing);
    }

    #[test]
    fn test_second_click_while_in_flight_is_rejected() {
        let mut toggle = FollowToggle::new(FollowState::Following);
        assert_eq!(toggle.begin(), Ok(FollowAction::Unfollow));
        assert!(toggle.is_busy());
        assert_eq!(toggle.begin(), Err(ToggleBusy));
        // State is untouched until the request settles
        assert_eq!(toggle.state(), FollowState::Following);

        toggle.finish(true);
        assert!(!toggle.is_busy());
        assert_eq!(toggle.state(), FollowState::NotFollowing);
    }

    #[test]
    fn test_failed_request_keeps_state() {
        let mut toggle = FollowToggle::new(FollowState::NotFollowing);
        toggle.begin().unwrap();
        toggle.finish(false);
        assert_eq!(toggle.state(), FollowState::NotFollowing);
        assert!(!toggle.is_busy());
        assert_eq!(toggle.begin(), Ok(FollowAction::Follow));
    }

    #[test]
    fn test_finish_without_begin_is_noop() {
        let mut toggle = FollowToggle::new(FollowState::Following);
        toggle.finish(true);
        assert_eq!(toggle.state(), FollowState::Following);
    }
}
