//! Chat session state and participant rotation

use std::time::{Duration, Instant};

use tracing::debug;

/// Running record of the most recent sender, carried across turns
#[derive(Debug, Clone)]
pub struct SessionState {
    last_user: Option<String>,
    last_time: Instant,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Start a session with no prior sender
    pub fn new() -> Self {
        Self {
            last_user: None,
            last_time: Instant::now(),
        }
    }

    pub fn last_user(&self) -> Option<&str> {
        self.last_user.as_deref()
    }

    pub fn last_time(&self) -> Instant {
        self.last_time
    }

    /// Previous sender whose message is older than `timeout` at `now`
    ///
    /// Only a different sender counts: a participant can't leave themselves on seen.
    pub fn overdue_sender(&self, participant: &str, now: Instant, timeout: Duration) -> Option<&str> {
        let previous = self.last_user.as_deref()?;
        if previous == participant {
            return None;
        }
        let gap = now.saturating_duration_since(self.last_time);
        (gap > timeout).then_some(previous)
    }

    /// Record a completed message
    pub fn record(&mut self, participant: &str, at: Instant) {
        debug!(%participant, "SessionState::record");
        self.last_user = Some(participant.to_string());
        self.last_time = at;
    }
}

/// Fixed turn order of participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<String>,
}

impl Roster {
    pub fn new(participants: Vec<String>) -> Self {
        Self { participants }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// The participant whose turn comes right before `participant`, wrapping around
    pub fn predecessor(&self, participant: &str) -> Option<&str> {
        if self.participants.len() < 2 {
            return None;
        }
        let pos = self.participants.iter().position(|p| p == participant)?;
        let prev = (pos + self.participants.len() - 1) % self.participants.len();
        Some(&self.participants[prev])
    }
}
