//! Seen alerts

use std::fmt;

/// A reminder that someone is being left on seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Raised by the turn watcher when the awaited participant runs out of time
    Watcher { previous: String, awaited: String },

    /// Raised after the fact when the gap between two senders exceeded the timeout
    Legacy { previous: String },
}

impl Alert {
    /// The participant being reminded
    pub fn target(&self) -> &str {
        match self {
            Alert::Watcher { previous, .. } => previous,
            Alert::Legacy { previous } => previous,
        }
    }

    /// Who is being left on seen
    pub fn left_on_seen(&self) -> &str {
        match self {
            Alert::Watcher { awaited, .. } => awaited,
            Alert::Legacy { .. } => "people",
        }
    }

    pub fn is_watcher(&self) -> bool {
        matches!(self, Alert::Watcher { .. })
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BOT ALERT: {}, don't leave {} on seen!", self.target(), self.left_on_seen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_alert_display() {
        let alert = Alert::Watcher {
            previous: "UserB".to_string(),
            awaited: "UserA".to_string(),
        };
        assert_eq!(alert.to_string(), "BOT ALERT: UserB, don't leave UserA on seen!");
        assert_eq!(alert.target(), "UserB");
        assert!(alert.is_watcher());
    }

    #[test]
    fn test_both_alerts_remind_the_previous_sender() {
        let watcher = Alert::Watcher {
            previous: "UserB".to_string(),
            awaited: "UserA".to_string(),
        };
        let legacy = Alert::Legacy {
            previous: "UserB".to_string(),
        };
        assert_eq!(watcher.target(), legacy.target());
    }

    #[test]
    fn test_legacy_alert_display() {
        let alert = Alert::Legacy {
            previous: "UserB".to_string(),
        };
        assert_eq!(alert.to_string(), "BOT ALERT: UserB, don't leave people on seen!");
        assert_eq!(alert.target(), "UserB");
        assert!(!alert.is_watcher());
    }
}
