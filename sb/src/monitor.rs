//! Seen-alert monitor
//!
//! One call to [`SeenMonitor::await_turn`] is one turn: a blocking read of the
//! participant's line races a [`Watcher`] that alerts if the read takes too
//! long. The watcher is always stopped and joined before the session state is
//! touched, so no two watchers ever overlap.
//!
//! A second, after-the-fact check compares the gap since the previous sender's
//! message against the timeout. It overlaps with the watcher and both may fire
//! for the same slow reply.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::alert::Alert;
use crate::error::ChatError;
use crate::input::LineSource;
use crate::output::{ChatEvent, ChatSink};
use crate::session::{Roster, SessionState};
use crate::watcher::{WatchOutcome, Watcher};

/// Timing for a monitor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// How long a participant may take before being alerted
    pub timeout: Duration,
    /// How often the watcher checks the clock and its stop flag
    pub poll_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(crate::DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

/// Metadata of a completed turn
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub participant: String,
    pub message: String,
    /// Wall-clock time the line arrived
    pub received_at: DateTime<Local>,
    /// Time spent waiting on the read
    pub elapsed: Duration,
    pub watcher: WatchOutcome,
    /// Whether the after-the-fact gap check fired
    pub legacy_alert: bool,
}

type SharedSource = Arc<Mutex<Box<dyn LineSource>>>;

/// Runs turns and keeps the session state between them
pub struct SeenMonitor {
    config: MonitorConfig,
    roster: Roster,
    session: SessionState,
    source: SharedSource,
    sink: Arc<dyn ChatSink>,
}

impl SeenMonitor {
    pub fn new(config: MonitorConfig, roster: Roster, source: Box<dyn LineSource>, sink: Arc<dyn ChatSink>) -> Self {
        Self {
            config,
            roster,
            session: SessionState::new(),
            source: Arc::new(Mutex::new(source)),
            sink,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Who is waiting on `participant`
    ///
    /// The last sender when there is one; before anyone has spoken, the
    /// participant right before them in the rotation.
    fn previous_sender(&self, participant: &str) -> String {
        match self.session.last_user() {
            Some(last) if last != participant => last.to_string(),
            _ => self
                .roster
                .predecessor(participant)
                .unwrap_or("people")
                .to_string(),
        }
    }

    /// Wait for one line from `participant`, alerting if they take too long
    pub async fn await_turn(&mut self, participant: &str) -> Result<TurnRecord, ChatError> {
        let started = Instant::now();
        debug!(%participant, timeout = ?self.config.timeout, "await_turn: started");

        let alert = Alert::Watcher {
            previous: self.previous_sender(participant),
            awaited: participant.to_string(),
        };
        let deadline = started.checked_add(self.config.timeout);
        if deadline.is_none() {
            debug!(timeout = ?self.config.timeout, "await_turn: deadline out of range, watcher will not alert");
        }
        let watcher = Watcher::spawn(deadline, self.config.poll_interval, alert, self.sink.clone());

        self.sink.emit(ChatEvent::Prompt {
            participant: participant.to_string(),
        });

        let source = self.source.clone();
        let read = tokio::task::spawn_blocking(move || {
            let mut source = source.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            source.read_line()
        })
        .await;

        // Join the watcher before anything else, whatever the read produced
        let watcher = watcher.stop().await?;
        let line = read??;

        let now = Instant::now();
        let elapsed = now.duration_since(started);
        debug!(%participant, ?elapsed, ?watcher, "await_turn: read complete");

        let Some(message) = line else {
            info!(%participant, "Input closed");
            return Err(ChatError::InputClosed {
                participant: participant.to_string(),
            });
        };

        let legacy_alert = match self.session.overdue_sender(participant, now, self.config.timeout) {
            Some(previous) => {
                info!(%previous, %participant, "Gap since previous sender exceeded timeout");
                self.sink.emit(ChatEvent::Alert(Alert::Legacy {
                    previous: previous.to_string(),
                }));
                true
            }
            None => false,
        };

        self.sink.emit(ChatEvent::Message {
            sender: participant.to_string(),
            text: message.clone(),
        });

        self.session.record(participant, now);

        Ok(TurnRecord {
            participant: participant.to_string(),
            message,
            received_at: Local::now(),
            elapsed,
            watcher,
            legacy_alert,
        })
    }
}
