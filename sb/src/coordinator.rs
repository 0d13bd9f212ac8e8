//! Turn coordinator
//!
//! Walks the roster in order, one turn per participant, with a short pause
//! after each turn and a separator after each full round.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::ChatError;
use crate::input::LineSource;
use crate::monitor::SeenMonitor;
use crate::output::{ChatEvent, ChatSink};

pub struct TurnCoordinator {
    monitor: SeenMonitor,
    pacing: Duration,
    sink: Arc<dyn ChatSink>,
}

impl TurnCoordinator {
    pub fn new(monitor: SeenMonitor, pacing: Duration, sink: Arc<dyn ChatSink>) -> Self {
        Self { monitor, pacing, sink }
    }

    pub fn from_config(config: &Config, source: Box<dyn LineSource>, sink: Arc<dyn ChatSink>) -> Self {
        let monitor = SeenMonitor::new(config.monitor_config(), config.roster(), source, sink.clone());
        Self::new(monitor, config.pacing(), sink)
    }

    pub fn monitor(&self) -> &SeenMonitor {
        &self.monitor
    }

    /// Run rounds until a turn fails
    ///
    /// Only returns on error; `ChatError::InputClosed` is the normal way out.
    pub async fn run(&mut self) -> Result<(), ChatError> {
        let participants: Vec<String> = self.monitor.roster().iter().map(str::to_string).collect();
        info!(?participants, timeout = ?self.monitor.config().timeout, "Chat started");
        self.sink.emit(ChatEvent::Started {
            participants: participants.clone(),
            timeout: self.monitor.config().timeout,
        });

        let mut round: u64 = 0;
        loop {
            round += 1;
            debug!(round, "TurnCoordinator: round started");

            for participant in &participants {
                let record = self.monitor.await_turn(participant).await?;
                debug!(
                    participant = %record.participant,
                    received_at = %record.received_at.format("%H:%M:%S%.3f"),
                    elapsed = ?record.elapsed,
                    watcher = ?record.watcher,
                    legacy_alert = record.legacy_alert,
                    "TurnCoordinator: turn complete"
                );
                tokio::time::sleep(self.pacing).await;
            }

            self.sink.emit(ChatEvent::Separator);
        }
    }
}
