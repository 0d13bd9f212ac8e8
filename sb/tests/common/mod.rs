//! Shared helpers for seenbot integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use seenbot::{Alert, ChatEvent, ChatSink, LineSource, MonitorConfig, Roster, SeenMonitor};

/// Replays lines, sleeping before each one to simulate a participant typing
pub struct ScriptedSource {
    lines: VecDeque<(Duration, String)>,
}

impl ScriptedSource {
    pub fn new(lines: &[(u64, &str)]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|(delay_ms, line)| (Duration::from_millis(*delay_ms), line.to_string()))
                .collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let Some((delay, line)) = self.lines.pop_front() else {
            return Ok(None);
        };
        std::thread::sleep(delay);
        Ok(Some(line))
    }
}

/// Collects every emitted event
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ChatEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<ChatEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ChatEvent::Alert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub fn watcher_alerts(&self) -> Vec<Alert> {
        self.alerts().into_iter().filter(Alert::is_watcher).collect()
    }

    pub fn legacy_alerts(&self) -> Vec<Alert> {
        self.alerts().into_iter().filter(|a| !a.is_watcher()).collect()
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ChatEvent::Message { sender, text } => Some((sender, text)),
                _ => None,
            })
            .collect()
    }
}

impl ChatSink for RecordingSink {
    fn emit(&self, event: ChatEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Timeout used by the scenario tests, standing in for seconds
pub const TIMEOUT_MS: u64 = 200;

pub fn monitor_config() -> MonitorConfig {
    MonitorConfig {
        timeout: Duration::from_millis(TIMEOUT_MS),
        poll_interval: Duration::from_millis(10),
    }
}

pub fn two_party() -> Roster {
    Roster::new(vec!["UserA".to_string(), "UserB".to_string()])
}

pub fn monitor(lines: &[(u64, &str)], sink: Arc<RecordingSink>) -> SeenMonitor {
    SeenMonitor::new(monitor_config(), two_party(), Box::new(ScriptedSource::new(lines)), sink)
}

pub fn watcher_alert(previous: &str, awaited: &str) -> Alert {
    Alert::Watcher {
        previous: previous.to_string(),
        awaited: awaited.to_string(),
    }
}

pub fn legacy_alert(previous: &str) -> Alert {
    Alert::Legacy {
        previous: previous.to_string(),
    }
}
