//! Chat output: transcript, alerts and separators

use std::io::{IsTerminal, Write};
use std::time::Duration;

use colored::*;
use tracing::warn;

use crate::alert::Alert;

const SEPARATOR: &str = "------------------------------------";

/// Everything the chat shows to its participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Session banner, emitted once
    Started { participants: Vec<String>, timeout: Duration },

    /// Input prompt for the awaited participant
    Prompt { participant: String },

    /// Seen alert from either path
    Alert(Alert),

    /// A delivered message
    Message { sender: String, text: String },

    /// End of a full round
    Separator,
}

/// Destination for chat events
///
/// Shared between the turn flow and the watcher task, so implementations
/// must be safe to call from any thread.
pub trait ChatSink: Send + Sync {
    fn emit(&self, event: ChatEvent);
}

/// Writes chat events to stdout
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    color: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Colored output when stdout is a terminal
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Console sink that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, text: &str, style: fn(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render an event exactly as it is written to stdout
    pub fn format(&self, event: &ChatEvent) -> String {
        match event {
            ChatEvent::Started { participants, timeout } => format!(
                "\n{} {}\nIf reply > {} seconds → Bot will warn!\n\n",
                self.paint("Chat started:", |s| s.bold()),
                participants.join(", "),
                timeout.as_secs()
            ),
            ChatEvent::Prompt { participant } => format!("{} → ", self.paint(participant, |s| s.bold())),
            ChatEvent::Alert(alert) => {
                format!("\n🤖 {}\n\n", self.paint(&alert.to_string(), |s| s.yellow().bold()))
            }
            ChatEvent::Message { sender, text } => format!("{}: {}\n", self.paint(sender, |s| s.cyan()), text),
            ChatEvent::Separator => format!("\n{}\n\n", self.paint(SEPARATOR, |s| s.dimmed())),
        }
    }
}

impl ChatSink for ConsoleSink {
    fn emit(&self, event: ChatEvent) {
        let mut stdout = std::io::stdout().lock();
        let result = stdout
            .write_all(self.format(&event).as_bytes())
            .and_then(|_| stdout.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write chat output");
        }
    }
}
