//! SeenBot - don't leave people on seen
//!
//! A console chat between participants taking turns. Every turn races a
//! blocking line read against a timeout watcher: if the participant takes too
//! long to answer, the bot reminds them not to leave the other side on seen.
//!
//! # Architecture
//!
//! ```text
//! TurnCoordinator ── for each participant in the roster ──┐
//!                                                         v
//!   SeenMonitor::await_turn ──┬── Watcher (tokio task, polls stop flag)
//!                             └── LineSource::read_line (blocking pool)
//!                                         │
//!                                         v
//!                       SessionState update + ChatSink output
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use seenbot::{Config, ConsoleSink, StdinSource, TurnCoordinator};
//!
//! let config = Config::default();
//! let mut coordinator = TurnCoordinator::from_config(&config, Box::new(StdinSource), Arc::new(ConsoleSink::new()));
//! coordinator.run().await?;
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod input;
pub mod monitor;
pub mod output;
pub mod session;
pub mod watcher;

pub use alert::Alert;
pub use config::Config;
pub use coordinator::TurnCoordinator;
pub use error::ChatError;
pub use input::{LineSource, StdinSource};
pub use monitor::{MonitorConfig, SeenMonitor, TurnRecord};
pub use output::{ChatEvent, ChatSink, ConsoleSink};
pub use session::{Roster, SessionState};
pub use watcher::{WatchOutcome, Watcher};

/// Default response timeout (5 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default watcher polling interval (200ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Default pause after each turn (1 second)
pub const DEFAULT_PACING_MS: u64 = 1000;

/// Default participants, in turn order
pub const DEFAULT_PARTICIPANTS: [&str; 2] = ["UserA", "UserB"];
