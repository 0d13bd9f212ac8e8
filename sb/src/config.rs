//! Configuration for seenbot
//!
//! There is no config file: the effective configuration is the defaults with
//! command-line overrides applied on top.

use std::collections::HashSet;
use std::time::Duration;

use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::monitor::MonitorConfig;
use crate::session::Roster;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seconds a participant may take to reply before being alerted
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Watcher polling interval in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Pause after each turn in milliseconds
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// Participants in turn order
    #[serde(default = "default_participants")]
    pub participants: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    crate::DEFAULT_TIMEOUT_SECS
}

fn default_poll_interval_ms() -> u64 {
    crate::DEFAULT_POLL_INTERVAL_MS
}

fn default_pacing_ms() -> u64 {
    crate::DEFAULT_PACING_MS
}

fn default_participants() -> Vec<String> {
    crate::DEFAULT_PARTICIPANTS.iter().map(|p| p.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            pacing_ms: default_pacing_ms(),
            participants: default_participants(),
        }
    }
}

impl Config {
    /// Defaults overridden by whatever was given on the command line
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            timeout_secs: cli.timeout.unwrap_or(defaults.timeout_secs),
            poll_interval_ms: cli.poll_interval_ms.unwrap_or(defaults.poll_interval_ms),
            pacing_ms: cli.pacing_ms.unwrap_or(defaults.pacing_ms),
            participants: if cli.participants.is_empty() {
                defaults.participants
            } else {
                cli.participants.clone()
            },
        }
    }

    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(eyre!("Timeout must be at least 1 second"));
        }
        if self.poll_interval_ms == 0 {
            return Err(eyre!("Poll interval must be at least 1 millisecond"));
        }
        if self.poll_interval_ms / 1000 >= self.timeout_secs {
            return Err(eyre!(
                "Poll interval ({}ms) must be shorter than the timeout ({}s)",
                self.poll_interval_ms,
                self.timeout_secs
            ));
        }
        if self.participants.len() < 2 {
            return Err(eyre!(
                "At least two participants are required, got {}",
                self.participants.len()
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.participants {
            if name.trim().is_empty() {
                return Err(eyre!("Participant names must not be empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(eyre!("Duplicate participant: {}", name));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.participants.clone())
    }

    pub fn monitor_config(&self) -> MonitorConfig {
        MonitorConfig {
            timeout: self.timeout(),
            poll_interval: self.poll_interval(),
        }
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
