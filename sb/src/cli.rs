//! CLI argument parsing for seenbot

use clap::Parser;

/// SeenBot - don't leave people on seen
#[derive(Parser, Debug)]
#[command(name = "sb")]
#[command(author, version, about = "Turn-based console chat that calls out slow replies", long_about = None)]
pub struct Cli {
    /// Seconds a participant may take before being alerted (default: 5)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Watcher polling interval in milliseconds (default: 200)
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Pause after each turn in milliseconds (default: 1000)
    #[arg(short, long, value_name = "MS")]
    pub pacing_ms: Option<u64>,

    /// Participant name, repeat for each one in turn order (default: UserA, UserB)
    #[arg(short = 'u', long = "participant", value_name = "NAME")]
    pub participants: Vec<String>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub show_config: bool,
}
