//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tripchat
#[derive(Parser, Debug)]
#[command(name = "tripchat")]
#[command(author, version, about = "Terminal chat client for an itinerary-planning server")]
#[command(long_about = r#"
tripchat sends your travel requests to an itinerary server (POST /generate)
and shows the replies in a scrolling chat transcript.

Without a MESSAGE it opens the interactive chat. With a MESSAGE it sends that
one message, prints the transcript and exits.

Configuration files are loaded from (in priority order):
1. TRIPCHAT_* environment variables
2. --config <path>     Explicit config file
3. ./tripchat.toml     Project-level config
4. ~/.config/tripchat/config.toml   Global config

Example:
  tripchat
  tripchat --server http://localhost:5000 "Plan a trip from New York to London"
  tripchat --cookie "session=..." --no-mouse
"#)]
pub struct Cli {
    /// Send this one message and exit instead of opening the chat
    pub message: Option<String>,

    /// Base URL of the itinerary server (e.g. http://127.0.0.1:5000)
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Path of the generate endpoint on the server
    #[arg(long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Cookie header sent with every request (login session)
    #[arg(long, value_name = "COOKIE")]
    pub cookie: Option<String>,

    /// Do not capture the mouse (disables clicking the send button)
    #[arg(long)]
    pub no_mouse: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (chat mode only; defaults to the data dir)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show the effective configuration and its sources, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Default log filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_with_server() {
        let cli = Cli::parse_from([
            "tripchat",
            "--server",
            "http://localhost:5000",
            "Plan a trip from Paris to Rome",
        ]);
        assert_eq!(cli.message.as_deref(), Some("Plan a trip from Paris to Rome"));
        assert_eq!(cli.server.as_deref(), Some("http://localhost:5000"));
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Cli::parse_from(["tripchat"]).log_level(), "warn");
        assert_eq!(Cli::parse_from(["tripchat", "-v"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["tripchat", "-vv"]).log_level(), "debug");
        assert_eq!(Cli::parse_from(["tripchat", "-vvvv"]).log_level(), "trace");
    }
}
