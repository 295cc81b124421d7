//! CLI entrypoint for tripchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tripchat_infrastructure::{ConfigLoader, FileConfig, HttpItineraryGateway};
use tripchat_presentation::{Cli, OneShotChat, TranscriptFormatter, TuiApp, tui::TuiOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        if cli.no_config {
            println!("Configuration files disabled (--no-config)\n");
        } else {
            println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        }
        println!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    // Logging goes to a file while the TUI owns the terminal
    let one_shot = cli.message.is_some();
    let _log_guard = init_logging(&cli, &config, one_shot)?;

    info!("Starting tripchat");

    // === Dependency Injection ===
    let endpoint = config.server.endpoint_url()?;
    let mut gateway = HttpItineraryGateway::new(endpoint)?;
    if let Some(cookie) = &config.server.cookie {
        gateway = gateway.with_cookie(cookie.clone());
    }
    let server_label = gateway.endpoint().to_string();
    let gateway = Arc::new(gateway);

    match cli.message {
        // Single message mode
        Some(message) => {
            let transcript = OneShotChat::new(gateway).run(&message).await;
            print!("{}", TranscriptFormatter::format(&transcript));
        }
        // Interactive chat
        None => {
            let options = TuiOptions {
                server_label,
                mouse: config.tui.mouse,
                show_help_on_start: config.tui.show_help_on_start,
            };
            TuiApp::new(gateway, options)
                .run()
                .await
                .context("Terminal UI failed")?;
        }
    }

    Ok(())
}

/// CLI flags take priority over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.server.endpoint = endpoint.clone();
    }
    if let Some(cookie) = &cli.cookie {
        config.server.cookie = Some(cookie.clone());
    }
    if cli.no_mouse {
        config.tui.mouse = false;
    }
    if let Some(path) = &cli.log_file {
        config.log.file = Some(path.display().to_string());
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tripchat").join("tripchat.log"))
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(cli: &Cli, config: &FileConfig, one_shot: bool) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    if one_shot {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let Some(path) = config.log.file.as_ref().map(PathBuf::from).or_else(default_log_path) else {
        // No writable location known; run without logs rather than corrupt the screen
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "tripchat",
            "--server",
            "http://planner.local:8080",
            "--endpoint",
            "/api/generate",
            "--cookie",
            "session=abc",
            "--no-mouse",
            "--log-file",
            "/tmp/tripchat-test.log",
        ]);
        let mut config = ConfigLoader::load_defaults();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.server.base_url, "http://planner.local:8080");
        assert_eq!(config.server.endpoint, "/api/generate");
        assert_eq!(config.server.cookie.as_deref(), Some("session=abc"));
        assert!(!config.tui.mouse);
        assert_eq!(config.log.file.as_deref(), Some("/tmp/tripchat-test.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let cli = Cli::parse_from(["tripchat"]);
        let mut config = ConfigLoader::load_defaults();
        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.server.endpoint, "/generate");
        assert!(config.tui.mouse);
    }

    #[test]
    fn test_bad_server_flag_fails_validation() {
        let cli = Cli::parse_from(["tripchat", "--server", "ftp://example.com"]);
        let mut config = ConfigLoader::load_defaults();
        apply_cli_overrides(&mut config, &cli);

        assert!(config.validate().is_err());
    }
}
