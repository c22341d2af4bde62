//! adventure-widget - Home-screen widget host for Adventure List.
//!
//! By default this launches the terminal preview host. With `--print` it
//! runs one update cycle and prints the rendered views as JSON.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use adventure_widget_config::{Config, persistence};
use adventure_widget_protocol::render_batch;
use adventure_widget_tui::{App, terminal, terminal::TerminalError};
use anyhow::{Context, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adventure-widget", version, about)]
struct Cli {
    /// Config file to load instead of searching the default locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Persisted store file to read.
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Store key holding the selected list.
    #[arg(long, value_name = "KEY")]
    key: Option<String>,

    /// Number of widget instances to render.
    #[arg(long, value_name = "N")]
    instances: Option<u8>,

    /// Render once and print the views as JSON instead of starting the host.
    #[arg(long)]
    print: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::load().context("loading config")?,
        };

        if let Some(store) = &self.store {
            config.store_path = Some(store.clone());
        }
        if let Some(key) = &self.key {
            config.store_key = key.clone();
        }
        if let Some(instances) = self.instances {
            config.instances = instances;
        }

        config.validate()?;
        Ok(config)
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to stderr; used when the terminal is not taken over by the host UI.
fn init_stderr_tracing(debug: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Opens the host log, creating its directory as needed.
///
/// Returns `None` when there is nowhere to log; the host still starts.
fn open_host_log(path: anyhow::Result<PathBuf>) -> Option<(PathBuf, File)> {
    let opened = path.and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        Ok((path, file))
    });

    match opened {
        Ok(log) => Some(log),
        Err(err) => {
            // Still printed to the normal screen, before the host takes over
            eprintln!("adventure-widget: host logging disabled: {err:#}");
            None
        }
    }
}

/// Logs to a file in the data directory, leaving the terminal to the host UI.
fn init_file_tracing(debug: bool) -> anyhow::Result<Option<PathBuf>> {
    let Some((path, file)) = open_host_log(persistence::default_log_path().map_err(Into::into))
    else {
        return Ok(None);
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(debug)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(Some(path))
}

fn print_views(config: &Config) -> anyhow::Result<()> {
    let payload = config.read_payload().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read store, rendering without a payload");
        None
    });

    let rendered: Vec<serde_json::Value> = render_batch(payload.as_deref(), &config.widget_ids())
        .into_iter()
        .map(|(widget, view)| serde_json::json!({ "widget": widget, "view": view }))
        .collect();

    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

async fn run_host(config: Config) -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::HostTerminal::enter()?;
    let mut app = App::new(config);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    finish_host(result, terminal.leave())
}

/// Combines the run loop outcome with terminal restoration.
///
/// A run loop error is reported first; a restore failure is attached to it.
fn finish_host(run: anyhow::Result<()>, restore: Result<(), TerminalError>) -> anyhow::Result<()> {
    match (run, restore) {
        (Ok(()), restore) => restore.context("restoring terminal"),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore_err)) => {
            Err(err.context(format!("terminal also failed to restore: {restore_err}")))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print {
        init_stderr_tracing(cli.debug)?;
        let config = cli.load_config()?;
        return print_views(&config);
    }

    let log_path = init_file_tracing(cli.debug)?;
    let config = cli.load_config()?;
    tracing::info!(
        store = ?config.store_path,
        key = %config.store_key,
        instances = config.instances,
        log = ?log_path,
        "starting widget host"
    );

    run_host(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    #[test]
    fn host_log_is_created_with_its_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("host.log");

        let (opened, _file) = open_host_log(Ok(path.clone())).unwrap();

        assert_eq!(opened, path);
        assert!(path.exists());
    }

    #[test]
    fn host_log_without_data_dir_is_skipped() {
        assert!(open_host_log(Err(anyhow!("no home directory"))).is_none());
    }

    #[test]
    fn host_log_in_unwritable_location_is_skipped() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_host_log(Ok(blocker.join("host.log"))).is_none());
    }

    #[test]
    fn finish_host_keeps_run_error_when_restore_fails() {
        let err = finish_host(
            Err(anyhow!("event stream closed")),
            Err(TerminalError::Restore(io::Error::other("tty gone"))),
        )
        .unwrap_err();

        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert!(chain[0].contains("terminal also failed to restore"));
        assert!(chain[0].contains("tty gone"));
        assert_eq!(chain[1], "event stream closed");
    }

    #[test]
    fn finish_host_reports_restore_failure_after_clean_run() {
        let err = finish_host(
            Ok(()),
            Err(TerminalError::Restore(io::Error::other("tty gone"))),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "restoring terminal");
    }

    #[test]
    fn finish_host_passes_through_run_error() {
        let err = finish_host(Err(anyhow!("event stream closed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "event stream closed");
    }

    #[test]
    fn finish_host_ok_when_both_succeed() {
        assert!(finish_host(Ok(()), Ok(())).is_ok());
    }
}
