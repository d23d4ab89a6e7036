mod cli;
mod config;
mod daemon;
mod error;
mod notifier;
mod target;
mod watcher;

#[cfg(not(target_os = "linux"))]
compile_error!("watchfd is built on inotify and only supports Linux");

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::target::WatchTarget;
use std::future::Future;
use std::process::ExitCode;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let WatchError::Usage(detail) = &e {
                debug!(%detail, "argument parsing failed");
            }
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os())?;
    let target = WatchTarget::new(&cli.path)?;

    let config = match &cli.config {
        Some(path) => Config::load(path).map_err(WatchError::Config)?,
        None => Config::default(),
    };

    // Installed before any handle exists so a signal during setup still
    // unwinds through the releases.
    let shutdown = shutdown_signal().map_err(WatchError::Signal)?;

    info!(path = %target.path().display(), title = target.title(), "watchfd starting");
    daemon::start(&target, &config, shutdown).await
}

/// Registers SIGINT and SIGTERM handlers now; the returned future resolves
/// on the first of either.
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("received SIGINT"),
            _ = terminate.recv() => info!("received SIGTERM"),
        }
    })
}
