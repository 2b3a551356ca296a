use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use world_dns_api::DrainState;

/// Upper bound on the drain period before the process exits on its own.
pub const FORCED_EXIT_AFTER: Duration = Duration::from_secs(30);

/// First SIGINT/SIGTERM: start draining (health turns 503) and schedule a
/// forced exit. Second signal: cancel `shutdown` so the server stops now.
pub fn spawn_signal_handler(drain: Arc<DrainState>, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = watch_signals(&drain, &shutdown).await {
            error!(error = %e, "Failed to install signal handlers");
        }
    })
}

fn begin_drain(drain: &DrainState, signal: &str) {
    if !drain.begin() {
        return;
    }
    warn!(
        signal = signal,
        forced_exit_secs = FORCED_EXIT_AFTER.as_secs(),
        "Shutdown signal received, draining"
    );

    tokio::spawn(async {
        tokio::time::sleep(FORCED_EXIT_AFTER).await;
        warn!("Drain period elapsed, exiting");
        std::process::exit(0);
    });
}

#[cfg(unix)]
async fn watch_signals(drain: &DrainState, shutdown: &CancellationToken) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let first = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };
    begin_drain(drain, first);

    let second = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };
    info!(signal = second, "Second signal received, shutting down");
    shutdown.cancel();

    Ok(())
}

#[cfg(not(unix))]
async fn watch_signals(drain: &DrainState, shutdown: &CancellationToken) -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    begin_drain(drain, "Ctrl+C");

    tokio::signal::ctrl_c().await?;
    info!("Second signal received, shutting down");
    shutdown.cancel();

    Ok(())
}
