use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio::sync::watch;
use tokio_shutdown::Shutdown;
use p2p_tracker::common::common::setup_logging;
use p2p_tracker::config::structs::configuration::Configuration;
use p2p_tracker::http::http::http_service;
use p2p_tracker::structs::Cli;
use p2p_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.config.as_str(), args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] Unable to set up logging: {error}");
        exit(1);
    }

    info!("***** Tracker program started! *****");
    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));
            let tokio_shutdown = Shutdown::new()
                .map_err(|_| std::io::Error::other("shutdown handler could not be installed"))?;
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in config.http_server.iter().filter(|server| server.enabled) {
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };

                match http_service(address, tracker.clone(), http_server_object) {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to bind to {address}: {error}");
                        exit(1);
                    }
                }
            }

            let http_task = tokio::spawn(async move {
                if let Err(error) = try_join_all(http_futures).await {
                    error!("[HTTP] Server stopped with an error: {error}");
                }
            });

            let tracker_spawn_sweep = tracker.clone();
            let sweep_shutdown = shutdown_rx.clone();
            let sweep_interval = Duration::from_secs(config.tracker_config.sweep_interval);
            let sweep_task = tokio::spawn(async move {
                tracker_spawn_sweep.sweep_threads(sweep_interval, sweep_shutdown).await;
            });

            let tracker_spawn_stats = tracker.clone();
            let mut stats_shutdown = shutdown_rx.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            let stats_task = tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Files: {} - Nodes: {} - Sweeps: {} - Evicted: {} | \
                                OWN: {} - NEED: {} - UPDATE: {} - REGISTER: {} - EXIT: {} | \
                                Invalid: {} - Invalid modes: {} | Snapshots: {} - Failed: {}",
                                stats.files, stats.nodes, stats.sweeps, stats.nodes_evicted,
                                stats.own_handled, stats.need_handled, stats.update_handled,
                                stats.register_handled, stats.exit_handled,
                                stats.invalid_requests, stats.invalid_modes,
                                stats.snapshots_written, stats.snapshot_failures
                            );
                        }
                        changed = stats_shutdown.changed() => {
                            if changed.is_err() || *stats_shutdown.borrow() {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            let _ = shutdown_tx.send(true);
            for handle in &http_handles {
                handle.stop(true).await;
            }
            let _ = sweep_task.await;
            let _ = stats_task.await;
            let _ = http_task.await;

            info!("[SNAPSHOT] Saving final snapshot...");
            if let Err(error) = tracker.save_snapshot() {
                error!("[SNAPSHOT] Final snapshot failed: {error}");
            }

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
