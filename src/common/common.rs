use std::path::Path;
use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use tokio::time::Instant;
use crate::config::structs::configuration::Configuration;

pub const TRACKER_LOG_FILE: &str = "_tracker.log";

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter>
{
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

/// Installs the global logger: coloured lines on stdout and an append-only
/// copy in `<logs_dir>/_tracker.log`.
pub fn setup_logging(config: &Configuration) -> Result<(), fern::InitError>
{
    let level = parse_log_level(config.log_level.as_str()).unwrap_or(log::LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    std::fs::create_dir_all(&config.directory.logs_dir)?;
    let log_file = fern::log_file(Path::new(&config.directory.logs_dir).join(TRACKER_LOG_FILE))?;

    fern::Dispatch::new()
        .level(level)
        .chain(fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    colors.color(record.level()),
                    record.target(),
                    message,
                    width = 5
                ))
            })
            .chain(std::io::stdout()))
        .chain(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] [{:width$}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.level(),
                    message,
                    width = 5
                ))
            })
            .chain(log_file))
        .apply()?;

    info!("logging initialized.");
    Ok(())
}

pub fn current_time() -> u64
{
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}

/// Sleeps until `deadline`, returning `true` when shutdown was signalled first.
pub async fn shutdown_waiting(deadline: Instant, shutdown: &mut watch::Receiver<bool>) -> bool
{
    if *shutdown.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep_until(deadline) => false,
        changed = shutdown.changed() => {
            // A dropped sender also means nobody is left to keep us running.
            changed.is_err() || *shutdown.borrow()
        }
    }
}
