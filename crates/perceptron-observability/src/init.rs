// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always; with a log directory, a timestamped run folder
//! holding a JSON log file with daily rotation:
//!
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── perceptron.log
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, LoggingOptions};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps file writers alive; logs are flushed when this is dropped
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder receiving log files, if file logging is on
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails if the run folder cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, options: &LoggingOptions) -> Result<LoggingGuard> {
    let filter = debug_flags.to_filter_string(&options.level);

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer = match options.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_filter(EnvFilter::new(&filter))
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(EnvFilter::new(&filter))
            .boxed(),
    };
    layers.push(console_layer);

    #[cfg(feature = "file-logging")]
    let mut file_guards = Vec::new();
    let mut run_folder = None;

    if let Some(base_log_dir) = &options.log_dir {
        let folder = create_run_folder(base_log_dir)?;
        cleanup_old_logs(base_log_dir, options.retention_days, options.retention_runs)?;

        #[cfg(feature = "file-logging")]
        {
            let appender = tracing_appender::rolling::daily(&folder, "perceptron.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            file_guards.push(guard);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_filter(EnvFilter::new(&filter))
                .boxed();
            layers.push(file_layer);
        }
        #[cfg(not(feature = "file-logging"))]
        eprintln!(
            "Warning: log directory {} ignored (built without file-logging)",
            folder.display()
        );

        run_folder = Some(folder);
    }

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: file_guards,
        log_dir: run_folder,
    })
}

fn create_run_folder(base_log_dir: &Path) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let run_folder = base_log_dir.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;
    Ok(run_folder)
}

/// Parse `run_YYYYmmdd_HHMMSS` folder names
fn parse_run_timestamp(dir_name: &str) -> Option<DateTime<Utc>> {
    let timestamp = dir_name.strip_prefix("run_")?;
    NaiveDateTime::parse_from_str(timestamp, "%Y%m%d_%H%M%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Remove run folders older than `retention_days`, then trim to the newest
/// `retention_runs`
fn cleanup_old_logs(base_log_dir: &Path, retention_days: u64, retention_runs: usize) -> Result<()> {
    if !base_log_dir.exists() {
        return Ok(());
    }

    let cutoff_date = Utc::now() - chrono::Duration::days(retention_days as i64);

    let mut runs: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let parsed = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_run_timestamp);
        if let Some(dt) = parsed {
            runs.push((path, dt));
        }
    }

    // Oldest first
    runs.sort_by_key(|(_, dt)| *dt);

    let (expired, kept): (Vec<_>, Vec<_>) = runs.into_iter().partition(|(_, dt)| *dt < cutoff_date);

    let excess = kept.len().saturating_sub(retention_runs);
    let to_remove = expired.iter().chain(kept.iter().take(excess));

    for (path, _) in to_remove {
        if let Err(e) = std::fs::remove_dir_all(path) {
            eprintln!(
                "Warning: Failed to remove old log directory {}: {}",
                path.display(),
                e
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_run_timestamp() {
        let dt = parse_run_timestamp("run_20250102_030405").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-01-02 03:04:05");
        assert!(parse_run_timestamp("run_garbage").is_none());
        assert!(parse_run_timestamp("other_20250102_030405").is_none());
    }

    #[test]
    fn test_cleanup_keeps_newest_runs() {
        let dir = tempdir().unwrap();
        let now = Utc::now();
        let names: Vec<String> = (0..5)
            .map(|i| {
                let ts = now - chrono::Duration::hours(i);
                format!("run_{}", ts.format("%Y%m%d_%H%M%S"))
            })
            .collect();
        for name in &names {
            std::fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir_all(dir.path().join("not_a_run")).unwrap();

        cleanup_old_logs(dir.path(), 30, 2).unwrap();

        // names[0] and names[1] are the two newest
        assert!(dir.path().join(&names[0]).exists());
        assert!(dir.path().join(&names[1]).exists());
        for name in &names[2..] {
            assert!(!dir.path().join(name).exists(), "{} should be removed", name);
        }
        assert!(dir.path().join("not_a_run").exists());
    }

    #[test]
    fn test_cleanup_removes_expired_runs() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("run_20000101_000000")).unwrap();

        cleanup_old_logs(dir.path(), 30, 10).unwrap();

        assert!(!dir.path().join("run_20000101_000000").exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = tempdir().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("absent"), 30, 10).is_ok());
    }

    #[test]
    fn test_create_run_folder() {
        let dir = tempdir().unwrap();
        let folder = create_run_folder(dir.path()).unwrap();
        assert!(folder.is_dir());
        assert!(folder
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_run_timestamp)
            .is_some());
    }
}
