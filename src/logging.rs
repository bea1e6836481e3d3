//! File logging bootstrap
//!
//! The terminal belongs to the TUI, so log records go to size-rotated files
//! in the configured directory. Records use `event=... key=value` pairs.

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use std::path::Path;

const LOG_FILE_BASENAME: &str = "project-board";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start file logging. The returned handle must be kept alive to flush on exit.
pub fn init(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("Invalid log level `{}`", level))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start logger")?;

    info!(
        "event=app_start version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        level,
        log_dir.display()
    );
    Ok(handle)
}

/// Write out buffered records. `process::exit` skips the handle's destructor.
pub fn flush(logger: Option<&LoggerHandle>) {
    if let Some(handle) = logger {
        handle.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_flush_writes_buffered_records() {
        let dir = tempfile::tempdir().unwrap();
        let handle = init("info", dir.path()).unwrap();

        log::error!("event=flush_check status=error");
        flush(Some(&handle));

        let contents: String = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| fs::read_to_string(entry.path()).ok())
            .collect();
        assert!(contents.contains("event=app_start"));
        assert!(contents.contains("event=flush_check"));
    }
}
