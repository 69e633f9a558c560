//! JSON-lines log backend.
//!
//! The terminal owns stdout while the game runs, so records go to a file.
//! One record per line: `{"ts_ms":..,"level":"INFO","target":"..","msg":".."}`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LogLine<'a> {
    ts_ms: u64,
    level: &'a str,
    target: &'a str,
    msg: String,
}

pub struct JsonFileLogger<W: Write + Send = BufWriter<File>> {
    level: LevelFilter,
    out: Mutex<W>,
}

impl JsonFileLogger {
    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_writer(BufWriter::new(file), level))
    }
}

impl<W: Write + Send> JsonFileLogger<W> {
    pub fn with_writer(out: W, level: LevelFilter) -> Self {
        Self {
            level,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Log for JsonFileLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            ts_ms: current_timestamp_ms(),
            level: record.level().as_str(),
            target: record.target(),
            msg: record.args().to_string(),
        };
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if serde_json::to_writer(&mut *out, &line).is_ok() {
            let _ = out.write_all(b"\n");
        }
        // The installed logger is never dropped; push problems out now.
        if record.level() <= Level::Warn {
            let _ = out.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Flushes the global logger when dropped, so buffered records survive
/// early returns.
#[must_use = "dropping the guard flushes the log immediately"]
#[derive(Debug)]
pub struct LogGuard {
    installed: bool,
}

impl LogGuard {
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        if self.installed {
            log::logger().flush();
        }
    }
}

/// Install the file logger when a path is configured.
///
/// Without a path nothing is installed and every `log` macro is a no-op.
pub fn init(path: Option<&str>, level: LevelFilter) -> Result<LogGuard> {
    let Some(path) = path else {
        return Ok(LogGuard { installed: false });
    };
    let logger = JsonFileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(LogGuard { installed: true })
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &JsonFileLogger<Vec<u8>>, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("blockfall::test")
                .args(format_args!("{msg}"))
                .build(),
        );
    }

    #[test]
    fn writes_one_json_object_per_line() {
        let logger = JsonFileLogger::with_writer(Vec::new(), LevelFilter::Debug);
        emit(&logger, Level::Info, "piece locked");
        emit(&logger, Level::Debug, "cleared \"2\" rows");
        let out = String::from_utf8(logger.into_inner()).unwrap();

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "INFO");
        assert_eq!(lines[0]["target"], "blockfall::test");
        assert_eq!(lines[0]["msg"], "piece locked");
        assert!(lines[0]["ts_ms"].as_u64().unwrap() > 0);
        assert_eq!(lines[1]["msg"], "cleared \"2\" rows");
    }

    #[test]
    fn drops_records_above_the_level() {
        let logger = JsonFileLogger::with_writer(Vec::new(), LevelFilter::Warn);
        emit(&logger, Level::Info, "quiet");
        emit(&logger, Level::Error, "loud");
        let out = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("loud"));
    }

    #[test]
    fn warnings_reach_the_file_from_a_logger_that_is_never_dropped() {
        let path = std::env::temp_dir().join(format!(
            "blockfall-log-{}-{}.jsonl",
            std::process::id(),
            current_timestamp_ms()
        ));
        let logger: &'static JsonFileLogger =
            Box::leak(Box::new(JsonFileLogger::open(&path, LevelFilter::Info).unwrap()));

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("blockfall::test")
                .args(format_args!("input relay failed"))
                .build(),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents.lines().count(), 1);
        let line: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["msg"], "input relay failed");
    }

    #[test]
    fn init_without_path_installs_nothing() {
        let guard = init(None, LevelFilter::Info).unwrap();
        assert!(!guard.is_installed());
    }
}
