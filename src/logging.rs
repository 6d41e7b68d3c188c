//! File-backed logging for the CLI
//!
//! Signature building is a pure library concern and stays quiet; the log
//! exists so descriptor loading and fragment parse fallbacks can be traced
//! after a documentation pass. Each run truncates the previous log.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Writer behind the `log` facade, one line per record:
/// `2026-08-26 12:00:00.000 INFO  docs::registry: message`
struct DocsLogger {
    file: Mutex<File>,
}

impl DocsLogger {
    fn create(file_path: PathBuf) -> io::Result<Self> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(DocsLogger {
            file: Mutex::new(file),
        })
    }
}

impl Log for DocsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Log file location under the platform's local data directory
fn log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .ok_or("Could not determine local data directory")?;

    Ok(data_dir.join("ClassDocs").join("class_docs_native.log"))
}

/// Install the file logger as the global `log` backend
///
/// Debug level so fragment parse fallbacks show up in the log.
pub fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    let logger = DocsLogger::create(log_file_path()?)?;

    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(LevelFilter::Debug))?;

    Ok(())
}
