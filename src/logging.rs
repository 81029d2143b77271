//! Session logger - one file per run under `logs/`.
//!
//! The TUI owns the terminal while the alternate screen is active, so log
//! lines go to a file instead of stderr. Write failures are swallowed: a
//! broken log must never take the session down.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
}

impl Level {
    fn from_env() -> Self {
        match std::env::var("BOWLING_LOG").as_deref() {
            Ok(s) if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("err") => {
                Self::Error
            }
            Ok(s) if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") => {
                Self::Warn
            }
            _ => Self::Info,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
        }
    }
}

pub struct SessionLog {
    file: File,
    max_level: Level,
}

impl SessionLog {
    /// Create `<dir>/<stamp>.log` and log everything at or above the level
    /// named by `BOWLING_LOG` (default: info).
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("{stamp}.log"));
        let file = File::create(&path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        Ok(Self {
            file,
            max_level: Level::from_env(),
        })
    }

    pub fn info(&mut self, msg: impl AsRef<str>) {
        self.write(Level::Info, msg.as_ref());
    }

    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.write(Level::Warn, msg.as_ref());
    }

    pub fn error(&mut self, msg: impl AsRef<str>) {
        self.write(Level::Error, msg.as_ref());
    }

    fn write(&mut self, level: Level, msg: &str) {
        if level > self.max_level {
            return;
        }
        let stamp = Local::now().format("%Y/%m/%d %H:%M:%S %z");
        let _ = writeln!(self.file, "{stamp} {} {msg}", level.tag());
    }
}
