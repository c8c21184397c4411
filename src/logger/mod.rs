//! Process-wide logger for the planner.
//!
//! Levels are gated by cargo features: `log-info` enables `info!`, `log-debug`
//! enables `debug!` plus a runtime switch, `verbose` enables the untagged
//! `verbose!` printer and `file-logging` lets tagged output go to a file
//! instead of the terminal. `error!` and `warn!` are always compiled in.

use std::fmt::{self, Arguments};
use std::str::FromStr;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::{LazyLock, Mutex},
};

/// Severity of a log record. Lower values are more severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures the user must see.
    Error = 1,
    /// Recoverable problems, such as dirty records that were skipped.
    Warn = 2,
    /// Progress messages (needs `log-info`).
    Info = 3,
    /// Diagnostic detail (needs `log-debug` and the runtime switch).
    Debug = 4,
}

impl Level {
    /// Bracketed tag printed in front of each record.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: '{other}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

const fn compiled_default() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(compiled_default());
#[cfg(feature = "log-debug")]
static DEBUG_SWITCH: AtomicBool = AtomicBool::new(true);
#[cfg(feature = "verbose")]
static VERBOSE_SWITCH: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static SINK: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the most verbose level that will be emitted.
pub fn set_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current maximum level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(MAX_LEVEL.load(Ordering::SeqCst))
}

/// Parse `level` and apply it. Returns `false` and leaves the level untouched
/// when the string is not a known level.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Turn `debug!` output on.
pub fn enable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_SWITCH.store(true, Ordering::SeqCst);
}

/// Turn `debug!` output off without changing the level.
pub fn disable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_SWITCH.store(false, Ordering::SeqCst);
}

/// Whether `debug!` output is switched on. Always false without `log-debug`.
#[must_use]
pub fn is_debug_enabled() -> bool {
    #[cfg(feature = "log-debug")]
    {
        DEBUG_SWITCH.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "log-debug"))]
    {
        false
    }
}

/// Turn `verbose!` output on.
pub fn enable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_SWITCH.store(true, Ordering::SeqCst);
}

/// Turn `verbose!` output off.
pub fn disable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_SWITCH.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` output is switched on. Always false without `verbose`.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    #[cfg(feature = "verbose")]
    {
        VERBOSE_SWITCH.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "verbose"))]
    {
        false
    }
}

/// Route tagged records to `path` (appending). Returns `true` when the file
/// could be opened; without `file-logging` this always returns `false`.
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    #[cfg(feature = "file-logging")]
    {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .is_ok_and(|file| {
                SINK.lock().is_ok_and(|mut sink| {
                    *sink = Some(file);
                    true
                })
            })
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = path;
        false
    }
}

/// Write to the log file if one is configured. Returns `true` when handled.
fn write_to_sink(line: &str) -> bool {
    #[cfg(feature = "file-logging")]
    {
        if let Ok(mut sink) = SINK.lock() {
            if let Some(file) = sink.as_mut() {
                let _ = writeln!(file, "{line}");
                let _ = file.flush();
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = line;
        false
    }
}

fn enabled(level: Level) -> bool {
    let compiled = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled && level <= self::level()
}

/// Dispatcher behind the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !enabled(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_sink(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Logs an error-level message.
#[macro_export]
macro_rules! error { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*)) }; }
/// Logs a warning-level message.
#[macro_export]
macro_rules! warn  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Warn,  format_args!($($arg)*)) }; }
/// Logs an info-level message (requires `log-info`).
#[macro_export]
macro_rules! info  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Info,  format_args!($($arg)*)) }; }
/// Logs a debug-level message (requires `log-debug` and the runtime switch).
#[macro_export]
macro_rules! debug { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*)) }; }
/// Prints an untagged line when verbose output is on. Never written to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() { println!($($arg)*); }
    };
}
