//! Structured JSON logging to stderr.
//!
//! Each line is a JSON object with `level`, `msg`, any extra key-value
//! fields, and a `ts` timestamp (ISO 8601 UTC, millisecond precision):
//!
//! ```json
//! {"level":"warn","msg":"stored page size unreadable","value":"abc","ts":"2025-01-16T10:30:00.000Z"}
//! ```
//!
//! # Usage
//!
//! ```no_run
//! # use backoffice_paging::log;
//! let path = "/tmp/prefs.json";
//! log!(info, "preference saved", key: "page_size", path: path);
//! log!(warn, "falling back to default page size");
//!
//! log::info!("loaded {} preferences", 3);
//! log::debug!("raw value: {:?}", "25");
//! ```
//!
//! # Level Filter
//!
//! The minimum level is read once from `BACKOFFICE_LOG`
//! (`debug`, `info`, `warn`, `error` or `off`). Default is `info`.

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Level {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    Info,
    /// Recovered problems.
    Warn,
    /// Failed operations.
    Error,
    /// Nothing is logged.
    Off,
}

impl Level {
    /// Parse a level name (case-insensitive). Unknown names return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }
}

static MIN_LEVEL: OnceLock<Level> = OnceLock::new();

/// Minimum level that is written, from `BACKOFFICE_LOG` (default `info`).
pub fn min_level() -> Level {
    *MIN_LEVEL.get_or_init(|| {
        std::env::var("BACKOFFICE_LOG")
            .ok()
            .and_then(|v| Level::parse(&v))
            .unwrap_or(Level::Info)
    })
}

/// Whether a line at `level` (by name) passes the filter.
#[doc(hidden)]
#[must_use]
pub fn __enabled(level: &str) -> bool {
    Level::parse(level).is_some_and(|l| l != Level::Off && l >= min_level())
}

/// Current time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
#[doc(hidden)]
#[must_use]
pub fn __format_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    __format_timestamp_from_duration(now.as_secs(), now.subsec_millis())
}

/// Format a Unix timestamp given as seconds plus milliseconds.
///
/// Date conversion is Howard Hinnant's `civil_from_days`.
/// Reference: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
#[doc(hidden)]
#[must_use]
#[allow(clippy::similar_names)] // doe/doy are the algorithm's names
pub fn __format_timestamp_from_duration(secs: u64, millis: u32) -> String {
    let days = secs / SECONDS_PER_DAY;
    let rem = secs % SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    let minutes = (rem % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;

    // Epoch shifted to 0000-03-01; 719468 days separate it from 1970-01-01.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z")
}

/// Escape a string for JSON output per RFC 8259.
#[doc(hidden)]
#[must_use]
pub fn __escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(out, "\\u{:04x}", c as u32);
            },
            c => out.push(c),
        }
    }
    out
}

/// Build one JSON log line. The timestamp is always the last field.
#[doc(hidden)]
#[must_use]
pub fn __build_structured_log(level: &str, msg: &str, fields: &[(&str, &str)]) -> String {
    __build_structured_log_at(level, msg, fields, &__format_timestamp())
}

#[doc(hidden)]
#[must_use]
pub fn __build_structured_log_at(
    level: &str,
    msg: &str,
    fields: &[(&str, &str)],
    ts: &str,
) -> String {
    let mut out = String::with_capacity(48 + msg.len() + fields.len() * 24);
    out.push_str(r#"{"level":""#);
    out.push_str(level);
    out.push_str(r#"","msg":""#);
    out.push_str(&__escape_json(msg));
    out.push('"');
    for (key, value) in fields {
        out.push_str(r#",""#);
        out.push_str(&__escape_json(key));
        out.push_str(r#"":""#);
        out.push_str(&__escape_json(value));
        out.push('"');
    }
    out.push_str(r#","ts":""#);
    out.push_str(ts);
    out.push_str(r#""}"#);
    out
}

/// Structured logging with key-value fields.
///
/// ```no_run
/// # use backoffice_paging::log;
/// log!(warn, "stored page size unreadable", value: "abc");
/// log!(info, "preference saved");
/// ```
#[macro_export]
macro_rules! log {
    ($level:ident, $msg:expr $(, $key:ident : $value:expr)* $(,)?) => {{
        if $crate::log::__enabled(stringify!($level)) {
            use std::io::Write;
            let fields: &[(&str, &str)] = &[
                $( (stringify!($key), &format!("{}", $value)) ),*
            ];
            let line = $crate::log::__build_structured_log(stringify!($level), $msg, fields);
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }};
}

/// Format-string logging at a fixed level. Backs `log::info!` and friends.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_fmt {
    ($level:literal, $($arg:tt)*) => {{
        if $crate::log::__enabled($level) {
            use std::io::Write;
            let line = $crate::log::__build_structured_log($level, &format!($($arg)*), &[]);
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }};
}

/// Log an informational message.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::__log_fmt!("info", $($arg)*) };
}

/// Log a warning.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::__log_fmt!("warn", $($arg)*) };
}

/// Log an error.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::__log_fmt!("error", $($arg)*) };
}

/// Log a debug message. Compiled out of release builds.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::__log_fmt!("debug", $($arg)*)
        }
    }};
}

pub use log_debug as debug;
pub use log_error as error;
pub use log_info as info;
pub use log_warn as warn;
