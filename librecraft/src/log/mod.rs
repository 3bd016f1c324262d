//! Plugin-side encoder for the host's log sink.
//!
//! The host collects plugin log output from stderr. Each line carries a level
//! marker so the host can route it: `\x01` + level byte + `\x02` + message.
//! Raw result data goes to stdout instead.
//!
//! Logging is best-effort by contract: a failed write is dropped, never
//! surfaced, so a broken stderr pipe cannot take down an otherwise healthy
//! invocation.

use std::io::Write;

#[cfg(test)]
mod tests;

/// Log levels understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Progress,
}

impl Level {
    /// The level marker byte used on the wire.
    fn marker(self) -> u8 {
        match self {
            Level::Trace => b't',
            Level::Debug => b'd',
            Level::Info => b'i',
            Level::Warning => b'w',
            Level::Error => b'e',
            Level::Progress => b'p',
        }
    }
}

/// Encodes one log line for the host: `\x01{level}\x02{message}\n`.
///
/// Embedded newlines are replaced with carriage returns so a multi-line
/// message still arrives as a single host-side log entry.
fn encode(level: Level, message: &str) -> Vec<u8> {
    let mut line = Vec::with_capacity(message.len() + 4);
    line.push(0x01);
    line.push(level.marker());
    line.push(0x02);
    line.extend_from_slice(message.replace('\n', "\r").as_bytes());
    line.push(b'\n');
    line
}

/// Writes one encoded log line to the given writer, best-effort.
fn emit<W: Write>(writer: &mut W, level: Level, message: &str) {
    let _ = writer.write_all(&encode(level, message));
    let _ = writer.flush();
}

/// Logs a message at the given level to the host via stderr.
pub fn log(level: Level, message: &str) {
    emit(&mut std::io::stderr(), level, message);
}

/// Logs a trace message.
pub fn trace(message: &str) {
    log(Level::Trace, message);
}

/// Logs a debug message.
pub fn debug(message: &str) {
    log(Level::Debug, message);
}

/// Logs an info message.
pub fn info(message: &str) {
    log(Level::Info, message);
}

/// Logs a warning.
pub fn warning(message: &str) {
    log(Level::Warning, message);
}

/// Logs an error.
pub fn error(message: &str) {
    log(Level::Error, message);
}

/// Formats a progress fraction for the wire, clamped into [0, 1].
///
/// Non-finite values have no sensible clamp and are dropped.
fn format_progress(fraction: f64) -> Option<String> {
    if !fraction.is_finite() {
        return None;
    }
    Some(fraction.clamp(0.0, 1.0).to_string())
}

/// Reports task progress to the host as a fraction in [0, 1].
///
/// Out-of-range values are clamped; non-finite values are dropped, matching
/// the best-effort contract of the sink.
pub fn progress(fraction: f64) {
    if let Some(value) = format_progress(fraction) {
        log(Level::Progress, &value);
    }
}

/// Writes raw result data for the host to stdout, best-effort.
pub fn result(data: &str) {
    let mut stdout = std::io::stdout();
    let _ = writeln!(stdout, "{}", data);
    let _ = stdout.flush();
}
