//! Telemetry and logging for SQL rendering
//!
//! Render calls emit `tracing` events under the `sqltree::render` target.
//! How much is emitted is chosen per renderer through
//! [`RenderOptions::with_log_level`](crate::ast::RenderOptions::with_log_level);
//! nothing is read from the environment. The subscriber decides where the
//! events go.
//!
//! - `off` - No logging (default)
//! - `basic` - Node kind, SQL text, parameter count and timing
//! - `detailed` - Basic plus every bound parameter value

use std::time::Instant;

use crate::ast::ParamValue;
use crate::error::RenderError;

/// Target used for every event emitted by this crate
pub const LOG_TARGET: &str = "sqltree::render";

/// SQL text longer than this is truncated in `basic` events
const BASIC_SQL_DISPLAY_LIMIT: usize = 1000;

/// Log level for render telemetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// No logging
    #[default]
    Off = 0,
    /// Basic info: SQL and timing
    Basic = 1,
    /// Detailed: SQL, timing and parameter values
    Detailed = 2,
}

/// Log a completed render
pub fn log_render(level: LogLevel, kind: &str, sql: &str, params: &[ParamValue], elapsed_us: u128) {
    if level < LogLevel::Basic {
        return;
    }

    let sql_display = if level >= LogLevel::Detailed {
        sql
    } else {
        truncate(sql, BASIC_SQL_DISPLAY_LIMIT)
    };

    tracing::debug!(
        target: LOG_TARGET,
        kind,
        sql = sql_display,
        params = params.len(),
        elapsed_us = elapsed_us as u64,
        "rendered statement"
    );

    if level >= LogLevel::Detailed {
        for (i, value) in params.iter().enumerate() {
            tracing::debug!(target: LOG_TARGET, kind, "param ${}: {:?}", i + 1, value);
        }
    }
}

/// Log a failed render
pub fn log_error(level: LogLevel, kind: &str, error: &RenderError) {
    if level < LogLevel::Basic {
        return;
    }

    tracing::warn!(target: LOG_TARGET, kind, error = %error, "render failed");
}

fn truncate(s: &str, limit: usize) -> &str {
    if s.len() <= limit {
        return s;
    }
    let mut end = limit;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Times one render call and logs its outcome
pub struct RenderTimer<'a> {
    start: Instant,
    level: LogLevel,
    kind: &'a str,
}

impl<'a> RenderTimer<'a> {
    /// Start a new render timer
    pub fn new(level: LogLevel, kind: &'a str) -> Self {
        Self {
            start: Instant::now(),
            level,
            kind,
        }
    }

    /// Get elapsed time in microseconds
    pub fn elapsed_us(&self) -> u128 {
        self.start.elapsed().as_micros()
    }

    /// Mark as successful and log
    pub fn success(self, sql: &str, params: &[ParamValue]) {
        log_render(self.level, self.kind, sql, params, self.elapsed_us());
    }

    /// Mark as failed and log
    pub fn failure(self, error: &RenderError) {
        log_error(self.level, self.kind, error);
    }
}
