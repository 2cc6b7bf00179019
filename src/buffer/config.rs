//! Per-buffer configuration.
//!
//! Whether bounds probes report underflow is a property of the buffer, not
//! process-wide state. `from_env` reads `BITBUF_DEBUG` for callers that want
//! the switch controlled at deploy time.

use std::env;
use std::fmt;
use std::rc::Rc;

use super::diagnostics::{DiagnosticSink, LogSink};
use crate::constants::DEBUG_ENV_VAR;

/// Diagnostics configuration threaded into each `BitBuffer`
#[derive(Clone)]
pub struct BufferConfig {
    /// Report failed `has_enough_data` probes to the sink
    report_probe_underflow: bool,
    sink: Rc<dyn DiagnosticSink>,
}

impl BufferConfig {
    pub fn new() -> Self {
        Self {
            report_probe_underflow: false,
            sink: Rc::new(LogSink),
        }
    }

    /// Default configuration with probe reporting taken from `BITBUF_DEBUG`
    ///
    /// Accepts `1`, `true`, `yes` or `on` (case-insensitive); anything else,
    /// including an unset variable, leaves reporting off.
    pub fn from_env() -> Self {
        let enabled = env::var(DEBUG_ENV_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self::new().with_probe_reporting(enabled)
    }

    pub fn with_probe_reporting(mut self, enabled: bool) -> Self {
        self.report_probe_underflow = enabled;
        self
    }

    pub fn with_sink<S: DiagnosticSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    /// Use a sink shared with other buffers or with the caller
    pub fn with_shared_sink(mut self, sink: Rc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn report_probe_underflow(&self) -> bool {
        self.report_probe_underflow
    }

    pub(crate) fn warn(&self, message: &str) {
        self.sink.warn(message);
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BufferConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferConfig")
            .field("report_probe_underflow", &self.report_probe_underflow)
            .finish_non_exhaustive()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
