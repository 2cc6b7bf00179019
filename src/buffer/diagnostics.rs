//! # Diagnostic Sinks
//!
//! Underflow and out-of-bounds conditions are reported through a
//! [`DiagnosticSink`] rather than a fixed log destination. The default sink
//! forwards to the `log` crate; callers can substitute a closure, a
//! rate-limited wrapper, or their own collector.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use bitbuf_rs::{BitBuffer, BufferConfig};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = {
//!     let seen = Rc::clone(&seen);
//!     move |msg: &str| seen.borrow_mut().push(msg.to_string())
//! };
//!
//! let mut buffer = BitBuffer::copied(&[0x01]).unwrap()
//!     .with_config(BufferConfig::default().with_sink(sink));
//! assert!(buffer.get_u16(0).is_err());
//! assert_eq!(seen.borrow().len(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::constants::LOG_TARGET;
use crate::util::logging::LogThrottle;

/// Receiver for buffer warnings
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `log::warn!` under the `bitbuf` target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{message}");
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str),
{
    fn warn(&self, message: &str) {
        self(message)
    }
}

/// Rate-limited wrapper around another sink
///
/// Decoders that probe optional trailing fields can hit the end of a short
/// frame on every record; this keeps at most `cap` warnings per window.
pub struct ThrottledSink<S> {
    inner: S,
    throttle: RefCell<LogThrottle>,
}

impl<S: DiagnosticSink> ThrottledSink<S> {
    pub fn new(inner: S, window_ms: u64, cap: u32) -> Self {
        Self {
            inner,
            throttle: RefCell::new(LogThrottle::new(window_ms, cap)),
        }
    }

    /// Warnings dropped in the current window
    pub fn suppressed(&self) -> u32 {
        self.throttle.borrow().suppressed()
    }
}

impl<S: DiagnosticSink> DiagnosticSink for ThrottledSink<S> {
    fn warn(&self, message: &str) {
        let allowed = self.throttle.borrow_mut().allow();
        if allowed {
            self.inner.warn(message);
        }
    }
}

impl<S> fmt::Debug for ThrottledSink<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottledSink")
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_sink_receives_message() {
        let last = RefCell::new(String::new());
        let sink = |msg: &str| *last.borrow_mut() = msg.to_string();
        sink.warn("underflow");
        assert_eq!(*last.borrow(), "underflow");
    }

    #[test]
    fn test_throttled_sink_caps_output() {
        let count = Rc::new(Cell::new(0u32));
        let inner = {
            let count = Rc::clone(&count);
            move |_: &str| count.set(count.get() + 1)
        };
        let sink = ThrottledSink::new(inner, 60_000, 3);
        for _ in 0..10 {
            sink.warn("Not enough data to fetch");
        }
        assert_eq!(count.get(), 3);
        assert_eq!(sink.suppressed(), 7);
    }

    #[test]
    fn test_log_sink_does_not_panic() {
        crate::logging::init_test_logger();
        LogSink.warn("Detected underflow");
    }
}
