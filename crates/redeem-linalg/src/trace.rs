//! Injectable sinks for intermediate results.
//!
//! The helpers report what they computed (the projection, the RREF, the
//! transition matrix power) to a [`TraceSink`] instead of printing. The default
//! sink, [`NoTrace`], drops everything.

use std::fmt;

use crate::config::TraceConfig;

/// Log target used by [`LogTrace`].
pub const TRACE_TARGET: &str = "redeem_linalg::trace";

/// Receives a labelled observation of a computed value.
pub trait TraceSink {
    fn record(&self, label: &'static str, value: &dyn fmt::Display);
}

/// Sink that ignores every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&self, _label: &'static str, _value: &dyn fmt::Display) {}
}

impl<F> TraceSink for F
where
    F: Fn(&'static str, &dyn fmt::Display),
{
    fn record(&self, label: &'static str, value: &dyn fmt::Display) {
        self(label, value)
    }
}

/// Sink that forwards observations to the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogTrace {
    level: Option<log::Level>,
    precision: Option<usize>,
}

impl LogTrace {
    pub fn new(level: log::Level) -> Self {
        Self {
            level: Some(level),
            precision: None,
        }
    }

    /// A sink that never logs.
    pub fn disabled() -> Self {
        Self {
            level: None,
            precision: None,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn level(&self) -> Option<log::Level> {
        self.level
    }

    pub fn from_config(config: &TraceConfig) -> Self {
        let level = if config.enabled {
            Some(config.level.to_log_level())
        } else {
            None
        };
        Self {
            level,
            precision: config.precision,
        }
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        LogTrace::new(log::Level::Debug)
    }
}

impl TraceSink for LogTrace {
    fn record(&self, label: &'static str, value: &dyn fmt::Display) {
        let level = match self.level {
            Some(level) => level,
            None => return,
        };
        if !log::log_enabled!(target: TRACE_TARGET, level) {
            return;
        }
        match self.precision {
            Some(p) => log::log!(target: TRACE_TARGET, level, "{}:\n{:.*}", label, p, value),
            None => log::log!(target: TRACE_TARGET, level, "{}:\n{}", label, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraceLevel;
    use std::cell::RefCell;

    #[test]
    fn closure_sink_sees_label_and_value() {
        let seen = RefCell::new(Vec::new());
        let sink = |label: &'static str, value: &dyn fmt::Display| {
            seen.borrow_mut().push(format!("{}={}", label, value));
        };
        sink.record("answer", &42);
        assert_eq!(seen.into_inner(), vec!["answer=42".to_string()]);
    }

    #[test]
    fn log_trace_from_disabled_config_has_no_level() {
        let sink = LogTrace::from_config(&TraceConfig::default());
        assert_eq!(sink.level(), None);
        // must not panic even without a logger installed
        sink.record("projection", &1.5);
    }

    #[test]
    fn log_trace_from_enabled_config_maps_level() {
        let sink = LogTrace::from_config(&TraceConfig::new(TraceLevel::Trace));
        assert_eq!(sink.level(), Some(log::Level::Trace));
    }
}
