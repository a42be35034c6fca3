use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Level at which traced results are written to the `log` facade.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn to_log_level(self) -> log::Level {
        match self {
            TraceLevel::Error => log::Level::Error,
            TraceLevel::Warn => log::Level::Warn,
            TraceLevel::Info => log::Level::Info,
            TraceLevel::Debug => log::Level::Debug,
            TraceLevel::Trace => log::Level::Trace,
        }
    }
}

impl FromStr for TraceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(TraceLevel::Error),
            "warn" | "warning" => Ok(TraceLevel::Warn),
            "info" => Ok(TraceLevel::Info),
            "debug" => Ok(TraceLevel::Debug),
            "trace" => Ok(TraceLevel::Trace),
            _ => Err(format!(
                "Unknown trace level: {}. Expected one of error, warn, info, debug, trace",
                s
            )),
        }
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraceLevel::Error => "error",
            TraceLevel::Warn => "warn",
            TraceLevel::Info => "info",
            TraceLevel::Debug => "debug",
            TraceLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Controls whether intermediate results are traced.
///
/// Tracing is off by default; the numeric helpers then have no side effects.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TraceConfig {
    pub enabled: bool,
    pub level: TraceLevel,
    /// Decimal places used when formatting floating-point results.
    pub precision: Option<usize>,
}

impl TraceConfig {
    pub fn new(level: TraceLevel) -> Self {
        Self {
            enabled: true,
            level,
            precision: None,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Load a trace configuration from a JSON file.
pub fn load_trace_config<P: AsRef<Path>>(path: P) -> Result<TraceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: TraceConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
