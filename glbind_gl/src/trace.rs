use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::error::GlError;
use crate::methods::Method;

/// Which wrapped calls are reported to the [`TraceSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceMode {
    Off,
    /// Only calls that left an error flag behind.
    ErrorsOnly,
    All,
}

impl Default for TraceMode {
    fn default() -> Self {
        if cfg!(feature = "trace") {
            Self::All
        } else {
            Self::Off
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown trace mode {0:?}, expected off, errors or all")]
pub struct UnknownTraceMode(pub String);

impl FromStr for TraceMode {
    type Err = UnknownTraceMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "off" | "none" => Ok(Self::Off),
            "errors" | "error" | "errors-only" => Ok(Self::ErrorsOnly),
            "1" | "on" | "all" => Ok(Self::All),
            _ => Err(UnknownTraceMode(s.to_string())),
        }
    }
}

/// One wrapped GL call, as seen right after it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent<'a> {
    pub method: Method,
    pub error: Option<GlError>,
    /// The integer arguments the entry point is declared to trace.
    pub args: &'a [i64],
}

impl Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.method.symbol())?;
        for (index, arg) in self.args.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")?;

        if let Some(error) = self.error {
            write!(f, " -> {error}")?;
        }
        Ok(())
    }
}

pub trait TraceSink {
    fn record(&self, event: &TraceEvent<'_>);
}

impl<F: Fn(&TraceEvent<'_>)> TraceSink for F {
    fn record(&self, event: &TraceEvent<'_>) {
        self(event)
    }
}

/// Writes events to the `log` facade under the `glbind_gl::trace` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&self, event: &TraceEvent<'_>) {
        match event.error {
            Some(_) => log::warn!(target: "glbind_gl::trace", "{event}"),
            None => log::trace!(target: "glbind_gl::trace", "{event}"),
        }
    }
}
