use crate::trace::TraceMode;

/// Settings applied while building a [`GlMethods`](crate::GlMethods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub trace: TraceMode,
}

impl LoadOptions {
    pub const TRACE_ENV: &'static str = "GLBIND_TRACE";

    pub const fn with_trace(mut self, trace: TraceMode) -> Self {
        self.trace = trace;
        self
    }

    /// Defaults, overridden by `GLBIND_TRACE` when it is set and readable.
    pub fn from_env() -> Self {
        let options = Self::default();
        match std::env::var(Self::TRACE_ENV) {
            Ok(value) => options.with_trace_str(&value),
            Err(_) => options,
        }
    }

    fn with_trace_str(self, value: &str) -> Self {
        match value.parse() {
            Ok(trace) => self.with_trace(trace),
            Err(err) => {
                log::warn!("ignoring {}: {err}", Self::TRACE_ENV);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trace_values() {
        let options = LoadOptions::default().with_trace(TraceMode::Off);
        assert_eq!(options.with_trace_str("all").trace, TraceMode::All);
        assert_eq!(options.with_trace_str("ERRORS").trace, TraceMode::ErrorsOnly);
        assert_eq!(options.with_trace_str(" off ").trace, TraceMode::Off);
    }

    #[test]
    fn bad_values_keep_the_default() {
        let options = LoadOptions::default().with_trace(TraceMode::ErrorsOnly);
        assert_eq!(options.with_trace_str("loud").trace, TraceMode::ErrorsOnly);
    }
}
