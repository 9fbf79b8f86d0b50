use std::sync::Once;

/// Log target prefix of the frame compositor (`compose::flush`, `compose::compositor`).
pub const COMPOSE_TARGET: &str = "strata_engine::compose";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax, e.g.
/// `"warn,strata_engine::layer=debug"` to watch layer edits only.
///
/// `trace_flushes` adds a `strata_engine::compose=trace` directive on top of
/// whichever filter wins, which prints per-flush statistics and batch closes
/// without turning up the rest of the crate.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub trace_flushes: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            trace_flushes: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Config with an explicit filter, ignoring `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    pub fn tracing_flushes(mut self) -> Self {
        self.trace_flushes = true;
        self
    }

    /// Filter string handed to `env_logger`.
    ///
    /// Precedence: `env_filter`, then `rust_log`, then `info`.
    fn directives(&self, rust_log: Option<String>) -> String {
        let mut spec = self
            .env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| "info".to_owned());

        if self.trace_flushes {
            if !spec.is_empty() {
                spec.push(',');
            }
            spec.push_str(COMPOSE_TARGET);
            spec.push_str("=trace");
        }
        spec
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger once.
///
/// Later calls are ignored, as is a logger some other crate already installed.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&directives);
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with {directives:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::with_filter("warn");
        assert_eq!(config.directives(Some("trace".into())), "warn");
    }

    #[test]
    fn rust_log_then_info_fallback() {
        let config = LoggingConfig::default();
        assert_eq!(config.directives(Some("strata_engine=debug".into())), "strata_engine=debug");
        assert_eq!(config.directives(None), "info");
    }

    #[test]
    fn flush_tracing_appends_compose_directive() {
        let config = LoggingConfig::with_filter("warn").tracing_flushes();
        assert_eq!(config.directives(None), "warn,strata_engine::compose=trace");

        let config = LoggingConfig::with_filter("").tracing_flushes();
        assert_eq!(config.directives(None), "strata_engine::compose=trace");
    }
}
