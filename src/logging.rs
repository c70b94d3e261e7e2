// ABOUTME: Logging configuration and structured logging setup for the supplement advisor
// ABOUTME: Configures log level, output format, and noise reduction for HTTP client crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Supplement Advisor Contributors

//! Structured logging configuration
//!
//! Logs go to stderr so the CLI can keep stdout for report output.

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::constants::service_names;

/// Target of this crate's own directive
const CRATE_TARGET: &str = "supplement_advisor";

/// HTTP crates quieted to `warn` unless `RUST_LOG` names them
const NOISY_TARGETS: [&str; 3] = ["hyper", "reqwest", "wiremock"];

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::SUPPLEMENT_ADVISOR.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::SUPPLEMENT_ADVISOR.into()),
        }
    }

    /// Override the level, e.g. for a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter from the configured `RUST_LOG`-style value.
    ///
    /// The value is used as-is, then HTTP crates not named in it are capped at
    /// `warn` and, unless it already has a directive for this crate, the crate
    /// gets one at the value's bare level (`info` when there is none).
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::new(&self.level);
        for target in NOISY_TARGETS {
            if !names_target(&self.level, target) {
                filter = filter.add_directive(directive(&format!("{target}=warn"), Level::WARN));
            }
        }
        if names_target(&self.level, CRATE_TARGET) {
            return filter;
        }
        let level = base_level(&self.level).unwrap_or("info");
        filter.add_directive(directive(&format!("{CRATE_TARGET}={level}"), Level::INFO))
    }

    /// Formatting layer for the configured format, writing to `writer`
    fn fmt_layer<W>(&self, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events)
            .with_writer(writer);

        match self.format {
            LogFormat::Json => layer.with_target(true).json().boxed(),
            LogFormat::Pretty => layer.with_target(true).boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.fmt_layer(io::stderr))
            .with(self.env_filter())
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        debug!(
            service.name = %self.service_name,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

fn directive(raw: &str, fallback: Level) -> Directive {
    raw.parse().unwrap_or_else(|_| fallback.into())
}

fn directives(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(',').map(str::trim).filter(|d| !d.is_empty())
}

/// Whether `spec` has a directive for `target` or one of its modules
fn names_target(spec: &str, target: &str) -> bool {
    directives(spec).any(|d| {
        let name = d.split(['=', '[']).next().unwrap_or(d);
        name.strip_prefix(target)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// First directive of `spec` that is a bare level such as `debug`
fn base_level(spec: &str) -> Option<&str> {
    directives(spec).find(|d| d.parse::<LevelFilter>().is_ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::subscriber::with_default;
    use tracing::{info, info_span};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(config: &LoggingConfig, emit: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber =
            tracing_subscriber::registry().with(config.fmt_layer(move || writer.clone()));
        with_default(subscriber, emit);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.service_name, "supplement-advisor");
    }

    #[test]
    fn test_filter_keeps_configured_level() {
        let filter = LoggingConfig::default().with_level("debug").env_filter();
        let rendered = filter.to_string();
        assert!(rendered.contains("supplement_advisor=debug"));
        assert!(rendered.contains("reqwest=warn"));
    }

    #[test]
    fn test_filter_accepts_multi_directive_value() {
        let rendered = LoggingConfig::default()
            .with_level("warn,reqwest=debug")
            .env_filter()
            .to_string();
        assert!(rendered.contains("supplement_advisor=warn"), "{rendered}");
        assert!(rendered.contains("reqwest=debug"), "{rendered}");
        assert!(!rendered.contains("reqwest=warn"), "{rendered}");
        assert!(rendered.contains("hyper=warn"), "{rendered}");
    }

    #[test]
    fn test_filter_keeps_explicit_crate_directive() {
        let rendered = LoggingConfig::default()
            .with_level("info,supplement_advisor::services=trace")
            .env_filter()
            .to_string();
        assert!(
            rendered.contains("supplement_advisor::services=trace"),
            "{rendered}"
        );
        assert!(!rendered.contains("supplement_advisor=info"), "{rendered}");
    }

    #[test]
    fn test_directive_helpers() {
        assert!(names_target("info,reqwest=debug", "reqwest"));
        assert!(names_target("hyper::client", "hyper"));
        assert!(!names_target("hyperlocal=debug", "hyper"));
        assert_eq!(base_level("reqwest=debug, trace"), Some("trace"));
        assert_eq!(base_level("reqwest=debug"), None);
    }

    #[test]
    fn test_compact_format_honors_location() {
        let located = LoggingConfig {
            include_location: true,
            ..LoggingConfig::default()
        };
        let output = capture(&located, || info!("report ready"));
        assert!(output.contains("report ready"), "{output}");
        assert!(output.contains("logging.rs"), "{output}");

        let output = capture(&LoggingConfig::default(), || info!("report ready"));
        assert!(!output.contains("logging.rs"), "{output}");
    }

    #[test]
    fn test_compact_format_honors_span_events() {
        let emit = || {
            let span = info_span!("generate_report");
            let _entered = span.enter();
        };
        let with_spans = LoggingConfig {
            include_spans: true,
            ..LoggingConfig::default()
        };
        let output = capture(&with_spans, emit);
        assert!(output.contains("generate_report"), "{output}");
        assert!(output.contains("close"), "{output}");

        assert!(capture(&LoggingConfig::default(), emit).is_empty());
    }
}
