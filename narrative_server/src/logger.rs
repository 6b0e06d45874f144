//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the effective log level is known.

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Initialise the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence when set; `level` is the fallback.
pub fn init(level: &str) -> Result<(), ServerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_for(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ServerError::Logger(format!("failed to set subscriber: {e}")))
}

/// Build a filter from a level or a list of `target=level` directives.
pub fn filter_for(level: &str) -> Result<EnvFilter, ServerError> {
    if level.trim().is_empty() {
        return Err(ServerError::Logger("log level must not be empty".into()));
    }
    EnvFilter::try_new(level)
        .map_err(|e| ServerError::Logger(format!("invalid log level '{level}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_levels_accepted() {
        for l in &["error", "warn", "info", "debug", "trace", "off"] {
            assert!(filter_for(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn test_target_directives_accepted() {
        assert!(filter_for("narrative_server=debug").is_ok());
        assert!(filter_for("info,narrative_server=trace,tower=warn").is_ok());
    }

    #[test]
    fn test_invalid_level_errors() {
        assert!(filter_for("narrative_server=loud").is_err());
        assert!(filter_for("").is_err());
    }

    #[test]
    fn test_init_succeeds_or_already_init() {
        match init("info") {
            Ok(()) => {}
            Err(ServerError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
