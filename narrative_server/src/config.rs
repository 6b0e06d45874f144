//! Server configuration.
//!
//! Values come from three layers, highest precedence first: command-line
//! overrides, an optional TOML file, and built-in defaults. Every key in the
//! file is optional.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [story]
//! file = "gopher.json"
//! strict = false
//!
//! [template]
//! file = "page.tmpl"
//!
//! [log]
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ServerError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// JSON story to serve.
    pub file: PathBuf,
    /// Refuse to start if validation finds dangling or unreachable chapters.
    pub strict: bool,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("gopher.json"),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Page layout file. The built-in layout is used when unset.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub story: StoryConfig,
    pub template: TemplateConfig,
    pub log: LogConfig,
}

/// Values given on the command line. `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub story_file: Option<PathBuf>,
    pub template_file: Option<PathBuf>,
    pub strict: bool,
    pub log_level: Option<String>,
}

impl ServerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ServerError> {
        toml::from_str(raw).map_err(|e| ServerError::Config(format!("parse error: {e}")))
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| ServerError::Config(format!("parse error in {}: {e}", path.display())))
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// command-line overrides.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ServerError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(file) = overrides.story_file {
            self.story.file = file;
        }
        if let Some(file) = overrides.template_file {
            self.template.file = Some(file);
        }
        if overrides.strict {
            self.story.strict = true;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        self
    }

    /// Address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.story.file, PathBuf::from("gopher.json"));
        assert!(!config.story.strict);
        assert!(config.template.file.is_none());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::from_toml_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.story, StoryConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 4000

            [story]
            file = "stories/cave.json"
            strict = true

            [template]
            file = "page.tmpl"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
        assert_eq!(config.story.file, PathBuf::from("stories/cave.json"));
        assert!(config.story.strict);
        assert_eq!(config.template.file, Some(PathBuf::from("page.tmpl")));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = ServerConfig::from_toml_str("[database]\nurl = \"x\"\n").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = ServerConfig::from_toml_str("[server]\nport = 8080\n[log]\nlevel = \"warn\"\n")
            .unwrap()
            .with_overrides(Overrides {
                port: Some(9000),
                story_file: Some(PathBuf::from("other.json")),
                template_file: None,
                strict: true,
                log_level: None,
            });

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.story.file, PathBuf::from("other.json"));
        assert!(config.story.strict);
        assert!(config.template.file.is_none());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[story]\nfile = \"from-file.json\"").unwrap();

        let config = ServerConfig::load(Some(file.path()), Overrides::default()).unwrap();
        assert_eq!(config.story.file, PathBuf::from("from-file.json"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ServerConfig::load(Some(Path::new("/nonexistent/cyoa.toml")), Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ServerConfig::load(None, Overrides::default()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
