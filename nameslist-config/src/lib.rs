//! Shared configuration loader for the NamesList converter.
//!
//! `defaults/nameslist.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NamesListConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/nameslist.default.toml");

/// Top-level configuration consumed by the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct NamesListConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub xml: XmlConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: String,
}

/// Mirrors the knobs exposed by the XML serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    pub indent: String,
    pub declaration: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl LoggingConfig {
    /// The log file, or `None` when logging goes to stderr.
    pub fn file_path(&self) -> Option<&Path> {
        if self.file.is_empty() {
            None
        } else {
            Some(Path::new(&self.file))
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NamesListConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NamesListConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.input.path, PathBuf::from("NamesList.txt"));
        assert_eq!(config.output.path, PathBuf::from("NamesList.xml"));
        assert_eq!(config.output.format, "xml");
        assert_eq!(config.xml.indent, "\t");
        assert!(config.xml.declaration);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file_path(), Some(Path::new("parser.log")));
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .set_override("logging.file", "")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "treeviz");
        assert_eq!(config.logging.file_path(), None);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[xml]\nindent = \"  \"\n\n[input]\npath = \"data/NamesList.txt\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.xml.indent, "  ");
        assert_eq!(config.input.path, PathBuf::from("data/NamesList.txt"));
        // Untouched keys keep their defaults
        assert!(config.xml.declaration);
        assert_eq!(config.output.format, "xml");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("definitely/not/here/nameslist.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here/nameslist.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.format, "xml");
    }
}
