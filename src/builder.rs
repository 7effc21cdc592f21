use std::path::Path;

use tracing::{debug, instrument};

use crate::bind::{Bind, Context};
use crate::document::Document;
use crate::env::EnvSource;
use crate::error::{ConfigError, PathSegment};
use crate::types::Format;
use crate::value::Mapping;

/// Holds one loaded configuration document and binds its blocks into typed
/// destinations.
///
/// ```
/// use confbind::{Configurator, Field, record};
///
/// #[derive(Default)]
/// struct Alias {
///     port: u16,
/// }
/// record!(Alias { port => Field::new("Port").min("1024") });
///
/// let mut config = Configurator::new();
/// config.load(b"Alias:\n  Port: 8080\n")?;
/// let alias: Alias = config.parse_block("Alias")?;
/// assert_eq!(alias.port, 8080);
/// # Ok::<(), confbind::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct Configurator {
    document: Document,
    format: Format,
    env: EnvSource,
}

impl Configurator {
    /// A configurator reading YAML and the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfiguratorBuilder {
        ConfiguratorBuilder::new()
    }

    /// Format used by [`load`](Self::load) and by [`read_file`](Self::read_file)
    /// when the extension says nothing.
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the stored document with `bytes` parsed in the configured format.
    ///
    /// On failure the store is left empty, never holding the previous document.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        self.load_as(bytes, self.format)
    }

    /// Like [`load`](Self::load), with an explicit format.
    pub fn load_as(&mut self, bytes: &[u8], format: Format) -> Result<(), ConfigError> {
        self.document = Document::default();
        self.document = Document::parse(bytes, format)?;
        debug!(%format, blocks = self.document.len(), "configuration loaded");
        Ok(())
    }

    /// Read and load a file. The format follows the extension (`.yaml`,
    /// `.yml`, `.toml`, `.json`) and falls back to the configured format.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path).unwrap_or(self.format);
        let bytes = std::fs::read(path).map_err(|e| {
            self.document = Document::default();
            ConfigError::IoError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        debug!(path = %path.display(), %format, "reading configuration file");
        self.load_as(&bytes, format)
    }

    /// The raw body of block `name`.
    pub fn block(&self, name: &str) -> Result<&Mapping, ConfigError> {
        self.document.block(name)
    }

    /// Bind block `name` into `dest`.
    ///
    /// Errors carry the path from the block down to the failing value. Fields
    /// bound before a failure keep their new values.
    #[instrument(level = "debug", skip(self, dest))]
    pub fn bind_block<T: Bind>(&self, dest: &mut T, name: &str) -> Result<(), ConfigError> {
        let raw = self.document.block_value(name)?;
        let cx = Context::new(name, &self.env);
        dest.bind(raw, &cx)
            .map_err(|e| e.within(PathSegment::Block(name.to_string())))?;
        debug!(block = name, "block bound");
        Ok(())
    }

    /// Bind block `name` into a fresh `T::default()`.
    pub fn parse_block<T: Bind + Default>(&self, name: &str) -> Result<T, ConfigError> {
        let mut dest = T::default();
        self.bind_block(&mut dest, name)?;
        Ok(dest)
    }
}

/// Builder for a [`Configurator`] with a non-default format or environment.
#[derive(Debug, Default)]
pub struct ConfiguratorBuilder {
    format: Format,
    env: EnvSource,
}

impl ConfiguratorBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Set the format for [`Configurator::load`] (default: YAML).
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Resolve `env:"true"` fields from these variables instead of the
    /// process environment.
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::from_vars(vars);
        self
    }

    pub fn env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    pub fn build(self) -> Configurator {
        Configurator {
            document: Document::default(),
            format: self.format,
            env: self.env,
        }
    }
}
