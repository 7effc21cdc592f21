//! The loaded configuration document: named top-level blocks, each a mapping.

use tracing::debug;

use crate::error::ConfigError;
use crate::types::Format;
use crate::value::{Mapping, Value};

/// A parsed configuration document.
///
/// Every top-level key names a block and every block is a mapping. A block
/// written as an empty value (`Alias:` in YAML) is an empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    blocks: Mapping,
}

impl Document {
    /// Parse `bytes` as a document in `format`. Empty or whitespace-only input
    /// is an empty document.
    pub fn parse(bytes: &[u8], format: Format) -> Result<Self, ConfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let root = parse_root(bytes, format)?;
        let document = Self::from_value(root, format)?;
        debug!(%format, blocks = document.len(), "parsed configuration document");
        Ok(document)
    }

    /// Build a document from an already-parsed root value. `format` only
    /// labels errors.
    pub fn from_value(root: Value, format: Format) -> Result<Self, ConfigError> {
        let entries = match root {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(entries) => entries,
            other => {
                return Err(ConfigError::ParseError {
                    format,
                    reason: format!("top level is a {}, expected a mapping", other.kind_name()),
                });
            }
        };

        let mut blocks = Mapping::new();
        for (name, body) in entries {
            let body = match body {
                Value::Null => Value::Mapping(Mapping::new()),
                body @ Value::Mapping(_) => body,
                other => {
                    return Err(ConfigError::ParseError {
                        format,
                        reason: format!(
                            "block '{name}' is a {}, expected a mapping",
                            other.kind_name()
                        ),
                    });
                }
            };
            blocks.insert(name, body);
        }
        Ok(Self { blocks })
    }

    /// The body of block `name`.
    pub fn block(&self, name: &str) -> Result<&Mapping, ConfigError> {
        self.block_value(name)?
            .as_mapping()
            .ok_or_else(|| ConfigError::MissingBlock(name.to_string()))
    }

    pub(crate) fn block_value(&self, name: &str) -> Result<&Value, ConfigError> {
        self.blocks
            .get(name)
            .ok_or_else(|| ConfigError::MissingBlock(name.to_string()))
    }

    /// Block names in sorted order.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn parse_root(bytes: &[u8], format: Format) -> Result<Value, ConfigError> {
    let parse_error = |reason: String| ConfigError::ParseError { format, reason };
    match format {
        Format::Yaml => serde_yaml::from_slice::<serde_yaml::Value>(bytes)
            .map(Value::from)
            .map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_slice::<serde_json::Value>(bytes)
            .map(Value::from)
            .map_err(|e| parse_error(e.to_string())),
        Format::Toml => {
            let text = std::str::from_utf8(bytes).map_err(|e| parse_error(e.to_string()))?;
            toml::from_str::<toml::Table>(text)
                .map(|table| Value::from(toml::Value::Table(table)))
                .map_err(|e| parse_error(e.to_string()))
        }
    }
}
