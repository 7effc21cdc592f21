use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Format;

/// Errors returned by the configurator's public operations.
#[derive(Debug, Error)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum ConfigError {
    #[error("Failed to parse {format} document: {reason}")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(confbind::parse),
            help("the top level must map block names to mappings")
        )
    )]
    ParseError { format: Format, reason: String },

    #[error("Failed to read {path}: {source}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(confbind::io)))]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Block '{0}' is not present in the configuration document")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(confbind::missing_block),
            help("check the block name passed to bind_block() against the loaded file")
        )
    )]
    MissingBlock(String),

    #[error(transparent)]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(confbind::bind)))]
    Bind(#[from] BindError),
}

impl ConfigError {
    /// The innermost binding failure, if this error came from binding.
    pub fn bind_kind(&self) -> Option<&BindErrorKind> {
        match self {
            ConfigError::Bind(err) => Some(err.kind()),
            _ => None,
        }
    }
}

/// What went wrong while binding a single value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindErrorKind {
    #[error("field '{field}' is not set in block '{block}'")]
    MissingField { field: String, block: String },

    #[error("cannot fill a record from a {found} value")]
    UnsupportedBodyType { found: &'static str },

    #[error("cannot store a {found} value in a {expected} field (block '{block}')")]
    TypeMismatch {
        found: &'static str,
        expected: String,
        block: String,
    },

    #[error("value {value} is below the minimum {minimum}")]
    BelowMinimum { value: String, minimum: String },

    #[error("value {value} is above the maximum {maximum}")]
    AboveMaximum { value: String, maximum: String },

    #[error("value {value} is not one of the allowed values ({candidates})")]
    NotInEnum { value: String, candidates: String },

    #[error("invalid '{tag}' tag: {reason}")]
    ConstraintMisuse { tag: &'static str, reason: String },

    #[error("environment variable '{variable}' is not set")]
    MissingEnvironmentVariable { variable: String },
}

/// One step of the path from a block down to the failing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Block(String),
    Field(String),
    Index(usize),
    Key(String),
}

/// A binding failure together with the path at which it happened.
///
/// The error is raised at the innermost frame with an empty path; each frame
/// it passes through on the way out prepends its own segment.
#[derive(Debug, Clone, PartialEq)]
pub struct BindError {
    kind: BindErrorKind,
    path: Vec<PathSegment>,
}

impl BindError {
    pub fn new(kind: BindErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub fn kind(&self) -> &BindErrorKind {
        &self.kind
    }

    /// Path segments, outermost first.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub(crate) fn within(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Prepend a field segment. Used by [`record!`](crate::record) for
    /// errors raised before the field is visited.
    pub fn in_field(self, key: &str) -> Self {
        self.within(PathSegment::Field(key.to_string()))
    }

    /// Render the path as `Block.field[2]["key"]`.
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Block(name) => out.push_str(name),
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(i) => out.push_str(&format!("[{i}]")),
                PathSegment::Key(key) => out.push_str(&format!("[\"{key}\"]")),
            }
        }
        out
    }
}

impl From<BindErrorKind> for BindError {
    fn from(kind: BindErrorKind) -> Self {
        BindError::new(kind)
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} (at {})", self.kind, self.path_string())
        }
    }
}

impl std::error::Error for BindError {}
