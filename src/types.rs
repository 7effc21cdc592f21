use std::fmt;
use std::path::Path;

/// Markup format of a configuration document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Infer the format from a file extension (`yaml`, `yml`, `toml`, `json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// Scalar destination kinds understood by the coercion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Str,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Duration,
}

impl ScalarKind {
    pub fn is_integer(self) -> bool {
        self.integer_bounds().is_some()
    }

    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    /// Kinds that accept `min`, `max` and numeric `enum` constraints.
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Inclusive range of an integer kind, widened to `i128`.
    pub fn integer_bounds(self) -> Option<(i128, i128)> {
        let bounds = match self {
            ScalarKind::I8 => (i8::MIN as i128, i8::MAX as i128),
            ScalarKind::I16 => (i16::MIN as i128, i16::MAX as i128),
            ScalarKind::I32 => (i32::MIN as i128, i32::MAX as i128),
            ScalarKind::I64 => (i64::MIN as i128, i64::MAX as i128),
            ScalarKind::Isize => (isize::MIN as i128, isize::MAX as i128),
            ScalarKind::U8 => (0, u8::MAX as i128),
            ScalarKind::U16 => (0, u16::MAX as i128),
            ScalarKind::U32 => (0, u32::MAX as i128),
            ScalarKind::U64 => (0, u64::MAX as i128),
            ScalarKind::Usize => (0, usize::MAX as i128),
            _ => return None,
        };
        Some(bounds)
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Str => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Duration => "duration",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of a destination kind.
///
/// Every [`Bind`](crate::Bind) implementation reports its shape so the
/// validation layer can decide which constraint tags are legal on a field
/// before any value is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Scalar(ScalarKind),
    Record,
    Optional(Box<Shape>),
    Sequence(Box<Shape>),
    Map(Box<Shape>),
}

impl Shape {
    /// The scalar kind a constraint tag applies to, looking through at most
    /// one optional wrapper. Returns the kind and whether it was wrapped.
    pub fn constrained_scalar(&self) -> Option<(ScalarKind, bool)> {
        match self {
            Shape::Scalar(kind) => Some((*kind, false)),
            Shape::Optional(inner) => match inner.as_ref() {
                Shape::Scalar(kind) => Some((*kind, true)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => write!(f, "{kind}"),
            Shape::Record => f.write_str("record"),
            Shape::Optional(inner) => write!(f, "optional {inner}"),
            Shape::Sequence(inner) => write!(f, "sequence of {inner}"),
            Shape::Map(inner) => write!(f, "map of {inner}"),
        }
    }
}
