//! Per-field binding tags.
//!
//! A [`Field`] is the set of tags attached to one destination field:
//!
//! | Tag    | Meaning                                              |
//! |--------|------------------------------------------------------|
//! | `conf` | document key to read; `-` or empty means "skip"      |
//! | `min`  | inclusive lower bound, numeric fields only           |
//! | `max`  | inclusive upper bound, numeric fields only           |
//! | `enum` | `;`-separated allowed values, numeric or string      |
//! | `env`  | must be `true`; the value names an env variable      |
//!
//! Fields are built with the const builder methods or parsed from a
//! struct-tag string such as `conf:"Int64Val" min:"100500"`.

use crate::error::{BindError, BindErrorKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Field {
    key: Option<&'static str>,
    min: Option<&'static str>,
    max: Option<&'static str>,
    one_of: Option<&'static str>,
    env: Option<&'static str>,
}

impl Field {
    /// A field bound from document key `key`.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key: Some(key),
            min: None,
            max: None,
            one_of: None,
            env: None,
        }
    }

    /// A field the binder never visits.
    pub const fn skip() -> Self {
        Self {
            key: None,
            min: None,
            max: None,
            one_of: None,
            env: None,
        }
    }

    pub const fn min(mut self, literal: &'static str) -> Self {
        self.min = Some(literal);
        self
    }

    pub const fn max(mut self, literal: &'static str) -> Self {
        self.max = Some(literal);
        self
    }

    /// Restrict the value to a `;`-separated set of literals.
    pub const fn one_of(mut self, literals: &'static str) -> Self {
        self.one_of = Some(literals);
        self
    }

    pub const fn env(mut self, flag: &'static str) -> Self {
        self.env = Some(flag);
        self
    }

    /// Document key to bind from, or `None` when the field is skipped.
    pub fn key(&self) -> Option<&'static str> {
        self.key.filter(|k| !k.is_empty() && *k != "-")
    }

    pub fn min_literal(&self) -> Option<&'static str> {
        self.min.filter(|v| !v.is_empty() && *v != "-")
    }

    pub fn max_literal(&self) -> Option<&'static str> {
        self.max.filter(|v| !v.is_empty() && *v != "-")
    }

    pub fn enum_literal(&self) -> Option<&'static str> {
        self.one_of.filter(|v| !v.is_empty())
    }

    pub fn env_flag(&self) -> Option<&'static str> {
        self.env.filter(|v| !v.is_empty() && *v != "-")
    }

    /// Parse a struct-tag string: space-separated `name:"value"` pairs.
    ///
    /// Unknown tag names are ignored so a tag string can be shared with
    /// other tooling. A value may not contain a double quote.
    pub fn parse(tag: &'static str) -> Result<Self, BindError> {
        let malformed = |reason: String| {
            BindError::new(BindErrorKind::ConstraintMisuse { tag: "conf", reason })
        };

        let mut field = Field::skip();
        let mut rest = tag.trim_start();
        while !rest.is_empty() {
            let Some((name, after)) = rest.split_once(':') else {
                return Err(malformed(format!("expected name:\"value\" in `{tag}`")));
            };
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(malformed(format!("bad tag name '{name}' in `{tag}`")));
            }
            let Some(after) = after.strip_prefix('"') else {
                return Err(malformed(format!("value of '{name}' must be quoted in `{tag}`")));
            };
            let Some((value, after)) = after.split_once('"') else {
                return Err(malformed(format!("unterminated value of '{name}' in `{tag}`")));
            };

            match name {
                "conf" => field.key = Some(value),
                "min" => field.min = Some(value),
                "max" => field.max = Some(value),
                "enum" => field.one_of = Some(value),
                "env" => field.env = Some(value),
                _ => {}
            }
            rest = after.trim_start();
        }
        Ok(field)
    }
}

/// Anything that can describe a field's tags: a [`Field`] or a struct-tag
/// string. Used by the [`record!`](crate::record) macro.
pub trait IntoField {
    fn into_field(self) -> Result<Field, BindError>;
}

impl IntoField for Field {
    fn into_field(self) -> Result<Field, BindError> {
        Ok(self)
    }
}

impl IntoField for &'static str {
    fn into_field(self) -> Result<Field, BindError> {
        Field::parse(self)
    }
}
