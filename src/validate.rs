//! Constraint tags: `min`, `max`, `enum` and `env`.
//!
//! Numeric comparisons happen in one wide domain: integer kinds compare as
//! `i128`, anything involving a float compares as `f64`. Constraint literals
//! are parsed when the field is bound; a literal that does not parse is a
//! [`ConstraintMisuse`](BindErrorKind::ConstraintMisuse), never ignored.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::bind::Context;
use crate::coerce::{self, Typed};
use crate::error::{BindError, BindErrorKind};
use crate::tags::Field;
use crate::types::{ScalarKind, Shape};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn of(value: &Typed) -> Option<Self> {
        match value {
            Typed::Int(i) => Some(Number::Int(*i)),
            Typed::Float(x) => Some(Number::Float(*x)),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

fn misuse(tag: &'static str, reason: String) -> BindError {
    BindError::new(BindErrorKind::ConstraintMisuse { tag, reason })
}

/// Parse a `min`/`max` literal in the domain of `kind`.
fn parse_bound(kind: ScalarKind, literal: &str, tag: &'static str) -> Result<Number, BindError> {
    let text = literal.trim();
    if kind.is_integer() {
        text.parse::<i128>()
            .map(Number::Int)
            .map_err(|_| misuse(tag, format!("'{literal}' is not an integer literal")))
    } else if kind.is_float() {
        text.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| misuse(tag, format!("'{literal}' is not a decimal literal")))
    } else {
        Err(misuse(tag, format!("not allowed on a {kind} field")))
    }
}

fn numeric_value(value: &Typed, tag: &'static str) -> Result<Number, BindError> {
    Number::of(value).ok_or_else(|| misuse(tag, format!("value '{value}' is not numeric")))
}

/// Fail if `value` is strictly below the `literal` bound, or is NaN.
pub fn check_minimum(kind: ScalarKind, value: &Typed, literal: &str) -> Result<(), BindError> {
    let bound = parse_bound(kind, literal, "min")?;
    compare_minimum(value, bound, literal)
}

fn compare_minimum(value: &Typed, bound: Number, literal: &str) -> Result<(), BindError> {
    let number = numeric_value(value, "min")?;
    // NaN is unordered and fails every bound
    if !matches!(number.compare(bound), Some(Ordering::Equal | Ordering::Greater)) {
        return Err(BindError::new(BindErrorKind::BelowMinimum {
            value: value.to_string(),
            minimum: literal.to_string(),
        }));
    }
    Ok(())
}

/// Fail if `value` is strictly above the `literal` bound, or is NaN.
pub fn check_maximum(kind: ScalarKind, value: &Typed, literal: &str) -> Result<(), BindError> {
    let bound = parse_bound(kind, literal, "max")?;
    compare_maximum(value, bound, literal)
}

fn compare_maximum(value: &Typed, bound: Number, literal: &str) -> Result<(), BindError> {
    let number = numeric_value(value, "max")?;
    if !matches!(number.compare(bound), Some(Ordering::Equal | Ordering::Less)) {
        return Err(BindError::new(BindErrorKind::AboveMaximum {
            value: value.to_string(),
            maximum: literal.to_string(),
        }));
    }
    Ok(())
}

enum Candidates<'a> {
    Numbers(Vec<Number>),
    Strings(Vec<&'a str>),
}

/// Split and parse an `enum` literal. Every candidate must parse, even when an
/// earlier one would already match.
fn parse_candidates(kind: ScalarKind, literal: &str) -> Result<Candidates<'_>, BindError> {
    let parts = literal.split(';');
    if kind == ScalarKind::Str {
        return Ok(Candidates::Strings(parts.collect()));
    }
    if !kind.is_numeric() {
        return Err(misuse("enum", format!("not allowed on a {kind} field")));
    }

    parts
        .map(|part| {
            let text = part.trim();
            let int = kind.is_integer().then(|| text.parse::<i128>().ok()).flatten();
            match int {
                Some(i) => Ok(Number::Int(i)),
                None => text.parse::<f64>().map(Number::Float).map_err(|_| {
                    misuse("enum", format!("candidate '{part}' is not a {kind} literal"))
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Candidates::Numbers)
}

/// Fail unless `value` equals one of the `;`-separated candidates in `literal`.
pub fn check_enumerated_set(kind: ScalarKind, value: &Typed, literal: &str) -> Result<(), BindError> {
    let candidates = parse_candidates(kind, literal)?;
    compare_enumerated(value, &candidates, literal)
}

fn compare_enumerated(value: &Typed, candidates: &Candidates<'_>, literal: &str) -> Result<(), BindError> {
    let found = match (candidates, value) {
        (Candidates::Strings(items), Typed::Str(s)) => items.iter().any(|c| *c == s.as_str()),
        (Candidates::Numbers(items), _) => {
            let number = numeric_value(value, "enum")?;
            items
                .iter()
                .any(|c| number.compare(*c) == Some(Ordering::Equal))
        }
        (Candidates::Strings(_), other) => {
            return Err(misuse("enum", format!("value '{other}' is not a string")));
        }
    };
    if found {
        Ok(())
    } else {
        Err(BindError::new(BindErrorKind::NotInEnum {
            value: value.to_string(),
            candidates: literal.to_string(),
        }))
    }
}

/// The scalar kind a constraint applies to, or a misuse error naming the tag.
fn constrained(
    shape: &Shape,
    tag: &'static str,
    allowed: impl Fn(ScalarKind) -> bool,
    expected: &str,
) -> Result<(ScalarKind, bool), BindError> {
    shape
        .constrained_scalar()
        .filter(|(kind, _)| allowed(*kind))
        .ok_or_else(|| misuse(tag, format!("only allowed on {expected} fields, not {shape}")))
}

/// Coerce `raw` for a constraint check. An absent value in an optional field
/// has nothing to check.
fn checked_value(
    kind: ScalarKind,
    optional: bool,
    raw: &Value,
    cx: &Context<'_>,
) -> Result<Option<Typed>, BindError> {
    if optional && raw.is_null() {
        return Ok(None);
    }
    coerce::coerce(kind, raw, cx.block()).map(Some)
}

/// Run the constraint tags of `field` against `raw` and return the value the
/// binder should descend into.
///
/// Order: `min`, `max`, `env` substitution, `enum`. The first failure stops
/// the rest. Only `env` changes the value.
pub(crate) fn resolve_field<'v>(
    field: &Field,
    shape: &Shape,
    raw: &'v Value,
    cx: &Context<'_>,
) -> Result<Cow<'v, Value>, BindError> {
    if let Some(literal) = field.min_literal() {
        let (kind, optional) = constrained(shape, "min", ScalarKind::is_numeric, "numeric")?;
        let bound = parse_bound(kind, literal, "min")?;
        if let Some(value) = checked_value(kind, optional, raw, cx)? {
            compare_minimum(&value, bound, literal)?;
        }
    }

    if let Some(literal) = field.max_literal() {
        let (kind, optional) = constrained(shape, "max", ScalarKind::is_numeric, "numeric")?;
        let bound = parse_bound(kind, literal, "max")?;
        if let Some(value) = checked_value(kind, optional, raw, cx)? {
            compare_maximum(&value, bound, literal)?;
        }
    }

    let mut resolved = Cow::Borrowed(raw);
    if let Some(flag) = field.env_flag() {
        if flag != "true" {
            return Err(misuse("env", format!("must be \"true\", got '{flag}'")));
        }
        let (_, optional) = constrained(shape, "env", |k| k == ScalarKind::Str, "string")?;
        if !(optional && raw.is_null()) {
            let Value::String(name) = raw else {
                return Err(coerce::type_mismatch(
                    "environment variable name",
                    raw,
                    cx.block(),
                ));
            };
            let value = cx.env().lookup(name).ok_or_else(|| {
                BindError::new(BindErrorKind::MissingEnvironmentVariable {
                    variable: name.clone(),
                })
            })?;
            resolved = Cow::Owned(Value::String(value));
        }
    }

    if let Some(literal) = field.enum_literal() {
        let (kind, optional) = constrained(
            shape,
            "enum",
            |k| k.is_numeric() || k == ScalarKind::Str,
            "numeric or string",
        )?;
        let candidates = parse_candidates(kind, literal)?;
        if let Some(value) = checked_value(kind, optional, &resolved, cx)? {
            compare_enumerated(&value, &candidates, literal)?;
        }
    }

    Ok(resolved)
}
