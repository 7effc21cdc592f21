//! Scalar coercion: untyped document values into typed destination values.
//!
//! Numbers are kept wide ([`Typed::Int`] holds an `i128`, [`Typed::Float`] an
//! `f64`) so constraint checks compare the value before it is narrowed into the
//! destination field.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{BindError, BindErrorKind};
use crate::types::ScalarKind;
use crate::value::Value;

/// A coerced scalar, ready to be narrowed into its destination type.
#[derive(Debug, Clone, PartialEq)]
pub enum Typed {
    Str(String),
    Bool(bool),
    Int(i128),
    Float(f64),
    Duration(Duration),
}

impl fmt::Display for Typed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typed::Str(s) => f.write_str(s),
            Typed::Bool(b) => write!(f, "{b}"),
            Typed::Int(i) => write!(f, "{i}"),
            Typed::Float(x) => write!(f, "{x}"),
            Typed::Duration(d) => write!(f, "{d:?}"),
        }
    }
}

/// Coerce `raw` into the scalar kind `kind`.
///
/// `block` is the name of the top-level block being bound; it only feeds the
/// error message.
pub fn coerce(kind: ScalarKind, raw: &Value, block: &str) -> Result<Typed, BindError> {
    let mismatch = || type_mismatch(kind.name(), raw, block);

    match kind {
        ScalarKind::Str => match raw {
            Value::String(s) => Ok(Typed::Str(s.clone())),
            Value::Int(i) => Ok(Typed::Str(i.to_string())),
            Value::Uint(u) => Ok(Typed::Str(u.to_string())),
            Value::Float(x) => Ok(Typed::Str(format_scientific(*x))),
            Value::Bool(b) => Ok(Typed::Str(b.to_string())),
            _ => Err(mismatch()),
        },
        ScalarKind::Bool => match raw {
            Value::Bool(b) => Ok(Typed::Bool(*b)),
            Value::String(s) => parse_bool(s).map(Typed::Bool).ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        ScalarKind::F32 | ScalarKind::F64 => {
            let x = match raw {
                Value::Float(x) => *x,
                Value::String(s) => s.parse::<f64>().map_err(|_| mismatch())?,
                _ => return Err(mismatch()),
            };
            if kind == ScalarKind::F32 && x.is_finite() && x.abs() > f32::MAX as f64 {
                return Err(mismatch());
            }
            Ok(Typed::Float(x))
        }
        ScalarKind::Duration => match raw {
            Value::String(s) => parse_duration(s).map(Typed::Duration).ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        _ => {
            let Some((lo, hi)) = kind.integer_bounds() else {
                return Err(mismatch());
            };
            let wide = match raw {
                Value::Int(i) => *i as i128,
                Value::Uint(u) => *u as i128,
                Value::String(s) => s.parse::<i128>().map_err(|_| mismatch())?,
                _ => return Err(mismatch()),
            };
            if wide < lo || wide > hi {
                return Err(mismatch());
            }
            Ok(Typed::Int(wide))
        }
    }
}

pub(crate) fn type_mismatch(expected: impl Into<String>, raw: &Value, block: &str) -> BindError {
    BindError::new(BindErrorKind::TypeMismatch {
        found: raw.kind_name(),
        expected: expected.into(),
        block: block.to_string(),
    })
}

/// Format a float in scientific notation with the shortest mantissa that
/// round-trips and a signed, two-digit exponent: `3.1415E+00`, `1E+06`.
pub fn format_scientific(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    let raw = format!("{x:E}");
    let Some((mantissa, exponent)) = raw.split_once('E') else {
        return raw;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:02}", exponent.abs())
}

/// Boolean literals accepted from strings.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Fixed-scale units for duration literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl DurationUnit {
    pub fn nanos(self) -> u64 {
        match self {
            DurationUnit::Microsecond => 1_000,
            DurationUnit::Millisecond => 1_000_000,
            DurationUnit::Second => 1_000_000_000,
            DurationUnit::Minute => 60 * 1_000_000_000,
            DurationUnit::Hour => 3_600 * 1_000_000_000,
        }
    }

    /// `count` units as a duration, or `None` on overflow.
    pub fn multiply(self, count: u64) -> Option<Duration> {
        count.checked_mul(self.nanos()).map(Duration::from_nanos)
    }
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().trim_end_matches('s') {
            "microsecond" => Ok(DurationUnit::Microsecond),
            "millisecond" => Ok(DurationUnit::Millisecond),
            "second" => Ok(DurationUnit::Second),
            "minute" => Ok(DurationUnit::Minute),
            "hour" => Ok(DurationUnit::Hour),
            _ => Err(format!("unknown duration unit '{s}'")),
        }
    }
}

fn suffix_nanos(suffix: &str) -> Option<u64> {
    match suffix {
        "ns" => Some(1),
        "us" | "µs" => Some(DurationUnit::Microsecond.nanos()),
        "ms" => Some(DurationUnit::Millisecond.nanos()),
        "s" => Some(DurationUnit::Second.nanos()),
        "m" => Some(DurationUnit::Minute.nanos()),
        "h" => Some(DurationUnit::Hour.nanos()),
        _ => None,
    }
}

/// Parse a duration literal made of `<count><unit>` terms, e.g. `42s`,
/// `1h30m` or `1.5s`. The bare literal `0` is also accepted.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let count_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (count, tail) = rest.split_at(count_len);
        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        if count.is_empty() || unit.is_empty() {
            return None;
        }

        let scale = suffix_nanos(unit)?;
        let nanos = if count.contains('.') {
            let value: f64 = count.parse().ok()?;
            (value * scale as f64).round() as u128
        } else {
            let value: u128 = count.parse().ok()?;
            value.checked_mul(scale as u128)?
        };
        total = total.checked_add(nanos)?;
        rest = tail;
    }

    let secs = u64::try_from(total / 1_000_000_000).ok()?;
    let subsec = (total % 1_000_000_000) as u32;
    Some(Duration::new(secs, subsec))
}
