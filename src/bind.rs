//! The binding engine.
//!
//! Destinations implement [`Bind`]. Scalars, `Option`, `Vec` and string-keyed
//! maps are covered here; structs opt in through [`Record`], usually via the
//! [`record!`](crate::record) macro, and get `Bind` from the blanket impl.
//!
//! Binding is depth-first and stops at the first error. Fields visited before
//! the failure keep whatever was written to them; nothing is rolled back.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::time::Duration;

use tracing::trace;

use crate::coerce::{self, Typed};
use crate::env::EnvSource;
use crate::error::{BindError, BindErrorKind, PathSegment};
use crate::tags::Field;
use crate::types::{ScalarKind, Shape};
use crate::validate;
use crate::value::{Mapping, Value};

/// Per-call state threaded through a bind.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    block: &'a str,
    env: &'a EnvSource,
}

impl<'a> Context<'a> {
    pub fn new(block: &'a str, env: &'a EnvSource) -> Self {
        Self { block, env }
    }

    /// Name of the top-level block being bound.
    pub fn block(&self) -> &'a str {
        self.block
    }

    pub fn env(&self) -> &'a EnvSource {
        self.env
    }
}

/// A destination that can be filled from a document [`Value`].
pub trait Bind {
    /// The static kind of this destination, used to decide which constraint
    /// tags are legal on a field of this type.
    fn shape() -> Shape;

    /// Fill `self` from `raw`. On error `self` may be partially written.
    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError>;
}

/// A struct whose fields are bound by document key.
///
/// Implementations hand every field, in declaration order, to the visitor
/// together with its tags. The [`record!`](crate::record) macro writes this
/// for you.
pub trait Record {
    fn visit_fields<V: FieldVisitor>(&mut self, visitor: &mut V) -> Result<(), BindError>;
}

pub trait FieldVisitor {
    fn visit<T: Bind>(&mut self, field: &Field, slot: &mut T) -> Result<(), BindError>;
}

/// Implement [`Record`] for a struct by listing its bound fields.
///
/// Each entry maps a struct field to its tags, given either as a
/// [`Field`](crate::Field) or as a struct-tag string:
///
/// ```
/// use confbind::{Field, record};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     scratch: Vec<u8>,
/// }
///
/// record!(Server {
///     host => r#"conf:"Host""#,
///     port => Field::new("Port").min("1024"),
///     scratch => Field::skip(),
/// });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident => $tags:expr),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn visit_fields<V: $crate::FieldVisitor>(
                &mut self,
                visitor: &mut V,
            ) -> ::std::result::Result<(), $crate::BindError> {
                $(
                    let field = $crate::IntoField::into_field($tags)
                        .map_err(|e| e.in_field(stringify!($field)))?;
                    visitor.visit(&field, &mut self.$field)?;
                )*
                let _ = visitor;
                Ok(())
            }
        }
    };
}

impl<R: Record> Bind for R {
    fn shape() -> Shape {
        Shape::Record
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        let map = raw.as_mapping().ok_or_else(|| {
            BindError::new(BindErrorKind::UnsupportedBodyType {
                found: raw.kind_name(),
            })
        })?;
        self.visit_fields(&mut RecordBinder { map, cx })
    }
}

struct RecordBinder<'m, 'c> {
    map: &'m Mapping,
    cx: &'m Context<'c>,
}

impl FieldVisitor for RecordBinder<'_, '_> {
    fn visit<T: Bind>(&mut self, field: &Field, slot: &mut T) -> Result<(), BindError> {
        let Some(key) = field.key() else {
            trace!("skipping untagged field");
            return Ok(());
        };
        let raw = self.map.get(key).ok_or_else(|| {
            BindError::new(BindErrorKind::MissingField {
                field: key.to_string(),
                block: self.cx.block().to_string(),
            })
        })?;

        trace!(field = key, value = %raw, "binding field");
        let resolved = validate::resolve_field(field, &T::shape(), raw, self.cx)
            .map_err(|e| e.in_field(key))?;
        slot.bind(&resolved, self.cx).map_err(|e| e.in_field(key))
    }
}

impl<T: Bind + Default> Bind for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    /// `null` leaves the field as it was; anything else is bound into a fresh
    /// `T` and stored as `Some`.
    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        if raw.is_null() {
            return Ok(());
        }
        let mut inner = T::default();
        inner.bind(raw, cx)?;
        *self = Some(inner);
        Ok(())
    }
}

impl<T: Bind + Default> Bind for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(Box::new(T::shape()))
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        let items = match raw {
            Value::Null => return Ok(()),
            Value::Sequence(items) => items,
            other => return Err(coerce::type_mismatch(Self::shape().to_string(), other, cx.block())),
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let mut element = T::default();
            element
                .bind(item, cx)
                .map_err(|e| e.within(PathSegment::Index(i)))?;
            out.push(element);
        }
        *self = out;
        Ok(())
    }
}

/// Bind every entry of a mapping value, handing each bound element to `insert`.
/// Returns `false` when `raw` is null and nothing was bound.
fn bind_entries<T: Bind + Default>(
    raw: &Value,
    cx: &Context<'_>,
    shape: impl FnOnce() -> Shape,
    mut insert: impl FnMut(String, T),
) -> Result<bool, BindError> {
    let entries = match raw {
        Value::Null => return Ok(false),
        Value::Mapping(entries) => entries,
        other => return Err(coerce::type_mismatch(shape().to_string(), other, cx.block())),
    };
    for (key, item) in entries {
        let mut element = T::default();
        element
            .bind(item, cx)
            .map_err(|e| e.within(PathSegment::Key(key.clone())))?;
        insert(key.clone(), element);
    }
    Ok(true)
}

impl<T: Bind + Default, S: BuildHasher + Default> Bind for HashMap<String, T, S> {
    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        let mut out = HashMap::default();
        if bind_entries(raw, cx, Self::shape, |k, v| {
            out.insert(k, v);
        })? {
            *self = out;
        }
        Ok(())
    }
}

impl<T: Bind + Default> Bind for BTreeMap<String, T> {
    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        let mut out = BTreeMap::new();
        if bind_entries(raw, cx, Self::shape, |k, v| {
            out.insert(k, v);
        })? {
            *self = out;
        }
        Ok(())
    }
}

fn unexpected(kind: ScalarKind, typed: &Typed, raw: &Value, cx: &Context<'_>) -> BindError {
    trace!(%kind, value = %typed, "coercion produced the wrong variant");
    coerce::type_mismatch(kind.name(), raw, cx.block())
}

macro_rules! bind_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Bind for $ty {
            fn shape() -> Shape {
                Shape::Scalar(ScalarKind::$kind)
            }

            fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
                let kind = ScalarKind::$kind;
                match coerce::coerce(kind, raw, cx.block())? {
                    Typed::Int(wide) => {
                        *self = <$ty>::try_from(wide)
                            .map_err(|_| coerce::type_mismatch(kind.name(), raw, cx.block()))?;
                        Ok(())
                    }
                    other => Err(unexpected(kind, &other, raw, cx)),
                }
            }
        }
    )*};
}

bind_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl Bind for f64 {
    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::F64)
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        match coerce::coerce(ScalarKind::F64, raw, cx.block())? {
            Typed::Float(x) => {
                *self = x;
                Ok(())
            }
            other => Err(unexpected(ScalarKind::F64, &other, raw, cx)),
        }
    }
}

impl Bind for f32 {
    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::F32)
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        match coerce::coerce(ScalarKind::F32, raw, cx.block())? {
            // range was checked by coerce
            Typed::Float(x) => {
                *self = x as f32;
                Ok(())
            }
            other => Err(unexpected(ScalarKind::F32, &other, raw, cx)),
        }
    }
}

impl Bind for bool {
    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::Bool)
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        match coerce::coerce(ScalarKind::Bool, raw, cx.block())? {
            Typed::Bool(b) => {
                *self = b;
                Ok(())
            }
            other => Err(unexpected(ScalarKind::Bool, &other, raw, cx)),
        }
    }
}

impl Bind for String {
    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::Str)
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        match coerce::coerce(ScalarKind::Str, raw, cx.block())? {
            Typed::Str(s) => {
                *self = s;
                Ok(())
            }
            other => Err(unexpected(ScalarKind::Str, &other, raw, cx)),
        }
    }
}

impl Bind for Duration {
    fn shape() -> Shape {
        Shape::Scalar(ScalarKind::Duration)
    }

    fn bind(&mut self, raw: &Value, cx: &Context<'_>) -> Result<(), BindError> {
        match coerce::coerce(ScalarKind::Duration, raw, cx.block())? {
            Typed::Duration(d) => {
                *self = d;
                Ok(())
            }
            other => Err(unexpected(ScalarKind::Duration, &other, raw, cx)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{Alias, Listener, Pool, Scalars, Tiers};
    use crate::tags::Field;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str::<serde_yaml::Value>(src).unwrap().into()
    }

    fn bind_into<T: Bind>(dest: &mut T, src: &str, env: &EnvSource) -> Result<(), BindError> {
        let cx = Context::new("Alias", env);
        dest.bind(&yaml(src), &cx)
    }

    fn bind_default<T: Bind + Default>(src: &str) -> Result<T, BindError> {
        let mut dest = T::default();
        bind_into(&mut dest, src, &EnvSource::default())?;
        Ok(dest)
    }

    #[test]
    fn integer_at_minimum_is_accepted() {
        let alias: Alias = bind_default("Int64Val: 100500\nStringVal: sample\n").unwrap();
        assert_eq!(alias.int64_val, 100500);
        assert_eq!(alias.string_val, "sample");
    }

    #[test]
    fn integer_below_minimum_is_rejected() {
        #[derive(Debug, Default)]
        struct Strict {
            value: i64,
        }
        crate::record!(Strict {
            value => Field::new("Int64Val").min("100501"),
        });

        let err = bind_default::<Strict>("Int64Val: 100500\n").unwrap_err();
        match err.kind() {
            BindErrorKind::BelowMinimum { value, minimum } => {
                assert_eq!(value, "100500");
                assert_eq!(minimum, "100501");
            }
            other => panic!("Expected BelowMinimum, got: {other:?}"),
        }
        assert_eq!(err.path(), &[PathSegment::Field("Int64Val".into())]);
    }

    #[test]
    fn enum_tag_accepts_listed_string() {
        let alias: Alias = bind_default("Int64Val: 100600\nStringVal: sample\n").unwrap();
        assert_eq!(alias.string_val, "sample");
    }

    #[test]
    fn enum_tag_rejects_unlisted_string() {
        #[derive(Debug, Default)]
        struct Picky {
            value: String,
        }
        crate::record!(Picky {
            value => r#"conf:"StringVal" enum:"sample1;sample2""#,
        });

        let err = bind_default::<Picky>("StringVal: sample\n").unwrap_err();
        match err.kind() {
            BindErrorKind::NotInEnum { value, candidates } => {
                assert_eq!(value, "sample");
                assert_eq!(candidates, "sample1;sample2");
            }
            other => panic!("Expected NotInEnum, got: {other:?}"),
        }
    }

    #[test]
    fn sequence_of_integers() {
        let tiers: Tiers = bind_default("Levels: [1, 2, 3]\nLabels: {}\n").unwrap();
        assert_eq!(tiers.levels, vec![1, 2, 3]);
    }

    #[test]
    fn sequence_of_i64_keeps_order() {
        let mut values: Vec<i64> = Vec::new();
        bind_into(&mut values, "[1, 2, 3]", &EnvSource::default()).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn string_and_native_numbers_bind_alike() {
        let mut from_native = (0u64, 0i16, 0.0f64);
        let mut from_text = (0u64, 0i16, 0.0f64);
        let env = EnvSource::default();
        bind_into(&mut from_native.0, "18446744073709551615", &env).unwrap();
        bind_into(&mut from_text.0, "\"18446744073709551615\"", &env).unwrap();
        bind_into(&mut from_native.1, "-300", &env).unwrap();
        bind_into(&mut from_text.1, "\"-300\"", &env).unwrap();
        bind_into(&mut from_native.2, "0.25", &env).unwrap();
        bind_into(&mut from_text.2, "\"0.25\"", &env).unwrap();
        assert_eq!(from_native, from_text);
        assert_eq!(from_native.0, u64::MAX);
    }

    #[test]
    fn map_of_strings_coerces_numbers() {
        let tiers: Tiers = bind_default("Levels: []\nLabels:\n  Field1: qwerty\n  Field2: 42\n").unwrap();
        assert_eq!(tiers.labels.get("Field1").map(String::as_str), Some("qwerty"));
        assert_eq!(tiers.labels.get("Field2").map(String::as_str), Some("42"));
    }

    #[test]
    fn skipped_field_keeps_caller_value() {
        let mut alias = Alias {
            scratch: "kept".into(),
            ..Alias::default()
        };
        bind_into(
            &mut alias,
            "Int64Val: 100500\nStringVal: sample\nscratch: overwritten\n",
            &EnvSource::default(),
        )
        .unwrap();
        assert_eq!(alias.scratch, "kept");
    }

    #[test]
    fn env_field_reads_variable() {
        let env = EnvSource::from_vars([("temp_env", "qwerty_123")]);
        let mut listener = Listener::default();
        bind_into(&mut listener, "Token: temp_env\nTimeout: 21s\n", &env).unwrap();
        assert_eq!(listener.token, "qwerty_123");
        assert_eq!(listener.timeout, Duration::from_secs(21));
    }

    #[test]
    fn env_field_with_unset_variable() {
        let env = EnvSource::from_vars(Vec::<(String, String)>::new());
        let mut listener = Listener::default();
        let err = bind_into(&mut listener, "Token: temp_env\nTimeout: 21s\n", &env).unwrap_err();
        assert_eq!(
            err.kind(),
            &BindErrorKind::MissingEnvironmentVariable {
                variable: "temp_env".into()
            }
        );
        assert_eq!(err.path_string(), "Token");
    }

    #[test]
    fn optional_null_stays_none() {
        let pool: Pool = bind_default("Size: 4\nIdle: null\nBackup: ~\n").unwrap();
        assert_eq!(pool.size, 4);
        assert_eq!(pool.idle, None);
        assert!(pool.backup.is_none());
    }

    #[test]
    fn optional_present_is_some_and_checked() {
        let pool: Pool = bind_default("Size: 4\nIdle: 2\nBackup: null\n").unwrap();
        assert_eq!(pool.idle, Some(2));

        let err = bind_default::<Pool>("Size: 4\nIdle: 99\nBackup: null\n").unwrap_err();
        assert!(matches!(err.kind(), BindErrorKind::AboveMaximum { .. }));
    }

    #[test]
    fn nested_optional_record() {
        let src = "Size: 1\nIdle: null\nBackup:\n  Host: replica-1\n  Weight: 3\n";
        let pool: Pool = bind_default(src).unwrap();
        let backup = pool.backup.expect("backup should be bound");
        assert_eq!(backup.host, "replica-1");
        assert_eq!(backup.weight, Some(3));
    }

    #[test]
    fn nested_record_error_path() {
        let src = "Size: 1\nIdle: null\nBackup:\n  Host: replica-1\n  Weight: many\n";
        let err = bind_default::<Pool>(src).unwrap_err();
        assert_eq!(err.path_string(), "Backup.Weight");
        assert!(matches!(err.kind(), BindErrorKind::TypeMismatch { found: "string", .. }));
    }

    #[test]
    fn missing_field_reports_key_and_block() {
        let err = bind_default::<Pool>("Size: 1\n").unwrap_err();
        assert_eq!(
            err.kind(),
            &BindErrorKind::MissingField {
                field: "Idle".into(),
                block: "Alias".into()
            }
        );
        assert!(err.path().is_empty());
    }

    #[test]
    fn record_from_scalar_is_unsupported() {
        let err = bind_default::<Pool>("just a string").unwrap_err();
        assert_eq!(
            err.kind(),
            &BindErrorKind::UnsupportedBodyType { found: "string" }
        );
    }

    #[test]
    fn error_path_through_index_and_key() {
        let src = "Levels: [1, 2, -3]\nLabels: {}\n";
        let err = bind_default::<Tiers>(src).unwrap_err();
        assert_eq!(
            err.path(),
            &[PathSegment::Field("Levels".into()), PathSegment::Index(2)]
        );

        let src = "Levels: []\nLabels:\n  primary: [1]\n";
        let err = bind_default::<Tiers>(src).unwrap_err();
        assert_eq!(err.path_string(), "Labels[\"primary\"]");
        assert!(matches!(err.kind(), BindErrorKind::TypeMismatch { found: "sequence", .. }));
    }

    #[test]
    fn sequence_from_scalar_is_type_mismatch() {
        let err = bind_default::<Tiers>("Levels: 5\nLabels: {}\n").unwrap_err();
        match err.kind() {
            BindErrorKind::TypeMismatch { found, expected, .. } => {
                assert_eq!(*found, "integer");
                assert_eq!(expected, "sequence of u32");
            }
            other => panic!("Expected TypeMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn enum_on_doubly_optional_field_is_misuse() {
        #[derive(Debug, Default)]
        struct Layered {
            mode: Option<Option<String>>,
        }
        crate::record!(Layered {
            mode => Field::new("Mode").one_of("a;b"),
        });

        let err = bind_default::<Layered>("Mode: a\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            BindErrorKind::ConstraintMisuse { tag: "enum", .. }
        ));
    }

    #[test]
    fn malformed_tag_string_is_misuse() {
        #[derive(Debug, Default)]
        struct Broken {
            value: String,
        }
        crate::record!(Broken {
            value => r#"conf:Value"#,
        });

        let err = bind_default::<Broken>("Value: x\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            BindErrorKind::ConstraintMisuse { tag: "conf", .. }
        ));
        assert_eq!(err.path(), &[PathSegment::Field("value".into())]);
    }

    #[test]
    fn malformed_tag_in_nested_record_names_both_fields() {
        #[derive(Debug, Default)]
        struct Inner {
            a: String,
            b: String,
        }
        crate::record!(Inner {
            a => Field::new("A"),
            b => r#"conf:B"#,
        });

        #[derive(Debug, Default)]
        struct Outer {
            inner: Inner,
        }
        crate::record!(Outer {
            inner => Field::new("Inner"),
        });

        let err = bind_default::<Outer>("Inner:\n  A: x\n  B: y\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            BindErrorKind::ConstraintMisuse { tag: "conf", .. }
        ));
        assert_eq!(err.path_string(), "Inner.b");
    }

    #[test]
    fn integer_maximum_is_inclusive() {
        let pool: Pool = bind_default("Size: 1\nIdle: 16\nBackup: null\n").unwrap();
        assert_eq!(pool.idle, Some(16));

        let err = bind_default::<Pool>("Size: 1\nIdle: 17\nBackup: null\n").unwrap_err();
        match err.kind() {
            BindErrorKind::AboveMaximum { value, maximum } => {
                assert_eq!(value, "17");
                assert_eq!(maximum, "16");
            }
            other => panic!("Expected AboveMaximum, got: {other:?}"),
        }
        assert_eq!(err.path_string(), "Idle");
    }

    #[test]
    fn nan_fails_numeric_bounds() {
        #[derive(Debug, Default)]
        struct Ratio {
            value: f64,
        }
        crate::record!(Ratio {
            value => Field::new("Ratio").min("0").max("1"),
        });

        let err = bind_default::<Ratio>("Ratio: .nan\n").unwrap_err();
        assert!(matches!(err.kind(), BindErrorKind::BelowMinimum { .. }));

        let ratio: Ratio = bind_default("Ratio: 1.0\n").unwrap();
        assert_eq!(ratio.value, 1.0);
    }

    #[test]
    fn scalar_kinds_from_native_and_strings() {
        let src = "\
I8: -8
U16: \"65535\"
Usize: 7
F32: \"2.5\"
F64: 3.1415
Flag: \"T\"
Text: 1.5
Wait: 1m30s
";
        let scalars: Scalars = bind_default(src).unwrap();
        assert_eq!(scalars.i8, -8);
        assert_eq!(scalars.u16, 65535);
        assert_eq!(scalars.usize, 7);
        assert_eq!(scalars.f32, 2.5);
        assert_eq!(scalars.f64, 3.1415);
        assert!(scalars.flag);
        assert_eq!(scalars.text, "1.5E+00");
        assert_eq!(scalars.wait, Duration::from_secs(90));
    }

    #[test]
    fn float_field_bounds() {
        let src = "I8: 0\nU16: 0\nUsize: 0\nF32: 0\nF64: 3.1416\nFlag: false\nText: x\nWait: 1s\n";
        // F32 is a native int here, and floats refuse native ints.
        let err = bind_default::<Scalars>(src).unwrap_err();
        assert_eq!(err.path_string(), "F32");

        let src = "I8: 0\nU16: 0\nUsize: 0\nF32: 0.5\nF64: 3.1416\nFlag: false\nText: x\nWait: 1s\n";
        let err = bind_default::<Scalars>(src).unwrap_err();
        match err.kind() {
            BindErrorKind::AboveMaximum { value, maximum } => {
                assert_eq!(value, "3.1416");
                assert_eq!(maximum, "3.1415");
            }
            other => panic!("Expected AboveMaximum, got: {other:?}"),
        }
    }

    #[test]
    fn earlier_fields_stay_written_after_failure() {
        let mut pool = Pool::default();
        let err = bind_into(&mut pool, "Size: 9\nIdle: 100\nBackup: null\n", &EnvSource::default());
        assert!(err.is_err());
        assert_eq!(pool.size, 9);
    }

    #[test]
    fn null_collections_keep_existing_contents() {
        let mut tiers = Tiers {
            levels: vec![7],
            ..Tiers::default()
        };
        bind_into(&mut tiers, "Levels: null\nLabels: null\n", &EnvSource::default()).unwrap();
        assert_eq!(tiers.levels, vec![7]);
        assert!(tiers.labels.is_empty());
    }

    #[test]
    fn btree_map_destination() {
        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        bind_into(&mut weights, "a: 0.5\nb: \"1.5\"\n", &EnvSource::default()).unwrap();
        assert_eq!(weights.into_iter().collect::<Vec<_>>(), vec![
            ("a".to_string(), 0.5),
            ("b".to_string(), 1.5)
        ]);
    }
}
