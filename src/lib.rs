//! Bind named blocks of a configuration document into typed Rust structs,
//! validating each field against the tags attached to it.
//!
//! A document is a mapping of block names to mappings. Load it once, then ask
//! for each block by name:
//!
//! ```
//! use confbind::{Configurator, Field, record};
//!
//! #[derive(Default)]
//! struct Alias {
//!     int64_val: i64,
//!     string_val: String,
//! }
//!
//! record!(Alias {
//!     int64_val => Field::new("Int64Val").min("100500"),
//!     string_val => r#"conf:"StringVal" enum:"sample1;sample""#,
//! });
//!
//! let mut config = Configurator::new();
//! config.load(b"Alias:\n  Int64Val: 100500\n  StringVal: sample\n")?;
//!
//! let alias: Alias = config.parse_block("Alias")?;
//! assert_eq!(alias.int64_val, 100500);
//! # Ok::<(), confbind::ConfigError>(())
//! ```
//!
//! # Tags
//!
//! Each bound field carries a [`Field`]: the document key it reads plus
//! optional constraints. Tags can be written with the builder methods on
//! [`Field`] or as a struct-tag string parsed by [`Field::parse`].
//!
//! | Tag    | Builder         | Allowed on            | Effect                                       |
//! |--------|-----------------|-----------------------|----------------------------------------------|
//! | `conf` | [`Field::new`]  | any field             | document key; `-` or empty skips the field   |
//! | `min`  | [`Field::min`]  | integers, floats      | inclusive lower bound                        |
//! | `max`  | [`Field::max`]  | integers, floats      | inclusive upper bound                        |
//! | `enum` | [`Field::one_of`] | integers, floats, strings | value must equal one `;`-separated entry |
//! | `env`  | [`Field::env`]  | strings               | `"true"`: the value names an env variable    |
//!
//! Constraints also apply through one level of `Option`. A constraint on a
//! field of the wrong kind, or a literal that does not parse, fails the bind
//! with [`BindErrorKind::ConstraintMisuse`].
//!
//! Checks run in a fixed order: `min`, `max`, `env` substitution, then `enum`.
//! The first failure wins, and `enum` sees the substituted value.
//!
//! # Destinations
//!
//! Anything implementing [`Bind`] can be a destination:
//!
//! - **Scalars**: `String`, `bool`, every integer width, `f32`, `f64`, and
//!   [`std::time::Duration`] (from literals such as `"1h30m"` or `"250ms"`).
//!   Integers and floats also accept their decimal string forms; strings
//!   accept any scalar.
//! - **`Option<T>`**: `null` leaves the field as it was.
//! - **`Vec<T>`**, **`HashMap<String, T>`**, **`BTreeMap<String, T>`**: filled
//!   element by element, each from `T::default()`.
//! - **Records**: structs listed with [`record!`]. Every tagged key must be
//!   present in the block; untagged fields are never touched.
//!
//! # Errors
//!
//! [`Configurator`] operations return [`ConfigError`]. Binding failures are
//! wrapped as [`ConfigError::Bind`] and carry the path down to the failing
//! value, so `Alias.Servers[3]["primary"]` tells you exactly which entry was
//! wrong. Binding stops at the first error and does not roll back fields that
//! were already written.
//!
//! With the `rich-errors` feature, [`ConfigError`] also implements
//! `miette::Diagnostic`.
//!
//! # Formats
//!
//! YAML is the default. TOML and JSON documents are accepted through
//! [`ConfiguratorBuilder::format`] or inferred from the file extension by
//! [`Configurator::read_file`].
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` for
//! loads and block binds, `trace` for every field. Install a subscriber to see
//! them.

pub mod coerce;
pub mod error;
pub mod types;
pub mod validate;
pub mod value;

mod bind;
mod builder;
mod document;
mod env;
mod tags;

#[cfg(test)]
mod fixtures;

pub use bind::{Bind, Context, FieldVisitor, Record};
pub use builder::{Configurator, ConfiguratorBuilder};
pub use coerce::{DurationUnit, Typed};
pub use document::Document;
pub use env::EnvSource;
pub use error::{BindError, BindErrorKind, ConfigError, PathSegment};
pub use tags::{Field, IntoField};
pub use types::{Format, ScalarKind, Shape};
pub use value::{Mapping, Value};
