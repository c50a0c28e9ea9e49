//! # json-lite
//!
//! A small JSON value model with a lenient recursive-descent parser and a
//! compact serializer.
//!
//! Parsing turns text into a [`Value`] tree (null, bool, 32-bit int, 32-bit
//! float, string, array, object). Serializing turns a tree back into text
//! with no inserted whitespace.
//!
//! ## Quick start
//!
//! ```rust
//! use json_lite::{parse, serialize, Value};
//!
//! let value = parse(r#"{ "name": "Alice", "scores": [[210], 90, 85, 95.7] }"#).unwrap();
//! assert_eq!(value.get("name").unwrap().as_str().unwrap(), "Alice");
//! assert_eq!(
//!     value.get("scores").unwrap().get_index(3),
//!     Some(&Value::Float(95.7))
//! );
//!
//! assert_eq!(serialize(&value), r#"{"name":"Alice","scores":[[210],90,85,95.7]}"#);
//! ```
//!
//! ## Known limitations
//!
//! - String escapes are stored verbatim: parsing `"a\nb"` gives a string
//!   containing a backslash and an `n`, not a newline. `\uXXXX` is never
//!   decoded.
//! - The serializer escapes non-printable and non-ASCII bytes as `\xHH`,
//!   which is not standard JSON.
//! - Object keys are serialized without escaping.
//!
//! ## Modules
//!
//! - [`value`] - the `Value` tagged union
//! - [`map`] - insertion-ordered object map
//! - [`source`] - byte sources with one byte of lookahead
//! - [`parser`] - text → `Value`
//! - [`serializer`] - `Value` → text
//! - [`format`] - escaping and number formatting helpers
//! - [`limits`] - parser limits (nesting depth)
//! - [`error`] - error type
//!
//! serde support (`Serialize for Value`, conversions to and from
//! `serde_json::Value`) lives in a private module and needs no imports.

pub mod error;
pub mod format;
mod interop;
pub mod limits;
pub mod map;
pub mod parser;
pub mod serializer;
pub mod source;
pub mod value;

pub use error::{Error, Result};
pub use limits::Limits;
pub use map::Map;
pub use parser::{parse, parse_bytes, parse_reader, parse_with_limits, Parser};
pub use serializer::{serialize, to_writer, write_value};
pub use source::{ReadSource, SliceSource, Source};
pub use value::Value;
