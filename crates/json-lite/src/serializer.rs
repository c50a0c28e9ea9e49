//! Compact serializer: [`Value`] → JSON text.
//!
//! Output contains no whitespace. Strings go through [`escape_into`]; object
//! keys are written between quotes without escaping, matching how the parser
//! stores them raw.

use std::fmt::{self, Write};
use std::io::{self, BufWriter, Write as _};

use crate::error::Result;
use crate::format::{escape_into, format_float};
use crate::value::Value;

/// Serialize a value to its canonical text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(value, &mut out);
    out
}

/// Write a value's canonical text to any [`fmt::Write`] sink.
pub fn write_value<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Int(n) => write!(out, "{n}"),
        Value::Float(f) => out.write_str(&format_float(*f)),
        Value::String(s) => {
            out.write_char('"')?;
            escape_into(s, out)?;
            out.write_char('"')
        }
        Value::Array(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_value(item, out)?;
            }
            out.write_char(']')
        }
        Value::Object(map) => {
            out.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                out.write_char('"')?;
                out.write_str(key)?;
                out.write_str("\":")?;
                write_value(item, out)?;
            }
            out.write_char('}')
        }
    }
}

/// Write a value's canonical text to an [`io::Write`] sink.
///
/// Output goes through a [`BufWriter`] and is flushed before returning.
pub fn to_writer<W: io::Write>(value: &Value, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    write!(writer, "{value}")?;
    writer.flush()?;
    Ok(())
}
