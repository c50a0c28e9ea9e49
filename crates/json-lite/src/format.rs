//! Shared text helpers: string escaping, float formatting, numeric token
//! classification.

use std::fmt::{self, Write};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Kind of a token that matched the numeric pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

/// Classify a bare token against the numeric pattern: an optional `+` or `-`,
/// then digits with at most one `.`, at least one digit overall.
///
/// Returns `None` when the token is not numeric.
pub fn classify_number(token: &str) -> Option<NumberKind> {
    let body = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);

    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return None,
        }
    }

    match (digits, dots) {
        (0, _) => None,
        (_, 0) => Some(NumberKind::Int),
        (_, 1) => Some(NumberKind::Float),
        _ => None,
    }
}

/// Format a float as the shortest decimal that reads back to the same `f32`.
///
/// The result never uses exponent notation and always contains a `.`, so
/// the parser classifies it as a float again. Non-finite values have no
/// textual form and render as `null`.
pub fn format_float(f: f32) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let mut s = f.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Escape a string for output.
///
/// Printable ASCII other than `"` and `\` passes through. Quote, backslash,
/// tab, carriage return and newline get their two-character escapes; every
/// other byte becomes `\xHH` with uppercase hex digits. Multi-byte UTF-8
/// characters are therefore escaped one byte at a time.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Writing into a String cannot fail.
    let _ = escape_into(s, &mut out);
    out
}

/// Streaming form of [`escape_str`].
pub fn escape_into<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let escape: Option<&str> = match b {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            b'\t' => Some("\\t"),
            b'\r' => Some("\\r"),
            b'\n' => Some("\\n"),
            b' '..=b'~' => continue,
            _ => None,
        };

        // A pending run is printable ASCII, so both ends sit on char
        // boundaries even when the surrounding bytes are multi-byte UTF-8.
        if start < i {
            out.write_str(&s[start..i])?;
        }
        start = i + 1;

        match escape {
            Some(e) => out.write_str(e)?,
            None => {
                out.write_str("\\x")?;
                out.write_char(HEX_DIGITS[(b >> 4) as usize] as char)?;
                out.write_char(HEX_DIGITS[(b & 0xF) as usize] as char)?;
            }
        }
    }

    out.write_str(&s[start..])
}
