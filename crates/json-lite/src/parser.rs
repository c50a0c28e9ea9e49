//! Recursive-descent parser: JSON text → [`Value`].
//!
//! The grammar is deliberately lenient in the places listed below, and strict
//! everywhere else (every malformed input aborts with a typed error, no
//! partial tree is returned):
//!
//! - Whitespace (space, tab, CR, LF) and commas are skipped between array
//!   elements and object members, so stray and trailing commas are accepted
//!   and a missing comma is not an error.
//! - After an object key, everything up to and including the first `:` is
//!   skipped.
//! - Control bytes before a key's opening quote are ignored.
//! - Strings keep escape pairs verbatim: `"a\nb"` yields the four bytes
//!   `a`, `\`, `n`, `b`. `\uXXXX` is not decoded either.
//! - Numbers and keywords are read as bare tokens up to whitespace, `,`, `}`
//!   or `]`, then classified. A token containing `.` is a float, any other
//!   numeric token an int.
//! - A bare token at the top level also consumes one terminating comma, so
//!   `1,` parses as `1` while `1 ,` is rejected with trailing characters.

use std::io::{BufReader, Read};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::format::{classify_number, NumberKind};
use crate::limits::Limits;
use crate::map::Map;
use crate::source::{ReadSource, SliceSource, Source};
use crate::value::Value;

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Parser over any [`Source`].
///
/// [`Parser::parse`] reads one complete document. [`Parser::parse_value`]
/// reads a single value and leaves the rest of the source alone, which lets
/// callers pull several concatenated values out of one stream.
pub struct Parser<S> {
    source: S,
    limits: Limits,
    depth: usize,
}

impl<S: Source> Parser<S> {
    /// Create a parser with default [`Limits`].
    pub fn new(source: S) -> Self {
        Self::with_limits(source, Limits::default())
    }

    pub fn with_limits(source: S, limits: Limits) -> Self {
        Self {
            source,
            limits,
            depth: 0,
        }
    }

    /// Parse one value that must be followed only by whitespace.
    ///
    /// Empty or all-whitespace input is [`Error::UnexpectedEof`]. A bare
    /// top-level token swallows the whitespace byte or comma that ends it,
    /// so `1,` is accepted but `1 ,` is [`Error::TrailingCharacters`].
    pub fn parse(&mut self) -> Result<Value> {
        let result = self.parse_document();
        if let Err(e) = &result {
            debug!("parse failed: {e}");
        }
        result
    }

    /// Parse the next value from the source.
    ///
    /// A bare token (number or keyword) consumes its terminating whitespace
    /// or comma; a closing bracket or brace is left in the source.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace()?;
        let offset = self.source.offset();
        match self.source.peek()? {
            None => Err(Error::UnexpectedEof { offset }),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b't' | b'f' | b'n' | b'+' | b'-' | b'0'..=b'9') => self.parse_token(),
            Some(b) => Err(Error::UnexpectedCharacter {
                found: b as char,
                offset,
            }),
        }
    }

    /// Give back the source, e.g. to inspect what remains after
    /// [`Parser::parse_value`].
    pub fn into_inner(self) -> S {
        self.source
    }

    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.skip_whitespace()?;
        match self.source.peek()? {
            None => Ok(value),
            Some(_) => Err(Error::TrailingCharacters {
                offset: self.source.offset(),
            }),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.source.next_byte()?; // '{'

        let mut map = Map::new();
        loop {
            self.skip_separators()?;
            match self.source.peek()? {
                None => {
                    return Err(Error::UnexpectedEof {
                        offset: self.source.offset(),
                    })
                }
                Some(b'}') => {
                    self.source.next_byte()?;
                    break;
                }
                Some(_) => {}
            }

            let key = self.parse_key()?;
            self.skip_to_colon()?;
            let value = self.parse_value()?;
            map.insert(key, value);
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.source.next_byte()?; // '['

        let mut items = Vec::new();
        loop {
            self.skip_separators()?;
            match self.source.peek()? {
                None => {
                    return Err(Error::UnexpectedEof {
                        offset: self.source.offset(),
                    })
                }
                Some(b']') => {
                    self.source.next_byte()?;
                    break;
                }
                Some(_) => items.push(self.parse_value()?),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(items))
    }

    /// Track nesting before descending into a container.
    fn enter(&mut self) -> Result<()> {
        let offset = self.source.offset();
        if self.depth >= self.limits.max_depth {
            debug!(
                "nesting limit {} reached at offset {offset}",
                self.limits.max_depth
            );
            return Err(Error::NestingTooDeep {
                limit: self.limits.max_depth,
                offset,
            });
        }
        self.depth += 1;
        trace!("container at offset {offset}, depth {}", self.depth);
        Ok(())
    }

    fn parse_key(&mut self) -> Result<String> {
        loop {
            let offset = self.source.offset();
            match self.source.next_byte()? {
                Some(b'"') => break,
                Some(b) if is_whitespace(b) || b.is_ascii_control() => continue,
                Some(_) => {
                    return Err(Error::InvalidKey {
                        offset,
                        reason: "expected opening quote",
                    })
                }
                None => {
                    return Err(Error::InvalidKey {
                        offset,
                        reason: "missing opening quote",
                    })
                }
            }
        }

        let start = self.source.offset() - 1;
        match self.read_raw_string()? {
            Some(bytes) => into_string(bytes, start),
            None => Err(Error::InvalidKey {
                offset: self.source.offset(),
                reason: "missing closing quote",
            }),
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let start = self.source.offset();
        self.source.next_byte()?; // '"'
        match self.read_raw_string()? {
            Some(bytes) => into_string(bytes, start),
            None => Err(Error::UnterminatedString { offset: start }),
        }
    }

    /// Read up to the closing quote, which is consumed but not stored.
    /// A backslash and the byte after it are copied through as-is.
    ///
    /// Returns `None` if the input ends first.
    fn read_raw_string(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        loop {
            match self.source.next_byte()? {
                None => return Ok(None),
                Some(b'"') => return Ok(Some(buf)),
                Some(b'\\') => {
                    buf.push(b'\\');
                    match self.source.next_byte()? {
                        Some(b) => buf.push(b),
                        None => return Ok(None),
                    }
                }
                Some(b) => buf.push(b),
            }
        }
    }

    fn parse_token(&mut self) -> Result<Value> {
        let offset = self.source.offset();
        let mut bytes = Vec::new();
        while let Some(b) = self.source.peek()? {
            match b {
                b'}' | b']' => break,
                b',' => {
                    self.source.next_byte()?;
                    break;
                }
                b if is_whitespace(b) => {
                    self.source.next_byte()?;
                    break;
                }
                _ => {
                    self.source.next_byte()?;
                    bytes.push(b);
                }
            }
        }

        let token = match String::from_utf8(bytes) {
            Ok(token) => token,
            Err(e) => {
                return Err(Error::InvalidToken {
                    token: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    offset,
                })
            }
        };
        classify_token(token, offset)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.source.peek()? {
            if !is_whitespace(b) {
                break;
            }
            self.source.next_byte()?;
        }
        Ok(())
    }

    fn skip_separators(&mut self) -> Result<()> {
        while let Some(b) = self.source.peek()? {
            if !is_whitespace(b) && b != b',' {
                break;
            }
            self.source.next_byte()?;
        }
        Ok(())
    }

    fn skip_to_colon(&mut self) -> Result<()> {
        loop {
            match self.source.next_byte()? {
                Some(b':') => return Ok(()),
                Some(_) => continue,
                None => {
                    return Err(Error::UnexpectedEof {
                        offset: self.source.offset(),
                    })
                }
            }
        }
    }
}

fn into_string(bytes: Vec<u8>, offset: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { offset })
}

fn classify_token(token: String, offset: usize) -> Result<Value> {
    match token.as_str() {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        _ => {}
    }

    let parsed = match classify_number(&token) {
        Some(NumberKind::Int) => token.parse::<i32>().ok().map(Value::Int),
        Some(NumberKind::Float) => token
            .parse::<f32>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float),
        None => None,
    };
    parsed.ok_or(Error::InvalidToken { token, offset })
}

/// Parse a complete document from a string with default [`Limits`].
pub fn parse(input: &str) -> Result<Value> {
    parse_bytes(input.as_bytes())
}

/// Parse a complete document from raw bytes with default [`Limits`].
pub fn parse_bytes(input: &[u8]) -> Result<Value> {
    Parser::new(SliceSource::new(input)).parse()
}

/// Parse a complete document from a reader with default [`Limits`].
///
/// The reader is wrapped in a [`BufReader`].
pub fn parse_reader<R: Read>(reader: R) -> Result<Value> {
    Parser::new(ReadSource::new(BufReader::new(reader))).parse()
}

/// Parse a complete document from a string with custom [`Limits`].
pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value> {
    Parser::with_limits(SliceSource::new(input.as_bytes()), limits).parse()
}
