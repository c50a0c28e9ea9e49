//! Byte sources with one byte of lookahead.
//!
//! The parser only ever needs to look at the next byte before deciding
//! whether to consume it, so "putting a byte back" is expressed as peeking
//! first. Input is treated as single-byte, ASCII-compatible text.

use std::io::{self, Read};

use crate::error::Result;

/// Sequential byte input with one byte of lookahead.
pub trait Source {
    /// The next byte without consuming it, or `None` at end of input.
    fn peek(&mut self) -> Result<Option<u8>>;

    /// Consume and return the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> Result<Option<u8>>;

    /// Number of bytes consumed so far.
    fn offset(&self) -> usize;
}

/// Source over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl Source for SliceSource<'_> {
    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.bytes.get(self.pos).copied())
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = self.bytes.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

/// Source over any [`Read`] implementation.
///
/// Reads one byte at a time, so wrap unbuffered readers (files, sockets) in
/// a [`std::io::BufReader`].
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    peeked: Option<u8>,
    pos: usize,
}

impl<R: Read> ReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            pos: 0,
        }
    }

    /// Give back the underlying reader. A peeked byte is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Source for ReadSource<R> {
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.fill()?;
        }
        Ok(self.peeked)
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = match self.peeked.take() {
            Some(b) => Some(b),
            None => self.fill()?,
        };
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }

    fn offset(&self) -> usize {
        self.pos
    }
}
