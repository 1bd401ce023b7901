//! Character cursor with physical line accounting.

use crate::lexer::span::{ByteOffset, LineNumber};

/// Position cursor over input text.
///
/// The cursor always rests on a UTF-8 character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: ByteOffset,
    line: LineNumber,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`, line `1`.
    pub(crate) fn new() -> Self {
        Self {
            offset: ByteOffset::new(0),
            line: LineNumber::FIRST,
        }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> ByteOffset {
        self.offset
    }

    /// Returns the current line.
    pub(crate) fn line(&self) -> LineNumber {
        self.line
    }

    /// Returns the character at cursor position.
    pub(crate) fn peek(&self, input: &str) -> Option<char> {
        input.get(self.offset.as_usize()..)?.chars().next()
    }

    /// Returns the character after the one at cursor position.
    pub(crate) fn peek_next(&self, input: &str) -> Option<char> {
        let mut chars = input.get(self.offset.as_usize()..)?.chars();
        chars.next()?;
        chars.next()
    }

    /// Consumes one character, counting line feeds.
    pub(crate) fn bump(&mut self, input: &str) -> Option<char> {
        let ch = self.peek(input)?;
        self.offset = ByteOffset::from_usize(self.offset.as_usize() + ch.len_utf8());
        if ch == '\n' {
            self.line = self.line.next();
        }
        Some(ch)
    }

    /// Consumes characters while `predicate` holds.
    pub(crate) fn bump_while<P>(&mut self, input: &str, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        while let Some(ch) = self.peek(input) {
            if !predicate(ch) {
                break;
            }
            self.bump(input);
        }
    }
}
