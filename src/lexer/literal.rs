//! Number, char and string literal scanning.

use crate::lexer::cursor::Cursor;

/// Outcome of scanning a quoted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteClosure {
    /// The closing quote was consumed.
    Closed,
    /// Input or line ended before the closing quote.
    Unterminated,
}

/// Consumes a numeric literal: digits and dots, then any suffix letters.
pub(crate) fn scan_number(cursor: &mut Cursor, input: &str) {
    cursor.bump_while(input, |ch| ch.is_ascii_digit() || ch == '.');
    cursor.bump_while(input, |ch| ch.is_ascii_alphabetic());
}

/// Consumes a char literal starting at `'`.
///
/// One character (or one backslash escape) is read between the quotes. A
/// missing closing quote leaves the following character unconsumed.
pub(crate) fn scan_char_literal(cursor: &mut Cursor, input: &str) -> QuoteClosure {
    cursor.bump(input);
    match cursor.peek(input) {
        None | Some('\n') => return QuoteClosure::Unterminated,
        Some('\\') => {
            cursor.bump(input);
            if cursor.peek(input).is_some_and(|ch| ch != '\n') {
                cursor.bump(input);
            }
        }
        Some(_) => {
            cursor.bump(input);
        }
    }

    if cursor.peek(input) == Some('\'') {
        cursor.bump(input);
        QuoteClosure::Closed
    } else {
        QuoteClosure::Unterminated
    }
}

/// Consumes a string literal starting at `"`.
///
/// Escapes are kept verbatim and the literal may span lines.
pub(crate) fn scan_string_literal(cursor: &mut Cursor, input: &str) -> QuoteClosure {
    cursor.bump(input);
    while let Some(ch) = cursor.bump(input) {
        match ch {
            '"' => return QuoteClosure::Closed,
            '\\' => {
                cursor.bump(input);
            }
            _ => {}
        }
    }
    QuoteClosure::Unterminated
}
