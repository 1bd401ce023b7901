//! Comment, word and namespace scanning helpers.

use std::borrow::Cow;

use crate::lexer::cursor::Cursor;

/// Returns `true` for characters that may begin an identifier.
pub(crate) fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Returns `true` for characters that may continue an identifier.
pub(crate) fn is_word_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Consumes an identifier or keyword.
pub(crate) fn scan_word(cursor: &mut Cursor, input: &str) {
    cursor.bump_while(input, is_word_continue);
}

/// Consumes a `//` comment up to, but not including, the line feed.
pub(crate) fn scan_line_comment(cursor: &mut Cursor, input: &str) {
    cursor.bump_while(input, |ch| ch != '\n');
}

/// Drops carriage returns so CRLF sources read like LF sources.
pub(crate) fn without_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.chars().filter(|ch| *ch != '\r').collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Consumes a `/* */` comment.
///
/// Returns `false` when input ended before the closing `*/`.
pub(crate) fn scan_block_comment(cursor: &mut Cursor, input: &str) -> bool {
    cursor.bump(input);
    cursor.bump(input);
    let mut previous = None;
    while let Some(ch) = cursor.bump(input) {
        if previous == Some('*') && ch == '/' {
            return true;
        }
        previous = Some(ch);
    }
    false
}

/// Skips spaces and tabs but stops at line feeds.
pub(crate) fn skip_horizontal_whitespace(cursor: &mut Cursor, input: &str) {
    cursor.bump_while(input, |ch| ch != '\n' && ch.is_whitespace());
}

/// Consumes a `package`/`import` path and its terminator.
///
/// The path runs to the next `;`, line feed or end of input. The returned
/// range excludes the terminator.
pub(crate) fn scan_namespace_path(cursor: &mut Cursor, input: &str) -> (usize, usize) {
    let start = cursor.offset().as_usize();
    cursor.bump_while(input, |ch| ch != '\n' && ch != ';');
    let end = cursor.offset().as_usize();
    cursor.bump(input);
    (start, end)
}
