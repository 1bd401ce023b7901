//! Pastel ANSI 256-colour palette.

use crate::analysis::ErrorCode;
use crate::lexer::TokenKind;

const RESET: &str = "\x1b[0m";
const IDENT: &str = "\x1b[38;5;120m";
const NUMBER: &str = "\x1b[38;5;159m";
const OPERATOR: &str = "\x1b[38;5;228m";
const KEYWORD: &str = "\x1b[38;5;170m";
const SEPARATOR: &str = "\x1b[38;5;246m";
const STRING: &str = "\x1b[38;5;215m";
const CHAR: &str = "\x1b[38;5;180m";
const NAMESPACE: &str = "\x1b[38;5;244m";
const COMMENT: &str = "\x1b[38;5;153m";
const ERROR_RED: &str = "\x1b[38;5;203m";
const ERROR_ORANGE: &str = "\x1b[38;5;208m";
const HEADER: &str = "\x1b[48;5;236m\x1b[38;5;225m";

/// Escape sequences for one report, or empty strings when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette; a disabled palette yields empty sequences.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn pick(self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }

    /// Resets all attributes.
    pub fn reset(self) -> &'static str {
        self.pick(RESET)
    }

    /// Header background and text.
    pub fn header(self) -> &'static str {
        self.pick(HEADER)
    }

    /// Comment text.
    pub fn comment(self) -> &'static str {
        self.pick(COMMENT)
    }

    /// Positive notes such as "No errors found.".
    pub fn ok(self) -> &'static str {
        self.pick(IDENT)
    }

    /// Colour for one token category.
    pub fn token(self, kind: TokenKind) -> &'static str {
        self.pick(match kind {
            TokenKind::Keyword => KEYWORD,
            TokenKind::Identifier => IDENT,
            TokenKind::Number => NUMBER,
            TokenKind::Operator(_) => OPERATOR,
            TokenKind::Separator => SEPARATOR,
            TokenKind::StringLiteral => STRING,
            TokenKind::CharLiteral => CHAR,
            TokenKind::Namespace => NAMESPACE,
        })
    }

    /// Colour for one error category.
    pub fn error(self, code: ErrorCode) -> &'static str {
        self.pick(match code {
            ErrorCode::E2 => ERROR_ORANGE,
            ErrorCode::E1 | ErrorCode::E3 | ErrorCode::E4 => ERROR_RED,
        })
    }

    /// Colour for failures outside the E1..E4 categories.
    pub fn failure(self) -> &'static str {
        self.pick(ERROR_RED)
    }
}
