//! Assignment compatibility between declared types and literal values.

use crate::lexer::{Token, TokenKind};

/// Checks `name = value` against `declared_type`.
///
/// Returns the mismatch message, or `None` when the value is acceptable or
/// cannot be judged. Only literal values are checked, plus `true`/`false`
/// against integer and char targets.
pub fn check_assignment(declared_type: &str, name: &str, value: &Token) -> Option<String> {
    let declared_type = declared_type.strip_suffix('?').unwrap_or(declared_type);
    let lexeme = value.lexeme.as_str();
    let is_boolean = value.kind == TokenKind::Keyword && matches!(lexeme, "true" | "false");
    if !value.kind.is_literal() && !is_boolean {
        return None;
    }
    let is_text = matches!(value.kind, TokenKind::StringLiteral | TokenKind::CharLiteral);

    let rejected = match declared_type {
        "int" | "Int" | "Long" | "Short" | "Byte" => {
            is_text || is_boolean || (value.kind == TokenKind::Number && !is_plain_integer(lexeme))
        }
        "float" | "Float" | "double" | "Double" => is_text,
        "char" | "Char" => {
            let rejected = is_boolean
                || matches!(value.kind, TokenKind::StringLiteral | TokenKind::Number);
            return rejected.then(|| {
                format!("{declared_type} '{name}' must take a char literal, got '{lexeme}'")
            });
        }
        _ => false,
    };

    rejected.then(|| format!("{declared_type} '{name}' cannot take '{lexeme}'"))
}

// Integer literals carry neither a fraction nor a suffix.
fn is_plain_integer(lexeme: &str) -> bool {
    !lexeme.contains('.') && !lexeme.ends_with(|ch: char| ch.is_ascii_alphabetic())
}
