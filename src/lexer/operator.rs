//! Operator scanning helpers for longest-match tokenization.

use crate::lexer::token::OperatorKind;

/// Characters that can begin an operator token.
const OPERATOR_START: &str = "+-*/%=<>!&|?.()";

/// Returns `true` when `ch` can begin an operator token.
pub(crate) fn is_operator_start(ch: char) -> bool {
    OPERATOR_START.contains(ch)
}

/// Returns `true` for single-character separators.
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | ';' | ',' | ':')
}

/// Matches an operator at the start of `tail` using longest-match rules.
pub(crate) fn match_operator(tail: &str) -> Option<(OperatorKind, &'static str)> {
    let bytes = tail.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    if bytes.len() >= 2 {
        let matched = match &bytes[..2] {
            b"?." => Some((OperatorKind::SafeCall, "?.")),
            b"?:" => Some((OperatorKind::Elvis, "?:")),
            b".." => Some((OperatorKind::Range, "..")),
            b"==" => Some((OperatorKind::Equal, "==")),
            b"!=" => Some((OperatorKind::NotEqual, "!=")),
            b"<=" => Some((OperatorKind::LessEqual, "<=")),
            b">=" => Some((OperatorKind::GreaterEqual, ">=")),
            b"&&" => Some((OperatorKind::AndAnd, "&&")),
            b"||" => Some((OperatorKind::OrOr, "||")),
            _ => None,
        };
        if matched.is_some() {
            return matched;
        }
    }

    match bytes[0] {
        b'+' => Some((OperatorKind::Plus, "+")),
        b'-' => Some((OperatorKind::Minus, "-")),
        b'*' => Some((OperatorKind::Star, "*")),
        b'/' => Some((OperatorKind::Slash, "/")),
        b'%' => Some((OperatorKind::Percent, "%")),
        b'=' => Some((OperatorKind::Assign, "=")),
        b'<' => Some((OperatorKind::Less, "<")),
        b'>' => Some((OperatorKind::Greater, ">")),
        b'!' => Some((OperatorKind::Bang, "!")),
        b'&' => Some((OperatorKind::Ampersand, "&")),
        b'|' => Some((OperatorKind::Pipe, "|")),
        b'?' => Some((OperatorKind::Question, "?")),
        b'.' => Some((OperatorKind::Dot, ".")),
        b'(' => Some((OperatorKind::LeftParen, "(")),
        b')' => Some((OperatorKind::RightParen, ")")),
        _ => None,
    }
}
