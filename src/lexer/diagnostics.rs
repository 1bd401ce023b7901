//! Diagnostic and error contracts for the lexer.

use serde::Serialize;
use thiserror::Error;

use crate::lexer::span::{ByteOffset, LineNumber, Span};

const NEAR_TEXT_MAX_CHARS: usize = 24;

/// Stable diagnostic codes emitted by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCode {
    /// A `"` literal reached end of input.
    UnterminatedStringLiteral,
    /// A `'` literal is missing its closing quote.
    UnterminatedCharLiteral,
    /// A `/*` comment reached end of input.
    UnterminatedBlockComment,
    /// A single token exceeded the configured byte limit.
    TokenSizeLimitExceeded,
    /// The token table exceeded the configured entry limit.
    TokenCountLimitExceeded,
}

/// User-facing diagnostic payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexDiagnostic {
    /// Machine-readable diagnostic code.
    pub code: DiagnosticCode,
    /// Human-readable message text.
    pub message: String,
    /// Source span associated with this diagnostic.
    pub span: Span,
    /// Line on which the offending construct starts.
    pub line: LineNumber,
    /// Source excerpt near the offending construct.
    pub near_text: Option<String>,
    /// Suggested fix.
    pub suggestion: Option<String>,
}

impl LexDiagnostic {
    /// Creates a diagnostic value.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, span: Span, line: LineNumber) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            line,
            near_text: None,
            suggestion: None,
        }
    }

    /// Creates a diagnostic with excerpt and suggestion.
    pub fn with_context(
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
        line: LineNumber,
        near_text: Option<String>,
        suggestion: Option<String>,
    ) -> Self {
        Self {
            near_text,
            suggestion,
            ..Self::new(code, message, span, line)
        }
    }
}

/// Lexical problem the scanner recovers from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "diagnostic")]
pub enum RecoverableLexError {
    /// String literal ran to end of input.
    UnterminatedStringLiteral(LexDiagnostic),
    /// Char literal lacks its closing quote.
    UnterminatedCharLiteral(LexDiagnostic),
    /// Block comment ran to end of input.
    UnterminatedBlockComment(LexDiagnostic),
}

impl RecoverableLexError {
    /// Returns the wrapped diagnostic.
    pub fn diagnostic(&self) -> &LexDiagnostic {
        match self {
            Self::UnterminatedStringLiteral(diagnostic)
            | Self::UnterminatedCharLiteral(diagnostic)
            | Self::UnterminatedBlockComment(diagnostic) => diagnostic,
        }
    }
}

/// Lexical error that stops scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalLexError {
    /// A single token grew past `max_token_bytes`.
    #[error("line {}: {}", .0.line, .0.message)]
    TokenSizeLimitExceeded(LexDiagnostic),
    /// The input produced more than `max_tokens` tokens.
    #[error("line {}: {}", .0.line, .0.message)]
    TokenCountLimitExceeded(LexDiagnostic),
}

impl FatalLexError {
    /// Returns the wrapped diagnostic.
    pub fn diagnostic(&self) -> &LexDiagnostic {
        match self {
            Self::TokenSizeLimitExceeded(diagnostic)
            | Self::TokenCountLimitExceeded(diagnostic) => diagnostic,
        }
    }
}

/// Returns a short excerpt of `input` starting at `start`, capped at `end`.
pub(crate) fn near_text_snippet(input: &str, start: ByteOffset, end: ByteOffset) -> Option<String> {
    let text = Span::new(start, end).slice(input);
    if text.is_empty() {
        return None;
    }
    let snippet: String = text
        .chars()
        .take_while(|ch| *ch != '\n')
        .take(NEAR_TEXT_MAX_CHARS)
        .collect();
    Some(snippet)
}
