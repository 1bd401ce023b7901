//! Java/Kotlin lexer.
//!
//! The lexer produces a flat token table and a comment list in one forward
//! pass. Keywords come from a single combined table, so the same lexer serves
//! both languages.

pub mod diagnostics;
pub mod keyword;
pub mod span;
pub mod token;

mod cursor;
mod literal;
mod operator;
mod scanner;

use tracing::trace;

use crate::lexer::cursor::Cursor;
use crate::lexer::literal::QuoteClosure;

pub use diagnostics::{DiagnosticCode, FatalLexError, LexDiagnostic, RecoverableLexError};
pub use keyword::{KEYWORDS, closest_keyword, is_keyword, levenshtein, resembles_keyword};
pub use span::{ByteOffset, LineNumber, Span};
pub use token::{Comment, LexStep, OperatorKind, Token, TokenKind};

/// Resource limits enforced while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexerLimits {
    /// Maximum bytes in one token or comment.
    pub max_token_bytes: usize,
    /// Maximum number of tokens in one source.
    pub max_tokens: usize,
}

impl Default for LexerLimits {
    fn default() -> Self {
        Self {
            max_token_bytes: 64 * 1024,
            max_tokens: 1_000_000,
        }
    }
}

/// Lexer behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexerOptions {
    /// Scanning guardrails.
    pub limits: LexerLimits,
}

/// Everything the lexer collects from one source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexOutput {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Comments in source order.
    pub comments: Vec<Comment>,
    /// Problems the lexer recovered from.
    pub warnings: Vec<RecoverableLexError>,
}

/// Tokenizes `input` to completion with default options.
pub fn tokenize(input: &str) -> Result<LexOutput, FatalLexError> {
    Lexer::new(input).tokenize()
}

/// Single-pass Java/Kotlin lexer.
pub struct Lexer<'a> {
    input: &'a str,
    options: LexerOptions,
    cursor: Cursor,
    namespace_pending: bool,
    token_count: usize,
    warnings: Vec<RecoverableLexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    /// Creates a lexer with explicit options.
    pub fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            input,
            options,
            cursor: Cursor::new(),
            namespace_pending: false,
            token_count: 0,
            warnings: Vec::new(),
        }
    }

    /// Returns recoverable problems seen so far.
    pub fn warnings(&self) -> &[RecoverableLexError] {
        &self.warnings
    }

    /// Removes and returns recoverable problems seen so far.
    pub fn take_warnings(&mut self) -> Vec<RecoverableLexError> {
        std::mem::take(&mut self.warnings)
    }

    /// Scans and returns the next lexical step.
    ///
    /// Characters that cannot begin a token are skipped. After a `package` or
    /// `import` keyword the remainder of the statement is returned as one
    /// [`TokenKind::Namespace`] token.
    pub fn next_token(&mut self) -> Result<LexStep, FatalLexError> {
        if std::mem::take(&mut self.namespace_pending) {
            if let Some(token) = self.scan_namespace()? {
                return Ok(LexStep::Token(token));
            }
        }

        loop {
            let Some(ch) = self.cursor.peek(self.input) else {
                return Ok(LexStep::EndOfInput);
            };
            let start = self.cursor.offset();
            let line = self.cursor.line();

            match ch {
                '/' if self.cursor.peek_next(self.input) == Some('/') => {
                    scanner::scan_line_comment(&mut self.cursor, self.input);
                    return self.finish_comment(start, line).map(LexStep::Comment);
                }
                '/' if self.cursor.peek_next(self.input) == Some('*') => {
                    if !scanner::scan_block_comment(&mut self.cursor, self.input) {
                        self.warn_unterminated(
                            RecoverableLexError::UnterminatedBlockComment,
                            DiagnosticCode::UnterminatedBlockComment,
                            "unterminated block comment",
                            "close the comment with `*/`.",
                            start,
                            line,
                        );
                    }
                    return self.finish_comment(start, line).map(LexStep::Comment);
                }
                ch if scanner::is_word_start(ch) => {
                    scanner::scan_word(&mut self.cursor, self.input);
                    let lexeme = self.text_from(start);
                    let kind = if keyword::is_keyword(lexeme) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Identifier
                    };
                    self.namespace_pending =
                        kind == TokenKind::Keyword && matches!(lexeme, "package" | "import");
                    return self.finish_token(kind, start, line).map(LexStep::Token);
                }
                ch if ch.is_ascii_digit() => {
                    literal::scan_number(&mut self.cursor, self.input);
                    return self
                        .finish_token(TokenKind::Number, start, line)
                        .map(LexStep::Token);
                }
                '\'' => {
                    if literal::scan_char_literal(&mut self.cursor, self.input)
                        == QuoteClosure::Unterminated
                    {
                        self.warn_unterminated(
                            RecoverableLexError::UnterminatedCharLiteral,
                            DiagnosticCode::UnterminatedCharLiteral,
                            "unterminated char literal",
                            "close the char literal with `'`.",
                            start,
                            line,
                        );
                    }
                    return self
                        .finish_token(TokenKind::CharLiteral, start, line)
                        .map(LexStep::Token);
                }
                '"' => {
                    if literal::scan_string_literal(&mut self.cursor, self.input)
                        == QuoteClosure::Unterminated
                    {
                        self.warn_unterminated(
                            RecoverableLexError::UnterminatedStringLiteral,
                            DiagnosticCode::UnterminatedStringLiteral,
                            "unterminated string literal",
                            "close the string literal with `\"`.",
                            start,
                            line,
                        );
                    }
                    return self
                        .finish_token(TokenKind::StringLiteral, start, line)
                        .map(LexStep::Token);
                }
                ch if operator::is_operator_start(ch) => {
                    let tail = &self.input[start.as_usize()..];
                    if let Some((kind, lexeme)) = operator::match_operator(tail) {
                        for _ in 0..lexeme.len() {
                            self.cursor.bump(self.input);
                        }
                        return self
                            .finish_token(TokenKind::Operator(kind), start, line)
                            .map(LexStep::Token);
                    }
                    self.cursor.bump(self.input);
                }
                ch if operator::is_separator(ch) => {
                    self.cursor.bump(self.input);
                    return self
                        .finish_token(TokenKind::Separator, start, line)
                        .map(LexStep::Token);
                }
                ch => {
                    self.cursor.bump(self.input);
                    if !ch.is_whitespace() {
                        trace!(line = line.value(), ?ch, "skipping unrecognized character");
                    }
                }
            }
        }
    }

    /// Scans to end of input and returns the collected tables.
    pub fn tokenize(mut self) -> Result<LexOutput, FatalLexError> {
        let mut output = LexOutput::default();
        loop {
            match self.next_token()? {
                LexStep::Token(token) => output.tokens.push(token),
                LexStep::Comment(comment) => output.comments.push(comment),
                LexStep::EndOfInput => break,
            }
        }
        output.warnings = self.take_warnings();
        Ok(output)
    }

    fn scan_namespace(&mut self) -> Result<Option<Token>, FatalLexError> {
        scanner::skip_horizontal_whitespace(&mut self.cursor, self.input);
        if matches!(self.cursor.peek(self.input), None | Some('\n')) {
            return Ok(None);
        }

        let line = self.cursor.line();
        let (raw_start, raw_end) = scanner::scan_namespace_path(&mut self.cursor, self.input);
        let raw = &self.input[raw_start..raw_end];
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        // `raw` never starts with whitespace, so only the tail is trimmed.
        let start = ByteOffset::from_usize(raw_start);
        let end = ByteOffset::from_usize(raw_start + trimmed.len());
        self.emit(Token::new(
            TokenKind::Namespace,
            trimmed,
            Span::new(start, end),
            line,
        ))
        .map(Some)
    }

    fn finish_token(
        &mut self,
        kind: TokenKind,
        start: ByteOffset,
        line: LineNumber,
    ) -> Result<Token, FatalLexError> {
        let lexeme = scanner::without_carriage_returns(self.text_from(start));
        let span = Span::new(start, self.cursor.offset());
        self.emit(Token::new(kind, lexeme, span, line))
    }

    fn finish_comment(
        &mut self,
        start: ByteOffset,
        line: LineNumber,
    ) -> Result<Comment, FatalLexError> {
        let span = Span::new(start, self.cursor.offset());
        self.check_size(span, line)?;
        Ok(Comment::new(
            scanner::without_carriage_returns(self.text_from(start)),
            span,
            line,
        ))
    }

    fn emit(&mut self, token: Token) -> Result<Token, FatalLexError> {
        self.check_size(token.span, token.line)?;

        let max_tokens = self.options.limits.max_tokens;
        if self.token_count >= max_tokens {
            return Err(FatalLexError::TokenCountLimitExceeded(
                LexDiagnostic::with_context(
                    DiagnosticCode::TokenCountLimitExceeded,
                    format!("token count exceeded configured limit ({max_tokens} tokens)"),
                    token.span,
                    token.line,
                    Some(token.lexeme),
                    Some("split the source or raise lexer token-count limit.".to_string()),
                ),
            ));
        }
        self.token_count += 1;
        Ok(token)
    }

    fn check_size(&self, span: Span, line: LineNumber) -> Result<(), FatalLexError> {
        let max_bytes = self.options.limits.max_token_bytes;
        if span.len() as usize <= max_bytes {
            return Ok(());
        }

        let near_text: String = span.slice(self.input).chars().take(max_bytes + 1).collect();
        Err(FatalLexError::TokenSizeLimitExceeded(
            LexDiagnostic::with_context(
                DiagnosticCode::TokenSizeLimitExceeded,
                format!("token size exceeded configured limit ({max_bytes} bytes)"),
                span,
                line,
                Some(near_text),
                Some("reduce token size or raise lexer token-size limit.".to_string()),
            ),
        ))
    }

    fn warn_unterminated(
        &mut self,
        wrap: fn(LexDiagnostic) -> RecoverableLexError,
        code: DiagnosticCode,
        message: &str,
        suggestion: &str,
        start: ByteOffset,
        line: LineNumber,
    ) {
        let end = self.cursor.offset();
        let diagnostic = LexDiagnostic::with_context(
            code,
            message,
            Span::new(start, end),
            line,
            diagnostics::near_text_snippet(self.input, start, end),
            Some(suggestion.to_string()),
        );
        trace!(line = line.value(), message, "recovered from lexical problem");
        self.warnings.push(wrap(diagnostic));
    }

    fn text_from(&self, start: ByteOffset) -> &'a str {
        &self.input[start.as_usize()..self.cursor.offset().as_usize()]
    }
}
