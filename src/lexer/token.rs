//! Token, comment and step contracts for the lexer.

use serde::{Serialize, Serializer};

use crate::lexer::span::{LineNumber, Span};

/// Operator forms recognized by longest-match scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Assign,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `!`
    Bang,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `?`
    Question,
    /// `.`
    Dot,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `?.`
    SafeCall,
    /// `?:`
    Elvis,
    /// `..`
    Range,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
}

impl OperatorKind {
    /// Returns `true` for `<`, `>`, `<=`, `>=`, `==` and `!=`.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Self::Less
                | Self::Greater
                | Self::LessEqual
                | Self::GreaterEqual
                | Self::Equal
                | Self::NotEqual
        )
    }
}

/// Token categories reported in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word from the combined Java/Kotlin table.
    Keyword,
    /// Any other name.
    Identifier,
    /// Numeric literal, including trailing type suffix letters.
    Number,
    /// Operator or parenthesis.
    Operator(OperatorKind),
    /// Punctuation: `{ } [ ] ; , :`.
    Separator,
    /// Double-quoted literal, quotes included.
    StringLiteral,
    /// Single-quoted literal, quotes included.
    CharLiteral,
    /// Dotted path captured after `package` or `import`.
    Namespace,
}

impl TokenKind {
    /// Stable upper-case label used by reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Operator(_) => "OPERATOR",
            Self::Separator => "SEPARATOR",
            Self::StringLiteral => "STRING",
            Self::CharLiteral => "CHAR",
            Self::Namespace => "NAMESPACE",
        }
    }

    /// Returns `true` for kinds that can stand as a comparison operand.
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::StringLiteral | Self::CharLiteral
        )
    }

    /// Returns `true` for number, string and char literals.
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Number | Self::StringLiteral | Self::CharLiteral)
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A lexical token with raw text and source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text preserved as scanned.
    pub lexeme: String,
    /// Byte-oriented source span.
    pub span: Span,
    /// Line on which the token starts.
    pub line: LineNumber,
}

impl Token {
    /// Creates a token value.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, line: LineNumber) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            line,
        }
    }

    /// Returns `true` when the token is the given keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    /// Returns the operator kind when this token is an operator.
    pub fn operator(&self) -> Option<OperatorKind> {
        match self.kind {
            TokenKind::Operator(kind) => Some(kind),
            _ => None,
        }
    }
}

/// A source comment, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Comment text as written.
    pub text: String,
    /// Byte-oriented source span.
    pub span: Span,
    /// Line on which the comment starts.
    pub line: LineNumber,
}

impl Comment {
    /// Creates a comment value.
    pub fn new(text: impl Into<String>, span: Span, line: LineNumber) -> Self {
        Self {
            text: text.into(),
            span,
            line,
        }
    }
}

/// One step produced by [`crate::lexer::Lexer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A concrete token was produced.
    Token(Token),
    /// A comment was consumed.
    Comment(Comment),
    /// End of input was reached.
    EndOfInput,
}
