//! Declaration-aware error detection over the token table.
//!
//! Analysis runs in two passes. The first pass records declarations (Java
//! `type name` and Kotlin `var/val name: Type`) and checks initializers. The
//! second pass walks the token table once and reports E1..E4 findings.

pub mod compat;
pub mod diagnostic;
pub mod error;
pub mod symbols;

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::lexer::{
    Comment, Lexer, LexerOptions, OperatorKind, RecoverableLexError, Token, TokenKind,
    resembles_keyword,
};

pub use compat::check_assignment;
pub use diagnostic::{ErrorCode, ErrorSummary, SemanticDiagnostic};
pub use error::AnalyzeError;
pub use symbols::{Declaration, DeclaredType, SymbolTable};

/// Analyzer behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnalyzerOptions {
    /// Options forwarded to the lexer.
    pub lexer: LexerOptions,
}

/// Complete result of analyzing one source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Analysis {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Comments in source order.
    pub comments: Vec<Comment>,
    /// Declarations in discovery order.
    pub declarations: Vec<Declaration>,
    /// E1..E4 findings ordered by line.
    pub diagnostics: Vec<SemanticDiagnostic>,
    /// Problems the lexer recovered from.
    pub lex_warnings: Vec<RecoverableLexError>,
}

impl Analysis {
    /// Counts diagnostics per category.
    pub fn summary(&self) -> ErrorSummary {
        ErrorSummary::from_diagnostics(&self.diagnostics)
    }

    /// Returns `true` when no E1..E4 findings were reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the findings of one category.
    pub fn diagnostics_with(&self, code: ErrorCode) -> impl Iterator<Item = &SemanticDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.code == code)
    }
}

/// Reads and analyzes the file at `path`.
pub fn analyze_file(path: &Path, options: AnalyzerOptions) -> Result<Analysis, AnalyzeError> {
    let source = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = source.len(), "analyzing file");
    Analyzer::new(options).analyze(&source)
}

/// Two-pass Java/Kotlin analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Creates an analyzer.
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Tokenizes and analyzes `source`.
    pub fn analyze(&self, source: &str) -> Result<Analysis, AnalyzeError> {
        let output = Lexer::with_options(source, self.options.lexer).tokenize()?;
        debug!(
            tokens = output.tokens.len(),
            comments = output.comments.len(),
            warnings = output.warnings.len(),
            "lexing finished"
        );

        let mut sink = DiagnosticSink::default();
        let symbols = collect_declarations(&output.tokens, &mut sink);
        debug!(declarations = symbols.len(), "declaration pass finished");
        detect_errors(&output.tokens, &symbols, &mut sink);

        let diagnostics = sink.finish();
        debug!(diagnostics = diagnostics.len(), "error pass finished");

        Ok(Analysis {
            tokens: output.tokens,
            comments: output.comments,
            declarations: symbols.into_declarations(),
            diagnostics,
            lex_warnings: output.warnings,
        })
    }
}

/// Collects diagnostics, dropping repeats for the same code and token.
#[derive(Debug, Default)]
struct DiagnosticSink {
    seen: HashSet<(ErrorCode, usize)>,
    diagnostics: Vec<SemanticDiagnostic>,
}

impl DiagnosticSink {
    fn report(&mut self, code: ErrorCode, message: String, token: &Token, token_index: usize) {
        if self.seen.insert((code, token_index)) {
            self.diagnostics
                .push(SemanticDiagnostic::new(code, message, token.line, token_index));
        }
    }

    fn finish(mut self) -> Vec<SemanticDiagnostic> {
        self.diagnostics.sort_by_key(|diagnostic| diagnostic.line);
        self.diagnostics
    }
}

fn is_binding_keyword(token: &Token) -> bool {
    token.is_keyword("var") || token.is_keyword("val")
}

fn is_assign(token: Option<&Token>) -> bool {
    token.and_then(Token::operator) == Some(OperatorKind::Assign)
}

fn collect_declarations(tokens: &[Token], sink: &mut DiagnosticSink) -> SymbolTable {
    let mut symbols = SymbolTable::new();

    // `int x`, `fun main`, `var y`: a keyword directly before an identifier.
    for (index, pair) in tokens.windows(2).enumerate() {
        let (keyword, name) = (&pair[0], &pair[1]);
        if keyword.kind != TokenKind::Keyword || name.kind != TokenKind::Identifier {
            continue;
        }
        let declared_type = if is_binding_keyword(keyword) {
            DeclaredType::Unknown
        } else {
            DeclaredType::Named(keyword.lexeme.clone())
        };
        symbols.declare(Declaration::new(
            name.lexeme.clone(),
            declared_type,
            name.line,
            index + 1,
        ));
    }

    // `var name: Type = value`
    for (index, token) in tokens.iter().enumerate() {
        if !is_binding_keyword(token) {
            continue;
        }
        let name_index = index + 1;
        let Some(name) = tokens
            .get(name_index)
            .filter(|name| name.kind == TokenKind::Identifier)
        else {
            continue;
        };

        let has_annotation = tokens
            .get(index + 2)
            .is_some_and(|colon| colon.kind == TokenKind::Separator && colon.lexeme == ":");
        match (has_annotation, tokens.get(index + 3)) {
            (true, Some(type_token)) => {
                let declared_type = type_token
                    .lexeme
                    .strip_suffix('?')
                    .unwrap_or(&type_token.lexeme);
                symbols.annotate(&name.lexeme, declared_type);
                if is_assign(tokens.get(index + 4)) {
                    if let Some(value) = tokens.get(index + 5) {
                        if let Some(message) = check_assignment(declared_type, &name.lexeme, value)
                        {
                            sink.report(ErrorCode::E1, message, name, name_index);
                        }
                    }
                }
            }
            _ if is_assign(tokens.get(index + 2)) => {
                symbols.declare(Declaration::new(
                    name.lexeme.clone(),
                    DeclaredType::Unknown,
                    name.line,
                    name_index,
                ));
            }
            _ => {}
        }
    }

    symbols
}

fn detect_errors(tokens: &[Token], symbols: &SymbolTable, sink: &mut DiagnosticSink) {
    let last_index = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        let follows_keyword = index > 0 && tokens[index - 1].kind == TokenKind::Keyword;

        if token.kind == TokenKind::Identifier {
            let name = token.lexeme.as_str();

            if !follows_keyword && !symbols.is_declared(name) && resembles_keyword(name) {
                sink.report(
                    ErrorCode::E2,
                    format!("'{name}' resembles a keyword"),
                    token,
                    index,
                );
            }

            if !follows_keyword && !symbols.is_declared_before(name, index) {
                sink.report(ErrorCode::E3, used_before_declaration(name), token, index);
            }

            if is_assign(tokens.get(index + 1)) {
                if let Some(value) = tokens.get(index + 2) {
                    check_reassignment(token, index, value, symbols, sink);
                }
            }
        }

        if token.operator().is_some_and(OperatorKind::is_relational) {
            let op = token.lexeme.as_str();
            if index == 0 || index == last_index {
                sink.report(
                    ErrorCode::E4,
                    format!("Operator '{op}' at invalid position"),
                    token,
                    index,
                );
            } else if !tokens[index - 1].kind.is_operand() || !tokens[index + 1].kind.is_operand() {
                sink.report(
                    ErrorCode::E4,
                    format!("Operator '{op}' has invalid operands"),
                    token,
                    index,
                );
            }
        }
    }
}

fn check_reassignment(
    target: &Token,
    index: usize,
    value: &Token,
    symbols: &SymbolTable,
    sink: &mut DiagnosticSink,
) {
    let name = target.lexeme.as_str();
    if !symbols.is_declared_before(name, index) {
        sink.report(ErrorCode::E3, used_before_declaration(name), target, index);
        return;
    }
    let declared_type = symbols
        .lookup(name)
        .and_then(|declaration| declaration.declared_type.name());
    if let Some(message) = declared_type.and_then(|ty| check_assignment(ty, name, value)) {
        sink.report(ErrorCode::E1, message, target, index);
    }
}

fn used_before_declaration(name: &str) -> String {
    format!("'{name}' used before declaration")
}
