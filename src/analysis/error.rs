//! Analyzer error contracts.

use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::FatalLexError;

/// Failures that prevent an analysis from completing.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The source file could not be read.
    #[error("could not open {}: {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The lexer stopped on a guardrail.
    #[error("lexical analysis failed: {0}")]
    Lex(#[from] FatalLexError),
}
