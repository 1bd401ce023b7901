//! Semantic diagnostic contracts.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lexer::LineNumber;

/// The four error categories the analyzer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    /// Assigned value is incompatible with the declared type.
    E1,
    /// Identifier looks like a misspelled keyword.
    E2,
    /// Identifier used before any declaration.
    E3,
    /// Relational operator without operands on both sides.
    E4,
}

impl ErrorCode {
    /// All codes in report order.
    pub const ALL: [Self; 4] = [Self::E1, Self::E2, Self::E3, Self::E4];

    /// Stable message prefix, e.g. `E1-TypeMismatch`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::E1 => "E1-TypeMismatch",
            Self::E2 => "E2-MisspelledKeyword",
            Self::E3 => "E3-IdentifierError",
            Self::E4 => "E4-RelationalError",
        }
    }

    /// Short code, e.g. `E1`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E1 => "E1",
            Self::E2 => "E2",
            Self::E3 => "E3",
            Self::E4 => "E4",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One reported E1..E4 finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticDiagnostic {
    /// Error category.
    pub code: ErrorCode,
    /// Message text without the category prefix.
    pub message: String,
    /// Line the finding is attributed to.
    pub line: LineNumber,
    /// Index of the offending token in the token table.
    pub token_index: usize,
}

impl SemanticDiagnostic {
    /// Creates a diagnostic value.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        line: LineNumber,
        token_index: usize,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            token_index,
        }
    }
}

impl fmt::Display for SemanticDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.prefix(), self.message)
    }
}

/// Per-category diagnostic counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ErrorSummary {
    /// E1 count.
    pub e1: usize,
    /// E2 count.
    pub e2: usize,
    /// E3 count.
    pub e3: usize,
    /// E4 count.
    pub e4: usize,
    /// Sum of all categories.
    pub total: usize,
}

impl ErrorSummary {
    /// Counts diagnostics per category.
    pub fn from_diagnostics<'a>(diagnostics: impl IntoIterator<Item = &'a SemanticDiagnostic>) -> Self {
        diagnostics
            .into_iter()
            .fold(Self::default(), |mut summary, diagnostic| {
                match diagnostic.code {
                    ErrorCode::E1 => summary.e1 += 1,
                    ErrorCode::E2 => summary.e2 += 1,
                    ErrorCode::E3 => summary.e3 += 1,
                    ErrorCode::E4 => summary.e4 += 1,
                }
                summary.total += 1;
                summary
            })
    }

    /// Returns the count for one category.
    pub fn count(&self, code: ErrorCode) -> usize {
        match code {
            ErrorCode::E1 => self.e1,
            ErrorCode::E2 => self.e2,
            ErrorCode::E3 => self.e3,
            ErrorCode::E4 => self.e4,
        }
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "E1={}  E2={}  E3={}  E4={}   Total={}",
            self.e1, self.e2, self.e3, self.e4, self.total
        )
    }
}
