//! Declaration table built by the first analysis pass.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::lexer::LineNumber;

/// Type recorded for a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// Keyword or annotation text, e.g. `int` or `Float`.
    Named(String),
    /// No type could be determined (`var x = ...`).
    Unknown,
}

impl DeclaredType {
    /// Returns the type name, or `None` when unknown.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("UNKNOWN"))
    }
}

impl Serialize for DeclaredType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One declared name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Declared identifier.
    pub name: String,
    /// Recorded type.
    pub declared_type: DeclaredType,
    /// Line of the declaring identifier.
    pub line: LineNumber,
    /// Token index of the declaring identifier.
    pub token_index: usize,
}

impl Declaration {
    /// Creates a declaration value.
    pub fn new(
        name: impl Into<String>,
        declared_type: DeclaredType,
        line: LineNumber,
        token_index: usize,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            line,
            token_index,
        }
    }
}

/// Insertion-ordered declaration table where the first declaration wins.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<Declaration>,
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration unless the name is already declared.
    ///
    /// Returns `true` when the declaration was recorded.
    pub fn declare(&mut self, declaration: Declaration) -> bool {
        if self.by_name.contains_key(&declaration.name) {
            return false;
        }
        self.by_name
            .insert(declaration.name.clone(), self.entries.len());
        self.entries.push(declaration);
        true
    }

    /// Sets the type of `name` if it is currently [`DeclaredType::Unknown`].
    ///
    /// Returns `true` when the type was updated.
    pub fn annotate(&mut self, name: &str, declared_type: &str) -> bool {
        let Some(&index) = self.by_name.get(name) else {
            return false;
        };
        let entry = &mut self.entries[index];
        if entry.declared_type != DeclaredType::Unknown {
            return false;
        }
        entry.declared_type = DeclaredType::Named(declared_type.to_string());
        true
    }

    /// Returns the declaration for `name`.
    pub fn lookup(&self, name: &str) -> Option<&Declaration> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Returns `true` when `name` is declared anywhere in the source.
    pub fn is_declared(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns `true` when `name` is declared at or before `token_index`.
    pub fn is_declared_before(&self, name: &str, token_index: usize) -> bool {
        self.lookup(name)
            .is_some_and(|declaration| declaration.token_index <= token_index)
    }

    /// Consumes the table and returns its declarations.
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.entries
    }

    /// Returns the number of declared names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
