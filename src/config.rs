//! Language, colour and output-format settings shared by the CLI and sessions.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use clap::ValueEnum;

/// Source language of an analyzed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    /// `.java`
    Java,
    /// `.kt` / `.kts`
    Kotlin,
}

impl Language {
    /// Fixture file analyzed when this language is picked interactively.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Java => "Input.java",
            Self::Kotlin => "Input.kt",
        }
    }

    /// Detects the language from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str)? {
            "java" => Some(Self::Java),
            "kt" | "kts" => Some(Self::Kotlin),
            _ => None,
        }
    }

    /// Maps the interactive menu entry (`1` or `2`) to a language.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.chars().next()? {
            '1' => Some(Self::Java),
            '2' => Some(Self::Kotlin),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
        })
    }
}

/// When to emit ANSI colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when writing to a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against whether output is a terminal.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Report format for non-interactive analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum OutputFormat {
    /// Boxed text tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}
