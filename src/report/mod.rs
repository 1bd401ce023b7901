//! Boxed text and JSON rendering of an [`Analysis`].
//!
//! The text report prints three sections in a fixed order: the symbol table
//! sorted by line, the comment list, and the error report with its summary.

pub mod palette;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::analysis::{Analysis, ErrorSummary};
use crate::lexer::{Comment, RecoverableLexError, Token};

pub use palette::Palette;

const TOKEN_WIDTH: usize = 40;
const ATTRIBUTE_WIDTH: usize = 18;
const LINE_WIDTH: usize = 6;
const TABLE_WIDTH: usize = TOKEN_WIDTH + ATTRIBUTE_WIDTH + LINE_WIDTH + 6;
const COMMENTS_WIDTH: usize = 65;
const COMMENT_TEXT_WIDTH: usize = 58;
const ERRORS_WIDTH: usize = 70;
const MESSAGE_WIDTH: usize = 60;

/// Default per-character delay for animated borders.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_micros(1500);

/// Text report options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Emit ANSI colour sequences.
    pub color: bool,
    /// Draw horizontal borders one character at a time.
    pub animate: bool,
    /// Delay per border character when animating.
    pub frame_delay: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: false,
            animate: false,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// Writes boxed report sections to an output sink.
pub struct Reporter<W: Write> {
    out: W,
    options: ReportOptions,
    palette: Palette,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter over `out`.
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self {
            out,
            options,
            palette: Palette::new(options.color),
        }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the symbol table, comments and error report in that order.
    pub fn write_analysis(&mut self, analysis: &Analysis) -> io::Result<()> {
        self.write_symbol_table(&analysis.tokens)?;
        self.write_comments(&analysis.comments)?;
        self.write_errors(analysis)?;
        self.write_lex_warnings(&analysis.lex_warnings)
    }

    /// Writes every token sorted by line, then by lexeme.
    pub fn write_symbol_table(&mut self, tokens: &[Token]) -> io::Result<()> {
        let mut sorted: Vec<&Token> = tokens.iter().collect();
        sorted.sort_by(|left, right| {
            (left.line, left.lexeme.as_str()).cmp(&(right.line, right.lexeme.as_str()))
        });

        let palette = self.palette;
        write!(self.out, "\n{}", palette.header())?;
        self.hline(TABLE_WIDTH)?;
        writeln!(
            self.out,
            "| {:<TOKEN_WIDTH$} | {:<ATTRIBUTE_WIDTH$} | {:<LINE_WIDTH$} |",
            "TOKEN", "ATTRIBUTE", "LINE"
        )?;
        self.hline(TABLE_WIDTH)?;
        write!(self.out, "{}", palette.reset())?;

        for token in sorted {
            let color = palette.token(token.kind);
            writeln!(
                self.out,
                "| {color}{:<TOKEN_WIDTH$}{reset} | {color}{:<ATTRIBUTE_WIDTH$}{reset} | {:>LINE_WIDTH$} |",
                truncate(&token.lexeme, TOKEN_WIDTH - 1),
                token.kind.label(),
                token.line,
                reset = palette.reset(),
            )?;
        }

        self.hline(TABLE_WIDTH)
    }

    /// Writes the comment box.
    pub fn write_comments(&mut self, comments: &[Comment]) -> io::Result<()> {
        let palette = self.palette;
        self.section_header("COMMENTS", COMMENTS_WIDTH)?;

        if comments.is_empty() {
            writeln!(
                self.out,
                "| {}(no comments found){}",
                palette.comment(),
                palette.reset()
            )?;
            return self.hline(COMMENTS_WIDTH);
        }

        for comment in comments {
            let text = single_line(&comment.text);
            writeln!(
                self.out,
                "| {}{:<COMMENT_TEXT_WIDTH$}{} |",
                palette.comment(),
                truncate(&text, COMMENT_TEXT_WIDTH - 1),
                palette.reset()
            )?;
        }
        self.hline(COMMENTS_WIDTH)
    }

    /// Writes the E1..E4 report followed by the per-category summary.
    pub fn write_errors(&mut self, analysis: &Analysis) -> io::Result<()> {
        let palette = self.palette;
        self.section_header("ERROR REPORT", ERRORS_WIDTH)?;

        if analysis.diagnostics.is_empty() {
            writeln!(self.out, "{}No errors found.{}", palette.ok(), palette.reset())?;
            return self.hline(ERRORS_WIDTH);
        }

        for diagnostic in &analysis.diagnostics {
            writeln!(
                self.out,
                "| {}{:<MESSAGE_WIDTH$}{} | {:>3} |",
                palette.error(diagnostic.code),
                truncate(&diagnostic.to_string(), MESSAGE_WIDTH),
                palette.reset(),
                diagnostic.line
            )?;
        }
        self.hline(ERRORS_WIDTH)?;

        writeln!(
            self.out,
            "{}Summary:{} {}",
            palette.ok(),
            palette.reset(),
            analysis.summary()
        )
    }

    /// Writes recovered lexical problems, if any.
    pub fn write_lex_warnings(&mut self, warnings: &[RecoverableLexError]) -> io::Result<()> {
        if warnings.is_empty() {
            return Ok(());
        }

        let palette = self.palette;
        self.section_header("LEXICAL WARNINGS", ERRORS_WIDTH)?;
        for warning in warnings {
            let diagnostic = warning.diagnostic();
            let message = match &diagnostic.near_text {
                Some(near) => format!("{} near {near}", diagnostic.message),
                None => diagnostic.message.clone(),
            };
            writeln!(
                self.out,
                "| {}{:<MESSAGE_WIDTH$}{} | {:>3} |",
                palette.failure(),
                truncate(&single_line(&message), MESSAGE_WIDTH),
                palette.reset(),
                diagnostic.line
            )?;
        }
        self.hline(ERRORS_WIDTH)
    }

    fn section_header(&mut self, title: &str, width: usize) -> io::Result<()> {
        let palette = self.palette;
        write!(self.out, "\n{}", palette.header())?;
        self.hline(width)?;
        writeln!(self.out, "| {title:<inner$} |", inner = width - 4)?;
        self.hline(width)?;
        write!(self.out, "{}", palette.reset())
    }

    fn hline(&mut self, width: usize) -> io::Result<()> {
        if self.options.animate {
            for _ in 0..width {
                self.out.write_all(b"-")?;
                self.out.flush()?;
                thread::sleep(self.options.frame_delay);
            }
        } else {
            self.out.write_all("-".repeat(width).as_bytes())?;
        }
        self.out.write_all(b"\n")
    }
}

/// JSON document produced by [`render_json`].
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    summary: ErrorSummary,
}

/// Serializes an analysis and its summary as pretty-printed JSON.
pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        analysis,
        summary: analysis.summary(),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect()
}
