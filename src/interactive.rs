//! Prompt-driven analysis loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::analysis::{AnalyzeError, AnalyzerOptions, analyze_file};
use crate::config::Language;
use crate::report::{Palette, ReportOptions, Reporter};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose to stop.
    Finished,
    /// Input ended while a language was being selected.
    InputError,
}

/// Interactive session over any line reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    fixtures_dir: PathBuf,
    analyzer: AnalyzerOptions,
    report: ReportOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that resolves fixture names inside `fixtures_dir`.
    pub fn new(input: R, output: W, fixtures_dir: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            fixtures_dir: fixtures_dir.into(),
            analyzer: AnalyzerOptions::default(),
            report: ReportOptions::default(),
        }
    }

    /// Sets analyzer options.
    pub fn with_analyzer_options(mut self, options: AnalyzerOptions) -> Self {
        self.analyzer = options;
        self
    }

    /// Sets report options.
    pub fn with_report_options(mut self, options: ReportOptions) -> Self {
        self.report = options;
        self
    }

    /// Returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs prompts until the user stops or input ends.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        let palette = Palette::new(self.report.color);
        writeln!(
            self.output,
            "{}Lexical Analyzer for Java and Kotlin {}",
            palette.header(),
            palette.reset()
        )?;

        loop {
            let Some(language) = self.prompt_language()? else {
                writeln!(self.output, "Input error. Exiting.")?;
                return Ok(SessionOutcome::InputError);
            };
            let file_name = language.default_file_name();
            writeln!(self.output, "Selected file: {file_name}")?;

            if !self.prompt_yes_no("Proceed with analysis on this file")? {
                continue;
            }

            self.analyze(file_name)?;

            if !self.prompt_yes_no("Do you want to continue and analyze another file")? {
                writeln!(self.output, "Exiting. Goodbye.")?;
                return Ok(SessionOutcome::Finished);
            }
        }
    }

    fn analyze(&mut self, file_name: &str) -> io::Result<()> {
        let path = self.fixtures_dir.join(file_name);
        debug!(path = %path.display(), "interactive analysis requested");
        let palette = Palette::new(self.report.color);

        match analyze_file(&path, self.analyzer) {
            Ok(analysis) => {
                let mut reporter = Reporter::new(&mut self.output, self.report);
                reporter.write_analysis(&analysis)
            }
            Err(AnalyzeError::Io { source, .. }) => {
                warn!(path = %path.display(), error = %source, "could not open file");
                writeln!(
                    self.output,
                    "{}ERROR:{} Could not open {file_name}",
                    palette.failure(),
                    palette.reset()
                )
            }
            Err(error) => writeln!(
                self.output,
                "{}ERROR:{} {error}",
                palette.failure(),
                palette.reset()
            ),
        }
    }

    fn prompt_language(&mut self) -> io::Result<Option<Language>> {
        loop {
            write!(
                self.output,
                "\nSelect language: (1) Java  (2) Kotlin  [enter 1 or 2]: "
            )?;
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                continue;
            }
            if let Some(language) = Language::from_menu_choice(&answer) {
                return Ok(Some(language));
            }
            writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?;
        }
    }

    fn prompt_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{question} (y/n): ")?;
            let Some(answer) = self.read_answer()? else {
                return Ok(false);
            };
            match answer.chars().next().map(|ch| ch.to_ascii_lowercase()) {
                None => continue,
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                Some(_) => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
