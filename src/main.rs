use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use jklex::analysis::{AnalyzerOptions, analyze_file};
use jklex::config::{ColorChoice, Language, OutputFormat};
use jklex::interactive::{Session, SessionOutcome};
use jklex::report::{DEFAULT_FRAME_DELAY, ReportOptions, Reporter, render_json};

#[derive(Parser)]
#[command(name = "jklex")]
#[command(about = "Lexical analyzer for Java and Kotlin sources", version)]
struct Cli {
    /// When to colour output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, env = "JKLEX_COLOR")]
    color: ColorChoice,
    /// Draw table borders one character at a time
    #[arg(long, global = true)]
    animate: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a file and print the symbol table, comments and errors
    Analyze {
        /// Source file to analyze
        file: PathBuf,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "JKLEX_FORMAT")]
        format: OutputFormat,
    },
    /// Print only the symbol table of a file
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
    /// Pick Input.java or Input.kt from a menu and analyze it
    Interactive {
        /// Directory holding Input.java and Input.kt
        #[arg(long, default_value = ".", env = "JKLEX_FIXTURES_DIR")]
        fixtures_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let report = ReportOptions {
        color: cli.color.resolve(io::stdout().is_terminal()),
        animate: cli.animate,
        frame_delay: DEFAULT_FRAME_DELAY,
    };

    match cli.command {
        Commands::Analyze { file, format } => analyze(&file, format, report),
        Commands::Tokens { file } => {
            let analysis = analyze_file(&file, AnalyzerOptions::default())?;
            let mut reporter = Reporter::new(io::stdout().lock(), report);
            reporter.write_symbol_table(&analysis.tokens)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive { fixtures_dir } => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout().lock(), fixtures_dir)
                .with_report_options(report);
            match session.run()? {
                SessionOutcome::Finished => Ok(ExitCode::SUCCESS),
                SessionOutcome::InputError => Ok(ExitCode::FAILURE),
            }
        }
    }
}

fn analyze(file: &Path, format: OutputFormat, report: ReportOptions) -> anyhow::Result<ExitCode> {
    match Language::from_path(file) {
        Some(language) => debug!(%language, "detected language"),
        None => debug!(path = %file.display(), "unknown extension, using combined keyword table"),
    }

    let analysis = analyze_file(file, AnalyzerOptions::default())?;
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Table => Reporter::new(&mut stdout, report).write_analysis(&analysis)?,
        OutputFormat::Json => {
            let json = render_json(&analysis).context("failed to serialize analysis")?;
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(if analysis.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
