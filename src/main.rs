//! CLI for paper-list - Turn a BibTeX database into a sorted LaTeX publication list.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paper_list::{bib::BibError, convert, Config, ConvertError};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Turn a BibTeX database into a sorted LaTeX publication list
#[derive(Parser)]
#[command(name = "paper-list")]
#[command(version)]
#[command(after_help = "\
Examples:
  paper-list convert
  paper-list convert refs.bib -o publications.tex
  paper-list convert refs.bib -o - --config venues.toml
  paper-list venues --json")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a BibTeX file into a LaTeX enumerate list
    #[command(after_help = "\
Examples:
  paper-list convert
  paper-list convert refs.bib -o publications.tex
  cat refs.bib | paper-list convert - -o -

Papers are sorted newest first, then by venue precedence, then by venue code.
Entries whose journal mentions arXiv are left out.")]
    Convert {
        /// Input BibTeX file (use '-' for stdin)
        #[arg(default_value = "citations.bib")]
        input: PathBuf,

        /// Output file (use '-' for stdout)
        #[arg(short, long, default_value = "paper_list.tex")]
        output: PathBuf,

        /// TOML file replacing the venue table and/or precedence list
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the venue abbreviation table and precedence list
    Venues {
        /// TOML file replacing the venue table and/or precedence list
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — bibliography is not valid BibTeX
    BibFile(String),
    /// Exit 12 — configuration file not found / invalid
    Config(String),
    /// Exit 13 — an entry has a missing or non-numeric year
    Entry(String),
    /// Exit 15 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::BibFile(_) => 11,
            AppError::Config(_) => 12,
            AppError::Entry(_) => 13,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::BibFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be a BibTeX database (@article{{key, ...}} entries)",
                    msg
                )
            }
            AppError::Config(msg) => {
                write!(
                    f,
                    "{}\n  hint: expected 'precedence = [...]' and/or [[venue]] tables with 'pattern' and 'code'",
                    msg
                )
            }
            AppError::Entry(msg) => {
                write!(
                    f,
                    "{}\n  hint: every non-arXiv entry needs a numeric year field",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Logs go to stderr so `-o -` output stays clean. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            config,
        } => {
            convert_command(&input, &output, config.as_deref())?;
        }
        Commands::Venues { config, json } => {
            venues_command(config.as_deref(), json)?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Convert a BibTeX file into a LaTeX list.
fn convert_command(input: &Path, output: &Path, config: Option<&Path>) -> Result<(), AppError> {
    // 1. Load configuration
    let config = load_config(config)?;

    // 2. Read the BibTeX source (support '-' for stdin)
    let source = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?
    };

    // 3. Parse, normalize, sort and render in memory
    let conversion = convert(&source, &config).map_err(|e| map_convert_error(e, input))?;

    // 4. Write to file or stdout, only after the whole batch succeeded
    if output == Path::new("-") {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", conversion.document)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    } else {
        fs::write(output, &conversion.document)
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", output.display(), e)))?;
        eprintln!(
            "converted {} paper(s), skipped {} arXiv {}, wrote {}",
            conversion.included,
            conversion.skipped_arxiv,
            if conversion.skipped_arxiv == 1 {
                "entry"
            } else {
                "entries"
            },
            output.display()
        );
    }

    Ok(())
}

/// Print the effective venue table and precedence list.
fn venues_command(config: Option<&Path>, json: bool) -> Result<(), AppError> {
    let config = load_config(config)?;

    if json {
        let rendered = serde_json::to_string_pretty(&config.summary())
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Venue abbreviations (first match wins):");
    for rule in config.venues.rules() {
        println!("  {} -> {}", rule.pattern, rule.code);
    }
    println!();
    println!("Venue precedence within a year:");
    for (i, code) in config.precedence.codes().iter().enumerate() {
        println!("  {}. {}", i + 1, code);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(path) => Config::load(path)
            .map_err(|e| AppError::Config(format!("'{}': {}", path.display(), e))),
        None => Ok(Config::default()),
    }
}

/// Maps a ConvertError to an AppError using type-safe matching.
fn map_convert_error(e: ConvertError, input: &Path) -> AppError {
    match e {
        ConvertError::Bib(BibError::IoError(_)) => {
            AppError::InputFile(format!("'{}': {}", input.display(), e))
        }
        ConvertError::Bib(_) => AppError::BibFile(format!("'{}': {}", input.display(), e)),
        ConvertError::Entry(_) => AppError::Entry(e.to_string()),
    }
}
