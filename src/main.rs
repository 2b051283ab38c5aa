//! yara-assist CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yara_assist::{language_configuration, locate_section, Analyzer, EngineConfig, Severity};

#[derive(Parser)]
#[command(name = "yara-assist")]
#[command(about = "Tokens, completions and diagnostics for YARA-style rule files")]
#[command(version)]
struct Cli {
    /// Config file (default: search the current directory)
    #[arg(short, long, global = true, env = "YARA_ASSIST_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a rule file
    Tokens {
        /// Rule file (use - for stdin)
        file: PathBuf,
    },
    /// Print completion items at a cursor position
    Complete {
        /// Rule file (use - for stdin)
        file: PathBuf,
        /// Cursor line (1-based)
        line: u32,
        /// Cursor column (1-based)
        column: u32,
        /// Log the detected section to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print diagnostics for one or more rule files
    Lint {
        /// Rule files (use - for stdin)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Lowest severity that makes the command fail
        #[arg(long, value_enum, default_value_t = FailOn::Error)]
        fail_on: FailOn,
    },
    /// Print the editor language configuration
    Language,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FailOn {
    Error,
    Warning,
}

impl FailOn {
    fn threshold(self) -> Severity {
        match self {
            FailOn::Error => Severity::Error,
            FailOn::Warning => Severity::Warning,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log_level);

    let analyzer = Analyzer::new(config);

    match cli.command {
        Command::Tokens { file } => {
            let source = read_source(&file)?;
            let tokens = analyzer.tokenize(&source);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
                OutputFormat::Plain => {
                    for token in &tokens {
                        println!(
                            "{:>6}..{:<6} {:<10} {}",
                            token.start,
                            token.end,
                            token.kind.as_str(),
                            token.text.escape_debug()
                        );
                    }
                }
            }
        }

        Command::Complete {
            file,
            line,
            column,
            verbose,
        } => {
            let source = read_source(&file)?;
            if verbose {
                let section = locate_section(&source, line, column);
                eprintln!("Section: {}", section.as_str());
            }
            let completions = analyzer.complete(&source, line, column);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&completions)?)
                }
                OutputFormat::Plain => {
                    for item in &completions {
                        println!(
                            "{:<20} {:<10} {}",
                            item.label,
                            item.kind.as_str(),
                            item.documentation
                        );
                    }
                }
            }
        }

        Command::Lint { files, fail_on } => {
            let threshold = fail_on.threshold();
            let mut failed = false;
            let mut report = Vec::new();

            for file in &files {
                let source = read_source(file)?;
                let diagnostics = analyzer.lint(&source);
                failed |= diagnostics.iter().any(|d| d.severity <= threshold);

                match cli.format {
                    OutputFormat::Json => report.push(serde_json::json!({
                        "file": file.display().to_string(),
                        "diagnostics": diagnostics,
                    })),
                    OutputFormat::Plain => {
                        for d in &diagnostics {
                            println!(
                                "{}:{}:{}: {}: {} [{}]",
                                file.display(),
                                d.range.start.line,
                                d.range.start.character,
                                d.severity.as_str(),
                                d.message,
                                d.code.as_deref().unwrap_or("-")
                            );
                        }
                    }
                }
            }

            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            if failed {
                return Ok(ExitCode::from(1));
            }
        }

        Command::Language => {
            println!(
                "{}",
                serde_json::to_string_pretty(&language_configuration())?
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    match explicit {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("reading current directory")?;
            Ok(EngineConfig::load_default(&cwd))
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn read_source(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
    }
}
