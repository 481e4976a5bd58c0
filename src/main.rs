//! treegit - Git status indicators for a file and its ancestor directories.
//!
//! Usage:
//!   treegit FILE PREVIOUS [ANCESTOR...]       Emacs-Lisp alist on stdout
//!   treegit -f json FILE PREVIOUS [...]       JSON listing on stdout
//!   treegit --help                            Show help
//!
//! Exit status is 0 when a listing was printed, 2 when the file's status is
//! unchanged from PREVIOUS (nothing printed) and 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use treegit_core::{Outcome, PreviousStatus, ProbeConfig, PropagationConfig, PropagationResult};
use treegit_status::{GitProbe, PropagationEngine};

/// Exit code for "status unchanged, nothing printed".
const EXIT_UNCHANGED: u8 = 2;

/// Exit code for usage errors; shares the generic failure code.
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "treegit",
    version,
    about = "Git status of a file, propagated to its ancestor directories",
    long_about = "treegit resolves the git status of FILE and of each ANCESTOR \
                  (nearest first) and prints them as a listing.\n\n\
                  Status codes: 0 unmodified, M modified, ? untracked, ! ignored. \
                  An ignored or untracked ancestor passes its code on to every \
                  farther ancestor.\n\n\
                  Exits with 2 and prints nothing when FILE still has the \
                  PREVIOUS status.\n\n\
                  Options may appear anywhere. Put `--` before the first \
                  positional argument that starts with '-', for example \
                  `treegit -- -notes.txt nil`."
)]
struct Cli {
    /// File whose status changed
    file: String,

    /// Previously known status of FILE (0, M, ?, !), or nil/-/"" if unknown
    previous: PreviousStatus,

    /// Ancestor directories of FILE, nearest first
    ancestors: Vec<String>,

    /// Git executable to run
    #[arg(long, default_value = "git")]
    git: PathBuf,

    /// Run probes in this directory
    #[arg(short = 'C', long)]
    work_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Let probes whose result is no longer needed run to completion
    #[arg(long)]
    no_abort: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Emacs-Lisp association list
    #[default]
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() { EXIT_FAILURE } else { 0 };
            return Ok(ExitCode::from(code));
        }
    };

    let probe_config = ProbeConfig::builder()
        .git_program(cli.git)
        .work_dir(cli.work_dir)
        .build()
        .context("Invalid probe configuration")?;
    let engine = PropagationEngine::with_config(
        GitProbe::with_config(probe_config),
        PropagationConfig::default().with_abort_abandoned(!cli.no_abort),
    );

    let outcome = engine
        .compute(&cli.file, cli.previous, &cli.ancestors[..])
        .await
        .with_context(|| format!("Failed to compute git status of {}", cli.file))?;

    match outcome {
        Outcome::Unchanged => Ok(ExitCode::from(EXIT_UNCHANGED)),
        Outcome::Changed(result) => {
            println!("{}", render(&result, cli.format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr; stdout carries the listing.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Render a listing in the requested format.
fn render(result: &PropagationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(result.to_elisp_alist()),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}
