//! `reel` — replays a rental store's command script.
//!
//! # Usage
//!
//! ```text
//! reel [MOVIES] [CUSTOMERS] [COMMANDS] [AUDIT_LOG] [--config reel.toml]
//! ```
//!
//! Paths not given on the command line come from `REEL_*` environment
//! variables, then the config file, then the built-in defaults
//! (`data4movies.txt`, `data4customers.txt`, `data4commands.txt`,
//! `completed_commands.txt`).
//!
//! # Exit codes
//!
//! - 0: the script was replayed (individual lines may have failed)
//! - 1: an input file or the audit log could not be opened
//! - 2: any other error
//! - 3: an unexpected panic

use std::{
  fs::File,
  io::{self, BufWriter},
  panic,
  path::PathBuf,
  process::ExitCode,
};

use anyhow::Context as _;
use clap::Parser;
use reel_cli::{Error, Inputs, Overrides, Settings, exit_status, run_batch};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Movie rental store batch ledger")]
struct Cli {
  /// Movie catalog file.
  movies: Option<PathBuf>,

  /// Customer roster file.
  customers: Option<PathBuf>,

  /// Command script file.
  commands: Option<PathBuf>,

  /// Where to write the log of completed commands (truncated).
  audit_log: Option<PathBuf>,

  /// Path to an optional TOML configuration file.
  #[arg(short, long, default_value = "reel.toml")]
  config: PathBuf,
}

fn main() -> ExitCode {
  // Diagnostics go to stderr; stdout carries only reports.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let outcome = panic::catch_unwind(move || run(cli));
  match &outcome {
    Ok(Ok(())) => {}
    Ok(Err(err)) => tracing::error!("{err:#}"),
    Err(_) => tracing::error!("uncaught panic while replaying commands"),
  }
  ExitCode::from(exit_status(&outcome))
}

fn run(cli: Cli) -> anyhow::Result<()> {
  let settings = Settings::load(&cli.config, Overrides {
    movies:    cli.movies,
    customers: cli.customers,
    commands:  cli.commands,
    audit_log: cli.audit_log,
  })
  .context("failed to load settings")?;

  tracing::info!(
    movies = %settings.movies.display(),
    customers = %settings.customers.display(),
    commands = %settings.commands.display(),
    audit_log = %settings.audit_log.display(),
    "starting batch"
  );

  let inputs = Inputs::read(&settings)?;

  let audit = File::create(&settings.audit_log).map_err(|source| Error::Open {
    role: "audit log",
    path: settings.audit_log.clone(),
    source,
  })?;
  let mut audit = BufWriter::new(audit);
  let mut out = io::stdout().lock();

  let summary = run_batch(&inputs, &mut out, &mut audit)
    .context("failed to replay commands")?;

  tracing::info!(
    executed = summary.executed,
    skipped = summary.skipped,
    failed = summary.failed,
    "commands replayed"
  );
  Ok(())
}
