//! The batch replay: load, then interpret and execute every command line.

use std::{fs, io::Write, path::Path};

use reel_core::{Catalog, CustomerDirectory, Shop};
use reel_script::{Interpreter, load_catalog, load_roster};
use tracing::{debug, error, info, warn};

use crate::{Error, Result, Settings};

/// First line of every audit log.
pub const AUDIT_HEADER: &str = "# Completed (parsed & executed) commands";

/// The three input texts, read up front so a missing file aborts the run
/// before any state is touched.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
  pub movies:    String,
  pub customers: String,
  pub commands:  String,
}

impl Inputs {
  pub fn read(settings: &Settings) -> Result<Self> {
    Ok(Self {
      movies:    read_input("movies", &settings.movies)?,
      customers: read_input("customers", &settings.customers)?,
      commands:  read_input("commands", &settings.commands)?,
    })
  }
}

/// Only a file that cannot be read at all is an error. Bytes that are not
/// UTF-8 become U+FFFD so the affected lines fail on their own later.
fn read_input(role: &'static str, path: &Path) -> Result<String> {
  let bytes = fs::read(path).map_err(|source| Error::Open {
    role,
    path: path.to_path_buf(),
    source,
  })?;
  Ok(match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(err) => {
      warn!(
        role,
        path = %path.display(),
        "input is not valid UTF-8, decoding lossily"
      );
      String::from_utf8_lossy(err.as_bytes()).into_owned()
    }
  })
}

/// Counters for the closing summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
  /// Parsed and executed successfully; these lines are in the audit log.
  pub executed: usize,
  /// Could not be parsed.
  pub skipped:  usize,
  /// Parsed, but rejected by the executor.
  pub failed:   usize,
}

/// Replay `inputs`, printing reports to `out` and appending each successful
/// command line, verbatim, to `audit`.
///
/// Per-line problems are logged and skipped; only write failures abort.
pub fn run_batch(
  inputs: &Inputs,
  out: &mut impl Write,
  audit: &mut impl Write,
) -> Result<Summary> {
  writeln!(audit, "{AUDIT_HEADER}")?;

  let mut catalog = Catalog::new();
  let loaded = load_catalog(&inputs.movies, &mut catalog);
  for rejected in &loaded.rejected {
    error!(line = rejected.line_no, "{rejected}");
  }
  info!(
    records = catalog.len(),
    merged = loaded.merged,
    rejected = loaded.rejected.len(),
    "catalog loaded"
  );

  let mut customers = CustomerDirectory::new();
  let roster = load_roster(&inputs.customers, &mut customers);
  for id in &roster.replaced {
    warn!(customer = %id, "duplicate customer id replaced earlier record");
  }
  if let Some(trailing) = &roster.trailing {
    debug!(%trailing, "customer roster stopped at unreadable entry");
  }
  info!(customers = customers.len(), "customers loaded");

  let mut shop = Shop::new(catalog, customers);
  let interpreter = Interpreter::new();
  let mut summary = Summary::default();

  for (idx, line) in inputs.commands.lines().enumerate() {
    let line_no = idx + 1;
    if line.trim().is_empty() {
      continue;
    }

    let command = match interpreter.parse(line) {
      Ok(command) => command,
      Err(err) => {
        error!(line = line_no, "{err} in: {line}");
        summary.skipped += 1;
        continue;
      }
    };

    debug!(line = line_no, code = %command.code(), "executing");
    match shop.execute(&command) {
      Ok(outcome) => {
        for printed in outcome.lines() {
          writeln!(out, "{printed}")?;
        }
        writeln!(audit, "{line}")?;
        summary.executed += 1;
      }
      Err(err) => {
        error!(line = line_no, "{err}");
        summary.failed += 1;
      }
    }
  }

  out.flush()?;
  audit.flush()?;
  Ok(summary)
}
