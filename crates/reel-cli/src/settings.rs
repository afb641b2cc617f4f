//! Run configuration: which files to read and where to write the audit log.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file,
//! `REEL_*` environment variables, then positional command-line arguments.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;

/// Resolved input and output paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
  pub movies:    PathBuf,
  pub customers: PathBuf,
  pub commands:  PathBuf,
  pub audit_log: PathBuf,
}

/// Per-run overrides, normally taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub movies:    Option<PathBuf>,
  pub customers: Option<PathBuf>,
  pub commands:  Option<PathBuf>,
  pub audit_log: Option<PathBuf>,
}

impl Settings {
  /// Layer defaults, `config_file` (if it exists), the environment and
  /// `overrides` into a single [`Settings`].
  pub fn load(config_file: &Path, overrides: Overrides) -> Result<Self> {
    let lossy = |p: Option<PathBuf>| p.map(|p| p.to_string_lossy().into_owned());

    let settings = config::Config::builder()
      .set_default("movies", "data4movies.txt")?
      .set_default("customers", "data4customers.txt")?
      .set_default("commands", "data4commands.txt")?
      .set_default("audit_log", "completed_commands.txt")?
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::with_prefix("REEL"))
      .set_override_option("movies", lossy(overrides.movies))?
      .set_override_option("customers", lossy(overrides.customers))?
      .set_override_option("commands", lossy(overrides.commands))?
      .set_override_option("audit_log", lossy(overrides.audit_log))?
      .build()?;

    Ok(settings.try_deserialize()?)
  }
}
