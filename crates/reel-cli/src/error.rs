//! Error types and exit-code mapping for the batch driver.

use std::{io, path::PathBuf, thread};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An input file could not be read, or the audit log could not be created.
  #[error("cannot open {role} file {path:?}: {source}")]
  Open {
    role:   &'static str,
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("write error: {0}")]
  Write(#[from] io::Error),
}

impl Error {
  /// `1` for files that cannot be opened, `2` for every other typed failure.
  pub fn exit_code(&self) -> u8 {
    match self {
      Error::Open { .. } => 1,
      Error::Config(_) | Error::Write(_) => 2,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Process exit status for a whole run, as caught by `catch_unwind`: `0` on
/// success, the typed code for one of our errors, `2` for any other error and
/// `3` for a panic.
pub fn exit_status(outcome: &thread::Result<anyhow::Result<()>>) -> u8 {
  match outcome {
    Ok(Ok(())) => 0,
    Ok(Err(err)) => err.downcast_ref::<Error>().map_or(2, Error::exit_code),
    Err(_) => 3,
  }
}
