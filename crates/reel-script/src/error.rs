//! Error types for the reel-script codecs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  // ── Catalog lines ──────────────────────────────────────────────────────
  #[error("missing comma after code")]
  MissingComma,

  #[error("invalid movie code '{0}'")]
  InvalidMovieCode(char),

  #[error("not enough fields")]
  NotEnoughFields,

  #[error("invalid stock '{0}'")]
  InvalidStock(String),

  #[error("invalid year '{0}'")]
  InvalidYear(String),

  #[error("invalid classics tail '{0}'")]
  InvalidClassicsTail(String),

  #[error("invalid month {0}")]
  InvalidMonth(i64),

  // ── Command lines ──────────────────────────────────────────────────────
  #[error("empty command line")]
  EmptyLine,

  #[error("invalid action code '{0}'")]
  InvalidActionCode(char),

  #[error("bad History command")]
  BadHistory,

  #[error("bad command")]
  BadCommand,

  #[error("invalid media type '{0}'")]
  InvalidMedia(char),

  /// A descriptor that does not fit its category's shape; carries the
  /// category label.
  #[error("bad {0} command")]
  BadDescriptor(&'static str),

  #[error("numeric parse failure: '{0}'")]
  Numeric(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
