//! Catalog file grammar.
//!
//! One movie per line:
//!
//! ```text
//! F, 10, Nora Ephron, You've Got Mail, 1998
//! D, 10, Phillippe De Broca, King of Hearts, 1967
//! C, 10, George Cukor, Holiday, Katherine Hepburn 9 1938
//! ```
//!
//! Comedies and dramas end in a year; classics end in
//! `<ActorFirst> <ActorLast> <Month> <Year>`.

use reel_core::{Actor, Catalog, Category, Movie, catalog::Shelved};

use crate::{
  error::{Error, Result},
  scan::Scanner,
};

/// A rejected input line, numbered from 1.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("[{line_no}] {error} -> {line}")]
pub struct LineError {
  pub line_no: usize,
  pub line:    String,
  pub error:   Error,
}

/// What [`load_catalog`] did with its input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
  /// Lines that created a new record.
  pub shelved:  usize,
  /// Lines folded into an earlier record with the same key.
  pub merged:   usize,
  pub rejected: Vec<LineError>,
}

/// Parse every line of `input` into `catalog`. Blank lines are ignored; bad
/// lines are collected in the report and never stop the load.
pub fn load_catalog(input: &str, catalog: &mut Catalog) -> LoadReport {
  let mut report = LoadReport::default();
  for (idx, raw) in input.lines().enumerate() {
    let line = raw.trim();
    if line.is_empty() {
      continue;
    }
    match parse_movie(line) {
      Ok(movie) => match catalog.insert_or_merge(movie) {
        Shelved::New => report.shelved += 1,
        Shelved::Merged { .. } => report.merged += 1,
      },
      Err(error) => report.rejected.push(LineError {
        line_no: idx + 1,
        line: line.to_string(),
        error,
      }),
    }
  }
  report
}

/// Parse a single catalog line.
pub fn parse_movie(line: &str) -> Result<Movie> {
  let raw = line.trim();
  let code = raw.chars().next().ok_or(Error::MissingComma)?;
  let first_comma = raw.find(',').ok_or(Error::MissingComma)?;
  let category =
    Category::from_code(code).ok_or(Error::InvalidMovieCode(code))?;

  // stock, director, title[, tail]
  let rest = raw[first_comma + 1..].trim();
  let mut fields = rest.splitn(3, ',');
  let (Some(stock), Some(director), Some(title)) =
    (fields.next(), fields.next(), fields.next())
  else {
    return Err(Error::NotEnoughFields);
  };
  let stock = stock.trim();
  let director = director.trim();
  let (title, tail) = match title.split_once(',') {
    Some((title, tail)) => (title.trim(), tail.trim()),
    None => (title.trim(), ""),
  };

  let stock: u32 = stock
    .parse()
    .map_err(|_| Error::InvalidStock(stock.to_string()))?;

  match category {
    Category::Comedy | Category::Drama => {
      let year: i32 = tail
        .parse()
        .map_err(|_| Error::InvalidYear(tail.to_string()))?;
      Ok(match category {
        Category::Comedy => Movie::comedy(title, director, year, stock),
        _ => Movie::drama(title, director, year, stock),
      })
    }
    Category::Classics => {
      let (actor, month, year) = parse_classics_tail(tail)?;
      Ok(Movie::classic(title, director, month, year, actor, stock))
    }
  }
}

/// `<ActorFirst> <ActorLast> <Month> <Year>`, month in 1–12.
fn parse_classics_tail(tail: &str) -> Result<(Actor, u8, i32)> {
  let invalid = || Error::InvalidClassicsTail(tail.to_string());
  let mut scan = Scanner::new(tail);
  let first = scan.next_token().ok_or_else(invalid)?;
  let last = scan.next_token().ok_or_else(invalid)?;
  let month: i64 = scan.next_parsed().ok_or_else(invalid)?;
  let year: i32 = scan.next_parsed().ok_or_else(invalid)?;

  if !(1..=12).contains(&month) {
    return Err(Error::InvalidMonth(month));
  }
  let month = u8::try_from(month).map_err(|_| Error::InvalidMonth(month))?;
  Ok((Actor::new(first, last), month, year))
}
