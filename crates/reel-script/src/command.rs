//! Command-line interpreter.
//!
//! Grammar, selected by the leading action code:
//!
//! ```text
//! I
//! H <id>
//! B <id> D <type> <descriptor>
//! R <id> D <type> <descriptor>
//! ```
//!
//! The media code is always `D` (DVD). `<type>` picks the descriptor shape:
//! `F` takes `<Title>, <Year>`, `D` takes `<Director>, <Title>` and `C` takes
//! `<Month> <Year> <ActorFirst> <ActorLast>`.

use std::collections::BTreeMap;

use reel_core::{Actor, Category, Command, CustomerId, Descriptor, Request};

use crate::{
  error::{Error, Result},
  scan::{Scanner, trim_trailing_comma},
};

type ParseFn = fn(&str) -> Result<Command>;

/// Maps each action code to its parser. Built once and reused for every line.
pub struct Interpreter {
  parsers: BTreeMap<char, ParseFn>,
}

impl Default for Interpreter {
  fn default() -> Self { Self::new() }
}

impl Interpreter {
  pub fn new() -> Self {
    let mut parsers: BTreeMap<char, ParseFn> = BTreeMap::new();
    parsers.insert('I', parse_inventory);
    parsers.insert('H', parse_history);
    parsers.insert('B', parse_borrow);
    parsers.insert('R', parse_return);
    Self { parsers }
  }

  /// Parse one command line. Never yields a partially populated command.
  pub fn parse(&self, line: &str) -> Result<Command> {
    let line = line.trim();
    let code = line.chars().next().ok_or(Error::EmptyLine)?;
    let parser = self
      .parsers
      .get(&code)
      .ok_or(Error::InvalidActionCode(code))?;
    parser(line)
  }
}

// ─── Per-code parsers ────────────────────────────────────────────────────────

fn parse_inventory(_line: &str) -> Result<Command> { Ok(Command::Inventory) }

fn parse_history(line: &str) -> Result<Command> {
  let mut scan = Scanner::new(line);
  scan.next_char().ok_or(Error::BadHistory)?;
  let id = scan.next_parsed().ok_or(Error::BadHistory)?;
  Ok(Command::History(CustomerId(id)))
}

fn parse_borrow(line: &str) -> Result<Command> {
  parse_request(line).map(Command::Borrow)
}

fn parse_return(line: &str) -> Result<Command> {
  parse_request(line).map(Command::Return)
}

fn parse_request(line: &str) -> Result<Request> {
  let mut scan = Scanner::new(line);
  scan.next_char().ok_or(Error::BadCommand)?;
  let id: i32 = scan.next_parsed().ok_or(Error::BadCommand)?;
  let media = scan.next_char().ok_or(Error::BadCommand)?;
  let kind = scan.next_char().ok_or(Error::BadCommand)?;

  if media != 'D' {
    return Err(Error::InvalidMedia(media));
  }
  let category = Category::from_code(kind).ok_or(Error::InvalidMovieCode(kind))?;

  Ok(Request {
    customer:   CustomerId(id),
    descriptor: parse_descriptor(category, scan.rest())?,
  })
}

fn parse_descriptor(category: Category, rest: &str) -> Result<Descriptor> {
  match category {
    // Title may itself contain commas; the year follows the last one.
    Category::Comedy => {
      let (title, year) = rest
        .rsplit_once(',')
        .ok_or(Error::BadDescriptor(category.label()))?;
      let year = year.trim();
      let year = year
        .parse()
        .map_err(|_| Error::Numeric(year.to_string()))?;
      Ok(Descriptor::Comedy {
        title: title.trim().to_string(),
        year,
      })
    }
    Category::Drama => {
      let (director, title) = rest
        .split_once(',')
        .ok_or(Error::BadDescriptor(category.label()))?;
      Ok(Descriptor::Drama {
        director: director.trim().to_string(),
        title:    trim_trailing_comma(title).to_string(),
      })
    }
    Category::Classics => {
      let bad = || Error::BadDescriptor(category.label());
      let mut scan = Scanner::new(rest);
      let month = scan.next_parsed().ok_or_else(bad)?;
      let year = scan.next_parsed().ok_or_else(bad)?;
      let first = scan.next_token().ok_or_else(bad)?;
      let last = scan.next_token().ok_or_else(bad)?;
      Ok(Descriptor::Classic {
        month,
        year,
        actor: Actor::new(first, last),
      })
    }
  }
}
