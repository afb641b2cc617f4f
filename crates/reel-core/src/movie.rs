//! Movie records — the stocked unit of the rental catalog.
//!
//! A record is one title held in some number of copies. Every category shares
//! title, director, year and stock; classics additionally carry a release
//! month and a major actor. Each category derives its canonical [`MovieKey`]
//! differently, and that key is the identity used for merging duplicate
//! catalog lines, for lookup, and for tracking what a customer has out.

use std::{cmp::Ordering, fmt};

use strum::{Display, EnumIter};

// ─── Category ────────────────────────────────────────────────────────────────

/// The shelf a movie lives on. Declaration order is inventory display order.
///
/// `Display` renders the single-letter code used in catalog files, commands
/// and history lines.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter,
)]
pub enum Category {
  #[strum(to_string = "F")]
  Comedy,
  #[strum(to_string = "D")]
  Drama,
  #[strum(to_string = "C")]
  Classics,
}

impl Category {
  pub fn code(self) -> char {
    match self {
      Self::Comedy => 'F',
      Self::Drama => 'D',
      Self::Classics => 'C',
    }
  }

  pub fn from_code(code: char) -> Option<Self> {
    match code {
      'F' => Some(Self::Comedy),
      'D' => Some(Self::Drama),
      'C' => Some(Self::Classics),
      _ => None,
    }
  }

  /// Header label for inventory dumps.
  pub fn label(self) -> &'static str {
    match self {
      Self::Comedy => "Comedy",
      Self::Drama => "Drama",
      Self::Classics => "Classics",
    }
  }
}

// ─── MovieKey ────────────────────────────────────────────────────────────────

/// The canonical per-category identity of a movie.
///
/// The constructors below are the only place the key formulas live; catalog
/// records and command descriptors both go through them so the two always
/// address the same record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieKey(String);

impl MovieKey {
  /// `Title|Year`
  pub fn comedy(title: &str, year: i32) -> Self {
    Self(format!("{title}|{year}"))
  }

  /// `Director|Title`
  pub fn drama(director: &str, title: &str) -> Self {
    Self(format!("{director}|{title}"))
  }

  /// `YYYY-MM|First Last`, month zero-padded.
  pub fn classic(year: i32, month: u8, actor: &Actor) -> Self {
    Self(format!("{year}-{month:02}|{actor}"))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for MovieKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Actor ───────────────────────────────────────────────────────────────────

/// The major actor credited on a classic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Actor {
  pub first: String,
  pub last:  String,
}

impl Actor {
  pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
    Self {
      first: first.into(),
      last:  last.into(),
    }
  }

  /// `First Last`; also the classics tie-breaker.
  pub fn full_name(&self) -> String { format!("{} {}", self.first, self.last) }
}

impl fmt::Display for Actor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.first, self.last)
  }
}

// ─── Movie ───────────────────────────────────────────────────────────────────

/// Category-specific payload of a [`Movie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieKind {
  Comedy,
  Drama,
  Classic {
    /// Release month, 1–12.
    month: u8,
    actor: Actor,
  },
}

/// A catalog record. Stock only moves through [`Movie::stock_down`],
/// [`Movie::stock_up`] and catalog merges, so it can never go negative.
#[derive(Debug, Clone)]
pub struct Movie {
  pub title:    String,
  pub director: String,
  pub year:     i32,
  pub kind:     MovieKind,
  stock:        u32,
}

impl Movie {
  pub fn comedy(
    title: impl Into<String>,
    director: impl Into<String>,
    year: i32,
    stock: u32,
  ) -> Self {
    Self {
      title: title.into(),
      director: director.into(),
      year,
      kind: MovieKind::Comedy,
      stock,
    }
  }

  pub fn drama(
    title: impl Into<String>,
    director: impl Into<String>,
    year: i32,
    stock: u32,
  ) -> Self {
    Self {
      title: title.into(),
      director: director.into(),
      year,
      kind: MovieKind::Drama,
      stock,
    }
  }

  pub fn classic(
    title: impl Into<String>,
    director: impl Into<String>,
    month: u8,
    year: i32,
    actor: Actor,
    stock: u32,
  ) -> Self {
    Self {
      title: title.into(),
      director: director.into(),
      year,
      kind: MovieKind::Classic { month, actor },
      stock,
    }
  }

  pub fn category(&self) -> Category {
    match self.kind {
      MovieKind::Comedy => Category::Comedy,
      MovieKind::Drama => Category::Drama,
      MovieKind::Classic { .. } => Category::Classics,
    }
  }

  pub fn key(&self) -> MovieKey {
    match &self.kind {
      MovieKind::Comedy => MovieKey::comedy(&self.title, self.year),
      MovieKind::Drama => MovieKey::drama(&self.director, &self.title),
      MovieKind::Classic { month, actor } => {
        MovieKey::classic(self.year, *month, actor)
      }
    }
  }

  pub fn stock(&self) -> u32 { self.stock }

  /// Take one copy off the shelf. Returns `false`, leaving stock at zero, when
  /// there is nothing left.
  pub fn stock_down(&mut self) -> bool {
    match self.stock.checked_sub(1) {
      Some(left) => {
        self.stock = left;
        true
      }
      None => false,
    }
  }

  pub fn stock_up(&mut self) { self.stock = self.stock.saturating_add(1); }

  /// Fold the copies of a duplicate record into this one.
  pub(crate) fn restock(&mut self, copies: u32) {
    self.stock = self.stock.saturating_add(copies);
  }

  /// The tuple each category sorts by, rendered comparable.
  fn sort_fields(&self) -> SortFields<'_> {
    match &self.kind {
      MovieKind::Comedy => SortFields::Comedy(&self.title, self.year),
      MovieKind::Drama => SortFields::Drama(&self.director, &self.title),
      MovieKind::Classic { month, actor } => {
        SortFields::Classic(self.year, *month, actor.full_name())
      }
    }
  }
}

#[derive(PartialEq, PartialOrd)]
enum SortFields<'a> {
  Comedy(&'a str, i32),
  Drama(&'a str, &'a str),
  Classic(i32, u8, String),
}

/// Identity comparison: comedies by (title, year), dramas by (director,
/// title), classics by (year, month, actor). Stock is never compared, and
/// records from different categories are never equal.
impl PartialEq for Movie {
  fn eq(&self, other: &Self) -> bool {
    self.sort_fields() == other.sort_fields()
  }
}

/// Semantic ordering within a category. Records from different categories
/// are unordered.
impl PartialOrd for Movie {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self.category() != other.category() {
      return None;
    }
    self.sort_fields().partial_cmp(&other.sort_fields())
  }
}

/// One inventory line, e.g. `F, 3, Nora Ephron, Sleepless in Seattle, 1993`.
impl fmt::Display for Movie {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}, {}, {}, {}, ",
      self.category(),
      self.stock,
      self.director,
      self.title
    )?;
    match &self.kind {
      MovieKind::Comedy | MovieKind::Drama => write!(f, "{}", self.year),
      MovieKind::Classic { month, actor } => {
        write!(f, "{actor} {month} {}", self.year)
      }
    }
  }
}
