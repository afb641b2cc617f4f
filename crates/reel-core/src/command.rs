//! Typed commands, as produced by the interpreter in `reel-script`.
//!
//! A command is either fully formed or never built; there is no partially
//! populated variant for the executor to trip over.

use crate::{
  customer::CustomerId,
  movie::{Actor, Category, MovieKey},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// `I` — dump the whole catalog.
  Inventory,
  /// `H <id>` — dump one customer's history.
  History(CustomerId),
  /// `B <id> D <type> <descriptor>`
  Borrow(Request),
  /// `R <id> D <type> <descriptor>`
  Return(Request),
}

impl Command {
  /// The leading action code of the command line.
  pub fn code(&self) -> char {
    match self {
      Self::Inventory => 'I',
      Self::History(_) => 'H',
      Self::Borrow(_) => 'B',
      Self::Return(_) => 'R',
    }
  }
}

/// The body shared by borrow and return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  pub customer:   CustomerId,
  pub descriptor: Descriptor,
}

/// The fields a command names a movie by; enough to derive its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
  /// `<Title>, <Year>`
  Comedy { title: String, year: i32 },
  /// `<Director>, <Title>`
  Drama { director: String, title: String },
  /// `<Month> <Year> <ActorFirst> <ActorLast>`
  Classic { month: u8, year: i32, actor: Actor },
}

impl Descriptor {
  pub fn category(&self) -> Category {
    match self {
      Self::Comedy { .. } => Category::Comedy,
      Self::Drama { .. } => Category::Drama,
      Self::Classic { .. } => Category::Classics,
    }
  }

  pub fn key(&self) -> MovieKey {
    match self {
      Self::Comedy { title, year } => MovieKey::comedy(title, *year),
      Self::Drama { director, title } => MovieKey::drama(director, title),
      Self::Classic { month, year, actor } => {
        MovieKey::classic(*year, *month, actor)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::movie::Movie;

  #[test]
  fn descriptor_keys_address_catalog_records() {
    let pairs = [
      (
        Descriptor::Comedy {
          title: "TitleA".into(),
          year:  2001,
        },
        Movie::comedy("TitleA", "DirA", 2001, 3),
      ),
      (
        Descriptor::Drama {
          director: "DirX".into(),
          title:    "TitleY".into(),
        },
        Movie::drama("TitleY", "DirX", 1990, 1),
      ),
      (
        Descriptor::Classic {
          month: 7,
          year:  1990,
          actor: Actor::new("John", "Doe"),
        },
        Movie::classic("TitleC", "DirB", 7, 1990, Actor::new("John", "Doe"), 4),
      ),
    ];

    for (descriptor, movie) in pairs {
      assert_eq!(descriptor.category(), movie.category());
      assert_eq!(descriptor.key(), movie.key());
    }
  }

  #[test]
  fn classic_key_pads_month() {
    let descriptor = Descriptor::Classic {
      month: 7,
      year:  1990,
      actor: Actor::new("John", "Doe"),
    };
    assert_eq!(descriptor.key().as_str(), "1990-07|John Doe");
  }
}
