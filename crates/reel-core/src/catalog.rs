//! [`Catalog`] — every stocked movie, shelved by category then canonical key.
//!
//! Each shelf is a key-ordered map, so an inventory dump lists records in
//! ascending key order rather than by the category's semantic ordering.
//! Records are created only while loading; afterwards the catalog only moves
//! stock up and down.

use std::collections::{BTreeMap, btree_map::Entry};

use strum::IntoEnumIterator;

use crate::{
  Error, Result,
  movie::{Category, Movie, MovieKey},
};

/// What [`Catalog::insert_or_merge`] did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelved {
  /// First record seen for its key.
  New,
  /// Folded into an existing record; `stock` is the combined total.
  Merged { stock: u32 },
}

#[derive(Debug, Default)]
pub struct Catalog {
  shelves: BTreeMap<Category, BTreeMap<MovieKey, Movie>>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }

  /// Shelve `movie`. When its key is already present the incoming copies are
  /// added to the existing record and the incoming record is dropped, so the
  /// first-seen record keeps its identity.
  pub fn insert_or_merge(&mut self, movie: Movie) -> Shelved {
    let shelf = self.shelves.entry(movie.category()).or_default();
    match shelf.entry(movie.key()) {
      Entry::Vacant(slot) => {
        slot.insert(movie);
        Shelved::New
      }
      Entry::Occupied(mut slot) => {
        let held = slot.get_mut();
        held.restock(movie.stock());
        Shelved::Merged {
          stock: held.stock(),
        }
      }
    }
  }

  pub fn get(&self, category: Category, key: &MovieKey) -> Option<&Movie> {
    self.shelves.get(&category)?.get(key)
  }

  fn get_mut(&mut self, category: Category, key: &MovieKey) -> Result<&mut Movie> {
    self
      .shelves
      .get_mut(&category)
      .and_then(|shelf| shelf.get_mut(key))
      .ok_or_else(|| Error::UnknownMovie {
        category,
        key: key.clone(),
      })
  }

  /// Take one copy of `key` off its shelf, returning the copies left.
  pub fn borrow(&mut self, category: Category, key: &MovieKey) -> Result<u32> {
    let movie = self.get_mut(category, key)?;
    if !movie.stock_down() {
      return Err(Error::OutOfStock {
        category,
        key: key.clone(),
      });
    }
    Ok(movie.stock())
  }

  /// Put one copy of `key` back, returning the copies now on the shelf.
  pub fn give_back(&mut self, category: Category, key: &MovieKey) -> Result<u32> {
    let movie = self.get_mut(category, key)?;
    movie.stock_up();
    Ok(movie.stock())
  }

  /// The inventory dump. A category header appears only when the category
  /// holds at least one record.
  pub fn render(&self) -> Vec<String> {
    let mut lines = Vec::new();
    for category in Category::iter() {
      let Some(shelf) = self.shelves.get(&category) else {
        continue;
      };
      if shelf.is_empty() {
        continue;
      }
      lines.push(format!("=== {} ===", category.label()));
      lines.extend(shelf.values().map(Movie::to_string));
    }
    lines
  }

  pub fn len(&self) -> usize { self.shelves.values().map(BTreeMap::len).sum() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
