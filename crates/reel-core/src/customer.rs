//! Customer — a member of the store and their rental ledger.
//!
//! A customer owns an append-only transaction history and the set of movie
//! keys they currently have out. Keys enter the set only through a successful
//! borrow and leave it only through a matching return.

use std::{collections::BTreeSet, fmt};

use strum::Display;

use crate::movie::{Category, MovieKey};

/// Integer member number from the customer roster. Signed: the roster
/// format does not forbid negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(pub i32);

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Transactions ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Action {
  Borrow,
  Return,
}

/// One history entry, rendered as `Borrow F [Title|1999]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
  pub action:   Action,
  pub category: Category,
  pub key:      MovieKey,
}

impl fmt::Display for Transaction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {} [{}]", self.action, self.category, self.key)
  }
}

// ─── Customer ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Customer {
  id:         CustomerId,
  first_name: String,
  last_name:  String,
  history:    Vec<Transaction>,
  borrowed:   BTreeSet<MovieKey>,
}

impl Customer {
  pub fn new(
    id: CustomerId,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
  ) -> Self {
    Self {
      id,
      first_name: first_name.into(),
      last_name: last_name.into(),
      history: Vec::new(),
      borrowed: BTreeSet::new(),
    }
  }

  pub fn id(&self) -> CustomerId { self.id }

  pub fn first_name(&self) -> &str { &self.first_name }

  pub fn last_name(&self) -> &str { &self.last_name }

  /// History, oldest first.
  pub fn history(&self) -> &[Transaction] { &self.history }

  pub fn append_history(&mut self, transaction: Transaction) {
    self.history.push(transaction);
  }

  /// The history dump: a `Customer <id> <last>, <first>` header followed by
  /// each transaction newest-first, or a `(no transactions)` placeholder.
  pub fn render_history(&self) -> Vec<String> {
    let mut lines = Vec::with_capacity(self.history.len() + 1);
    lines.push(format!(
      "Customer {} {}, {}",
      self.id, self.last_name, self.first_name
    ));
    if self.history.is_empty() {
      lines.push("  (no transactions)".to_string());
    } else {
      lines.extend(self.history.iter().rev().map(|t| format!("  {t}")));
    }
    lines
  }

  pub fn has_borrowed(&self, key: &MovieKey) -> bool {
    self.borrowed.contains(key)
  }

  /// Keys currently out, in key order.
  pub fn borrowed(&self) -> impl Iterator<Item = &MovieKey> {
    self.borrowed.iter()
  }

  /// Record `key` as out. Returns `false` if it was already out.
  pub fn mark_borrowed(&mut self, key: MovieKey) -> bool {
    self.borrowed.insert(key)
  }

  /// Clear `key`. Returns `false` when the customer never had it.
  pub fn mark_returned(&mut self, key: &MovieKey) -> bool {
    self.borrowed.remove(key)
  }
}
