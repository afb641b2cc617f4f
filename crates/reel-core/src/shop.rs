//! [`Shop`] — applies typed commands to the catalog and customer directory.
//!
//! Every command runs to completion before the next starts. A failing command
//! leaves both the catalog and the directory exactly as it found them: all
//! checks that can fail happen before the first mutation, and the one
//! mutation that precedes a fallible step (clearing a returned key) is rolled
//! back if that step fails.

use crate::{
  Error, Result,
  catalog::Catalog,
  command::{Command, Request},
  customer::{Action, CustomerId, Transaction},
  directory::CustomerDirectory,
};

/// The result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Lines to print (inventory or history dump).
  Report(Vec<String>),
  /// A borrow or return that was applied and added to history.
  Recorded(Transaction),
}

impl Outcome {
  /// Lines for standard output; empty for recorded transactions.
  pub fn lines(&self) -> &[String] {
    match self {
      Self::Report(lines) => lines,
      Self::Recorded(_) => &[],
    }
  }
}

#[derive(Debug, Default)]
pub struct Shop {
  pub catalog:   Catalog,
  pub customers: CustomerDirectory,
}

impl Shop {
  pub fn new(catalog: Catalog, customers: CustomerDirectory) -> Self {
    Self { catalog, customers }
  }

  pub fn execute(&mut self, command: &Command) -> Result<Outcome> {
    match command {
      Command::Inventory => Ok(Outcome::Report(self.catalog.render())),
      Command::History(id) => self.history(*id).map(Outcome::Report),
      Command::Borrow(request) => self.borrow(request).map(Outcome::Recorded),
      Command::Return(request) => {
        self.give_back(request).map(Outcome::Recorded)
      }
    }
  }

  fn history(&self, id: CustomerId) -> Result<Vec<String>> {
    let customer = self.customers.get(id).ok_or(Error::UnknownCustomer(id))?;
    Ok(customer.render_history())
  }

  fn borrow(&mut self, request: &Request) -> Result<Transaction> {
    let id = request.customer;
    let customer = self
      .customers
      .get_mut(id)
      .ok_or(Error::UnknownCustomer(id))?;

    let category = request.descriptor.category();
    let key = request.descriptor.key();

    // A second copy of an outstanding key could never be returned.
    if customer.has_borrowed(&key) {
      return Err(Error::AlreadyBorrowed { customer: id, key });
    }

    self.catalog.borrow(category, &key).map_err(|cause| {
      Error::BorrowFailed {
        customer: id,
        category,
        key: key.clone(),
        cause: Box::new(cause),
      }
    })?;

    customer.mark_borrowed(key.clone());
    let transaction = Transaction {
      action: Action::Borrow,
      category,
      key,
    };
    customer.append_history(transaction.clone());
    Ok(transaction)
  }

  fn give_back(&mut self, request: &Request) -> Result<Transaction> {
    let id = request.customer;
    let customer = self
      .customers
      .get_mut(id)
      .ok_or(Error::UnknownCustomer(id))?;

    let category = request.descriptor.category();
    let key = request.descriptor.key();

    // The customer's ledger gates the inventory update.
    if !customer.mark_returned(&key) {
      return Err(Error::NotBorrowed { customer: id, key });
    }

    if let Err(cause) = self.catalog.give_back(category, &key) {
      customer.mark_borrowed(key.clone());
      return Err(Error::ReturnFailed {
        key,
        cause: Box::new(cause),
      });
    }

    let transaction = Transaction {
      action: Action::Return,
      category,
      key,
    };
    customer.append_history(transaction.clone());
    Ok(transaction)
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::{
    command::Descriptor,
    customer::Customer,
    movie::{Actor, Category, Movie, MovieKey},
  };

  const MINNIE: CustomerId = CustomerId(1);

  fn shop() -> Shop {
    let mut catalog = Catalog::new();
    catalog.insert_or_merge(Movie::comedy("TitleA", "DirA", 2001, 2));
    catalog.insert_or_merge(Movie::drama("TitleY", "DirX", 1990, 0));
    catalog.insert_or_merge(Movie::classic(
      "TitleC",
      "DirB",
      7,
      1990,
      Actor::new("John", "Doe"),
      4,
    ));

    let mut customers = CustomerDirectory::new();
    customers.add(Customer::new(MINNIE, "Minnie", "Mouse"));
    Shop::new(catalog, customers)
  }

  fn comedy(customer: CustomerId) -> Request {
    Request {
      customer,
      descriptor: Descriptor::Comedy {
        title: "TitleA".into(),
        year:  2001,
      },
    }
  }

  fn drama(customer: CustomerId) -> Request {
    Request {
      customer,
      descriptor: Descriptor::Drama {
        director: "DirX".into(),
        title:    "TitleY".into(),
      },
    }
  }

  fn stock_of(shop: &Shop, category: Category, key: &MovieKey) -> u32 {
    shop.catalog.get(category, key).unwrap().stock()
  }

  fn comedy_key() -> MovieKey { MovieKey::comedy("TitleA", 2001) }

  #[test]
  fn inventory_reports_catalog() {
    let mut shop = shop();
    let outcome = shop.execute(&Command::Inventory).unwrap();
    assert_eq!(outcome.lines(), shop.catalog.render().as_slice());
    assert_eq!(outcome.lines()[0], "=== Comedy ===");
  }

  #[test]
  fn history_of_unknown_customer_fails() {
    let mut shop = shop();
    let err = shop.execute(&Command::History(CustomerId(7))).unwrap_err();
    assert_eq!(err.to_string(), "Unknown customer ID 7");
  }

  #[test]
  fn borrow_for_unknown_customer_changes_nothing() {
    let mut shop = shop();
    let err = shop.execute(&Command::Borrow(comedy(CustomerId(7)))).unwrap_err();

    assert_eq!(err, Error::UnknownCustomer(CustomerId(7)));
    assert_eq!(err.to_string(), "Unknown customer ID 7");
    assert_eq!(stock_of(&shop, Category::Comedy, &comedy_key()), 2);
  }

  #[test]
  fn borrow_records_history_and_takes_stock() {
    let mut shop = shop();
    let outcome = shop.execute(&Command::Borrow(comedy(MINNIE))).unwrap();

    assert!(outcome.lines().is_empty());
    assert_eq!(stock_of(&shop, Category::Comedy, &comedy_key()), 1);

    let customer = shop.customers.get(MINNIE).unwrap();
    assert!(customer.has_borrowed(&comedy_key()));
    assert_eq!(customer.render_history(), [
      "Customer 1 Mouse, Minnie",
      "  Borrow F [TitleA|2001]",
    ]);
  }

  #[test]
  fn borrow_of_empty_shelf_fails_without_side_effects() {
    let mut shop = shop();
    let err = shop.execute(&Command::Borrow(drama(MINNIE))).unwrap_err();

    assert!(matches!(err, Error::BorrowFailed { .. }));
    assert_eq!(
      err.to_string(),
      "Borrow failed for customer 1 movieType D key 'DirX|TitleY'"
    );
    let key = MovieKey::drama("DirX", "TitleY");
    assert_eq!(stock_of(&shop, Category::Drama, &key), 0);

    let customer = shop.customers.get(MINNIE).unwrap();
    assert_eq!(customer.borrowed().count(), 0);
    assert!(customer.history().is_empty());
  }

  #[test]
  fn borrow_of_unknown_movie_fails() {
    let mut shop = shop();
    let request = Request {
      customer:   MINNIE,
      descriptor: Descriptor::Comedy {
        title: "Missing".into(),
        year:  1900,
      },
    };
    let err = shop.execute(&Command::Borrow(request)).unwrap_err();
    assert!(matches!(err, Error::BorrowFailed { .. }));
  }

  #[test]
  fn second_borrow_of_outstanding_key_is_rejected() {
    let mut shop = shop();
    shop.execute(&Command::Borrow(comedy(MINNIE))).unwrap();
    let err = shop.execute(&Command::Borrow(comedy(MINNIE))).unwrap_err();

    assert!(matches!(err, Error::AlreadyBorrowed { .. }));
    assert_eq!(stock_of(&shop, Category::Comedy, &comedy_key()), 1);
    assert_eq!(shop.customers.get(MINNIE).unwrap().history().len(), 1);
  }

  #[test]
  fn return_without_borrow_leaves_inventory_untouched() {
    let mut shop = shop();
    let err = shop.execute(&Command::Return(drama(MINNIE))).unwrap_err();

    assert_eq!(
      err.to_string(),
      "Return failed: customer 1 did not borrow [DirX|TitleY]"
    );
    let key = MovieKey::drama("DirX", "TitleY");
    assert_eq!(stock_of(&shop, Category::Drama, &key), 0);
    assert!(shop.customers.get(MINNIE).unwrap().history().is_empty());
  }

  #[test]
  fn return_rolls_back_ledger_when_inventory_rejects() {
    let mut shop = shop();
    let key = MovieKey::comedy("Ghost", 1990);
    shop
      .customers
      .get_mut(MINNIE)
      .unwrap()
      .mark_borrowed(key.clone());

    let request = Request {
      customer:   MINNIE,
      descriptor: Descriptor::Comedy {
        title: "Ghost".into(),
        year:  1990,
      },
    };
    let err = shop.execute(&Command::Return(request)).unwrap_err();

    assert!(matches!(err, Error::ReturnFailed { .. }));
    let customer = shop.customers.get(MINNIE).unwrap();
    assert!(customer.has_borrowed(&key));
    assert!(customer.history().is_empty());
  }

  #[test]
  fn borrow_then_return_restores_stock() {
    let mut shop = shop();
    let request = Request {
      customer:   MINNIE,
      descriptor: Descriptor::Classic {
        month: 7,
        year:  1990,
        actor: Actor::new("John", "Doe"),
      },
    };
    let key = request.descriptor.key();

    shop.execute(&Command::Borrow(request.clone())).unwrap();
    assert_eq!(stock_of(&shop, Category::Classics, &key), 3);
    shop.execute(&Command::Return(request)).unwrap();
    assert_eq!(stock_of(&shop, Category::Classics, &key), 4);

    let customer = shop.customers.get(MINNIE).unwrap();
    assert!(!customer.has_borrowed(&key));
    assert_eq!(customer.render_history(), [
      "Customer 1 Mouse, Minnie",
      "  Return C [1990-07|John Doe]",
      "  Borrow C [1990-07|John Doe]",
    ]);
  }

  #[test]
  fn command_codes() {
    assert_eq!(Command::Inventory.code(), 'I');
    assert_eq!(Command::History(MINNIE).code(), 'H');
    assert_eq!(Command::Borrow(comedy(MINNIE)).code(), 'B');
    assert_eq!(Command::Return(comedy(MINNIE)).code(), 'R');
  }

  proptest! {
    #![proptest_config(ProptestConfig {
      cases: 128,
      ..ProptestConfig::default()
    })]

    /// Property: any interleaving of borrows and returns keeps shelf stock
    /// plus outstanding copies equal to the loaded stock, and a successful
    /// borrow grows the ledger by exactly one key and one history line.
    #[test]
    fn stock_is_conserved(ops in prop::collection::vec(any::<bool>(), 1..40)) {
      let mut shop = shop();
      let key = comedy_key();
      for borrow in ops {
        let before = shop.customers.get(MINNIE).unwrap().clone();
        let command = if borrow {
          Command::Borrow(comedy(MINNIE))
        } else {
          Command::Return(comedy(MINNIE))
        };
        let result = shop.execute(&command);
        let after = shop.customers.get(MINNIE).unwrap();

        match (borrow, result.is_ok()) {
          (true, true) => {
            prop_assert_eq!(after.borrowed().count(), before.borrowed().count() + 1);
            prop_assert_eq!(after.history().len(), before.history().len() + 1);
          }
          (_, false) => {
            prop_assert_eq!(after.borrowed().count(), before.borrowed().count());
            prop_assert_eq!(after.history().len(), before.history().len());
          }
          (false, true) => {
            prop_assert_eq!(after.borrowed().count() + 1, before.borrowed().count());
          }
        }

        let out = u32::from(after.has_borrowed(&key));
        prop_assert_eq!(stock_of(&shop, Category::Comedy, &key) + out, 2);
      }
    }
  }
}
