//! [`CustomerDirectory`] — every known customer, keyed by member number.

use std::collections::HashMap;

use crate::customer::{Customer, CustomerId};

#[derive(Debug, Default)]
pub struct CustomerDirectory {
  customers: HashMap<CustomerId, Customer>,
}

impl CustomerDirectory {
  pub fn new() -> Self { Self::default() }

  /// Insert `customer`, replacing any earlier record with the same id. The
  /// replaced record (history included) is handed back to the caller.
  pub fn add(&mut self, customer: Customer) -> Option<Customer> {
    self.customers.insert(customer.id(), customer)
  }

  pub fn get(&self, id: CustomerId) -> Option<&Customer> {
    self.customers.get(&id)
  }

  pub fn get_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
    self.customers.get_mut(&id)
  }

  pub fn len(&self) -> usize { self.customers.len() }

  pub fn is_empty(&self) -> bool { self.customers.is_empty() }
}
