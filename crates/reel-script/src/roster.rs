//! Customer roster reader.
//!
//! The roster is a stream of `<id> <lastName> <firstName>` triples separated
//! by any whitespace, conventionally one per line. Reading stops silently at
//! the first triple that does not fit: a non-numeric id or a truncated tail.

use reel_core::{Customer, CustomerDirectory, CustomerId};

use crate::scan::Scanner;

/// What [`load_roster`] did with its input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RosterReport {
  pub loaded:   usize,
  /// Ids that appeared more than once; each later record replaced the earlier.
  pub replaced: Vec<CustomerId>,
  /// The unread remainder when the stream stopped early, if any.
  pub trailing: Option<String>,
}

/// Read customers from `input` until it runs out or stops matching.
pub fn parse_roster(input: &str) -> (Vec<Customer>, Option<String>) {
  let mut customers = Vec::new();
  let mut scan = Scanner::new(input);
  loop {
    let before = scan.rest();
    let Some(token) = scan.next_token() else {
      return (customers, None);
    };
    let entry = token
      .parse::<i32>()
      .ok()
      .zip(scan.next_token())
      .zip(scan.next_token());
    match entry {
      Some(((id, last), first)) => {
        customers.push(Customer::new(CustomerId(id), first, last));
      }
      None => return (customers, Some(before.to_string())),
    }
  }
}

/// Read customers from `input` into `directory`.
pub fn load_roster(input: &str, directory: &mut CustomerDirectory) -> RosterReport {
  let (customers, trailing) = parse_roster(input);
  let mut report = RosterReport {
    trailing,
    ..RosterReport::default()
  };
  for customer in customers {
    let id = customer.id();
    if directory.add(customer).is_some() {
      report.replaced.push(id);
    }
    report.loaded += 1;
  }
  report
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_triples_across_lines() {
    let input = "3333 Witch Wicked\n8888 Pig Porky\n  4444 Moose\tBullwinkle  \n";
    let (customers, trailing) = parse_roster(input);
    assert!(trailing.is_none());
    assert_eq!(customers.len(), 3);
    assert_eq!(customers[0].id(), CustomerId(3333));
    assert_eq!(customers[0].last_name(), "Witch");
    assert_eq!(customers[0].first_name(), "Wicked");
    assert_eq!(customers[2].first_name(), "Bullwinkle");
  }

  #[test]
  fn stops_at_first_malformed_entry() {
    let input = "1000 Mouse Minnie\nabc Bad Entry\n2000 Duck Donald\n";
    let (customers, trailing) = parse_roster(input);
    assert_eq!(customers.len(), 1);
    assert_eq!(
      trailing.as_deref(),
      Some("abc Bad Entry\n2000 Duck Donald")
    );
  }

  #[test]
  fn negative_id_is_loaded() {
    let (customers, trailing) = parse_roster("-5 Doe John\n1000 Mouse Minnie\n");
    assert!(trailing.is_none());
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].id(), CustomerId(-5));
    assert_eq!(customers[0].last_name(), "Doe");
  }

  #[test]
  fn truncated_tail_is_dropped() {
    let (customers, trailing) = parse_roster("1000 Mouse Minnie\n2000 Duck");
    assert_eq!(customers.len(), 1);
    assert_eq!(trailing.as_deref(), Some("2000 Duck"));
  }

  #[test]
  fn duplicate_ids_replace_and_are_reported() {
    let mut directory = CustomerDirectory::new();
    let report =
      load_roster("1000 Mouse Minnie\n1000 Mouse Mickey\n", &mut directory);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.replaced, [CustomerId(1000)]);
    assert_eq!(directory.len(), 1);
    let customer = directory.get(CustomerId(1000)).unwrap();
    assert_eq!(customer.first_name(), "Mickey");
  }
}
