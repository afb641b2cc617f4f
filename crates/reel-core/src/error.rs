//! Error types for `reel-core`.

use thiserror::Error;

use crate::{
  customer::CustomerId,
  movie::{Category, MovieKey},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Unknown customer ID {0}")]
  UnknownCustomer(CustomerId),

  #[error("unknown movie: {category} [{key}]")]
  UnknownMovie { category: Category, key: MovieKey },

  #[error("out of stock: {category} [{key}]")]
  OutOfStock { category: Category, key: MovieKey },

  #[error("Borrow failed: customer {customer} already has [{key}]")]
  AlreadyBorrowed { customer: CustomerId, key: MovieKey },

  /// Covers both an unknown movie and an empty shelf; the cause is kept as
  /// the error source.
  #[error(
    "Borrow failed for customer {customer} movieType {category} key '{key}'"
  )]
  BorrowFailed {
    customer: CustomerId,
    category: Category,
    key:      MovieKey,
    #[source]
    cause:    Box<Error>,
  },

  #[error("Return failed: customer {customer} did not borrow [{key}]")]
  NotBorrowed { customer: CustomerId, key: MovieKey },

  #[error("Return failed for inventory for key '{key}'")]
  ReturnFailed {
    key:   MovieKey,
    #[source]
    cause: Box<Error>,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
