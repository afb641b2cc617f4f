//! Core types for the reel rental ledger.
//!
//! This crate is deliberately free of I/O. It owns the movie catalog, the
//! customer directory and the executor that applies typed commands to both.
//! Text parsing lives in `reel-script`; file handling lives in `reel-cli`.

pub mod catalog;
pub mod command;
pub mod customer;
pub mod directory;
pub mod error;
pub mod movie;
pub mod shop;

pub use catalog::Catalog;
pub use command::{Command, Descriptor, Request};
pub use customer::{Customer, CustomerId};
pub use directory::CustomerDirectory;
pub use error::{Error, Result};
pub use movie::{Actor, Category, Movie, MovieKey};
pub use shop::{Outcome, Shop};
