//! Text codecs for reel.
//!
//! Converts the three plain-text inputs (movie catalog, customer roster,
//! command script) into [`reel_core`] types. Pure synchronous; no file
//! handling.
//!
//! # Quick start
//!
//! ```no_run
//! use reel_core::{Catalog, Shop};
//! use reel_script::{Interpreter, load_catalog};
//!
//! let mut catalog = Catalog::new();
//! let report = load_catalog("F, 10, Nora Ephron, You've Got Mail, 1998\n", &mut catalog);
//! assert!(report.rejected.is_empty());
//!
//! let command = Interpreter::new().parse("I").unwrap();
//! let mut shop = Shop::new(catalog, Default::default());
//! for line in shop.execute(&command).unwrap().lines() {
//!   println!("{line}");
//! }
//! ```

pub mod catalog;
pub mod command;
pub mod error;
pub mod roster;
mod scan;

pub use catalog::{LineError, LoadReport, load_catalog, parse_movie};
pub use command::Interpreter;
pub use error::{Error, Result};
pub use roster::{RosterReport, load_roster, parse_roster};
