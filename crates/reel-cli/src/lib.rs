//! Batch driver for the reel rental ledger.
//!
//! Reads a movie catalog, a customer roster and a command script, replays
//! the commands against [`reel_core::Shop`], prints inventory and history
//! reports to standard output and keeps an audit log of every command that
//! executed successfully. Diagnostics go to standard error through `tracing`.

pub mod batch;
pub mod error;
pub mod settings;

pub use batch::{AUDIT_HEADER, Inputs, Summary, run_batch};
pub use error::{Error, Result, exit_status};
pub use settings::{Overrides, Settings};
