//! Record store for a JSON-backed list of victims.
//!
//! The crate keeps the same split throughout:
//!
//! - **[`core`]**: Pure logic (record model, validation, identity, ordering,
//!   listing text). No I/O.
//! - **[`io`]**: The backing JSON file and the optional TOML configuration.
//!
//! [`store`] ties the two together into load/add/remove/list operations and
//! [`cli`] turns their outcomes into user-facing output.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
