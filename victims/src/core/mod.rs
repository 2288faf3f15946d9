//! Deterministic, pure logic for the record store.
//!
//! Nothing in here touches the filesystem. Functions operate on in-memory
//! records and return values suitable for direct assertion in tests.

pub mod identity;
pub mod listing;
pub mod ordering;
pub mod record;
pub mod validate;
