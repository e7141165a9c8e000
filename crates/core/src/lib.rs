//! Functional core for the bookshelf catalog.
//!
//! Domain types, date parsing, listing rules and storage contracts live here.
//! Nothing in this crate performs I/O; storage backends and HTTP handling are
//! provided by the `bookshelf` binary.

pub mod catalog;
pub mod serde;
pub mod storage;
