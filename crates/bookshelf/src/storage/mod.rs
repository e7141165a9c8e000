//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `bookshelf_core::storage`:
//!
//! - [`SqliteRepository`]: file-backed store used by the server
//! - [`InMemoryRepository`]: volatile store for tests and demos

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
