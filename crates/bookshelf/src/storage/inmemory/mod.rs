//! In-memory storage backend.
//!
//! Stores authors and books in `BTreeMap`s wrapped in `Arc<RwLock<_>>`. Used
//! by tests and by the `--in-memory` server flag, where persistence is not
//! required.

mod repository;

pub use repository::InMemoryRepository;
