//! Application state shared by all request handlers.

use std::sync::Arc;

use crate::{catalog::Catalog, storage::InMemoryRepository};

/// Shared application state.
///
/// Cloned for each request handler. Storage handles are constructed by the
/// caller and passed in through the [`Catalog`].
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Creates a state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        Self::new(Catalog::new(repo.clone(), repo))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
