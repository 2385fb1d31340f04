use std::sync::Arc;

use rentquote_core::CatalogSnapshot;
use secrecy::SecretString;

/// Shared request-handling state: the immutable catalog snapshot and the
/// expected API key. Cloning is cheap; the snapshot is never mutated, so a
/// future hot-reload would swap the `Arc` wholesale.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogSnapshot>,
    pub api_key: SecretString,
}

impl AppState {
    pub fn new(catalog: CatalogSnapshot, api_key: SecretString) -> Self {
        Self { catalog: Arc::new(catalog), api_key }
    }
}
