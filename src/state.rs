use std::sync::Arc;

use axum::extract::FromRef;

use crate::db::TriviaStore;

/// Shared handle to whichever store backend was configured.
pub type DynStore = Arc<dyn TriviaStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
}

impl AppState {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for DynStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
