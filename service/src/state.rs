// service/src/state.rs
use catalog::ProductStore;
use std::sync::Arc;

/// Shared by every handler. Handlers keep no state of their own between requests.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }
}
