// Application state module
// Immutable per-process state shared by all request handlers

use super::types::Config;
use crate::routing::Router;

/// Application state
///
/// Everything here is fixed at startup; requests never mutate it.
pub struct AppState {
    pub config: Config,
    pub router: Router,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Router::new(),
        }
    }
}
