//! Shared application state for all routes.

use crate::service::DeveloperService;
use crate::store::DeveloperStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub developers: DeveloperService,
}

impl AppState {
    pub fn new(store: Arc<dyn DeveloperStore>) -> Self {
        AppState {
            developers: DeveloperService::new(store),
        }
    }
}
