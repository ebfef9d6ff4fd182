use std::sync::Arc;

use corretoras_lib::BrokerDirectory;

/// Shared, read-only state handed to every request handler.
pub struct AppState {
    pub directory: BrokerDirectory,
}

impl AppState {
    pub fn new(directory: BrokerDirectory) -> Arc<Self> {
        Arc::new(Self { directory })
    }
}
