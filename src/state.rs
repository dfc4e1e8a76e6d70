use std::sync::Arc;

use crate::{config::Config, infrastructure::database::DbPoolManager};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DbPoolManager,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DbPoolManager) -> Self {
        Self { config, db }
    }
}
