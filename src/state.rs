use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::services::CatalogService;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub catalog: Arc<CatalogService>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(db: SqlitePool, store: Arc<dyn RecordStore>, request_timeout: Duration) -> Self {
        Self {
            db,
            catalog: Arc::new(CatalogService::new(store)),
            request_timeout,
        }
    }
}
