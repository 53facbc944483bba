// src/state.rs
use std::sync::Arc;

use sqlx::SqlitePool;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(pool: SqlitePool, templates: Tera) -> Self {
        Self {
            pool,
            templates: Arc::new(templates),
        }
    }
}
