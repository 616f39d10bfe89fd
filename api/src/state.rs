//! Application state shared across Axum route handlers.

use crate::services::stock::StockQueue;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// Holds the SeaORM connection pool and the handle used to enqueue
/// asynchronous stock-reconciliation jobs.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    stock: StockQueue,
}

impl AppState {
    pub fn new(db: DatabaseConnection, stock: StockQueue) -> Self {
        Self { db, stock }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Cloned connection for spawned tasks that need ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn stock(&self) -> &StockQueue {
        &self.stock
    }
}
