//! HTTP service exposing create, list and delete over todo items stored in SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod schema;
pub mod store;

use store::TodoStore;

// Struct representing the application state
pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }
}
