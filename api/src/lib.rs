// Catalog API library: in-memory games/books/authors and database-backed notes/categories

pub mod collection;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use routes::create_router;
pub use state::{AppContext, AppState};
