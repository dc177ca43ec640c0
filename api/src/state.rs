// Application state shared with every handler

use std::sync::Arc;

use crate::collection::Store;
use crate::db::Repositories;
use crate::entity::categories;
use crate::models::{Author, Book, Game, NoteData};
use crate::seed;

/// Owned resources behind the router: one store per in-memory collection and,
/// when a database is configured, the repositories for notes and categories.
/// Without a database the `categories` and `notes` stores serve those routes.
pub struct AppContext {
    pub games: Store<Game>,
    pub books: Store<Book>,
    pub authors: Store<Author>,
    pub categories: Store<categories::Model>,
    pub notes: Store<NoteData>,
    database: Option<Repositories>,
}

/// Type alias for the application state
pub type AppState = Arc<AppContext>;

impl AppContext {
    /// Seeds the in-memory collections with their fixed starting records
    pub fn new(database: Option<Repositories>) -> Self {
        Self {
            games: Store::seeded(seed::games()),
            books: Store::seeded(seed::books()),
            authors: Store::seeded(seed::authors()),
            categories: Store::seeded(seed::categories()),
            notes: Store::seeded(seed::notes()),
            database,
        }
    }

    pub fn into_state(self) -> AppState {
        Arc::new(self)
    }

    /// Repositories for notes and categories, or `None` when they live in memory
    pub fn database(&self) -> Option<&Repositories> {
        self.database.as_ref()
    }
}
