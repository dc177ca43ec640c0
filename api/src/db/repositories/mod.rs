// Database repository management

mod category_repository;
mod note_repository;

pub use category_repository::CategoryRepository;
pub use note_repository::NoteRepository;

use sea_orm::{
    sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr},
    DatabaseConnection,
};

use crate::db::error::DbError;

/// Case-insensitive substring match on a text column. `%`, `_` and `\` in
/// the fragment match literally.
pub(crate) fn contains_ci<C: IntoColumnRef>(column: C, fragment: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');

    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

/// Container for all database repositories
#[derive(Clone, Debug)]
pub struct Repositories {
    pub categories: CategoryRepository,
    pub notes: NoteRepository,
    conn: DatabaseConnection,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            categories: CategoryRepository::new(conn.clone()),
            notes: NoteRepository::new(conn.clone()),
            conn,
        }
    }

    /// Round-trips to the database to check the connection is usable
    pub async fn ping(&self) -> Result<(), DbError> {
        self.conn
            .ping()
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }
}
