// Note database operations implementation
// Filters, ordering and paging are built with SeaORM query builders

use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::contains_ci;
use crate::collection::{Page, SortOrder};
use crate::db::error::DbError;
use crate::entity::notes;
use crate::models::{NoteFilter, NoteInput, NotePatch};

// LIMIT/OFFSET are signed 64-bit in both Postgres and SQLite
fn sql_bound(value: usize) -> u64 {
    value.min(i64::MAX as usize) as u64
}

/// Repository for note database operations
#[derive(Clone, Debug)]
pub struct NoteRepository {
    conn: DatabaseConnection,
}

impl NoteRepository {
    /// Creates a new note repository with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        NoteRepository { conn }
    }

    fn filtered(filter: &NoteFilter) -> Select<notes::Entity> {
        let mut query = notes::Entity::find();

        if let Some(title) = &filter.title {
            query = query.filter(contains_ci(notes::Column::Title, title));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(notes::Column::CategoryId.eq(category_id));
        }
        if let Some(is_favorite) = filter.is_favorite {
            query = query.filter(notes::Column::IsFavorite.eq(is_favorite));
        }

        query
    }

    fn sort_column(field: &str) -> Option<notes::Column> {
        match field {
            "id" => Some(notes::Column::Id),
            "title" => Some(notes::Column::Title),
            "date" => Some(notes::Column::Date),
            "color" => Some(notes::Column::Color),
            "isFavorite" => Some(notes::Column::IsFavorite),
            _ => None,
        }
    }

    /// Retrieves matching notes. Unknown sort fields fall back to id order;
    /// `page` turns into LIMIT/OFFSET.
    pub async fn find(
        &self,
        filter: &NoteFilter,
        sort_by: Option<&str>,
        order: SortOrder,
        page: Option<Page>,
    ) -> Result<Vec<notes::Model>, DbError> {
        let mut query = Self::filtered(filter);

        if let Some(column) = sort_by.and_then(Self::sort_column) {
            query = match order {
                SortOrder::Asc => query.order_by_asc(column),
                SortOrder::Desc => query.order_by_desc(column),
            };
        }
        query = query.order_by_asc(notes::Column::Id);

        if let Some(page) = page {
            query = query
                .limit(sql_bound(page.limit))
                .offset(sql_bound(page.offset()));
        }

        query.all(&self.conn).await.map_err(Into::into)
    }

    /// Counts matching notes
    pub async fn count(&self, filter: &NoteFilter) -> Result<u64, DbError> {
        Self::filtered(filter)
            .count(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a note by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<notes::Model>, DbError> {
        notes::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a note and returns the stored row with its generated id
    pub async fn create(&self, input: &NoteInput) -> Result<notes::Model, DbError> {
        let note = notes::ActiveModel {
            title: Set(input.title.clone()),
            color: Set(input.color.clone()),
            content: Set(input.content.clone()),
            date: Set(input.date),
            is_favorite: Set(input.is_favorite),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        note.insert(&self.conn).await.map_err(Into::into)
    }

    /// Overwrites every column but the id. `None` when no row matched.
    pub async fn replace(
        &self,
        id: i32,
        input: &NoteInput,
    ) -> Result<Option<notes::Model>, DbError> {
        let changes = notes::ActiveModel {
            title: Set(input.title.clone()),
            color: Set(input.color.clone()),
            content: Set(input.content.clone()),
            date: Set(input.date),
            is_favorite: Set(input.is_favorite),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        self.update_columns(id, changes).await
    }

    /// Writes only the columns present in the patch. `None` when no row matched.
    pub async fn patch(&self, id: i32, patch: &NotePatch) -> Result<Option<notes::Model>, DbError> {
        let mut changes = <notes::ActiveModel as Default>::default();
        if let Some(title) = &patch.title {
            changes.title = Set(title.trim().to_string());
        }
        if let Some(content) = &patch.content {
            changes.content = Set(content.clone());
        }
        if let Some(color) = &patch.color {
            changes.color = Set(color.trim().to_string());
        }
        if let Some(date) = patch.date {
            changes.date = Set(date);
        }
        if let Some(is_favorite) = patch.is_favorite {
            changes.is_favorite = Set(is_favorite);
        }
        if let Some(category_id) = patch.category_id {
            changes.category_id = Set(category_id);
        }

        self.update_columns(id, changes).await
    }

    /// Flips the favorite flag in a single UPDATE, then re-reads the row
    pub async fn toggle_favorite(&self, id: i32) -> Result<Option<notes::Model>, DbError> {
        let result = notes::Entity::update_many()
            .col_expr(
                notes::Column::IsFavorite,
                Expr::col(notes::Column::IsFavorite).not(),
            )
            .filter(notes::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    async fn update_columns(
        &self,
        id: i32,
        changes: notes::ActiveModel,
    ) -> Result<Option<notes::Model>, DbError> {
        let result = notes::Entity::update_many()
            .set(changes)
            .filter(notes::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Deletes a note. Returns the deleted row, or `None` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<Option<notes::Model>, DbError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let result = notes::Entity::delete_by_id(id).exec(&self.conn).await?;

        Ok((result.rows_affected > 0).then_some(existing))
    }
}
