// Category database operations implementation

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use super::contains_ci;
use crate::db::error::DbError;
use crate::entity::{categories, notes};
use crate::models::CategoryPatch;

/// Repository for category database operations
#[derive(Clone, Debug)]
pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        CategoryRepository { conn }
    }

    /// Lists categories ordered by id, optionally filtered by a name fragment
    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<categories::Model>, DbError> {
        let mut query = categories::Entity::find();

        if let Some(name) = name {
            query = query.filter(contains_ci(categories::Column::Name, name));
        }

        query
            .order_by_asc(categories::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Retrieves a category by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<categories::Model>, DbError> {
        categories::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(Into::into)
    }

    /// Inserts a category and returns the stored row with its generated id
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<categories::Model, DbError> {
        let category = categories::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        category.insert(&self.conn).await.map_err(Into::into)
    }

    /// Overwrites every column but the id. `None` when no row matched.
    pub async fn replace(
        &self,
        id: i32,
        name: String,
        description: Option<String>,
    ) -> Result<Option<categories::Model>, DbError> {
        let changes = categories::ActiveModel {
            name: Set(name),
            description: Set(description),
            ..Default::default()
        };

        self.update_columns(id, changes).await
    }

    /// Writes only the supplied columns. `None` when no row matched.
    pub async fn patch(
        &self,
        id: i32,
        patch: &CategoryPatch,
    ) -> Result<Option<categories::Model>, DbError> {
        let mut changes = <categories::ActiveModel as Default>::default();
        if let Some(name) = &patch.name {
            changes.name = Set(name.trim().to_string());
        }
        if let Some(description) = &patch.description {
            changes.description = Set(description.clone());
        }

        self.update_columns(id, changes).await
    }

    async fn update_columns(
        &self,
        id: i32,
        changes: categories::ActiveModel,
    ) -> Result<Option<categories::Model>, DbError> {
        let result = categories::Entity::update_many()
            .set(changes)
            .filter(categories::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Deletes a category; dependent notes are detached by the foreign key.
    /// Returns the deleted row, or `None` when no row matched.
    pub async fn delete(&self, id: i32) -> Result<Option<categories::Model>, DbError> {
        let Some(existing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let result = categories::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await?;

        Ok((result.rows_affected > 0).then_some(existing))
    }

    /// Notes filed under a category, ordered by id
    pub async fn find_notes(&self, id: i32) -> Result<Vec<notes::Model>, DbError> {
        notes::Entity::find()
            .filter(notes::Column::CategoryId.eq(id))
            .order_by_asc(notes::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Into::into)
    }
}
