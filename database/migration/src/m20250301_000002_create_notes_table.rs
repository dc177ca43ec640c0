use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_categories_table::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notes::Title).string().not_null())
                    .col(
                        ColumnDef::new(Notes::Color)
                            .string()
                            .not_null()
                            .default("red"),
                    )
                    .col(ColumnDef::new(Notes::Content).text().not_null())
                    .col(ColumnDef::new(Notes::Date).date().not_null())
                    .col(
                        ColumnDef::new(Notes::IsFavorite)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notes::CategoryId).integer().null())
                    // Removing a category detaches its notes instead of deleting them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notes_category_id")
                            .from(Notes::Table, Notes::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notes_category_id")
                    .table(Notes::Table)
                    .col(Notes::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notes::Table).to_owned())
            .await
    }
}

/// Notes table definition
#[derive(Iden)]
enum Notes {
    Table,
    Id,
    Title,
    Color,
    Content,
    Date,
    #[iden = "isFavorite"]
    IsFavorite,
    CategoryId,
}
