use chrono::{Duration, Utc};
use sea_orm::sea_query::{Alias, Expr, Func, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Value};
use std::error::Error;
use tracing::info;

use crate::commands::connect;
use crate::config::DatabaseConfig;

/// Sample categories: name and description
const CATEGORIES: [(&str, Option<&str>); 3] = [
    ("Work", Some("Meetings, deadlines and follow-ups")),
    ("Personal", Some("Errands and reminders")),
    ("Ideas", None),
];

/// Sample notes: title, content, color, favorite, category name, age in days
const NOTES: [(&str, &str, &str, bool, Option<&str>, i64); 5] = [
    ("Sprint planning", "Collect estimates before Thursday", "blue", true, Some("Work"), 2),
    ("Quarterly report", "Draft the summary section", "red", false, Some("Work"), 5),
    ("Groceries", "Eggs, coffee, oat milk", "green", false, Some("Personal"), 1),
    ("Side project", "Try a CLI for tracking reading lists", "yellow", true, Some("Ideas"), 10),
    ("Loose thought", "Notes without a category stay here", "red", false, None, 0),
];

async fn count_categories(db: &DatabaseConnection) -> Result<i64, DbErr> {
    let query = Query::select()
        .expr_as(Func::count(Expr::col(Alias::new("id"))), Alias::new("count"))
        .from(Alias::new("categories"))
        .to_owned();

    let row = db.query_one(db.get_database_backend().build(&query)).await?;
    match row {
        Some(row) => row.try_get::<i64>("", "count"),
        None => Ok(0),
    }
}

async fn category_id(db: &DatabaseConnection, name: &str) -> Result<Option<i32>, DbErr> {
    let query = Query::select()
        .column(Alias::new("id"))
        .from(Alias::new("categories"))
        .and_where(Expr::col(Alias::new("name")).eq(name))
        .to_owned();

    let row = db.query_one(db.get_database_backend().build(&query)).await?;
    row.map(|row| row.try_get::<i32>("", "id")).transpose()
}

/// Inserts the sample categories and notes. Does nothing when categories already exist.
pub async fn execute(config: &DatabaseConfig) -> Result<(), Box<dyn Error>> {
    let db = connect(config).await?;
    let backend = db.get_database_backend();

    let existing = count_categories(&db).await?;
    if existing > 0 {
        info!("Database already holds {} categories, skipping seed", existing);
        return Ok(());
    }

    for (name, description) in CATEGORIES {
        let insert = Query::insert()
            .into_table(Alias::new("categories"))
            .columns([Alias::new("name"), Alias::new("description")])
            .values([name.into(), description.map(str::to_string).into()])?
            .to_owned();
        db.execute(backend.build(&insert)).await?;
    }
    info!("Inserted {} categories", CATEGORIES.len());

    let today = Utc::now().date_naive();
    for (title, content, color, is_favorite, category, age_days) in NOTES {
        let category_id = match category {
            Some(name) => category_id(&db, name).await?,
            None => None,
        };
        let date = today - Duration::days(age_days);

        let insert = Query::insert()
            .into_table(Alias::new("notes"))
            .columns([
                Alias::new("title"),
                Alias::new("content"),
                Alias::new("color"),
                Alias::new("isFavorite"),
                Alias::new("category_id"),
                Alias::new("date"),
            ])
            .values([
                title.into(),
                content.into(),
                color.into(),
                is_favorite.into(),
                Value::from(category_id).into(),
                date.into(),
            ])?
            .to_owned();
        db.execute(backend.build(&insert)).await?;
    }
    info!("Inserted {} notes", NOTES.len());

    Ok(())
}
