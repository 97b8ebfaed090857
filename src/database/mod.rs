// Copyright 2023 Remi Bernotavicius

use diesel::connection::SimpleConnection as _;
use diesel::prelude::Connection as _;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::error::Error;

pub mod models;
pub mod schema;

pub type Connection = diesel::sqlite::SqliteConnection;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Open the transient in-memory database the seeder populates. Foreign keys
/// are enforced so a bad reference fails at insert time rather than ending up
/// in the dump.
pub fn establish_connection() -> Result<Connection, Box<dyn Error + Send + Sync + 'static>> {
    let mut connection = Connection::establish(":memory:")?;
    connection.batch_execute("PRAGMA foreign_keys = ON;")?;
    connection.run_pending_migrations(MIGRATIONS)?;
    Ok(connection)
}

#[test]
fn migrations() {
    use diesel::RunQueryDsl as _;

    let mut conn = establish_connection().unwrap();

    let row = models::Category {
        id: models::CategoryId::INITIAL,
        name: "Breakfast".into(),
        description: Some("test".into()),
    };
    diesel::insert_into(schema::categories::table)
        .values(row)
        .execute(&mut conn)
        .unwrap();
}

#[test]
fn foreign_keys_are_enforced() {
    use diesel::RunQueryDsl as _;

    let mut conn = establish_connection().unwrap();

    // recipes.category_id references a categories row that does not exist
    let row = models::Recipe {
        id: models::RecipeId::INITIAL,
        category_id: models::CategoryId::INITIAL,
        name: "Phantom".into(),
        description: None,
        instructions: "1. Nothing.".into(),
        servings: 1,
        calories_per_serving: 0.0,
        protein_per_serving: 0.0,
        fat_per_serving: 0.0,
        carbs_per_serving: 0.0,
        image_url: "https://example.com/none.jpeg".into(),
        prep_minutes: 0.0,
        cook_minutes: 0.0,
        review_count: 0.0,
        is_popular: false,
    };
    let result = diesel::insert_into(schema::recipes::table)
        .values(row)
        .execute(&mut conn);
    assert!(result.is_err());
}
