// Copyright 2023 Remi Bernotavicius

use crate::database::models::{Category, Ingredient, Recipe, RecipeIngredient};
use crate::seed::SeedBatch;

/// The same SQL the embedded migration runs. The dump carries these
/// statements so replaying it always starts from empty tables.
const SCHEMA_SQL: &str = include_str!("../migrations/2026-08-20-120000_create_tables/up.sql");

/// A value rendered as a SQLite literal.
pub enum SqlValue {
    Integer(i32),
    Real(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl SqlValue {
    fn push_to(&self, out: &mut String) {
        match self {
            Self::Integer(value) => out.push_str(&value.to_string()),
            // REAL columns always get a decimal point, the way sqlite dumps
            // them, so 80 renders as 80.0
            Self::Real(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    out.push_str(&format!("{value:.1}"));
                } else {
                    out.push_str(&format!("{value}"));
                }
            }
            Self::Text(value) => {
                out.push('\'');
                for c in value.chars() {
                    if c == '\'' {
                        out.push('\'');
                    }
                    out.push(c);
                }
                out.push('\'');
            }
            Self::Bool(value) => out.push(if *value { '1' } else { '0' }),
            Self::Null => out.push_str("NULL"),
        }
    }
}

fn text(value: &str) -> SqlValue {
    SqlValue::Text(value.into())
}

fn nullable_text(value: &Option<String>) -> SqlValue {
    match value {
        Some(value) => text(value),
        None => SqlValue::Null,
    }
}

/// How a model row serializes into the dump. Value order must match the
/// column order of the CREATE TABLE statement, since the INSERTs carry no
/// column list.
pub trait DumpRow {
    const TABLE: &'static str;

    fn values(&self) -> Vec<SqlValue>;
}

impl DumpRow for Category {
    const TABLE: &'static str = "categories";

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id.raw()),
            text(&self.name),
            nullable_text(&self.description),
        ]
    }
}

impl DumpRow for Ingredient {
    const TABLE: &'static str = "ingredients";

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id.raw()),
            text(&self.name),
            text(&self.default_unit),
            SqlValue::Real(self.calories_per_unit),
            SqlValue::Real(self.protein_per_unit),
            SqlValue::Real(self.fat_per_unit),
            SqlValue::Real(self.carbs_per_unit),
        ]
    }
}

impl DumpRow for Recipe {
    const TABLE: &'static str = "recipes";

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id.raw()),
            SqlValue::Integer(self.category_id.raw()),
            text(&self.name),
            nullable_text(&self.description),
            text(&self.instructions),
            SqlValue::Integer(self.servings),
            SqlValue::Real(self.calories_per_serving),
            SqlValue::Real(self.protein_per_serving),
            SqlValue::Real(self.fat_per_serving),
            SqlValue::Real(self.carbs_per_serving),
            text(&self.image_url),
            SqlValue::Real(self.prep_minutes),
            SqlValue::Real(self.cook_minutes),
            SqlValue::Real(self.review_count),
            SqlValue::Bool(self.is_popular),
        ]
    }
}

impl DumpRow for RecipeIngredient {
    const TABLE: &'static str = "recipe_ingredients";

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.recipe_id.raw()),
            SqlValue::Integer(self.ingredient_id.raw()),
            SqlValue::Real(self.quantity),
            text(&self.unit),
            SqlValue::Real(self.calories),
            SqlValue::Real(self.protein),
            SqlValue::Real(self.fat),
            SqlValue::Real(self.carbs),
            nullable_text(&self.notes),
        ]
    }
}

fn schema_statements() -> impl Iterator<Item = &'static str> {
    // the foreign-keys pragma is emitted once at the top of the dump, never
    // as part of the schema block
    SCHEMA_SQL
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty() && !statement.starts_with("PRAGMA"))
}

fn push_inserts<R: DumpRow>(out: &mut String, rows: &[R]) {
    for row in rows {
        out.push_str("INSERT INTO \"");
        out.push_str(R::TABLE);
        out.push_str("\" VALUES(");
        for (index, value) in row.values().iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            value.push_to(out);
        }
        out.push_str(");\n");
    }
}

/// Serialize the whole batch as a replayable script: pragma, transaction
/// begin, schema, inserts grouped by table in dependency order, commit.
pub fn render(batch: &SeedBatch) -> String {
    let mut out = String::new();
    out.push_str("PRAGMA foreign_keys=ON;\n");
    out.push_str("BEGIN TRANSACTION;\n");
    for statement in schema_statements() {
        out.push_str(statement);
        out.push_str(";\n");
    }
    push_inserts(&mut out, &batch.categories);
    push_inserts(&mut out, &batch.ingredients);
    push_inserts(&mut out, &batch.recipes);
    push_inserts(&mut out, &batch.recipe_ingredients);
    out.push_str("COMMIT;\n");
    out
}

#[cfg(test)]
fn render_value(value: SqlValue) -> String {
    let mut out = String::new();
    value.push_to(&mut out);
    out
}

#[test]
fn sql_literals() {
    assert_eq!(render_value(SqlValue::Integer(42)), "42");
    assert_eq!(render_value(SqlValue::Real(60.8)), "60.8");
    assert_eq!(render_value(SqlValue::Real(80.0)), "80.0");
    assert_eq!(render_value(SqlValue::Real(0.0)), "0.0");
    assert_eq!(render_value(SqlValue::Real(0.998)), "0.998");
    assert_eq!(render_value(SqlValue::Text("Honey".into())), "'Honey'");
    assert_eq!(
        render_value(SqlValue::Text("it's sweet".into())),
        "'it''s sweet'"
    );
    assert_eq!(render_value(SqlValue::Bool(true)), "1");
    assert_eq!(render_value(SqlValue::Bool(false)), "0");
    assert_eq!(render_value(SqlValue::Null), "NULL");
}

#[test]
fn schema_block_has_drops_then_creates_and_no_pragma() {
    let statements: Vec<_> = schema_statements().collect();
    assert_eq!(statements.len(), 8);
    for statement in &statements[..4] {
        assert!(statement.starts_with("DROP TABLE IF EXISTS"), "{statement}");
    }
    for statement in &statements[4..] {
        assert!(statement.starts_with("CREATE TABLE"), "{statement}");
    }
}

#[test]
fn dump_layout() {
    let batch = crate::seed::build_batch().unwrap();
    let dump = render(&batch);

    let lines: Vec<_> = dump.lines().collect();
    assert_eq!(lines[0], "PRAGMA foreign_keys=ON;");
    assert_eq!(lines[1], "BEGIN TRANSACTION;");
    assert_eq!(*lines.last().unwrap(), "COMMIT;");
    assert!(dump.ends_with("COMMIT;\n"));

    // tables appear grouped in dependency order
    let position = |needle: &str| dump.find(needle).unwrap_or_else(|| panic!("{needle}"));
    assert!(
        position("INSERT INTO \"categories\"") < position("INSERT INTO \"ingredients\"")
    );
    assert!(position("INSERT INTO \"ingredients\"") < position("INSERT INTO \"recipes\""));
    assert!(
        position("INSERT INTO \"recipes\"") < position("INSERT INTO \"recipe_ingredients\"")
    );
}

#[test]
fn dump_starts_category_ids_at_one() {
    let batch = crate::seed::build_batch().unwrap();
    let dump = render(&batch);
    for (index, name) in ["Breakfast", "Lunch", "Dinner", "Snack", "Desert", "Beverage"]
        .iter()
        .enumerate()
    {
        let expected = format!("INSERT INTO \"categories\" VALUES({},'{name}',", index + 1);
        assert!(dump.contains(&expected), "{expected}");
    }
}

#[test]
fn dump_is_deterministic() {
    let first = render(&crate::seed::build_batch().unwrap());
    let second = render(&crate::seed::build_batch().unwrap());
    assert_eq!(first, second);
}

#[test]
fn honey_row_in_dump() {
    // Greek Yogurt Pancakes (recipe 3) uses 20 g of honey (ingredient 19)
    let batch = crate::seed::build_batch().unwrap();
    let dump = render(&batch);
    assert!(
        dump.contains("INSERT INTO \"recipe_ingredients\" VALUES(3,19,20.0,'g',60.8,0.0,0.0,16.4,"),
        "honey row missing or malformed"
    );
}
