// Copyright 2023 Remi Bernotavicius

use crate::catalog::{self, Category, RecipeDef};
use crate::database::models::{self, CategoryId, IngredientId, RecipeId};
use crate::database::{self, schema};
use crate::nutrition::Macros;
use derive_more::Display;
use diesel::RunQueryDsl as _;
use std::collections::HashMap;

/// Data errors detected while turning the static catalog into rows. All of
/// them abort the run before anything is written.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum SeedError {
    #[display("no ingredient named {_0:?} in the catalog")]
    UnknownIngredient(String),
    #[display("unit mismatch for {ingredient}: expected {expected}, got {got}")]
    UnitMismatch {
        ingredient: String,
        expected: String,
        got: String,
    },
    #[display("duplicate ingredient {_0:?} in the catalog")]
    DuplicateIngredient(String),
}

impl std::error::Error for SeedError {}

/// One ingredient line after validation and macro scaling.
pub struct BuiltUsage {
    pub ingredient: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
    pub macros: Macros,
    pub notes: Option<&'static str>,
}

/// A recipe definition with its ingredient rows resolved against the catalog
/// and its instruction steps numbered. Per-serving macros are derived on
/// demand so the division happens in exactly one place.
pub struct BuiltRecipe<'a> {
    pub def: &'a RecipeDef,
    pub instructions: String,
    pub usages: Vec<BuiltUsage>,
}

impl<'a> BuiltRecipe<'a> {
    pub fn build(def: &'a RecipeDef) -> Result<Self, SeedError> {
        let mut usages = vec![];
        for usage in def.ingredients {
            let entry = catalog::find_ingredient(usage.name)
                .ok_or_else(|| SeedError::UnknownIngredient(usage.name.into()))?;
            if usage.unit != entry.default_unit {
                return Err(SeedError::UnitMismatch {
                    ingredient: usage.name.into(),
                    expected: entry.default_unit.into(),
                    got: usage.unit.into(),
                });
            }
            usages.push(BuiltUsage {
                ingredient: usage.name,
                quantity: usage.quantity,
                unit: usage.unit,
                macros: entry.scaled_macros(usage.quantity),
                notes: usage.notes,
            });
        }
        Ok(Self {
            def,
            instructions: number_steps(def.steps),
            usages,
        })
    }

    /// Sum of the row macros in definition order, each component rounded to
    /// 2 decimal places. The rows themselves are not re-rounded.
    pub fn total_macros(&self) -> Macros {
        self.usages
            .iter()
            .fold(Macros::ZERO, |acc, usage| acc + usage.macros)
            .rounded(2)
    }

    pub fn per_serving(&self) -> Macros {
        (self.total_macros() / self.def.servings as f64).rounded(2)
    }
}

fn number_steps(steps: &[&str]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {step}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every row the seeder produces, per table, in insertion order. The dump is
/// rendered from this so its row order matches what went into the database.
pub struct SeedBatch {
    pub categories: Vec<models::Category>,
    pub ingredients: Vec<models::Ingredient>,
    pub recipes: Vec<models::Recipe>,
    pub recipe_ingredients: Vec<models::RecipeIngredient>,
}

/// Turn the static catalog into rows. Ids are assigned 1-based in catalog
/// order for every table.
pub fn build_batch() -> Result<SeedBatch, SeedError> {
    let mut categories = vec![];
    let mut category_ids = HashMap::new();
    let mut category_id = CategoryId::INITIAL;
    for category in Category::iter() {
        category_ids.insert(category, category_id);
        categories.push(models::Category {
            id: category_id,
            name: category.to_string(),
            description: Some(category.description().into()),
        });
        category_id = category_id.next();
    }

    let mut ingredients = vec![];
    let mut ingredient_ids: HashMap<&'static str, IngredientId> = HashMap::new();
    let mut ingredient_id = IngredientId::INITIAL;
    for entry in catalog::INGREDIENTS {
        if ingredient_ids.insert(entry.name, ingredient_id).is_some() {
            return Err(SeedError::DuplicateIngredient(entry.name.into()));
        }
        ingredients.push(models::Ingredient {
            id: ingredient_id,
            name: entry.name.into(),
            default_unit: entry.default_unit.into(),
            calories_per_unit: entry.calories_per_unit,
            protein_per_unit: entry.protein_per_unit,
            fat_per_unit: entry.fat_per_unit,
            carbs_per_unit: entry.carbs_per_unit,
        });
        ingredient_id = ingredient_id.next();
    }

    let mut recipes = vec![];
    let mut recipe_ingredients = vec![];
    let mut recipe_id = RecipeId::INITIAL;
    for def in catalog::RECIPES {
        let built = BuiltRecipe::build(def)?;
        let per_serving = built.per_serving();
        recipes.push(models::Recipe {
            id: recipe_id,
            category_id: category_ids[&def.category],
            name: def.name.into(),
            description: Some(def.description.into()),
            instructions: built.instructions.clone(),
            servings: def.servings,
            calories_per_serving: per_serving.calories,
            protein_per_serving: per_serving.protein,
            fat_per_serving: per_serving.fat,
            carbs_per_serving: per_serving.carbs,
            image_url: def.image_url.into(),
            prep_minutes: def.prep_minutes,
            cook_minutes: def.cook_minutes,
            review_count: def.review_count,
            is_popular: def.is_popular,
        });
        for usage in &built.usages {
            // build() already resolved every usage against the catalog
            recipe_ingredients.push(models::RecipeIngredient {
                recipe_id,
                ingredient_id: ingredient_ids[usage.ingredient],
                quantity: usage.quantity,
                unit: usage.unit.into(),
                calories: usage.macros.calories,
                protein: usage.macros.protein,
                fat: usage.macros.fat,
                carbs: usage.macros.carbs,
                notes: usage.notes.map(Into::into),
            });
        }
        recipe_id = recipe_id.next();
    }

    Ok(SeedBatch {
        categories,
        ingredients,
        recipes,
        recipe_ingredients,
    })
}

/// Build the batch and push every row through the connection, parents before
/// children so the foreign-key checks hold at each step.
pub fn seed_database(conn: &mut database::Connection) -> crate::Result<SeedBatch> {
    let batch = build_batch()?;

    diesel::insert_into(schema::categories::table)
        .values(&batch.categories)
        .execute(conn)?;
    diesel::insert_into(schema::ingredients::table)
        .values(&batch.ingredients)
        .execute(conn)?;
    diesel::insert_into(schema::recipes::table)
        .values(&batch.recipes)
        .execute(conn)?;
    diesel::insert_into(schema::recipe_ingredients::table)
        .values(&batch.recipe_ingredients)
        .execute(conn)?;

    log::debug!(
        "inserted {} categories, {} ingredients, {} recipes, {} recipe ingredients",
        batch.categories.len(),
        batch.ingredients.len(),
        batch.recipes.len(),
        batch.recipe_ingredients.len()
    );

    Ok(batch)
}

#[cfg(test)]
fn test_recipe(ingredients: &'static [catalog::IngredientUse]) -> RecipeDef {
    RecipeDef {
        name: "Test Bowl",
        category: Category::Snack,
        description: "A bowl for tests.",
        steps: &["Combine everything.", "Serve."],
        servings: 2,
        image_url: "https://example.com/bowl.jpeg",
        prep_minutes: 1.0,
        cook_minutes: 0.0,
        review_count: 0.0,
        is_popular: false,
        ingredients,
    }
}

#[test]
fn steps_are_numbered_from_one() {
    assert_eq!(
        number_steps(&["Mix.", "Bake.", "Cool."]),
        "1. Mix.\n2. Bake.\n3. Cool."
    );
}

#[test]
fn unit_mismatch_fails_construction() {
    let def = test_recipe(&[catalog::IngredientUse {
        name: "Honey",
        quantity: 20.0,
        unit: "ml",
        notes: None,
    }]);
    let err = BuiltRecipe::build(&def).err().unwrap();
    assert_eq!(
        err,
        SeedError::UnitMismatch {
            ingredient: "Honey".into(),
            expected: "g".into(),
            got: "ml".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unit mismatch for Honey: expected g, got ml"
    );
}

#[test]
fn unknown_ingredient_fails_construction() {
    let def = test_recipe(&[catalog::IngredientUse {
        name: "Stardust",
        quantity: 1.0,
        unit: "g",
        notes: None,
    }]);
    let err = BuiltRecipe::build(&def).err().unwrap();
    assert_eq!(err, SeedError::UnknownIngredient("Stardust".into()));
}

#[test]
fn honey_row_macros() {
    let def = test_recipe(&[catalog::IngredientUse {
        name: "Honey",
        quantity: 20.0,
        unit: "g",
        notes: None,
    }]);
    let built = BuiltRecipe::build(&def).unwrap();
    let row = &built.usages[0];
    assert_eq!(row.macros.calories, 60.8);
    assert_eq!(row.macros.protein, 0.0);
    assert_eq!(row.macros.fat, 0.0);
    assert_eq!(row.macros.carbs, 16.4);
}

#[test]
fn per_serving_divides_totals() {
    let def = test_recipe(&[]);
    let built = BuiltRecipe {
        def: &def,
        instructions: String::new(),
        usages: vec![
            BuiltUsage {
                ingredient: "Honey",
                quantity: 1.0,
                unit: "g",
                macros: Macros {
                    calories: 250.0,
                    protein: 25.0,
                    fat: 12.5,
                    carbs: 20.0,
                },
                notes: None,
            },
            BuiltUsage {
                ingredient: "Rolled oats",
                quantity: 1.0,
                unit: "g",
                macros: Macros {
                    calories: 150.0,
                    protein: 15.0,
                    fat: 7.5,
                    carbs: 10.0,
                },
                notes: None,
            },
        ],
    };
    let totals = built.total_macros();
    assert_eq!(totals.calories, 400.0);
    assert_eq!(totals.protein, 40.0);
    assert_eq!(totals.fat, 20.0);
    assert_eq!(totals.carbs, 30.0);

    let per_serving = built.per_serving();
    assert_eq!(per_serving.calories, 200.0);
    assert_eq!(per_serving.protein, 20.0);
    assert_eq!(per_serving.fat, 10.0);
    assert_eq!(per_serving.carbs, 15.0);
}

#[test]
fn category_rows_get_ids_in_catalog_order() {
    use maplit::hashmap;

    let batch = build_batch().unwrap();
    let expected = hashmap! {
        "Breakfast" => 1,
        "Lunch" => 2,
        "Dinner" => 3,
        "Snack" => 4,
        "Desert" => 5,
        "Beverage" => 6,
    };
    assert_eq!(batch.categories.len(), expected.len());
    for row in &batch.categories {
        assert_eq!(row.id.raw(), expected[&row.name[..]], "{}", row.name);
    }
}

#[test]
fn batch_covers_whole_catalog() {
    let batch = build_batch().unwrap();
    assert_eq!(batch.ingredients.len(), catalog::INGREDIENTS.len());
    assert_eq!(batch.recipes.len(), catalog::RECIPES.len());
    let usage_count: usize = catalog::RECIPES.iter().map(|r| r.ingredients.len()).sum();
    assert_eq!(batch.recipe_ingredients.len(), usage_count);
}

#[test]
fn batch_is_referentially_consistent() {
    let batch = build_batch().unwrap();
    let category_ids: Vec<_> = batch.categories.iter().map(|c| c.id).collect();
    let ingredient_ids: Vec<_> = batch.ingredients.iter().map(|i| i.id).collect();
    let recipe_ids: Vec<_> = batch.recipes.iter().map(|r| r.id).collect();

    for recipe in &batch.recipes {
        assert!(category_ids.contains(&recipe.category_id), "{}", recipe.name);
    }
    for row in &batch.recipe_ingredients {
        assert!(recipe_ids.contains(&row.recipe_id));
        assert!(ingredient_ids.contains(&row.ingredient_id));
    }
}

#[test]
fn per_serving_matches_totals_for_every_recipe() {
    for def in catalog::RECIPES {
        let built = BuiltRecipe::build(def).unwrap();
        let totals = built.total_macros();
        let per_serving = built.per_serving();
        let servings = def.servings as f64;
        assert_eq!(
            per_serving.calories,
            crate::nutrition::round_to(totals.calories / servings, 2),
            "{}",
            def.name
        );
        assert_eq!(
            per_serving.protein,
            crate::nutrition::round_to(totals.protein / servings, 2),
            "{}",
            def.name
        );
    }
}

#[test]
fn per_serving_values_match_published_dump() {
    // independently computed figures from the shipped recipes.sql, including
    // the rows whose quotient sits just under a rounding boundary
    let expected = [
        ("Protein Oatmeal Bowl", (314.55, 21.3, 7.54, 43.51)),
        ("Veggie Egg Scramble", (264.02, 16.09, 19.39, 7.08)),
        ("Smoked Salmon Avocado Toast", (219.0, 15.15, 11.04, 17.79)),
        ("Miso Cod with Bok Choy", (233.65, 32.22, 7.54, 8.24)),
        ("Dark Chocolate Avocado Mousse", (143.12, 2.31, 10.15, 14.47)),
        ("Berry Electrolyte Refresher", (116.31, 2.07, 2.04, 23.71)),
    ];
    for (name, (calories, protein, fat, carbs)) in expected {
        let def = catalog::RECIPES.iter().find(|r| r.name == name).unwrap();
        let per_serving = BuiltRecipe::build(def).unwrap().per_serving();
        assert_eq!(per_serving.calories, calories, "{name} calories");
        assert_eq!(per_serving.protein, protein, "{name} protein");
        assert_eq!(per_serving.fat, fat, "{name} fat");
        assert_eq!(per_serving.carbs, carbs, "{name} carbs");
    }
}

#[test]
fn seed_database_populates_all_tables() {
    use diesel::QueryDsl as _;

    let mut conn = database::establish_connection().unwrap();
    let batch = seed_database(&mut conn).unwrap();

    let categories: i64 = schema::categories::table.count().get_result(&mut conn).unwrap();
    let ingredients: i64 = schema::ingredients::table.count().get_result(&mut conn).unwrap();
    let recipes: i64 = schema::recipes::table.count().get_result(&mut conn).unwrap();
    let recipe_ingredients: i64 = schema::recipe_ingredients::table
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(categories as usize, batch.categories.len());
    assert_eq!(ingredients as usize, batch.ingredients.len());
    assert_eq!(recipes as usize, batch.recipes.len());
    assert_eq!(recipe_ingredients as usize, batch.recipe_ingredients.len());
}
