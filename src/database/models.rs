// Copyright 2023 Remi Bernotavicius

use diesel::associations::{Associations, Identifiable};
use diesel::deserialize::Queryable;
use diesel::expression::Selectable;
use diesel::prelude::Insertable;
use diesel_derive_newtype::DieselNewType;

#[derive(DieselNewType, Debug, Hash, PartialEq, Eq, Copy, Clone)]
pub struct CategoryId(i32);

impl CategoryId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn raw(&self) -> i32 {
        self.0
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Clone)]
#[diesel(table_name = crate::database::schema::categories)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(DieselNewType, Debug, Hash, PartialEq, Eq, Copy, Clone)]
pub struct IngredientId(i32);

impl IngredientId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn raw(&self) -> i32 {
        self.0
    }
}

#[derive(Queryable, Selectable, Identifiable, Insertable, Clone)]
#[diesel(table_name = crate::database::schema::ingredients)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub default_unit: String,
    pub calories_per_unit: f64,
    pub protein_per_unit: f64,
    pub fat_per_unit: f64,
    pub carbs_per_unit: f64,
}

#[derive(DieselNewType, Debug, Hash, PartialEq, Eq, Copy, Clone)]
pub struct RecipeId(i32);

impl RecipeId {
    pub const INITIAL: Self = Self(1);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub fn raw(&self) -> i32 {
        self.0
    }
}

#[derive(Associations, Queryable, Selectable, Identifiable, Insertable, Clone)]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(table_name = crate::database::schema::recipes)]
pub struct Recipe {
    pub id: RecipeId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub servings: i32,
    pub calories_per_serving: f64,
    pub protein_per_serving: f64,
    pub fat_per_serving: f64,
    pub carbs_per_serving: f64,
    pub image_url: String,
    pub prep_minutes: f64,
    pub cook_minutes: f64,
    pub review_count: f64,
    pub is_popular: bool,
}

#[derive(Associations, Queryable, Selectable, Identifiable, Insertable, Clone)]
#[diesel(belongs_to(Recipe))]
#[diesel(belongs_to(Ingredient))]
#[diesel(primary_key(recipe_id, ingredient_id))]
#[diesel(table_name = crate::database::schema::recipe_ingredients)]
pub struct RecipeIngredient {
    pub recipe_id: RecipeId,
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub notes: Option<String>,
}
