// Copyright 2023 Remi Bernotavicius

use crate::nutrition::Macros;
use derive_more::Display;
use strum::EnumIter;

mod ingredients;
mod recipes;

pub use ingredients::INGREDIENTS;
pub use recipes::RECIPES;

/// The fixed set of meal categories. Iteration order is catalog order, which
/// decides the ids the seeder assigns (1-based).
#[derive(Debug, Display, EnumIter, Hash, Copy, Clone, PartialEq, Eq)]
pub enum Category {
    #[display("Breakfast")]
    Breakfast,
    #[display("Lunch")]
    Lunch,
    #[display("Dinner")]
    Dinner,
    #[display("Snack")]
    Snack,
    #[display("Desert")]
    Desert,
    #[display("Beverage")]
    Beverage,
}

impl Category {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Breakfast => "Quick meals to jump-start the morning with balanced macros.",
            Self::Lunch => {
                "Midday plates designed to refuel with a mix of carbs, protein, and healthy fats."
            }
            Self::Dinner => {
                "Heartier entrees that keep macro targets on track without sacrificing flavor."
            }
            Self::Snack => {
                "Grab-and-go bites that satisfy between meals while supporting macro goals."
            }
            Self::Desert => "Sweet treats engineered with mindful macro and calorie targets.",
            Self::Beverage => {
                "Smoothies and drinks that deliver hydration and nutrients in one serving."
            }
        }
    }
}

/// Nutrition for exactly one `default_unit` of a named ingredient.
pub struct CatalogIngredient {
    pub name: &'static str,
    pub default_unit: &'static str,
    pub calories_per_unit: f64,
    pub protein_per_unit: f64,
    pub fat_per_unit: f64,
    pub carbs_per_unit: f64,
}

impl CatalogIngredient {
    /// Macros for the given quantity of this ingredient, each component
    /// rounded to 3 decimal places.
    pub fn scaled_macros(&self, quantity: f64) -> Macros {
        let per_unit = Macros {
            calories: self.calories_per_unit,
            protein: self.protein_per_unit,
            fat: self.fat_per_unit,
            carbs: self.carbs_per_unit,
        };
        (per_unit * quantity).rounded(3)
    }
}

/// Look up a catalog entry by its exact name.
pub fn find_ingredient(name: &str) -> Option<&'static CatalogIngredient> {
    INGREDIENTS.iter().find(|i| i.name == name)
}

/// One ingredient line of a recipe definition. The unit must match the
/// catalog entry's `default_unit`; the builder rejects anything else.
pub struct IngredientUse {
    pub name: &'static str,
    pub quantity: f64,
    pub unit: &'static str,
    pub notes: Option<&'static str>,
}

/// A recipe as written in the catalog, before any macro math happens.
pub struct RecipeDef {
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub servings: i32,
    pub image_url: &'static str,
    pub prep_minutes: f64,
    pub cook_minutes: f64,
    pub review_count: f64,
    pub is_popular: bool,
    pub ingredients: &'static [IngredientUse],
}

#[test]
fn six_categories_in_catalog_order() {
    use Category::*;
    let all: Vec<_> = Category::iter().collect();
    assert_eq!(all, vec![Breakfast, Lunch, Dinner, Snack, Desert, Beverage]);
}

#[test]
fn category_names() {
    assert_eq!(Category::Breakfast.to_string(), "Breakfast");
    assert_eq!(Category::Desert.to_string(), "Desert");
}

#[test]
fn honey_scaled_macros() {
    let honey = find_ingredient("Honey").unwrap();
    assert_eq!(honey.default_unit, "g");
    let m = honey.scaled_macros(20.0);
    assert_eq!(m.calories, 60.8);
    assert_eq!(m.protein, 0.0);
    assert_eq!(m.fat, 0.0);
    assert_eq!(m.carbs, 16.4);
}

#[test]
fn scaling_by_zero_is_zero() {
    for ingredient in INGREDIENTS {
        assert_eq!(
            ingredient.scaled_macros(0.0),
            crate::nutrition::Macros::ZERO,
            "{}",
            ingredient.name
        );
    }
}

#[test]
fn ingredient_names_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for ingredient in INGREDIENTS {
        assert!(seen.insert(ingredient.name), "duplicate {:?}", ingredient.name);
    }
}

#[test]
fn recipes_only_use_cataloged_ingredients() {
    for recipe in RECIPES {
        for usage in recipe.ingredients {
            let entry = find_ingredient(usage.name)
                .unwrap_or_else(|| panic!("{:?} not in catalog", usage.name));
            assert_eq!(
                usage.unit, entry.default_unit,
                "unit for {:?} in {:?}",
                usage.name, recipe.name
            );
        }
    }
}

#[test]
fn recipes_have_positive_servings_and_steps() {
    for recipe in RECIPES {
        assert!(recipe.servings > 0, "{:?}", recipe.name);
        assert!(!recipe.steps.is_empty(), "{:?}", recipe.name);
        assert!(!recipe.ingredients.is_empty(), "{:?}", recipe.name);
    }
}
