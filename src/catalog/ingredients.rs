// Copyright 2023 Remi Bernotavicius

use super::CatalogIngredient;

const fn entry(
    name: &'static str,
    default_unit: &'static str,
    calories_per_unit: f64,
    protein_per_unit: f64,
    fat_per_unit: f64,
    carbs_per_unit: f64,
) -> CatalogIngredient {
    CatalogIngredient {
        name,
        default_unit,
        calories_per_unit,
        protein_per_unit,
        fat_per_unit,
        carbs_per_unit,
    }
}

/// Per-unit nutrition for every ingredient any recipe may reference. The
/// order here is the order ingredient ids are assigned in.
pub const INGREDIENTS: &[CatalogIngredient] = &[
    entry("Rolled oats", "g", 3.89, 0.169, 0.069, 0.663),
    entry("Unsweetened almond milk", "ml", 0.15, 0.006, 0.013, 0.007),
    entry("Chia seeds", "g", 4.86, 0.17, 0.31, 0.42),
    entry("Banana", "g", 0.89, 0.011, 0.003, 0.23),
    entry("Vanilla whey protein", "scoop", 120.0, 24.0, 1.5, 3.0),
    entry("Quinoa", "g", 3.68, 0.14, 0.06, 0.64),
    entry("Cherry tomatoes", "g", 0.18, 0.009, 0.002, 0.039),
    entry("Cucumber", "g", 0.16, 0.007, 0.001, 0.036),
    entry("Chickpeas", "g", 1.64, 0.089, 0.027, 0.27),
    entry("Feta cheese", "g", 2.64, 0.14, 0.21, 0.04),
    entry("Olive oil", "ml", 8.84, 0.0, 0.998, 0.0),
    entry("Salmon fillet", "g", 2.08, 0.2, 0.13, 0.0),
    entry("Sweet potato", "g", 0.86, 0.016, 0.003, 0.2),
    entry("Broccoli florets", "g", 0.34, 0.028, 0.004, 0.07),
    entry("Garlic", "g", 1.49, 0.062, 0.005, 0.33),
    entry("Lemon juice", "ml", 0.22, 0.004, 0.0, 0.006),
    entry("Greek yogurt", "g", 0.59, 0.1, 0.029, 0.036),
    entry("Mixed berries", "g", 0.57, 0.007, 0.003, 0.14),
    entry("Honey", "g", 3.04, 0.0, 0.0, 0.82),
    entry("Granola", "g", 4.71, 0.08, 0.18, 0.6),
    entry("Chopped almonds", "g", 5.75, 0.212, 0.493, 0.214),
    entry("Avocado", "g", 1.6, 0.02, 0.15, 0.09),
    entry("Cocoa powder", "g", 2.28, 0.19, 0.14, 0.58),
    entry("Maple syrup", "g", 2.6, 0.0, 0.0, 0.67),
    entry("Coconut milk", "ml", 0.75, 0.007, 0.076, 0.009),
    entry("Dark chocolate (70%)", "g", 5.98, 0.08, 0.43, 0.46),
    entry("Vanilla extract", "ml", 2.88, 0.0, 0.0, 0.13),
    entry("Spinach", "g", 0.23, 0.029, 0.004, 0.036),
    entry("Kale", "g", 0.35, 0.029, 0.005, 0.07),
    entry("Green apple", "g", 0.52, 0.003, 0.002, 0.14),
    entry("Ginger", "g", 0.8, 0.018, 0.007, 0.18),
    entry("Water", "ml", 0.0, 0.0, 0.0, 0.0),
    entry("Egg", "g", 1.55, 0.13, 0.11, 0.01),
    entry("Red bell pepper", "g", 0.31, 0.01, 0.003, 0.06),
    entry("Baking powder", "g", 0.53, 0.0, 0.0, 0.27),
    entry("Smoked salmon", "g", 1.17, 0.18, 0.04, 0.0),
    entry("Whole grain bread", "slice", 70.0, 3.6, 1.1, 12.0),
    entry("Chicken breast", "g", 1.65, 0.31, 0.037, 0.0),
    entry("Whole wheat tortilla", "piece", 130.0, 4.0, 3.5, 22.0),
    entry("Cooked lentils", "g", 1.16, 0.09, 0.004, 0.2),
    entry("Carrot", "g", 0.41, 0.009, 0.002, 0.095),
    entry("Turkey breast", "g", 1.35, 0.29, 0.016, 0.0),
    entry("Firm tofu", "g", 0.76, 0.08, 0.048, 0.018),
    entry("Brown rice", "g", 1.11, 0.024, 0.009, 0.23),
    entry("Soy sauce", "ml", 0.53, 0.008, 0.0, 0.1),
    entry("Sesame oil", "ml", 8.84, 0.0, 0.998, 0.0),
    entry("Ground turkey", "g", 1.6, 0.23, 0.09, 0.0),
    entry("Zucchini", "g", 0.17, 0.012, 0.003, 0.035),
    entry("Tomato sauce", "g", 0.29, 0.013, 0.008, 0.06),
    entry("Parmesan cheese", "g", 4.31, 0.38, 0.29, 0.04),
    entry("Flank steak", "g", 2.0, 0.26, 0.11, 0.0),
    entry("Mushrooms", "g", 0.22, 0.03, 0.003, 0.033),
    entry("Miso paste", "g", 1.98, 0.12, 0.06, 0.26),
    entry("Cod", "g", 0.82, 0.18, 0.007, 0.0),
    entry("Bok choy", "g", 0.13, 0.009, 0.002, 0.021),
    entry("Curry paste", "g", 1.6, 0.03, 0.09, 0.17),
    entry("Peanut butter", "g", 5.9, 0.25, 0.5, 0.2),
    entry("Hummus", "g", 1.66, 0.075, 0.089, 0.142),
    entry("Paprika", "g", 2.82, 0.14, 0.13, 0.54),
    entry("Garlic powder", "g", 3.3, 0.17, 0.01, 0.73),
    entry("Gelatin", "g", 3.23, 0.82, 0.0, 0.0),
    entry("Cinnamon", "g", 2.47, 0.04, 0.012, 0.81),
    entry("Almond flour", "g", 5.7, 0.21, 0.5, 0.21),
    entry("Mango", "g", 0.6, 0.009, 0.004, 0.15),
    entry("Lime juice", "ml", 0.25, 0.004, 0.0, 0.008),
    entry("Beet", "g", 0.43, 0.016, 0.002, 0.096),
    entry("Orange juice", "ml", 0.45, 0.007, 0.0, 0.11),
    entry("Matcha powder", "g", 3.24, 0.31, 0.05, 0.38),
    entry("Coconut water", "ml", 0.19, 0.004, 0.0, 0.044),
];
