// Copyright 2023 Remi Bernotavicius

use super::{Category, IngredientUse, RecipeDef};

const fn usage(
    name: &'static str,
    quantity: f64,
    unit: &'static str,
    notes: Option<&'static str>,
) -> IngredientUse {
    IngredientUse {
        name,
        quantity,
        unit,
        notes,
    }
}

/// Every recipe the seeder materializes, in the order recipe ids are
/// assigned in. Ingredient lines stay in written order so macro sums are
/// reproducible.
pub const RECIPES: &[RecipeDef] = &[
    // Breakfast
    RecipeDef {
        name: "Protein Oatmeal Bowl",
        category: Category::Breakfast,
        description: "Creamy oats layered with fruit, healthy fats, and a protein boost to anchor the morning.",
        steps: &[
            "Bring the almond milk to a gentle simmer and stir in the oats.",
            "Cook for 5 minutes until thickened, then fold in chia seeds and whey protein.",
            "Transfer to bowls, top with sliced banana, and finish with remaining toppings.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/704569/pexels-photo-704569.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 5.0,
        review_count: 128.0,
        is_popular: true,
        ingredients: &[
            usage("Rolled oats", 80.0, "g", None),
            usage(
                "Unsweetened almond milk",
                240.0,
                "ml",
                Some("Warm but do not boil to maintain creaminess."),
            ),
            usage("Chia seeds", 15.0, "g", None),
            usage(
                "Banana",
                100.0,
                "g",
                Some("Slice just before serving to prevent browning."),
            ),
            usage(
                "Vanilla whey protein",
                1.0,
                "scoop",
                Some("Whisk in off the heat to avoid clumping."),
            ),
        ],
    },
    RecipeDef {
        name: "Veggie Egg Scramble",
        category: Category::Breakfast,
        description: "Fluffy eggs folded with colorful vegetables and tangy feta for a savory start.",
        steps: &[
            "Whisk eggs with a pinch of salt and pepper until frothy.",
            "Sauté garlic, peppers, tomatoes, and spinach in olive oil until tender.",
            "Pour in eggs, scramble gently, and finish with crumbled feta.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/1437267/pexels-photo-1437267.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 8.0,
        review_count: 102.0,
        is_popular: false,
        ingredients: &[
            usage("Egg", 180.0, "g", Some("About 3 large eggs.")),
            usage("Olive oil", 10.0, "ml", Some("Heat just until shimmering.")),
            usage("Garlic", 5.0, "g", Some("Minced.")),
            usage("Red bell pepper", 70.0, "g", Some("Diced.")),
            usage("Cherry tomatoes", 80.0, "g", Some("Halved.")),
            usage("Spinach", 50.0, "g", Some("Roughly chopped.")),
            usage("Feta cheese", 40.0, "g", Some("Crumbled before serving.")),
        ],
    },
    RecipeDef {
        name: "Greek Yogurt Pancakes",
        category: Category::Breakfast,
        description: "High-protein pancakes with a tender crumb and naturally sweet berry topping.",
        steps: &[
            "Blend yogurt, oats, eggs, and baking powder into a smooth batter.",
            "Ladle onto a preheated skillet and cook until bubbles form and flip once.",
            "Serve warm with honey drizzle and fresh berries.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/376464/pexels-photo-376464.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 12.0,
        cook_minutes: 15.0,
        review_count: 89.0,
        is_popular: true,
        ingredients: &[
            usage("Greek yogurt", 180.0, "g", Some("Use thick strained yogurt.")),
            usage("Rolled oats", 60.0, "g", Some("Pulse into flour if preferred.")),
            usage("Egg", 120.0, "g", Some("About 2 large eggs.")),
            usage("Baking powder", 5.0, "g", None),
            usage("Honey", 20.0, "g", Some("Reserve half for serving.")),
            usage("Mixed berries", 80.0, "g", Some("Fresh or thawed.")),
        ],
    },
    RecipeDef {
        name: "Smoked Salmon Avocado Toast",
        category: Category::Breakfast,
        description: "Whole-grain toast layered with creamy avocado and protein-rich smoked salmon.",
        steps: &[
            "Toast bread slices until crisp and golden.",
            "Mash avocado with lemon juice and spread evenly over toast.",
            "Top with smoked salmon, yogurt dollops, and baby spinach.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/5665661/pexels-photo-5665661.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 8.0,
        cook_minutes: 2.0,
        review_count: 75.0,
        is_popular: false,
        ingredients: &[
            usage("Whole grain bread", 2.0, "slice", Some("Toast for extra crunch.")),
            usage("Avocado", 100.0, "g", Some("Mash with a fork.")),
            usage("Lemon juice", 10.0, "ml", Some("Mix into the avocado.")),
            usage("Smoked salmon", 90.0, "g", Some("Slice thinly.")),
            usage("Greek yogurt", 40.0, "g", Some("Dollop on top.")),
            usage("Spinach", 30.0, "g", Some("Use baby leaves.")),
        ],
    },
    RecipeDef {
        name: "Sweet Potato Breakfast Hash",
        category: Category::Breakfast,
        description: "A hearty skillet hash with caramelized sweet potatoes and soft scrambled eggs.",
        steps: &[
            "Sauté diced sweet potatoes in olive oil until tender and golden.",
            "Add peppers, garlic, and spinach; cook until wilted.",
            "Fold in whisked eggs and cook just until softly set.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/803963/pexels-photo-803963.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 20.0,
        review_count: 68.0,
        is_popular: false,
        ingredients: &[
            usage("Sweet potato", 300.0, "g", Some("Dice into 1 cm cubes.")),
            usage("Olive oil", 12.0, "ml", Some("Divide for sautéing.")),
            usage("Red bell pepper", 80.0, "g", Some("Diced.")),
            usage("Garlic", 6.0, "g", Some("Minced.")),
            usage("Spinach", 60.0, "g", None),
            usage("Egg", 180.0, "g", Some("Whisked lightly.")),
        ],
    },
    // Lunch
    RecipeDef {
        name: "Mediterranean Quinoa Lunch Bowl",
        category: Category::Lunch,
        description: "A high-fiber grain bowl with plant protein, fresh vegetables, and tangy feta.",
        steps: &[
            "Cook quinoa according to package instructions and let it cool slightly.",
            "Combine quinoa with chickpeas, tomatoes, cucumber, and feta in a large bowl.",
            "Dress with olive oil and lemon juice, tossing to coat evenly before serving.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/6107787/pexels-photo-6107787.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=650&w=940",
        prep_minutes: 15.0,
        cook_minutes: 20.0,
        review_count: 96.0,
        is_popular: true,
        ingredients: &[
            usage("Quinoa", 90.0, "g", Some("Rinse well to remove bitterness.")),
            usage(
                "Chickpeas",
                150.0,
                "g",
                Some("Use cooked or canned chickpeas, drained."),
            ),
            usage("Cherry tomatoes", 120.0, "g", Some("Halve for easier bites.")),
            usage("Cucumber", 100.0, "g", Some("Dice into small cubes.")),
            usage("Feta cheese", 60.0, "g", Some("Crumbled.")),
            usage("Olive oil", 15.0, "ml", None),
            usage(
                "Lemon juice",
                20.0,
                "ml",
                Some("Freshly squeezed for best flavor."),
            ),
        ],
    },
    RecipeDef {
        name: "Grilled Chicken Power Salad",
        category: Category::Lunch,
        description: "Lean grilled chicken over crisp greens with creamy avocado and citrus dressing.",
        steps: &[
            "Season chicken and grill until cooked through, then slice thinly.",
            "Toss spinach, cucumber, and tomatoes in a large bowl.",
            "Top with avocado and chicken, then drizzle with olive oil and lemon juice.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 14.0,
        review_count: 110.0,
        is_popular: true,
        ingredients: &[
            usage("Chicken breast", 220.0, "g", Some("Grill and rest before slicing.")),
            usage("Spinach", 80.0, "g", None),
            usage("Cucumber", 80.0, "g", Some("Sliced thin.")),
            usage("Cherry tomatoes", 100.0, "g", Some("Halved.")),
            usage("Avocado", 100.0, "g", Some("Diced.")),
            usage("Olive oil", 15.0, "ml", Some("Whisk with lemon for dressing.")),
            usage("Lemon juice", 20.0, "ml", None),
        ],
    },
    RecipeDef {
        name: "Lentil Veggie Wrap",
        category: Category::Lunch,
        description: "Protein-packed lentils and crunchy vegetables wrapped in a whole wheat tortilla.",
        steps: &[
            "Warm tortillas until pliable.",
            "Mix lentils with hummus, peppers, carrots, and spinach.",
            "Fill each tortilla, roll tightly, and slice in half.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/1640770/pexels-photo-1640770.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 12.0,
        cook_minutes: 5.0,
        review_count: 64.0,
        is_popular: false,
        ingredients: &[
            usage(
                "Whole wheat tortilla",
                2.0,
                "piece",
                Some("Gently warm to prevent cracking."),
            ),
            usage("Cooked lentils", 180.0, "g", Some("Drain well.")),
            usage("Hummus", 80.0, "g", None),
            usage("Red bell pepper", 70.0, "g", Some("Slice into strips.")),
            usage("Carrot", 80.0, "g", Some("Julienned.")),
            usage("Spinach", 60.0, "g", None),
        ],
    },
    RecipeDef {
        name: "Turkey Avocado Sandwich",
        category: Category::Lunch,
        description: "A satisfying layered sandwich with lean turkey, creamy avocado, and leafy greens.",
        steps: &[
            "Toast bread lightly for structure.",
            "Mash avocado with a squeeze of lemon and spread on bread.",
            "Layer turkey, spinach, and yogurt spread, then slice to serve.",
        ],
        servings: 1,
        image_url: "https://images.pexels.com/photos/1600711/pexels-photo-1600711.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 3.0,
        review_count: 71.0,
        is_popular: false,
        ingredients: &[
            usage("Whole grain bread", 2.0, "slice", Some("Toast to your liking.")),
            usage("Turkey breast", 120.0, "g", Some("Thinly sliced.")),
            usage("Avocado", 80.0, "g", Some("Mashed.")),
            usage("Spinach", 30.0, "g", Some("Use baby leaves.")),
            usage("Greek yogurt", 30.0, "g", Some("Spread for tang.")),
            usage("Lemon juice", 5.0, "ml", Some("Mix into the avocado.")),
        ],
    },
    RecipeDef {
        name: "Tofu Veggie Stir-Fry",
        category: Category::Lunch,
        description: "Seared tofu with crisp vegetables tossed in a savory soy-sesame glaze over rice.",
        steps: &[
            "Press and cube tofu, then sear until golden on all sides.",
            "Stir-fry broccoli, peppers, and mushrooms until tender-crisp.",
            "Combine with tofu, soy sauce, and sesame oil; serve over warm brown rice.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/3026800/pexels-photo-3026800.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 18.0,
        review_count: 83.0,
        is_popular: false,
        ingredients: &[
            usage("Firm tofu", 240.0, "g", Some("Press to remove excess moisture.")),
            usage("Broccoli florets", 120.0, "g", None),
            usage("Red bell pepper", 90.0, "g", Some("Slice into strips.")),
            usage("Mushrooms", 100.0, "g", Some("Sliced.")),
            usage("Soy sauce", 30.0, "ml", Some("Add toward the end.")),
            usage("Sesame oil", 10.0, "ml", Some("Drizzle for finishing flavor.")),
            usage("Brown rice", 180.0, "g", Some("Cooked.")),
        ],
    },
    // Dinner
    RecipeDef {
        name: "Citrus Herb Salmon Plate",
        category: Category::Dinner,
        description: "Roasted salmon with vibrant vegetables and a bright citrus glaze.",
        steps: &[
            "Preheat the oven to 200°C and line a baking sheet with parchment.",
            "Toss sweet potato, broccoli, and garlic with half the olive oil and roast for 15 minutes.",
            "Add salmon to the tray, brush with remaining oil and lemon juice, then roast 12 more minutes.",
        ],
        servings: 2,
        image_url: "https://images.unsplash.com/photo-1607118750694-1469a22ef45d?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=987&q=80",
        prep_minutes: 15.0,
        cook_minutes: 25.0,
        review_count: 87.0,
        is_popular: true,
        ingredients: &[
            usage(
                "Salmon fillet",
                360.0,
                "g",
                Some("Use skin-on fillets for better moisture."),
            ),
            usage("Sweet potato", 200.0, "g", Some("Cut into 2 cm cubes.")),
            usage("Broccoli florets", 120.0, "g", None),
            usage("Garlic", 6.0, "g", Some("Thinly sliced.")),
            usage("Olive oil", 10.0, "ml", None),
            usage(
                "Lemon juice",
                10.0,
                "ml",
                Some("Drizzle over salmon before serving."),
            ),
        ],
    },
    RecipeDef {
        name: "Turkey Meatballs with Zoodles",
        category: Category::Dinner,
        description: "Lean turkey meatballs simmered in tomato sauce over zucchini noodles.",
        steps: &[
            "Mix ground turkey with egg, garlic, and parmesan; form into meatballs.",
            "Sear meatballs until browned, then simmer in tomato sauce until cooked through.",
            "Toss spiralized zucchini in the sauce just before serving.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/3296273/pexels-photo-3296273.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 20.0,
        cook_minutes: 25.0,
        review_count: 92.0,
        is_popular: false,
        ingredients: &[
            usage("Ground turkey", 300.0, "g", Some("Use lean 93/7.")),
            usage("Egg", 60.0, "g", Some("Lightly beaten.")),
            usage("Garlic", 8.0, "g", Some("Minced.")),
            usage("Parmesan cheese", 30.0, "g", Some("Finely grated.")),
            usage("Tomato sauce", 240.0, "g", None),
            usage("Olive oil", 10.0, "ml", Some("For searing.")),
            usage("Zucchini", 260.0, "g", Some("Spiralized into noodles.")),
        ],
    },
    RecipeDef {
        name: "Steak Quinoa Pilaf",
        category: Category::Dinner,
        description: "Seared flank steak over herbed quinoa with mushrooms and wilted greens.",
        steps: &[
            "Cook quinoa until fluffy and set aside.",
            "Sear flank steak to preferred doneness and rest before slicing.",
            "Sauté mushrooms, spinach, and garlic, toss with quinoa, and top with steak.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/5737249/pexels-photo-5737249.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 18.0,
        cook_minutes: 22.0,
        review_count: 78.0,
        is_popular: false,
        ingredients: &[
            usage("Flank steak", 260.0, "g", Some("Slice against the grain.")),
            usage(
                "Quinoa",
                90.0,
                "g",
                Some("Cooked in low-sodium broth if desired."),
            ),
            usage("Mushrooms", 100.0, "g", Some("Sliced.")),
            usage("Spinach", 80.0, "g", None),
            usage("Garlic", 6.0, "g", None),
            usage("Olive oil", 15.0, "ml", Some("Divide for steak and vegetables.")),
            usage("Lemon juice", 10.0, "ml", Some("Finish with a squeeze.")),
        ],
    },
    RecipeDef {
        name: "Miso Cod with Bok Choy",
        category: Category::Dinner,
        description: "Oven-baked cod glazed with miso and sesame, served alongside tender bok choy.",
        steps: &[
            "Whisk miso paste with sesame oil and lemon juice to form a glaze.",
            "Brush over cod fillets and bake until flaky.",
            "Sauté bok choy with ginger until just wilted and serve with cod.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/6287529/pexels-photo-6287529.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 12.0,
        cook_minutes: 15.0,
        review_count: 66.0,
        is_popular: false,
        ingredients: &[
            usage("Cod", 320.0, "g", Some("Use skinless fillets.")),
            usage("Miso paste", 40.0, "g", None),
            usage("Sesame oil", 10.0, "ml", None),
            usage("Lemon juice", 15.0, "ml", Some("Whisk into glaze.")),
            usage("Bok choy", 200.0, "g", Some("Halve lengthwise.")),
            usage("Ginger", 10.0, "g", Some("Julienned.")),
        ],
    },
    RecipeDef {
        name: "Chickpea Coconut Curry",
        category: Category::Dinner,
        description: "A creamy chickpea curry with sweet potato and spinach served over brown rice.",
        steps: &[
            "Sauté garlic and curry paste until fragrant.",
            "Stir in sweet potato, chickpeas, and coconut milk; simmer until tender.",
            "Fold in spinach and serve over warm brown rice.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/1640773/pexels-photo-1640773.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 30.0,
        review_count: 91.0,
        is_popular: true,
        ingredients: &[
            usage("Garlic", 8.0, "g", None),
            usage("Curry paste", 25.0, "g", Some("Adjust heat to taste.")),
            usage("Sweet potato", 220.0, "g", Some("Diced.")),
            usage("Chickpeas", 200.0, "g", None),
            usage("Coconut milk", 200.0, "ml", None),
            usage("Spinach", 80.0, "g", None),
            usage("Brown rice", 200.0, "g", Some("Cooked for serving.")),
        ],
    },
    // Snack
    RecipeDef {
        name: "Berry Crunch Yogurt Jar",
        category: Category::Snack,
        description: "Layered Greek yogurt parfait with berries, honey, and crunchy toppings.",
        steps: &[
            "Whisk honey into the yogurt until smooth.",
            "Layer yogurt, berries, and granola in jars.",
            "Top with chopped almonds just before serving for crunch.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/8963959/pexels-photo-8963959.jpeg?auto=compress&cs=tinysrgb&dpr=2&w=500",
        prep_minutes: 10.0,
        cook_minutes: 0.0,
        review_count: 54.0,
        is_popular: false,
        ingredients: &[
            usage(
                "Greek yogurt",
                200.0,
                "g",
                Some("Use 2% or 5% depending on fat goals."),
            ),
            usage(
                "Mixed berries",
                80.0,
                "g",
                Some("A mix of blueberries, raspberries, and strawberries."),
            ),
            usage("Honey", 15.0, "g", None),
            usage("Granola", 30.0, "g", Some("Choose a low-sugar variety.")),
            usage("Chopped almonds", 15.0, "g", Some("Lightly toasted.")),
        ],
    },
    RecipeDef {
        name: "Spicy Roasted Chickpeas",
        category: Category::Snack,
        description: "Crunchy roasted chickpeas coated in smoky paprika and garlic.",
        steps: &[
            "Pat chickpeas dry and toss with oil and spices.",
            "Roast, shaking the pan occasionally, until crisp.",
            "Cool slightly before serving for maximum crunch.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/4110404/pexels-photo-4110404.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 8.0,
        cook_minutes: 35.0,
        review_count: 63.0,
        is_popular: false,
        ingredients: &[
            usage("Chickpeas", 160.0, "g", Some("Cooked and drained.")),
            usage("Olive oil", 10.0, "ml", None),
            usage("Paprika", 6.0, "g", Some("Smoked for depth.")),
            usage("Garlic powder", 3.0, "g", None),
        ],
    },
    RecipeDef {
        name: "Peanut Butter Apple Slices",
        category: Category::Snack,
        description: "Fresh apple wedges topped with protein-rich peanut butter and chia sprinkle.",
        steps: &[
            "Slice apples into wedges and arrange on a plate.",
            "Spread peanut butter over each slice.",
            "Dust with chia seeds and cinnamon before serving.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/1351238/pexels-photo-1351238.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 5.0,
        cook_minutes: 0.0,
        review_count: 58.0,
        is_popular: false,
        ingredients: &[
            usage("Green apple", 160.0, "g", Some("Leave skin on for fiber.")),
            usage("Peanut butter", 40.0, "g", Some("Natural style.")),
            usage("Chia seeds", 10.0, "g", None),
            usage("Cinnamon", 2.0, "g", Some("Sprinkle evenly.")),
        ],
    },
    RecipeDef {
        name: "Veggie Hummus Cups",
        category: Category::Snack,
        description: "Crunchy veggie sticks served with creamy hummus for dipping.",
        steps: &[
            "Slice cucumber, carrots, and peppers into sticks.",
            "Portion hummus into small cups.",
            "Serve vegetables upright in hummus cups with a squeeze of lemon.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/1640775/pexels-photo-1640775.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 0.0,
        review_count: 47.0,
        is_popular: false,
        ingredients: &[
            usage("Cucumber", 80.0, "g", Some("Cut into batons.")),
            usage("Carrot", 80.0, "g", Some("Slice into sticks.")),
            usage("Red bell pepper", 70.0, "g", Some("Slice into strips.")),
            usage("Hummus", 90.0, "g", None),
            usage("Lemon juice", 10.0, "ml", Some("Drizzle over veggies.")),
        ],
    },
    RecipeDef {
        name: "Chocolate Protein Energy Bites",
        category: Category::Snack,
        description: "No-bake bites packed with oats, peanut butter, and dark chocolate chips.",
        steps: &[
            "Stir oats, peanut butter, honey, and chia seeds until evenly combined.",
            "Fold in chopped dark chocolate.",
            "Roll into bite-sized balls and chill to set.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/1633525/pexels-photo-1633525.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 12.0,
        cook_minutes: 0.0,
        review_count: 88.0,
        is_popular: true,
        ingredients: &[
            usage("Rolled oats", 120.0, "g", None),
            usage("Peanut butter", 80.0, "g", Some("Creamy.")),
            usage("Honey", 40.0, "g", None),
            usage("Chia seeds", 20.0, "g", None),
            usage("Dark chocolate (70%)", 40.0, "g", Some("Chopped.")),
        ],
    },
    // Desert
    RecipeDef {
        name: "Dark Chocolate Avocado Mousse",
        category: Category::Desert,
        description: "Silky, dairy-free dessert with heart-healthy fats and antioxidant-rich cocoa.",
        steps: &[
            "Blend avocado, coconut milk, cocoa powder, and maple syrup until smooth.",
            "Add melted dark chocolate and vanilla extract; blend again until glossy.",
            "Chill for at least 30 minutes before serving with optional toppings.",
        ],
        servings: 4,
        image_url: "https://images.unsplash.com/photo-1609355109553-3bb67c76b1f7?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=987&q=80",
        prep_minutes: 15.0,
        cook_minutes: 0.0,
        review_count: 67.0,
        is_popular: false,
        ingredients: &[
            usage("Avocado", 150.0, "g", Some("Very ripe for the smoothest texture.")),
            usage("Coconut milk", 60.0, "ml", Some("Full-fat canned coconut milk.")),
            usage("Cocoa powder", 20.0, "g", None),
            usage("Maple syrup", 30.0, "g", None),
            usage(
                "Dark chocolate (70%)",
                25.0,
                "g",
                Some("Melt gently over a bain-marie."),
            ),
            usage("Vanilla extract", 5.0, "ml", None),
        ],
    },
    RecipeDef {
        name: "Coconut Yogurt Panna Cotta",
        category: Category::Desert,
        description: "A light panna cotta made with coconut milk and Greek yogurt topped with berries.",
        steps: &[
            "Bloom gelatin in a small amount of coconut milk.",
            "Warm remaining coconut milk with honey, then whisk in gelatin and yogurt.",
            "Pour into cups, chill until set, and top with berries.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/3026801/pexels-photo-3026801.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 5.0,
        review_count: 59.0,
        is_popular: false,
        ingredients: &[
            usage("Coconut milk", 200.0, "ml", None),
            usage("Honey", 30.0, "g", None),
            usage("Gelatin", 8.0, "g", Some("Powdered.")),
            usage("Greek yogurt", 150.0, "g", Some("Room temperature.")),
            usage("Vanilla extract", 5.0, "ml", None),
            usage("Mixed berries", 90.0, "g", Some("For topping.")),
        ],
    },
    RecipeDef {
        name: "Baked Cinnamon Apples",
        category: Category::Desert,
        description: "Warm baked apples with a cinnamon oat crumble and nutty crunch.",
        steps: &[
            "Core and slice apples, then toss with cinnamon and maple syrup.",
            "Top with oats and almonds and bake until tender.",
            "Serve warm with a dollop of yogurt if desired.",
        ],
        servings: 3,
        image_url: "https://images.pexels.com/photos/4109991/pexels-photo-4109991.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 12.0,
        cook_minutes: 25.0,
        review_count: 72.0,
        is_popular: false,
        ingredients: &[
            usage("Green apple", 300.0, "g", Some("Sliced.")),
            usage("Cinnamon", 4.0, "g", None),
            usage("Maple syrup", 30.0, "g", None),
            usage("Rolled oats", 40.0, "g", None),
            usage("Chopped almonds", 20.0, "g", None),
        ],
    },
    RecipeDef {
        name: "Protein Cheesecake Cups",
        category: Category::Desert,
        description: "No-bake cheesecake cups made creamy with Greek yogurt and whey protein.",
        steps: &[
            "Whisk yogurt with whey protein, honey, and vanilla until smooth.",
            "Stir in almond flour to thicken.",
            "Spoon into cups and chill, topping with berries before serving.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/4109952/pexels-photo-4109952.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 15.0,
        cook_minutes: 0.0,
        review_count: 81.0,
        is_popular: true,
        ingredients: &[
            usage("Greek yogurt", 200.0, "g", Some("Room temperature.")),
            usage("Vanilla whey protein", 1.0, "scoop", None),
            usage("Honey", 25.0, "g", None),
            usage("Almond flour", 40.0, "g", None),
            usage("Mixed berries", 80.0, "g", Some("For topping.")),
        ],
    },
    RecipeDef {
        name: "Mango Lime Sorbet",
        category: Category::Desert,
        description: "A dairy-free frozen sorbet with bright mango and zesty lime.",
        steps: &[
            "Blend mango with coconut milk, honey, and lime juice until silky.",
            "Churn or freeze, stirring occasionally, until scoopable.",
            "Serve immediately or store frozen for up to one week.",
        ],
        servings: 4,
        image_url: "https://images.pexels.com/photos/775031/pexels-photo-775031.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 0.0,
        review_count: 60.0,
        is_popular: false,
        ingredients: &[
            usage("Mango", 250.0, "g", Some("Frozen chunks work well.")),
            usage("Coconut milk", 100.0, "ml", None),
            usage("Honey", 30.0, "g", None),
            usage("Lime juice", 20.0, "ml", None),
        ],
    },
    // Beverage
    RecipeDef {
        name: "Green Detox Smoothie",
        category: Category::Beverage,
        description: "A refreshing blend of leafy greens, citrus, and fiber-rich fruit for hydration and recovery.",
        steps: &[
            "Add all ingredients to a high-speed blender.",
            "Blend until completely smooth, adding extra water if needed.",
            "Serve immediately over ice for the crispest flavor.",
        ],
        servings: 1,
        image_url: "https://images.unsplash.com/photo-1588857756087-281f8cceb865?ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&ixlib=rb-1.2.1&auto=format&fit=crop&w=984&q=80",
        prep_minutes: 5.0,
        cook_minutes: 0.0,
        review_count: 112.0,
        is_popular: false,
        ingredients: &[
            usage("Spinach", 60.0, "g", None),
            usage("Kale", 50.0, "g", Some("Remove tough stems.")),
            usage("Green apple", 120.0, "g", Some("Core and chop.")),
            usage("Cucumber", 100.0, "g", Some("Peeled if waxed.")),
            usage("Lemon juice", 15.0, "ml", None),
            usage("Ginger", 10.0, "g", Some("Grate before blending.")),
            usage("Water", 200.0, "ml", Some("Chilled.")),
        ],
    },
    RecipeDef {
        name: "Chocolate Recovery Shake",
        category: Category::Beverage,
        description: "A post-workout shake with protein, carbs, and healthy fats for recovery.",
        steps: &[
            "Combine almond milk, banana, cocoa, and protein in a blender.",
            "Blend until smooth.",
            "Add peanut butter and blend briefly to incorporate.",
        ],
        servings: 1,
        image_url: "https://images.pexels.com/photos/5926393/pexels-photo-5926393.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 5.0,
        cook_minutes: 0.0,
        review_count: 94.0,
        is_popular: true,
        ingredients: &[
            usage("Unsweetened almond milk", 300.0, "ml", None),
            usage("Banana", 120.0, "g", Some("Frozen for thickness.")),
            usage("Cocoa powder", 15.0, "g", None),
            usage("Vanilla whey protein", 1.0, "scoop", None),
            usage("Peanut butter", 30.0, "g", None),
        ],
    },
    RecipeDef {
        name: "Beet Citrus Booster",
        category: Category::Beverage,
        description: "A vibrant juice packed with beets, carrots, and citrus for natural energy.",
        steps: &[
            "Blend beet, carrot, and ginger with orange juice.",
            "Strain if desired for a smoother texture.",
            "Stir in lemon juice and water before serving.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/2280551/pexels-photo-2280551.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 8.0,
        cook_minutes: 0.0,
        review_count: 58.0,
        is_popular: false,
        ingredients: &[
            usage("Beet", 120.0, "g", Some("Peeled.")),
            usage("Carrot", 100.0, "g", Some("Roughly chopped.")),
            usage("Orange juice", 200.0, "ml", Some("Fresh squeezed.")),
            usage("Ginger", 8.0, "g", None),
            usage("Lemon juice", 15.0, "ml", None),
            usage("Water", 100.0, "ml", None),
        ],
    },
    RecipeDef {
        name: "Matcha Protein Latte",
        category: Category::Beverage,
        description: "A creamy matcha latte fortified with whey protein for a steady energy boost.",
        steps: &[
            "Heat almond milk until steaming but not boiling.",
            "Whisk matcha with a splash of milk to form a paste.",
            "Blend remaining milk with matcha, protein, and honey until frothy.",
        ],
        servings: 1,
        image_url: "https://images.pexels.com/photos/1028716/pexels-photo-1028716.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 6.0,
        cook_minutes: 2.0,
        review_count: 65.0,
        is_popular: false,
        ingredients: &[
            usage("Unsweetened almond milk", 250.0, "ml", None),
            usage("Matcha powder", 5.0, "g", Some("Sift to avoid clumps.")),
            usage("Vanilla whey protein", 0.5, "scoop", None),
            usage("Honey", 15.0, "g", None),
        ],
    },
    RecipeDef {
        name: "Berry Electrolyte Refresher",
        category: Category::Beverage,
        description: "A hydrating drink with berries, coconut water, and chia for natural electrolytes.",
        steps: &[
            "Muddle berries with honey and lemon juice in a pitcher.",
            "Stir in coconut water and chia seeds.",
            "Chill for 10 minutes before serving to let the chia hydrate.",
        ],
        servings: 2,
        image_url: "https://images.pexels.com/photos/1105166/pexels-photo-1105166.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
        prep_minutes: 10.0,
        cook_minutes: 0.0,
        review_count: 52.0,
        is_popular: false,
        ingredients: &[
            usage("Mixed berries", 120.0, "g", Some("Lightly crushed.")),
            usage("Honey", 15.0, "g", None),
            usage("Lemon juice", 15.0, "ml", None),
            usage("Coconut water", 300.0, "ml", None),
            usage("Chia seeds", 12.0, "g", None),
        ],
    },
];
