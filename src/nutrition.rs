// Copyright 2023 Remi Bernotavicius

/// Calories, protein, fat, and carbohydrates for some amount of food. The
/// unit is whatever the surrounding context says it is (per-unit, per-row,
/// per-recipe, per-serving).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Macros {
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        carbs: 0.0,
    };

    /// Round every component to the given number of decimal places.
    pub fn rounded(&self, places: i32) -> Self {
        Self {
            calories: round_to(self.calories, places),
            protein: round_to(self.protein, places),
            fat: round_to(self.fat, places),
            carbs: round_to(self.carbs, places),
        }
    }
}

impl std::ops::Add for Macros {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl std::ops::Mul<f64> for Macros {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }
}

impl std::ops::Div<f64> for Macros {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            fat: self.fat / divisor,
            carbs: self.carbs / divisor,
        }
    }
}

/// Round to a fixed number of decimal places. Goes through the exact decimal
/// rendering of the value so ties resolve on the true binary value, not on
/// the result of a lossy scale-by-a-power-of-ten.
pub fn round_to(value: f64, places: i32) -> f64 {
    format!("{value:.places$}", places = places as usize)
        .parse()
        .unwrap()
}

#[test]
fn rounding() {
    assert_eq!(round_to(60.800000000000004, 3), 60.8);
    assert_eq!(round_to(0.0, 3), 0.0);
    assert_eq!(round_to(16.400000000000002, 3), 16.4);
    assert_eq!(round_to(1.2349, 2), 1.23);
    assert_eq!(round_to(1.2351, 2), 1.24);
}

#[test]
fn rounding_near_half_boundaries() {
    // 42.61 / 2 is 21.304999…, just under the half; scaling it by 100 first
    // would land on exactly 2130.5 and round the wrong way
    assert_eq!(round_to(42.61 / 2.0, 2), 21.3);
    assert_eq!(round_to(15.09 / 2.0, 2), 7.54);
    assert_eq!(round_to(14.17 / 2.0, 2), 7.08);
    assert_eq!(round_to(30.31 / 2.0, 2), 15.15);
    assert_eq!(round_to(572.5 / 4.0, 2), 143.12);
    // exact binary ties go to even
    assert_eq!(round_to(0.125, 2), 0.12);
    assert_eq!(round_to(0.375, 2), 0.38);
}

#[test]
fn macros_arithmetic() {
    let a = Macros {
        calories: 100.0,
        protein: 10.0,
        fat: 5.0,
        carbs: 20.0,
    };
    let b = Macros {
        calories: 50.0,
        protein: 2.5,
        fat: 1.0,
        carbs: 7.0,
    };
    let sum = a + b;
    assert_eq!(sum.calories, 150.0);
    assert_eq!(sum.protein, 12.5);
    assert_eq!(sum.fat, 6.0);
    assert_eq!(sum.carbs, 27.0);

    let half = sum / 2.0;
    assert_eq!(half.calories, 75.0);
    assert_eq!(half.carbs, 13.5);

    assert_eq!(Macros::ZERO + a, a);
}

#[test]
fn macros_rounded() {
    let m = Macros {
        calories: 60.800000000000004,
        protein: 0.0,
        fat: 0.0,
        carbs: 16.400000000000002,
    };
    let r = m.rounded(3);
    assert_eq!(r.calories, 60.8);
    assert_eq!(r.carbs, 16.4);
}
