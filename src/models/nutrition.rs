//! Shared nutrition data structures
//!
//! Used by the reference table, the resolver, food analysis and daily totals.

use serde::{Deserialize, Serialize};

/// Calories and macronutrients
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64, // kcal
    pub protein: f64,  // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

/// Estimate used when no reference alias matches a description
pub const DEFAULT_NUTRITION: Nutrition = Nutrition {
    calories: 200.0,
    protein: 10.0,
    carbs: 25.0,
    fat: 8.0,
};

/// Name carried by the default estimate
pub const DEFAULT_FOOD_NAME: &str = "unknown dish";

impl Nutrition {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self { calories, protein, carbs, fat }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// First field that is negative or not finite, if any
    pub fn invalid_field(&self) -> Option<(&'static str, f64)> {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// A named nutrition estimate.
///
/// Values are independent estimates; calories are not derived from the macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFact {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionFact {
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            calories: nutrition.calories,
            protein: nutrition.protein,
            carbs: nutrition.carbs,
            fat: nutrition.fat,
        }
    }

    /// The fixed "unknown dish" estimate
    pub fn default_estimate() -> Self {
        Self::new(DEFAULT_FOOD_NAME, DEFAULT_NUTRITION)
    }

    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.carbs, self.fat)
    }
}
