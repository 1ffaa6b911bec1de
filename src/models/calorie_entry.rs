//! Calorie entry model
//!
//! A logged food with its nutrition. Entries are owned and stored by the
//! caller; this crate only aggregates them.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Meal type enum
///
/// Deserialization goes through [`MealType::from_str`], so any casing is
/// accepted and unknown values become `Unspecified`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Unspecified,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Unspecified,
        }
    }
}

impl From<String> for MealType {
    fn from(s: String) -> Self {
        MealType::from_str(&s)
    }
}

/// A logged food entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieEntry {
    pub food_name: String,
    pub calories: f64,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    #[serde(default)]
    pub meal_type: MealType,
    /// Date in ISO format: YYYY-MM-DD
    pub entry_date: String,
}

impl CalorieEntry {
    /// Nutrition of this entry; missing macros count as zero
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(
            self.calories,
            self.protein.unwrap_or(0.0),
            self.carbs.unwrap_or(0.0),
            self.fat.unwrap_or(0.0),
        )
    }
}
