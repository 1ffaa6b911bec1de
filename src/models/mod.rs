//! Data models
//!
//! Plain value types shared by the resolver and the tool layer.

mod calorie_entry;
mod daily_stats;
mod nutrition;
mod profile;

pub use calorie_entry::{CalorieEntry, MealType};
pub use daily_stats::{DailyMeals, DailyStats, DEFAULT_DAILY_CALORIE_TARGET};
pub use nutrition::{Nutrition, NutritionFact, DEFAULT_FOOD_NAME, DEFAULT_NUTRITION};
pub use profile::{round1, BodyProfile};
