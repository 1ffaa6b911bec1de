//! Daily statistics
//!
//! Totals for one day of calorie entries and progress toward the calorie target.

use serde::Serialize;

use super::{CalorieEntry, MealType, Nutrition};

/// Recommended daily intake used when no target is configured (kcal)
pub const DEFAULT_DAILY_CALORIE_TARGET: f64 = 2000.0;

/// Entries organized by meal type
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyMeals {
    pub breakfast: Vec<CalorieEntry>,
    pub lunch: Vec<CalorieEntry>,
    pub dinner: Vec<CalorieEntry>,
    pub snack: Vec<CalorieEntry>,
    pub unspecified: Vec<CalorieEntry>,
}

impl DailyMeals {
    fn push(&mut self, entry: CalorieEntry) {
        match entry.meal_type {
            MealType::Breakfast => self.breakfast.push(entry),
            MealType::Lunch => self.lunch.push(entry),
            MealType::Dinner => self.dinner.push(entry),
            MealType::Snack => self.snack.push(entry),
            MealType::Unspecified => self.unspecified.push(entry),
        }
    }
}

/// Aggregated nutrition for one date
#[derive(Debug, Clone, Serialize)]
pub struct DailyStats {
    pub date: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub entry_count: usize,
    pub meals: DailyMeals,
    pub calorie_target: f64,
    /// consumed / target * 100, may exceed 100
    pub progress_percent: f64,
    /// progress_percent clamped to 0..=100
    pub progress_capped: f64,
    /// target - consumed, negative when over target
    pub remaining_calories: f64,
}

impl DailyStats {
    /// Aggregate the entries dated `date`; entries for other dates are ignored
    pub fn for_date(date: &str, entries: &[CalorieEntry], calorie_target: f64) -> Self {
        let mut meals = DailyMeals::default();
        let mut total = Nutrition::zero();
        let mut entry_count = 0;

        for entry in entries.iter().filter(|e| e.entry_date == date) {
            total = total + entry.nutrition();
            entry_count += 1;
            meals.push(entry.clone());
        }

        let progress_percent = if calorie_target > 0.0 {
            total.calories / calorie_target * 100.0
        } else {
            0.0
        };

        Self {
            date: date.to_string(),
            total_calories: total.calories,
            total_protein: total.protein,
            total_carbs: total.carbs,
            total_fat: total.fat,
            entry_count,
            meals,
            calorie_target,
            progress_percent,
            progress_capped: progress_percent.clamp(0.0, 100.0),
            remaining_calories: calorie_target - total.calories,
        }
    }

    pub fn totals(&self) -> Nutrition {
        Nutrition::new(self.total_calories, self.total_protein, self.total_carbs, self.total_fat)
    }
}
