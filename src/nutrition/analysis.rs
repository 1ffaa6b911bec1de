//! Food analysis records
//!
//! Turns an upstream food description (usually from a vision model) into the
//! record stored with a calorie entry.

use serde::Serialize;

use super::resolver::Resolver;

/// Food name used when the upstream step could not identify anything
pub const UNIDENTIFIED_FOOD_NAME: &str = "ไม่สามารถระบุอาหารได้";

/// Description used when the upstream step could not identify anything
pub const UNIDENTIFIED_DESCRIPTION: &str = "ไม่สามารถวิเคราะห์อาหารได้ กรุณาลองใหม่";

/// Prefix for the human-readable description of a detected food
pub const DETECTED_PREFIX: &str = "อาหารที่ตรวจพบ: ";

/// Analysis result for one food description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodAnalysis {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub description: String,
    /// Reference alias that produced the numbers, None for default/placeholder
    pub matched_alias: Option<String>,
    /// True when the upstream step produced nothing usable
    pub unidentified: bool,
}

impl FoodAnalysis {
    /// Estimate nutrition for a description.
    ///
    /// A blank description yields the placeholder; an unmatched one yields the
    /// default estimate under the caller's food name.
    pub fn from_description(resolver: &Resolver, description: &str) -> Self {
        let food_name = description.trim();
        if food_name.is_empty() {
            tracing::warn!("empty food description, returning unidentified placeholder");
            return Self::unavailable();
        }

        let resolution = resolver.resolve_detailed(food_name);
        let fact = resolution.fact();
        Self {
            food_name: food_name.to_string(),
            calories: fact.calories,
            protein: fact.protein,
            carbs: fact.carbs,
            fat: fact.fat,
            description: format!("{}{}", DETECTED_PREFIX, food_name),
            matched_alias: resolution.matched_alias().map(str::to_string),
            unidentified: false,
        }
    }

    /// Analyze an upstream result, substituting the placeholder on failure
    pub fn from_upstream<E: std::fmt::Display>(
        resolver: &Resolver,
        upstream: Result<&str, E>,
    ) -> Self {
        match upstream {
            Ok(description) => Self::from_description(resolver, description),
            Err(e) => {
                tracing::warn!(error = %e, "food description unavailable, returning unidentified placeholder");
                Self::unavailable()
            }
        }
    }

    /// Placeholder with zero nutrition
    pub fn unavailable() -> Self {
        Self {
            food_name: UNIDENTIFIED_FOOD_NAME.to_string(),
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            description: UNIDENTIFIED_DESCRIPTION.to_string(),
            matched_alias: None,
            unidentified: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_description() {
        let resolver = Resolver::builtin().unwrap();
        let analysis = FoodAnalysis::from_description(&resolver, "  Pad Thai with shrimp \n");
        assert_eq!(analysis.food_name, "Pad Thai with shrimp");
        assert_eq!(analysis.calories, 300.0);
        assert_eq!(analysis.protein, 12.0);
        assert_eq!(analysis.description, "อาหารที่ตรวจพบ: Pad Thai with shrimp");
        assert_eq!(analysis.matched_alias.as_deref(), Some("pad thai"));
        assert!(!analysis.unidentified);
    }

    #[test]
    fn test_unmatched_description_uses_default_estimate() {
        let resolver = Resolver::builtin().unwrap();
        let analysis = FoodAnalysis::from_description(&resolver, "xyzzy unknown snack");
        assert_eq!(analysis.food_name, "xyzzy unknown snack");
        assert_eq!(analysis.calories, 200.0);
        assert_eq!(analysis.protein, 10.0);
        assert_eq!(analysis.carbs, 25.0);
        assert_eq!(analysis.fat, 8.0);
        assert_eq!(analysis.matched_alias, None);
        assert!(!analysis.unidentified);
    }

    #[test]
    fn test_blank_description_is_unidentified() {
        let resolver = Resolver::builtin().unwrap();
        let analysis = FoodAnalysis::from_description(&resolver, "   ");
        assert_eq!(analysis, FoodAnalysis::unavailable());
        assert_eq!(analysis.food_name, UNIDENTIFIED_FOOD_NAME);
        assert_eq!(analysis.calories, 0.0);
    }

    #[test]
    fn test_upstream_error_is_unidentified() {
        let resolver = Resolver::builtin().unwrap();
        let analysis = FoodAnalysis::from_upstream(&resolver, Err("vision API key missing"));
        assert!(analysis.unidentified);
        assert_eq!(analysis.description, UNIDENTIFIED_DESCRIPTION);

        let ok = FoodAnalysis::from_upstream::<String>(&resolver, Ok("ส้มตำ"));
        assert_eq!(ok.calories, 150.0);
    }
}
