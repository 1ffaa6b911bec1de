//! Nutrition estimation MCP tools
//!
//! Resolve food descriptions and browse the reference table.

use serde::Serialize;

use crate::nutrition::{normalize, FoodAnalysis, ReferenceEntry, Resolver};

/// Response for estimate_nutrition
#[derive(Debug, Serialize)]
pub struct EstimateNutritionResponse {
    pub description: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub matched_alias: Option<String>,
    pub is_default: bool,
}

/// Summary of a reference entry for list results
#[derive(Debug, Serialize)]
pub struct ReferenceFoodSummary {
    /// 1-based match priority
    pub priority: usize,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub aliases: Vec<String>,
}

impl ReferenceFoodSummary {
    fn from_entry(priority: usize, entry: &ReferenceEntry) -> Self {
        Self {
            priority,
            name: entry.fact.name.clone(),
            calories: entry.fact.calories,
            protein: entry.fact.protein,
            carbs: entry.fact.carbs,
            fat: entry.fact.fat,
            aliases: entry.aliases.clone(),
        }
    }
}

/// Response for list_reference_foods
#[derive(Debug, Serialize)]
pub struct ListReferenceFoodsResponse {
    pub items: Vec<ReferenceFoodSummary>,
    pub total: usize,
    pub table_size: usize,
}

/// Estimate nutrition for a free-text description
pub fn estimate_nutrition(resolver: &Resolver, description: &str) -> EstimateNutritionResponse {
    let resolution = resolver.resolve_detailed(description);
    let is_default = resolution.is_default();
    let matched_alias = resolution.matched_alias().map(str::to_string);
    let fact = resolution.into_fact();

    EstimateNutritionResponse {
        description: description.to_string(),
        name: fact.name,
        calories: fact.calories,
        protein: fact.protein,
        carbs: fact.carbs,
        fat: fact.fat,
        matched_alias,
        is_default,
    }
}

/// Build the analysis record for an upstream description.
///
/// A reported upstream error or a missing description yields the unidentified placeholder.
pub fn analyze_food(
    resolver: &Resolver,
    description: Option<&str>,
    upstream_error: Option<&str>,
) -> FoodAnalysis {
    let upstream = match (description, upstream_error) {
        (_, Some(error)) => Err(error),
        (Some(description), None) => Ok(description),
        (None, None) => Err("no food description provided"),
    };
    FoodAnalysis::from_upstream(resolver, upstream)
}

/// List reference entries in priority order, optionally filtered by name or alias
pub fn list_reference_foods(
    resolver: &Resolver,
    query: Option<&str>,
    limit: usize,
) -> ListReferenceFoodsResponse {
    let limit = limit.clamp(1, 500);
    let query = query
        .map(normalize)
        .filter(|q| !q.trim().is_empty());

    let table = resolver.table();
    let items: Vec<ReferenceFoodSummary> = table
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| match &query {
            Some(q) => {
                normalize(&entry.fact.name).contains(q.as_str())
                    || entry.aliases.iter().any(|a| a.contains(q.as_str()))
            }
            None => true,
        })
        .take(limit)
        .map(|(idx, entry)| ReferenceFoodSummary::from_entry(idx + 1, entry))
        .collect();

    let total = items.len();
    ListReferenceFoodsResponse {
        items,
        total,
        table_size: table.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;
    use crate::nutrition::ReferenceTableBuilder;

    #[test]
    fn test_estimate_matched() {
        let resolver = Resolver::builtin().unwrap();
        let result = estimate_nutrition(&resolver, "Green Curry with chicken");
        assert_eq!(result.name, "green curry");
        assert_eq!(result.calories, 180.0);
        assert_eq!(result.matched_alias.as_deref(), Some("green curry"));
        assert!(!result.is_default);
        assert_eq!(result.description, "Green Curry with chicken");
    }

    #[test]
    fn test_estimate_default() {
        let resolver = Resolver::builtin().unwrap();
        let result = estimate_nutrition(&resolver, "xyzzy unknown snack");
        assert!(result.is_default);
        assert_eq!(result.matched_alias, None);
        assert_eq!(result.name, "unknown dish");
        assert_eq!(result.calories, 200.0);
    }

    #[test]
    fn test_analyze_food_paths() {
        let resolver = Resolver::builtin().unwrap();
        let ok = analyze_food(&resolver, Some("mango sticky rice"), None);
        assert_eq!(ok.food_name, "mango sticky rice");
        assert_eq!(ok.matched_alias.as_deref(), Some("rice"));

        let failed = analyze_food(&resolver, Some("ignored"), Some("HTTP 500"));
        assert!(failed.unidentified);

        let missing = analyze_food(&resolver, None, None);
        assert!(missing.unidentified);
    }

    #[test]
    fn test_list_reference_foods_in_priority_order() {
        let resolver = Resolver::builtin().unwrap();
        let all = list_reference_foods(&resolver, None, 500);
        assert_eq!(all.total, all.table_size);
        assert_eq!(all.items[0].name, "pad thai");
        assert_eq!(all.items[0].priority, 1);
        let fried = all.items.iter().position(|i| i.name == "fried rice").unwrap();
        let plain = all.items.iter().position(|i| i.name == "rice").unwrap();
        assert!(fried < plain);
    }

    #[test]
    fn test_list_reference_foods_filtered() {
        let resolver = Resolver::builtin().unwrap();
        let rice = list_reference_foods(&resolver, Some("RICE"), 50);
        let names: Vec<&str> = rice.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["fried rice", "steamed rice", "rice"]);

        let thai = list_reference_foods(&resolver, Some("ไก่"), 50);
        assert_eq!(thai.items.len(), 1);
        assert_eq!(thai.items[0].name, "chicken");

        let limited = list_reference_foods(&resolver, None, 3);
        assert_eq!(limited.total, 3);
    }

    #[test]
    fn test_list_reference_foods_matches_name_case_insensitively() {
        let mut builder = ReferenceTableBuilder::new();
        builder
            .entry("Khao Man Gai", Nutrition::new(600.0, 25.0, 75.0, 20.0), &["ข้าวมันไก่"])
            .unwrap();
        let resolver = Resolver::new(builder.build());

        let result = list_reference_foods(&resolver, Some("khao man"), 10);
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "Khao Man Gai");

        let result = list_reference_foods(&resolver, Some("KHAO MAN GAI"), 10);
        assert_eq!(result.total, 1);
    }
}
