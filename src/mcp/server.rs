//! kcal MCP Server Implementation
//!
//! Implements the MCP server with all kcal tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{BodyProfile, CalorieEntry, MealType};
use crate::nutrition::Resolver;
use crate::tools::status::StatusTracker;
use crate::tools::{daily, estimate, profile};

/// kcal MCP Service
#[derive(Clone)]
pub struct KcalService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    resolver: Resolver,
    daily_calorie_target: f64,
    tool_router: ToolRouter<KcalService>,
}

impl KcalService {
    pub fn new(config: &Config, resolver: Resolver) -> Self {
        let tracker = StatusTracker::new(
            config.reference_source(),
            resolver.table().len(),
            resolver.table().alias_count(),
            config.daily_calorie_target,
        );
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            resolver,
            daily_calorie_target: config.daily_calorie_target,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Nutrition Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateNutritionParams {
    /// Free-text food description in English or Thai (e.g. "fried rice with chicken", "ส้มตำ")
    pub description: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeFoodParams {
    /// Food description produced by the vision model
    pub description: Option<String>,
    /// Error reported by the vision step, if it failed
    pub upstream_error: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListReferenceFoodsParams {
    /// Filter by food name or alias (optional)
    pub query: Option<String>,
    /// Maximum results (default 100, max 500)
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize { 100 }

// ============================================================================
// Daily Summary Parameter Structs
// ============================================================================

/// One logged food entry
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EntryParam {
    pub food_name: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein in grams (optional, counts as 0)
    pub protein: Option<f64>,
    /// Carbs in grams (optional, counts as 0)
    pub carbs: Option<f64>,
    /// Fat in grams (optional, counts as 0)
    pub fat: Option<f64>,
    /// Meal type: breakfast, lunch, dinner, snack (anything else is unspecified)
    #[serde(default)]
    pub meal_type: Option<String>,
    /// Date in ISO format: YYYY-MM-DD
    pub entry_date: String,
}

impl From<EntryParam> for CalorieEntry {
    fn from(p: EntryParam) -> Self {
        Self {
            food_name: p.food_name,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
            meal_type: p.meal_type.as_deref().map(MealType::from_str).unwrap_or_default(),
            entry_date: p.entry_date,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DailySummaryParams {
    /// Date in ISO format: YYYY-MM-DD (defaults to today)
    pub date: Option<String>,
    /// Entries to summarize; entries for other dates are ignored
    #[serde(default)]
    pub entries: Vec<EntryParam>,
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileStatsParams {
    /// Current weight in kg
    pub current_weight: Option<f64>,
    /// Target weight in kg
    pub target_weight: Option<f64>,
    /// Height in cm
    pub height: Option<f64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl KcalService {
    // --- Status ---

    #[tool(description = "Get the current status of the kcal service including build info, reference table size, and process information")]
    async fn kcal_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for estimating nutrition. Call this when starting a food logging session or when unsure how matching works.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    // --- Nutrition ---

    #[tool(description = "Estimate calories, protein, carbs and fat for a food description. Never fails: unknown foods get a generic default estimate (is_default=true).")]
    fn estimate_nutrition(&self, Parameters(p): Parameters<EstimateNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = estimate::estimate_nutrition(&self.resolver, &p.description);
        json_result(&result)
    }

    #[tool(description = "Build the food analysis record for a vision-model description. Pass upstream_error instead when the vision step failed.")]
    fn analyze_food(&self, Parameters(p): Parameters<AnalyzeFoodParams>) -> Result<CallToolResult, McpError> {
        let result = estimate::analyze_food(&self.resolver, p.description.as_deref(), p.upstream_error.as_deref());
        json_result(&result)
    }

    #[tool(description = "List reference foods in match priority order, optionally filtered by name or alias")]
    fn list_reference_foods(&self, Parameters(p): Parameters<ListReferenceFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = estimate::list_reference_foods(&self.resolver, p.query.as_deref(), p.limit);
        json_result(&result)
    }

    // --- Daily ---

    #[tool(description = "Summarize a day's calorie entries: totals, meals by type, and progress toward the daily calorie target")]
    fn daily_summary(&self, Parameters(p): Parameters<DailySummaryParams>) -> Result<CallToolResult, McpError> {
        let entries: Vec<CalorieEntry> = p.entries.into_iter().map(CalorieEntry::from).collect();
        let result = daily::daily_summary(&entries, p.date.as_deref(), self.daily_calorie_target)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Profile ---

    #[tool(description = "Compute BMI and distance to target weight from weight (kg), target weight (kg) and height (cm)")]
    fn profile_stats(&self, Parameters(p): Parameters<ProfileStatsParams>) -> Result<CallToolResult, McpError> {
        let body = BodyProfile {
            current_weight: p.current_weight,
            target_weight: p.target_weight,
            height: p.height,
        };
        let result = profile::profile_stats(body).map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for KcalService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kcal".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("kcal calorie tracker".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "kcal - food nutrition estimation and daily calorie tracking. \
                 Call nutrition_instructions first. \
                 Nutrition: estimate_nutrition, analyze_food, list_reference_foods. \
                 Daily: daily_summary (caller supplies entries). \
                 Profile: profile_stats. \
                 Status: kcal_status."
                    .into(),
            ),
        }
    }
}
