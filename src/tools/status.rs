//! kcal Status Tool
//!
//! Runtime status and usage instructions for the kcal service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Nutrition estimation instructions for AI assistants
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# kcal Nutrition Estimation Instructions

## Overview

kcal turns a short food description into a calorie and macro estimate
(calories in kcal; protein, carbs and fat in grams, per typical serving).
It does not store anything: the caller keeps its own food log.

---

## Estimating a Meal

1. Describe the food briefly in English or Thai, e.g. "fried rice with chicken",
   "pad thai", "ส้มตำ". A name is better than a sentence.
2. Call `estimate_nutrition` with `description`.
3. Check the response:
   - `matched_alias` tells you which reference food produced the numbers
   - `is_default: true` means nothing matched and the generic estimate
     (200 kcal, 10 g protein, 25 g carbs, 8 g fat) was used

### How Matching Works

- The description is searched for known food names (aliases) in a fixed
  priority order; the **first** alias found wins, not the longest one.
- Specific dishes are checked before generic words: "ข้าวผัด" is fried rice,
  not plain rice; "papaya salad" is som tam, not salad.
- English letters are case-insensitive. Thai text must match exactly.
- Call `list_reference_foods` (optionally with `query`) to see the table in
  priority order.

---

## Analyzing a Photo Description

When a vision model described a photo, call `analyze_food` with its text as
`description`. If the vision step failed, pass the error text as
`upstream_error` instead: the result is the "ไม่สามารถระบุอาหารได้"
placeholder with zero nutrition, which should not be logged as a meal.

---

## Daily Summary

Call `daily_summary` with the day's entries (`food_name`, `calories`,
optional `protein`/`carbs`/`fat`, `meal_type`, `entry_date` as YYYY-MM-DD).
Only entries whose `entry_date` equals `date` are counted. `date` defaults to
today. Missing macros count as 0. Progress is measured against the configured
daily target (2000 kcal unless set).

## Profile

`profile_stats` takes weight (kg), target weight (kg) and height (cm) and
returns BMI and the distance to the target weight.
"#;

/// Runtime status of the kcal service
#[derive(Debug, Clone, Serialize)]
pub struct KcalStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Reference data
    pub reference_source: String,
    pub reference_entries: usize,
    pub reference_aliases: usize,
    pub daily_calorie_target: f64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    reference_source: String,
    reference_entries: usize,
    reference_aliases: usize,
    daily_calorie_target: f64,
}

impl StatusTracker {
    pub fn new(
        reference_source: String,
        reference_entries: usize,
        reference_aliases: usize,
        daily_calorie_target: f64,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            reference_source,
            reference_entries,
            reference_aliases,
            daily_calorie_target,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> KcalStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        KcalStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            reference_source: self.reference_source.clone(),
            reference_entries: self.reference_entries,
            reference_aliases: self.reference_aliases,
            daily_calorie_target: self.daily_calorie_target,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
