//! Profile stats MCP tool

use serde::Serialize;

use crate::models::{round1, BodyProfile};

/// Response for profile_stats
#[derive(Debug, Serialize)]
pub struct ProfileStatsResponse {
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub height: Option<f64>,
    /// kg/m^2, one decimal
    pub bmi: Option<f64>,
    /// kg, one decimal
    pub weight_difference: Option<f64>,
}

/// Compute BMI and distance to target weight
pub fn profile_stats(profile: BodyProfile) -> Result<ProfileStatsResponse, String> {
    let fields = [
        ("current_weight", profile.current_weight),
        ("target_weight", profile.target_weight),
        ("height", profile.height),
    ];
    for (name, value) in fields {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(format!("{} must be a non-negative number", name));
            }
        }
    }

    Ok(ProfileStatsResponse {
        current_weight: profile.current_weight,
        target_weight: profile.target_weight,
        height: profile.height,
        bmi: profile.bmi().map(round1),
        weight_difference: profile.weight_difference().map(round1),
    })
}
