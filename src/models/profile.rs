//! Body profile model
//!
//! Weight and height supplied by the caller, with derived BMI.

use serde::{Deserialize, Serialize};

/// Body measurements (kg, cm)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub current_weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub height: Option<f64>,
}

/// Treat missing, zero, negative and non-finite measurements alike
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

impl BodyProfile {
    /// Body mass index: weight (kg) / height (m)^2
    pub fn bmi(&self) -> Option<f64> {
        let weight = positive(self.current_weight)?;
        let height_m = positive(self.height)? / 100.0;
        Some(weight / (height_m * height_m))
    }

    /// Absolute distance between current and target weight (kg)
    pub fn weight_difference(&self) -> Option<f64> {
        let current = positive(self.current_weight)?;
        let target = positive(self.target_weight)?;
        Some((current - target).abs())
    }
}

/// Round to one decimal place for display
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
