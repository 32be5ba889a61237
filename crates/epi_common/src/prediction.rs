//! Prediction types returned by the model backend
//!
//! Wire shape matches the structured-output schema the backend is
//! prompted with: camelCase keys, probability/confidence in [0,1],
//! riskLevel as an enumerated string, four non-negative factor scores.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk level declared by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Per-factor contribution scores
///
/// The unit is unspecified by contract (0-100 suggested): an opaque
/// relative magnitude, not comparable across predictions. Consumers
/// must normalize before deriving percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub weather: f64,
    pub density: f64,
    pub sanitation: f64,
    pub cases: f64,
}

impl FactorScores {
    fn total(&self) -> f64 {
        self.weather + self.density + self.sanitation + self.cases
    }

    /// Percentage share per factor, in fixed display order.
    /// A zero total yields all-zero shares.
    pub fn normalized(&self) -> [(&'static str, f64); 4] {
        let total = self.total();
        let share = |score: f64| {
            if total > 0.0 {
                score / total * 100.0
            } else {
                0.0
            }
        };
        [
            ("Weather", share(self.weather)),
            ("Density", share(self.density)),
            ("Sanitation", share(self.sanitation)),
            ("Cases", share(self.cases)),
        ]
    }
}

/// Structured prediction from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Outbreak probability in [0.0, 1.0]
    pub probability: f64,
    /// Model confidence in [0.0, 1.0] (contract states a practical
    /// floor near 0.8, not enforced here)
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub factors: FactorScores,
}

impl Prediction {
    /// Enforce the contract ranges; any violation rejects the whole
    /// response
    pub fn validate(&self) -> Result<(), ServiceError> {
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(ServiceError::Schema(format!(
                "probability {} outside [0, 1]",
                self.probability
            )));
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ServiceError::Schema(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        let scores = [
            ("weather", self.factors.weather),
            ("density", self.factors.density),
            ("sanitation", self.factors.sanitation),
            ("cases", self.factors.cases),
        ];
        for (name, score) in scores {
            if !score.is_finite() || score < 0.0 {
                return Err(ServiceError::Schema(format!(
                    "factor score {name}={score} must be non-negative"
                )));
            }
        }
        Ok(())
    }
}
