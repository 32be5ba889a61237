//! Narrative risk analysis returned by the model backend
//!
//! Purely presentational: no numeric invariants, only non-emptiness.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// One critical factor with its rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDriver {
    pub factor: String,
    pub rationale: String,
}

/// Structured narrative: summary, top drivers, mitigation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub summary: String,
    /// Contract expects the top 2 drivers; at least one is required
    pub key_drivers: Vec<KeyDriver>,
    pub mitigation_strategies: Vec<String>,
}

impl RiskAnalysis {
    /// Enforce the non-emptiness constraints of the contract
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.summary.trim().is_empty() {
            return Err(ServiceError::Schema("analysis summary is empty".to_string()));
        }
        if self.key_drivers.is_empty() {
            return Err(ServiceError::Schema("analysis has no key drivers".to_string()));
        }
        if self.mitigation_strategies.is_empty() {
            return Err(ServiceError::Schema(
                "analysis has no mitigation strategies".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RiskAnalysis {
        RiskAnalysis {
            summary: "Elevated risk driven by case growth and density.".to_string(),
            key_drivers: vec![
                KeyDriver {
                    factor: "Recent Cases".to_string(),
                    rationale: "Case counts are rising past the 1k band.".to_string(),
                },
                KeyDriver {
                    factor: "Population Density".to_string(),
                    rationale: "High density accelerates transmission.".to_string(),
                },
            ],
            mitigation_strategies: vec![
                "Expand testing capacity in dense districts.".to_string(),
                "Issue targeted public hygiene advisories.".to_string(),
            ],
        }
    }

    #[test]
    fn test_valid_analysis_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_blank_summary_rejected() {
        let mut analysis = sample();
        analysis.summary = "   ".to_string();
        assert!(matches!(analysis.validate(), Err(ServiceError::Schema(_))));
    }

    #[test]
    fn test_missing_drivers_rejected() {
        let mut analysis = sample();
        analysis.key_drivers.clear();
        assert!(matches!(analysis.validate(), Err(ServiceError::Schema(_))));
    }

    #[test]
    fn test_wire_shape_camel_case() {
        let json = r#"{
            "summary": "Stable situation.",
            "keyDrivers": [{"factor": "Weather", "rationale": "Dry season."}],
            "mitigationStrategies": ["Maintain surveillance."]
        }"#;
        let analysis: RiskAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.key_drivers[0].factor, "Weather");
        assert!(analysis.validate().is_ok());
    }
}
