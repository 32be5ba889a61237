//! System prompts and user-prompt builders for the three backend
//! operations
//!
//! The backend is a structured-output text model: every prompt carries
//! the response schema inline and demands strict JSON with no prose.

use crate::evidence::{Evidence, EvidenceFactor};
use crate::prediction::Prediction;

pub const PREDICTION_SYSTEM_PROMPT: &str = r#"You are an expert epidemiologist AI. Using a simulated Bayesian network model, analyze the provided evidence to predict a disease outbreak. The evidence values are on an ordinal scale, with higher numbers indicating greater risk (except for Sanitation, where lower is worse).

RESPONSE FORMAT (STRICT JSON - NO PROSE):
{
  "probability": <0.0 to 1.0, outbreak probability>,
  "confidence": <0.8 to 1.0, your confidence in the prediction>,
  "riskLevel": <"Low"|"Medium"|"High", based on the probability>,
  "factors": {
    "weather": <0 to 100, weather's contribution score>,
    "density": <0 to 100, population density's contribution score>,
    "sanitation": <0 to 100, sanitation's contribution score>,
    "cases": <0 to 100, recent cases' contribution score>
  }
}

All four factor scores are required. Respond with the JSON object only."#;

pub const LIVE_DATA_SYSTEM_PROMPT: &str = r#"You are a live environmental and public health data simulation AI. Generate a realistic, plausible data snapshot for the requested location.

RESPONSE FORMAT (STRICT JSON - NO PROSE):
{
  "city": <string>,
  "country": <string>,
  "weatherCondition": <string, e.g. "Humid and Overcast">,
  "humidity": <integer percentage 0 to 100>,
  "temperature": <integer, Celsius, non-negative>,
  "todayCases": <integer, new cases today, non-negative>,
  "population": <integer, total city population, non-negative>,
  "provider": <string, plausible data provider name, e.g. "Global Health Data Network">
}

All eight fields are required. Respond with the JSON object only."#;

pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert public health advisor AI. Given an outbreak risk assessment and its contributing factors, produce a structured risk analysis.

RESPONSE FORMAT (STRICT JSON - NO PROSE):
{
  "summary": <string, concise 2-3 sentence analysis of the overall situation>,
  "keyDrivers": [
    {"factor": <string, risk factor name>, "rationale": <string, one-sentence explanation>},
    {"factor": <string>, "rationale": <string>}
  ],
  "mitigationStrategies": [<string>, <string>]
}

Identify the top 2 key drivers and suggest exactly two concrete, actionable mitigation strategies. Respond with the JSON object only."#;

/// Render one evidence axis as "index (Label)"
fn factor_line(evidence: &Evidence, factor: EvidenceFactor) -> String {
    format!(
        "- {}: {} ({})",
        factor.name(),
        evidence.get(factor),
        evidence.label(factor)
    )
}

/// User prompt for the prediction operation
pub fn prediction_prompt(evidence: &Evidence) -> String {
    let lines: Vec<String> = EvidenceFactor::ALL
        .iter()
        .map(|factor| factor_line(evidence, *factor))
        .collect();
    format!(
        "Evidence:\n{}\n\nProvide a detailed risk assessment based on these factors.",
        lines.join("\n")
    )
}

/// User prompt for the live-data operation
pub fn live_data_prompt(city: &str, country: &str) -> String {
    format!(
        "Generate a realistic, plausible data snapshot for the city of {}, {}.",
        city, country
    )
}

/// User prompt for the analysis operation
pub fn analysis_prompt(prediction: &Prediction, evidence: &Evidence) -> String {
    let lines: Vec<String> = EvidenceFactor::ALL
        .iter()
        .map(|factor| format!("- {}: {}", factor.name(), evidence.label(*factor)))
        .collect();
    format!(
        "The current outbreak risk assessment is as follows:\n\
         - Risk Level: {}\n\
         - Outbreak Probability: {:.1}%\n\n\
         The primary contributing factors are:\n{}\n\n\
         Based on this data, provide a structured risk analysis. Identify the top 2 key drivers and suggest two mitigation strategies.",
        prediction.risk_level,
        prediction.probability * 100.0,
        lines.join("\n")
    )
}
