//! Live environmental/epidemiological reading
//!
//! Transient snapshot from the live-data backend. Not persisted; each
//! fetch fully replaces the prior value.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// Simulated live snapshot for a location
///
/// All eight fields are required by contract; numeric fields must be
/// non-negative. Counts are unsigned so a negative count already fails
/// at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveReading {
    pub city: String,
    pub country: String,
    /// Free-text description, e.g. "Humid and Overcast"
    pub weather_condition: String,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// New cases reported today
    pub today_cases: u64,
    /// Total population of the city
    pub population: u64,
    /// Display-only provider name
    pub provider: String,
}

impl LiveReading {
    /// Enforce the contract: no empty text fields, no negative numerics
    pub fn validate(&self) -> Result<(), ServiceError> {
        let texts = [
            ("city", &self.city),
            ("country", &self.country),
            ("weatherCondition", &self.weather_condition),
            ("provider", &self.provider),
        ];
        for (name, value) in texts {
            if value.trim().is_empty() {
                return Err(ServiceError::Schema(format!("field {name} is empty")));
            }
        }
        if !self.humidity.is_finite() || self.humidity < 0.0 {
            return Err(ServiceError::Schema(format!(
                "humidity {} must be non-negative",
                self.humidity
            )));
        }
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(ServiceError::Schema(format!(
                "temperature {} must be non-negative",
                self.temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LiveReading {
        LiveReading {
            city: "Delhi".to_string(),
            country: "India".to_string(),
            weather_condition: "Humid and Overcast".to_string(),
            humidity: 82.0,
            temperature: 33.0,
            today_cases: 1450,
            population: 32_000_000,
            provider: "Global Health Data Network".to_string(),
        }
    }

    #[test]
    fn test_valid_reading_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_city_rejected() {
        let mut reading = sample();
        reading.city = "  ".to_string();
        assert!(matches!(reading.validate(), Err(ServiceError::Schema(_))));
    }

    #[test]
    fn test_negative_humidity_rejected() {
        let mut reading = sample();
        reading.humidity = -1.0;
        assert!(matches!(reading.validate(), Err(ServiceError::Schema(_))));
    }

    #[test]
    fn test_negative_count_fails_at_decode() {
        let json = r#"{
            "city": "Delhi", "country": "India",
            "weatherCondition": "Clear", "humidity": 35, "temperature": 20,
            "todayCases": -4, "population": 32000000, "provider": "GHDN"
        }"#;
        assert!(serde_json::from_str::<LiveReading>(json).is_err());
    }
}
