//! Evidence model - the four-dimensional ordinal input vector
//!
//! Each field is an integer index into a fixed label table. Out-of-range
//! values are a caller error, not a recoverable runtime state: setters
//! assert bounds.

use serde::{Deserialize, Serialize};

pub const WEATHER_LABELS: [&str; 4] = ["Clear", "Mild", "Humid", "Adverse"];
pub const DENSITY_LABELS: [&str; 4] = ["Low", "Medium", "High", "Very High"];
pub const SANITATION_LABELS: [&str; 3] = ["Poor", "Moderate", "Good"];
pub const CASES_LABELS: [&str; 4] = ["< 100", "101 - 1k", "1k - 5k", "> 5k"];

/// Weather ordinals
pub const WEATHER_CLEAR: u8 = 0;
pub const WEATHER_MILD: u8 = 1;
pub const WEATHER_HUMID: u8 = 2;
pub const WEATHER_ADVERSE: u8 = 3;

/// Sanitation ordinal used when live data carries no sanitation signal
pub const SANITATION_MODERATE: u8 = 1;

/// The four named risk axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceFactor {
    Weather,
    PopulationDensity,
    Sanitation,
    RecentCases,
}

impl EvidenceFactor {
    pub const ALL: [EvidenceFactor; 4] = [
        EvidenceFactor::Weather,
        EvidenceFactor::PopulationDensity,
        EvidenceFactor::Sanitation,
        EvidenceFactor::RecentCases,
    ];

    /// Human-readable axis name
    pub fn name(&self) -> &'static str {
        match self {
            EvidenceFactor::Weather => "Weather",
            EvidenceFactor::PopulationDensity => "Population Density",
            EvidenceFactor::Sanitation => "Sanitation",
            EvidenceFactor::RecentCases => "Recent Cases",
        }
    }

    /// Label table for this axis
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            EvidenceFactor::Weather => &WEATHER_LABELS,
            EvidenceFactor::PopulationDensity => &DENSITY_LABELS,
            EvidenceFactor::Sanitation => &SANITATION_LABELS,
            EvidenceFactor::RecentCases => &CASES_LABELS,
        }
    }
}

/// Ordinal evidence vector fed to the prediction backend
///
/// Higher index means greater risk on every axis except sanitation,
/// where the polarity is inverted (lower index = worse outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub weather: u8,
    pub population_density: u8,
    pub sanitation: u8,
    pub recent_cases: u8,
}

impl Default for Evidence {
    /// Startup defaults: Humid weather, High density, Moderate
    /// sanitation, 101-1k recent cases
    fn default() -> Self {
        Self {
            weather: 2,
            population_density: 2,
            sanitation: 1,
            recent_cases: 1,
        }
    }
}

impl Evidence {
    /// Create a validated evidence vector; panics on out-of-range indexes
    pub fn new(weather: u8, population_density: u8, sanitation: u8, recent_cases: u8) -> Self {
        let mut evidence = Self::default();
        evidence.set(EvidenceFactor::Weather, weather);
        evidence.set(EvidenceFactor::PopulationDensity, population_density);
        evidence.set(EvidenceFactor::Sanitation, sanitation);
        evidence.set(EvidenceFactor::RecentCases, recent_cases);
        evidence
    }

    /// Get the ordinal for one axis
    pub fn get(&self, factor: EvidenceFactor) -> u8 {
        match factor {
            EvidenceFactor::Weather => self.weather,
            EvidenceFactor::PopulationDensity => self.population_density,
            EvidenceFactor::Sanitation => self.sanitation,
            EvidenceFactor::RecentCases => self.recent_cases,
        }
    }

    /// Set the ordinal for one axis; panics if the index does not fit
    /// the axis label table
    pub fn set(&mut self, factor: EvidenceFactor, value: u8) {
        assert!(
            (value as usize) < factor.labels().len(),
            "{} index {} out of range (max {})",
            factor.name(),
            value,
            factor.labels().len() - 1
        );
        match factor {
            EvidenceFactor::Weather => self.weather = value,
            EvidenceFactor::PopulationDensity => self.population_density = value,
            EvidenceFactor::Sanitation => self.sanitation = value,
            EvidenceFactor::RecentCases => self.recent_cases = value,
        }
    }

    /// Label for the current value of one axis
    pub fn label(&self, factor: EvidenceFactor) -> &'static str {
        factor.labels()[self.get(factor) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_evidence() {
        let evidence = Evidence::default();
        assert_eq!(evidence.weather, 2);
        assert_eq!(evidence.population_density, 2);
        assert_eq!(evidence.sanitation, 1);
        assert_eq!(evidence.recent_cases, 1);
    }

    #[test]
    fn test_labels() {
        let evidence = Evidence::new(0, 3, 2, 3);
        assert_eq!(evidence.label(EvidenceFactor::Weather), "Clear");
        assert_eq!(evidence.label(EvidenceFactor::PopulationDensity), "Very High");
        assert_eq!(evidence.label(EvidenceFactor::Sanitation), "Good");
        assert_eq!(evidence.label(EvidenceFactor::RecentCases), "> 5k");
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut evidence = Evidence::default();
        for factor in EvidenceFactor::ALL {
            let max = (factor.labels().len() - 1) as u8;
            evidence.set(factor, max);
            assert_eq!(evidence.get(factor), max);
        }
    }

    #[test]
    #[should_panic(expected = "Sanitation index 3 out of range")]
    fn test_out_of_range_is_caller_error() {
        let mut evidence = Evidence::default();
        evidence.set(EvidenceFactor::Sanitation, 3);
    }
}
