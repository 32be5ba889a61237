//! Derivation mapper - live reading to evidence vector
//!
//! Pure total function over any well-formed reading. The weather
//! predicates overlap, so the match order is load-bearing: first match
//! wins.

use crate::evidence::{
    Evidence, SANITATION_MODERATE, WEATHER_ADVERSE, WEATHER_CLEAR, WEATHER_HUMID, WEATHER_MILD,
};
use crate::live_data::LiveReading;

/// Translate a live reading into the ordinal evidence scale
pub fn map_reading_to_evidence(reading: &LiveReading) -> Evidence {
    let condition = reading.weather_condition.to_lowercase();

    let weather = if condition.contains("rain") || condition.contains("storm") {
        WEATHER_ADVERSE
    } else if reading.humidity > 75.0 || reading.temperature > 30.0 {
        WEATHER_HUMID
    } else if reading.humidity < 40.0
        && reading.temperature > 10.0
        && reading.temperature < 25.0
        && (condition.contains("clear") || condition.contains("sunny"))
    {
        WEATHER_CLEAR
    } else {
        WEATHER_MILD
    };

    // The density axis never emits 0 from live data: small cities still
    // land in the Medium bucket. Asymmetry with the label table is
    // preserved from the upstream contract.
    let population_density = if reading.population > 20_000_000 {
        3
    } else if reading.population > 5_000_000 {
        2
    } else {
        1
    };

    // Live data carries no sanitation signal; fixed placeholder.
    let sanitation = SANITATION_MODERATE;

    let recent_cases = if reading.today_cases > 5000 {
        3
    } else if reading.today_cases > 1000 {
        2
    } else if reading.today_cases > 100 {
        1
    } else {
        0
    };

    Evidence {
        weather,
        population_density,
        sanitation,
        recent_cases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(condition: &str, humidity: f64, temperature: f64) -> LiveReading {
        LiveReading {
            city: "Testville".to_string(),
            country: "Testland".to_string(),
            weather_condition: condition.to_string(),
            humidity,
            temperature,
            today_cases: 0,
            population: 1_000_000,
            provider: "Test Provider".to_string(),
        }
    }

    #[test]
    fn test_rain_wins_over_clear() {
        // "rain" substring must take precedence even when the clear
        // predicate also holds
        let evidence = map_reading_to_evidence(&reading("light rain and clear", 30.0, 20.0));
        assert_eq!(evidence.weather, WEATHER_ADVERSE);
    }

    #[test]
    fn test_storm_is_adverse() {
        let evidence = map_reading_to_evidence(&reading("Thunderstorms", 50.0, 22.0));
        assert_eq!(evidence.weather, WEATHER_ADVERSE);
    }

    #[test]
    fn test_humidity_threshold_exclusive_at_75() {
        let humid = map_reading_to_evidence(&reading("overcast", 76.0, 20.0));
        assert_eq!(humid.weather, WEATHER_HUMID);

        let mild = map_reading_to_evidence(&reading("overcast", 74.0, 20.0));
        assert_eq!(mild.weather, WEATHER_MILD);

        let boundary = map_reading_to_evidence(&reading("overcast", 75.0, 20.0));
        assert_eq!(boundary.weather, WEATHER_MILD);
    }

    #[test]
    fn test_hot_is_humid() {
        let evidence = map_reading_to_evidence(&reading("sunny", 20.0, 31.0));
        assert_eq!(evidence.weather, WEATHER_HUMID);
    }

    #[test]
    fn test_clear_requires_description_match() {
        let clear = map_reading_to_evidence(&reading("Clear skies", 35.0, 20.0));
        assert_eq!(clear.weather, WEATHER_CLEAR);

        let sunny = map_reading_to_evidence(&reading("Sunny", 35.0, 20.0));
        assert_eq!(sunny.weather, WEATHER_CLEAR);

        // Same numbers but no "clear"/"sunny" in the description
        let mild = map_reading_to_evidence(&reading("hazy", 35.0, 20.0));
        assert_eq!(mild.weather, WEATHER_MILD);
    }

    #[test]
    fn test_population_threshold_exclusive_at_20m() {
        let mut r = reading("overcast", 50.0, 20.0);

        r.population = 20_000_001;
        assert_eq!(map_reading_to_evidence(&r).population_density, 3);

        r.population = 20_000_000;
        assert_eq!(map_reading_to_evidence(&r).population_density, 2);

        r.population = 5_000_001;
        assert_eq!(map_reading_to_evidence(&r).population_density, 2);

        // Floor of the live-data path: never emits Low(0)
        r.population = 12_000;
        assert_eq!(map_reading_to_evidence(&r).population_density, 1);
    }

    #[test]
    fn test_sanitation_is_fixed_placeholder() {
        let evidence = map_reading_to_evidence(&reading("overcast", 50.0, 20.0));
        assert_eq!(evidence.sanitation, SANITATION_MODERATE);
    }

    #[test]
    fn test_case_buckets() {
        let mut r = reading("overcast", 50.0, 20.0);
        for (cases, expected) in [(0, 0), (100, 0), (101, 1), (1000, 1), (1001, 2), (5000, 2), (5001, 3)] {
            r.today_cases = cases;
            assert_eq!(
                map_reading_to_evidence(&r).recent_cases,
                expected,
                "todayCases={cases}"
            );
        }
    }
}
