//! Terminal rendering for session state
//!
//! Presentation is a pure function of session state: these renderers
//! read, never mutate.

use console::Emoji;
use epi_common::{
    Evidence, EvidenceFactor, HistoryEntry, LiveReading, Prediction, RiskAnalysis, RiskHistory,
    RiskLevel,
};
use owo_colors::OwoColorize;

static CHART: Emoji<'static, 'static> = Emoji("📊 ", "");
static GLOBE: Emoji<'static, 'static> = Emoji("🌍 ", "");
static BULB: Emoji<'static, 'static> = Emoji("💡 ", "");

const BAR_WIDTH: usize = 24;

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn risk_colored(level: RiskLevel) -> String {
    match level {
        RiskLevel::Low => level.to_string().green().bold().to_string(),
        RiskLevel::Medium => level.to_string().yellow().bold().to_string(),
        RiskLevel::High => level.to_string().red().bold().to_string(),
    }
}

/// Current evidence vector with labels
pub fn render_evidence(evidence: &Evidence) {
    println!("{}", "Evidence".bold());
    for factor in EvidenceFactor::ALL {
        println!(
            "  {:<20} {} ({})",
            factor.name(),
            evidence.get(factor),
            evidence.label(factor)
        );
    }
    println!();
}

/// Prediction block: risk level, probability, confidence, factor bars
pub fn render_prediction(prediction: &Prediction) {
    println!("{}{}", CHART, "Prediction".bold());
    println!("  Risk level    {}", risk_colored(prediction.risk_level));
    println!(
        "  Probability   {:.1}%",
        prediction.probability * 100.0
    );
    println!(
        "  Confidence    {:.1}%",
        prediction.confidence * 100.0
    );
    println!("  Contributions (normalized):");
    for (name, percent) in prediction.factors.normalized() {
        println!("    {:<12} {} {:>5.1}%", name, bar(percent).dimmed(), percent);
    }
    println!();
}

/// Narrative analysis block
pub fn render_analysis(analysis: &RiskAnalysis) {
    println!("{}{}", BULB, "Analysis".bold());
    println!("  {}", analysis.summary);
    println!();
    println!("  {}", "Key drivers".underline());
    for driver in &analysis.key_drivers {
        println!("    {} — {}", driver.factor.bold(), driver.rationale);
    }
    println!();
    println!("  {}", "Mitigation strategies".underline());
    for (index, strategy) in analysis.mitigation_strategies.iter().enumerate() {
        println!("    {}. {}", index + 1, strategy);
    }
    println!();
}

/// Live snapshot block
pub fn render_live(reading: &LiveReading) {
    println!("{}{}", GLOBE, "Live data".bold());
    println!("  Location      {}, {}", reading.city, reading.country);
    println!("  Conditions    {}", reading.weather_condition);
    println!(
        "  Humidity      {:.0}%   Temperature {:.0}°C",
        reading.humidity, reading.temperature
    );
    println!("  Cases today   {}", reading.today_cases);
    println!("  Population    {}", reading.population);
    println!("  Source        {}", reading.provider.dimmed());
    println!();
}

fn render_entry(entry: &HistoryEntry) {
    println!(
        "  {}  {:>5.1}%  W{} D{} S{} C{}",
        entry.timestamp,
        entry.probability * 100.0,
        entry.evidence.weather,
        entry.evidence.population_density,
        entry.evidence.sanitation,
        entry.evidence.recent_cases
    );
}

/// Rolling history, oldest first
pub fn render_history(history: &RiskHistory) {
    if history.is_empty() {
        return;
    }
    println!("{}", "History".bold());
    for entry in history.iter() {
        render_entry(entry);
    }
    println!();
}

/// Single-slot error message
pub fn render_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(100.0), "█".repeat(BAR_WIDTH));
        // Over-range input stays clamped
        assert_eq!(bar(250.0), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn test_bar_midpoint() {
        let rendered = bar(50.0);
        assert_eq!(rendered.chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }
}
