//! Command handlers for epictl
//!
//! Each handler builds a session over the configured backend, runs one
//! operation and renders the resulting state. A session error exits
//! non-zero with the human-readable message.

use crate::display;
use anyhow::{Context, Result};
use epi_common::{
    EpiConfig, Evidence, EvidenceFactor, ModelBackend, OllamaBackend, Session,
};

fn build_session(config: &EpiConfig, model: Option<String>) -> Session<OllamaBackend> {
    let backend = OllamaBackend::new(config.endpoint.clone(), config.timeout_secs);
    Session::new(backend, model.unwrap_or_else(|| config.model.clone()))
}

/// Render final session state; error state exits non-zero after the
/// surviving partial state has been shown
fn finish<B: ModelBackend>(session: &Session<B>) -> Result<()> {
    if let Some(reading) = session.live_reading() {
        display::render_live(reading);
    }
    if let Some(prediction) = session.prediction() {
        display::render_prediction(prediction);
    }
    if let Some(analysis) = session.analysis() {
        display::render_analysis(analysis);
    }
    display::render_history(session.history());

    if let Some(message) = session.last_error() {
        display::render_error(message);
        std::process::exit(1);
    }
    Ok(())
}

/// One-shot prediction from manual evidence
pub async fn predict(
    weather: Option<u8>,
    density: Option<u8>,
    sanitation: Option<u8>,
    cases: Option<u8>,
    model: Option<String>,
) -> Result<()> {
    let config = EpiConfig::load();
    let mut session = build_session(&config, model);

    let mut evidence = Evidence::default();
    // CLI ranges are validated by clap, so these setters cannot panic
    if let Some(value) = weather {
        evidence.set(EvidenceFactor::Weather, value);
    }
    if let Some(value) = density {
        evidence.set(EvidenceFactor::PopulationDensity, value);
    }
    if let Some(value) = sanitation {
        evidence.set(EvidenceFactor::Sanitation, value);
    }
    if let Some(value) = cases {
        evidence.set(EvidenceFactor::RecentCases, value);
    }
    session.set_evidence(evidence);

    display::render_evidence(session.evidence());
    session.run_prediction().await;
    finish(&session)
}

/// Live fetch with derived evidence and continuation prediction
pub async fn live(
    city: Option<String>,
    country: Option<String>,
    model: Option<String>,
) -> Result<()> {
    let config = EpiConfig::load();
    let city = city.unwrap_or_else(|| config.default_city.clone());
    let country = country.unwrap_or_else(|| config.default_country.clone());

    let mut session = build_session(&config, model);
    session.run_live_fetch(&city, &country).await;

    if session.live_reading().is_some() {
        display::render_evidence(session.evidence());
    }
    finish(&session)
}

/// Print the four label tables
pub fn labels() {
    for factor in EvidenceFactor::ALL {
        println!("{}:", factor.name());
        for (index, label) in factor.labels().iter().enumerate() {
            println!("  {index} = {label}");
        }
        println!();
    }
}

/// Show or update configuration
pub fn config(set: Option<String>) -> Result<()> {
    let mut config = EpiConfig::load();

    if let Some(assignment) = set {
        let (key, value) = assignment
            .split_once('=')
            .context("expected --set key=value")?;
        config.set(key.trim(), value.trim())?;
        config.save()?;
        println!("updated {}", key.trim());
    }

    let rendered = toml::to_string_pretty(&config).context("rendering config")?;
    print!("{rendered}");
    Ok(())
}
