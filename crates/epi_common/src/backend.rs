//! Model backend abstraction
//!
//! One capability trait covering the three boundary operations
//! (predict, analyze, fetch live data), with one implementation per
//! backing provider. The session depends only on this contract, never
//! on a concrete vendor SDK.
//!
//! Production code uses `OllamaBackend` against a local structured-
//! output model. Test code uses `FakeBackend` with scripted responses.

use crate::analysis::RiskAnalysis;
use crate::error::ServiceError;
use crate::evidence::Evidence;
use crate::live_data::LiveReading;
use crate::prediction::Prediction;
use crate::prompts;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Default backend endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:11434";

/// Default request timeout; the upstream contract specifies none, so a
/// hung collaborator would otherwise stall the operation forever
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Structured-output text-model gateway for the three boundary calls
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Predict outbreak risk from an evidence vector
    async fn predict(&self, evidence: &Evidence, model: &str)
        -> Result<Prediction, ServiceError>;

    /// Produce a narrative analysis for a completed prediction
    async fn analyze(
        &self,
        prediction: &Prediction,
        evidence: &Evidence,
        model: &str,
    ) -> Result<RiskAnalysis, ServiceError>;

    /// Fetch a simulated live snapshot for a location
    async fn fetch_live(
        &self,
        city: &str,
        country: &str,
        model: &str,
    ) -> Result<LiveReading, ServiceError>;
}

// ============================================================================
// Ollama backend (production)
// ============================================================================

/// Request for /api/generate
#[derive(Debug, Clone, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
    /// Constrains output to valid JSON
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

#[derive(Debug, Clone, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

/// Response from /api/generate (non-streaming)
#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama-backed implementation of the model gateway
pub struct OllamaBackend {
    http_client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    /// One generate round-trip: send prompt, demand JSON, return the
    /// raw response text
    async fn generate(
        &self,
        model: &str,
        system: &str,
        prompt: &str,
        temperature: Option<f32>,
    ) -> Result<String, ServiceError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model,
            system,
            prompt,
            stream: false,
            format: "json",
            options: temperature.map(|t| GenerateOptions { temperature: t }),
        };

        debug!(model, url = %url, "sending generate request");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout(self.timeout_secs)
                } else {
                    ServiceError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::BadStatus(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidJson(e.to_string()))?;

        let text = body.response.trim().to_string();
        if text.is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(text)
    }

    /// All-or-nothing decode of the model's JSON payload
    fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ServiceError> {
        serde_json::from_str(text).map_err(|e| ServiceError::InvalidJson(e.to_string()))
    }
}

#[async_trait]
impl ModelBackend for OllamaBackend {
    async fn predict(
        &self,
        evidence: &Evidence,
        model: &str,
    ) -> Result<Prediction, ServiceError> {
        let text = self
            .generate(
                model,
                prompts::PREDICTION_SYSTEM_PROMPT,
                &prompts::prediction_prompt(evidence),
                Some(0.3),
            )
            .await?;
        let prediction: Prediction = Self::decode(&text)?;
        prediction.validate()?;
        Ok(prediction)
    }

    async fn analyze(
        &self,
        prediction: &Prediction,
        evidence: &Evidence,
        model: &str,
    ) -> Result<RiskAnalysis, ServiceError> {
        let text = self
            .generate(
                model,
                prompts::ANALYSIS_SYSTEM_PROMPT,
                &prompts::analysis_prompt(prediction, evidence),
                None,
            )
            .await?;
        let analysis: RiskAnalysis = Self::decode(&text)?;
        analysis.validate()?;
        Ok(analysis)
    }

    async fn fetch_live(
        &self,
        city: &str,
        country: &str,
        model: &str,
    ) -> Result<LiveReading, ServiceError> {
        let text = self
            .generate(
                model,
                prompts::LIVE_DATA_SYSTEM_PROMPT,
                &prompts::live_data_prompt(city, country),
                Some(0.8),
            )
            .await?;
        let reading: LiveReading = Self::decode(&text)?;
        reading.validate()?;
        Ok(reading)
    }
}

// ============================================================================
// Fake backend (testing)
// ============================================================================

/// Scripted backend for deterministic tests: responses are queued per
/// operation and popped in order; an exhausted queue fails the call
#[derive(Default)]
pub struct FakeBackend {
    predictions: Mutex<VecDeque<Result<Prediction, ServiceError>>>,
    analyses: Mutex<VecDeque<Result<RiskAnalysis, ServiceError>>>,
    readings: Mutex<VecDeque<Result<LiveReading, ServiceError>>>,
    predict_calls: Mutex<usize>,
    analyze_calls: Mutex<usize>,
    fetch_calls: Mutex<usize>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_prediction(&self, response: Result<Prediction, ServiceError>) {
        self.predictions.lock().unwrap().push_back(response);
    }

    pub fn push_analysis(&self, response: Result<RiskAnalysis, ServiceError>) {
        self.analyses.lock().unwrap().push_back(response);
    }

    pub fn push_reading(&self, response: Result<LiveReading, ServiceError>) {
        self.readings.lock().unwrap().push_back(response);
    }

    pub fn predict_calls(&self) -> usize {
        *self.predict_calls.lock().unwrap()
    }

    pub fn analyze_calls(&self) -> usize {
        *self.analyze_calls.lock().unwrap()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }
}

#[async_trait]
impl ModelBackend for FakeBackend {
    async fn predict(
        &self,
        _evidence: &Evidence,
        _model: &str,
    ) -> Result<Prediction, ServiceError> {
        *self.predict_calls.lock().unwrap() += 1;
        self.predictions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ServiceError::Transport(
                    "no scripted prediction response".to_string(),
                ))
            })
    }

    async fn analyze(
        &self,
        _prediction: &Prediction,
        _evidence: &Evidence,
        _model: &str,
    ) -> Result<RiskAnalysis, ServiceError> {
        *self.analyze_calls.lock().unwrap() += 1;
        self.analyses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ServiceError::Transport(
                    "no scripted analysis response".to_string(),
                ))
            })
    }

    async fn fetch_live(
        &self,
        _city: &str,
        _country: &str,
        _model: &str,
    ) -> Result<LiveReading, ServiceError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.readings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ServiceError::Transport(
                    "no scripted live-data response".to_string(),
                ))
            })
    }
}
