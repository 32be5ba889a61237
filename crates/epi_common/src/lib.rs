//! Episcope Common - Shared types and orchestration for Episcope v0.4.0
//!
//! Outbreak-risk dashboard core: evidence model, derivation mapper,
//! bounded prediction history, model-backend contract and the session
//! state machine that sequences predict / live-data / analysis calls.

pub mod analysis;
pub mod backend;
pub mod config;
pub mod error;
pub mod evidence;
pub mod history;
pub mod live_data;
pub mod mapper;
pub mod prediction;
pub mod prompts;
pub mod session;

pub use analysis::{KeyDriver, RiskAnalysis};
pub use backend::{FakeBackend, ModelBackend, OllamaBackend};
pub use config::EpiConfig;
pub use error::ServiceError;
pub use evidence::{Evidence, EvidenceFactor};
pub use history::{HistoryEntry, RiskHistory, MAX_HISTORY_ENTRIES};
pub use live_data::LiveReading;
pub use mapper::map_reading_to_evidence;
pub use prediction::{FactorScores, Prediction, RiskLevel};
pub use session::{BusyFlags, Session};
