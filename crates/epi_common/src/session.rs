//! Session - the orchestration state machine
//!
//! Owns all mutable dashboard state and sequences the three boundary
//! calls: predict -> (on success) analyze, and live-fetch -> derive
//! evidence -> predict. Constructed at session start, dropped at
//! session end; no ambient globals.
//!
//! Every boundary failure is terminal for its operation (no retry) and
//! lands in the single last-error slot, replacing any prior message.
//! `&mut self` operations make "last write wins by completion order"
//! structural: two operations cannot interleave on one session.

use crate::analysis::RiskAnalysis;
use crate::backend::ModelBackend;
use crate::evidence::{Evidence, EvidenceFactor};
use crate::history::RiskHistory;
use crate::live_data::LiveReading;
use crate::mapper::map_reading_to_evidence;
use crate::prediction::Prediction;
use tracing::{debug, info, warn};

/// Advisory, UI-facing operation flags (not enforced locks)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub predicting: bool,
    pub fetching_live: bool,
    pub analyzing: bool,
}

/// Single-owner dashboard session
pub struct Session<B: ModelBackend> {
    backend: B,
    model: String,
    evidence: Evidence,
    prediction: Option<Prediction>,
    analysis: Option<RiskAnalysis>,
    live: Option<LiveReading>,
    history: RiskHistory,
    busy: BusyFlags,
    last_error: Option<String>,
}

impl<B: ModelBackend> Session<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            evidence: Evidence::default(),
            prediction: None,
            analysis: None,
            live: None,
            history: RiskHistory::new(),
            busy: BusyFlags::default(),
            last_error: None,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn analysis(&self) -> Option<&RiskAnalysis> {
        self.analysis.as_ref()
    }

    pub fn live_reading(&self) -> Option<&LiveReading> {
        self.live.as_ref()
    }

    pub fn history(&self) -> &RiskHistory {
        &self.history
    }

    pub fn busy(&self) -> BusyFlags {
        self.busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the whole evidence vector (user input path)
    pub fn set_evidence(&mut self, evidence: Evidence) {
        self.evidence = evidence;
    }

    /// Mutate one evidence axis; panics on out-of-range index
    pub fn set_factor(&mut self, factor: EvidenceFactor, value: u8) {
        self.evidence.set(factor, value);
    }

    /// Switch the inference model.
    ///
    /// Reactive edge: if a prediction has ever completed, the switch
    /// re-runs the prediction with current evidence. On first load
    /// (no prediction yet) the caller issues the explicit initial
    /// invocation instead.
    pub async fn select_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        if self.prediction.is_some() {
            info!(model = %self.model, "model changed, re-running prediction");
            self.run_prediction().await;
        }
    }

    /// Run the prediction pipeline with current evidence:
    /// predict, record history, then enrich with analysis.
    ///
    /// A prediction failure clears both prediction and analysis. An
    /// analysis failure clears only the analysis: a usable prediction
    /// is not discarded because the narrative enrichment failed.
    pub async fn run_prediction(&mut self) {
        self.busy.predicting = true;
        self.busy.analyzing = true;
        self.last_error = None;

        debug!(evidence = ?self.evidence, model = %self.model, "running prediction");

        let prediction = match self.backend.predict(&self.evidence, &self.model).await {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!("prediction failed: {e}");
                self.last_error = Some(e.to_string());
                self.prediction = None;
                self.analysis = None;
                self.busy.predicting = false;
                self.busy.analyzing = false;
                return;
            }
        };

        info!(
            probability = prediction.probability,
            risk = %prediction.risk_level,
            "prediction complete"
        );
        self.history.record(prediction.probability, self.evidence);

        match self
            .backend
            .analyze(&prediction, &self.evidence, &self.model)
            .await
        {
            Ok(analysis) => self.analysis = Some(analysis),
            Err(e) => {
                warn!("analysis failed: {e}");
                self.last_error = Some(e.to_string());
                self.analysis = None;
            }
        }
        self.prediction = Some(prediction);

        self.busy.predicting = false;
        self.busy.analyzing = false;
    }

    /// Fetch a live snapshot, derive a fresh evidence vector from it
    /// and run the prediction pipeline as a continuation. The
    /// continuation's failure handling applies independently.
    pub async fn run_live_fetch(&mut self, city: &str, country: &str) {
        self.busy.fetching_live = true;
        self.last_error = None;

        debug!(city, country, model = %self.model, "fetching live data");

        match self.backend.fetch_live(city, country, &self.model).await {
            Ok(reading) => {
                info!(city = %reading.city, provider = %reading.provider, "live data received");
                let evidence = map_reading_to_evidence(&reading);
                self.live = Some(reading);
                self.evidence = evidence;
                self.run_prediction().await;
            }
            Err(e) => {
                warn!("live fetch failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }

        self.busy.fetching_live = false;
    }
}
