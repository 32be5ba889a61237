//! Bounded rolling prediction history
//!
//! Sliding window over the last completed predictions: insertion order
//! preserved, oldest evicted first, capacity fixed at 10. Owned solely
//! by the session; entries are immutable once recorded.

use crate::evidence::Evidence;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum retained entries
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// One completed prediction: display timestamp, probability and a
/// snapshot of the evidence that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Display-formatted wall-clock time (HH:MM)
    pub timestamp: String,
    pub probability: f64,
    pub evidence: Evidence,
}

/// Keep-last-10 window of history entries
#[derive(Debug, Clone, Default)]
pub struct RiskHistory {
    entries: VecDeque<HistoryEntry>,
}

impl RiskHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for a completed prediction, evicting the oldest
    /// beyond capacity
    pub fn record(&mut self, probability: f64, evidence: Evidence) {
        self.entries.push_back(HistoryEntry {
            timestamp: Local::now().format("%H:%M").to_string(),
            probability,
            evidence,
        });
        while self.entries.len() > MAX_HISTORY_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_insertion_order() {
        let mut history = RiskHistory::new();
        history.record(0.1, Evidence::default());
        history.record(0.2, Evidence::default());

        let probabilities: Vec<f64> = history.iter().map(|e| e.probability).collect();
        assert_eq!(probabilities, vec![0.1, 0.2]);
        assert_eq!(history.latest().unwrap().probability, 0.2);
    }

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut history = RiskHistory::new();
        for i in 0..25 {
            history.record(i as f64 / 100.0, Evidence::default());
            assert!(history.len() <= MAX_HISTORY_ENTRIES);
        }
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut history = RiskHistory::new();
        // Eleven predictions, each with a distinct evidence snapshot
        for i in 0..11u8 {
            let evidence = Evidence::new(i % 4, 0, 0, 0);
            history.record(i as f64 / 100.0, evidence);
        }
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);

        // The first entry (probability 0.00, weather 0) is gone
        let first = history.iter().next().unwrap();
        assert_eq!(first.probability, 0.01);
        assert_eq!(first.evidence.weather, 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut history = RiskHistory::new();
        let mut evidence = Evidence::default();
        history.record(0.5, evidence);

        evidence.weather = 0;
        assert_eq!(history.latest().unwrap().evidence.weather, 2);
    }
}
