//! Per-draft outcome aggregation for the batch save flow.
//!
//! Saving a draft is a two-step sequence (upload the rendered image, then
//! submit the record), so a draft can end up in a half-saved state. The
//! report keeps the three outcomes distinct; one draft's failure never
//! aborts the batch, and there is no retry -- failures are terminal per
//! attempt.

use serde::Serialize;

use super::draft::DraftId;

/// Outcome of saving one draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Image uploaded and record persisted.
    Saved { image_url: String },
    /// Image uploaded but the record submission failed.
    PartialFailure { image_url: String, error: String },
    /// Nothing persisted.
    Failed { error: String },
}

/// Outcome of one draft within a batch save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSaveResult {
    pub draft_id: DraftId,
    #[serde(flatten)]
    pub outcome: SaveOutcome,
}

/// Aggregated outcomes of a batch save, in submission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SaveReport {
    results: Vec<DraftSaveResult>,
}

impl SaveReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one draft.
    pub fn record(&mut self, draft_id: DraftId, outcome: SaveOutcome) {
        self.results.push(DraftSaveResult { draft_id, outcome });
    }

    pub fn results(&self) -> &[DraftSaveResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn saved_count(&self) -> usize {
        self.count(|o| matches!(o, SaveOutcome::Saved { .. }))
    }

    pub fn partial_failure_count(&self) -> usize {
        self.count(|o| matches!(o, SaveOutcome::PartialFailure { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, SaveOutcome::Failed { .. }))
    }

    /// `true` when every draft in the batch was fully saved.
    pub fn is_complete_success(&self) -> bool {
        self.saved_count() == self.total()
    }

    fn count(&self, pred: impl Fn(&SaveOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}
