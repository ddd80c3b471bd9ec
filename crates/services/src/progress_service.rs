use std::sync::{Arc, Mutex};

use patterns_core::dataset::QuestionDataset;
use patterns_core::model::QuestionId;
use patterns_core::progress::{DifficultyTally, ProgressState};
use storage::repository::ProgressRepository;

use crate::error::ProgressServiceError;

/// Point-in-time copy of the completion state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub checked: Vec<bool>,
    pub tally: DifficultyTally,
}

/// Result of a single toggle, for incremental UI updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub id: QuestionId,
    pub done: bool,
    pub tally: DifficultyTally,
}

struct Inner {
    state: ProgressState,
    tally: DifficultyTally,
}

/// Owns the completion state: reconciles it against the dataset on load,
/// keeps the difficulty tally in step, and persists the full flag sequence
/// after every mutation. Views only read snapshots and request toggles.
pub struct ProgressService {
    dataset: Arc<QuestionDataset>,
    repo: Arc<dyn ProgressRepository>,
    inner: Mutex<Inner>,
}

impl ProgressService {
    /// Loads persisted flags and reconciles them against the dataset.
    ///
    /// Absent or malformed storage yields all-false flags. A length
    /// mismatch is the expected "dataset grew" case: overlapping flags are
    /// kept and the resized sequence is persisted immediately.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` only for read/write
    /// failures, never for missing or malformed data.
    pub async fn load(
        dataset: Arc<QuestionDataset>,
        repo: Arc<dyn ProgressRepository>,
    ) -> Result<Self, ProgressServiceError> {
        let persisted = repo.load_checked().await?;
        let (state, resized) = ProgressState::reconcile(dataset.len(), persisted);
        if resized {
            repo.save_checked(state.flags()).await?;
        }

        let tally = DifficultyTally::compute(&dataset, &state);
        Ok(Self {
            dataset,
            repo,
            inner: Mutex::new(Inner { state, tally }),
        })
    }

    /// Copies the current flags and tally for rendering.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Poisoned` if the state lock is
    /// poisoned.
    pub fn snapshot(&self) -> Result<ProgressSnapshot, ProgressServiceError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| ProgressServiceError::Poisoned)?;
        Ok(ProgressSnapshot {
            checked: inner.state.flags().to_vec(),
            tally: inner.tally,
        })
    }

    /// Flips one question's flag, updates the tally bucket for its
    /// difficulty, and persists the full sequence before returning.
    ///
    /// The await point is after the in-memory flip, so within the single UI
    /// event loop writes reach storage in toggle order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Progress` for an out-of-range id
    /// (an internal-consistency violation, since ids come from the
    /// dataset), or `ProgressServiceError::Storage` if persistence fails.
    pub async fn toggle(&self, id: QuestionId) -> Result<ToggleOutcome, ProgressServiceError> {
        let (flags, outcome) = {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ProgressServiceError::Poisoned)?;
            let done = inner.state.toggle(id)?;
            if let Some(question) = self.dataset.get(id) {
                inner.tally.apply_toggle(question.difficulty(), done);
            }
            (
                inner.state.flags().to_vec(),
                ToggleOutcome {
                    id,
                    done,
                    tally: inner.tally,
                },
            )
        };

        self.repo.save_checked(&flags).await?;
        Ok(outcome)
    }
}
