use thiserror::Error;

use crate::dataset::QuestionDataset;
use crate::model::{Difficulty, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("question id {id} is out of range (dataset has {len} questions)")]
    OutOfRange { id: usize, len: usize },
}

/// Per-question completion flags, index == question id.
///
/// Always the same length as the dataset it was reconciled against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    checked: Vec<bool>,
}

impl ProgressState {
    /// All-false state sized to the dataset.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            checked: vec![false; len],
        }
    }

    /// Reconciles a previously persisted flag sequence against the current
    /// dataset length.
    ///
    /// A missing sequence yields all-false. A length mismatch is the
    /// expected "dataset grew" case, not corruption: flags at overlapping
    /// indices are copied, new indices start false, and indices beyond the
    /// new length are dropped. The second tuple element reports whether the
    /// result differs in length from what was persisted, so callers know to
    /// re-persist immediately.
    #[must_use]
    pub fn reconcile(len: usize, persisted: Option<Vec<bool>>) -> (Self, bool) {
        match persisted {
            None => (Self::empty(len), false),
            Some(saved) if saved.len() == len => (Self { checked: saved }, false),
            Some(saved) => {
                let mut checked = vec![false; len];
                for (slot, value) in checked.iter_mut().zip(saved) {
                    *slot = value;
                }
                (Self { checked }, true)
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    #[must_use]
    pub fn is_done(&self, id: QuestionId) -> bool {
        self.checked.get(id.value()).copied().unwrap_or(false)
    }

    /// Flips the flag for one question and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` if the id does not index the
    /// dataset. Ids always come from the dataset in practice, so this is a
    /// guarded internal-consistency violation rather than a user error.
    pub fn toggle(&mut self, id: QuestionId) -> Result<bool, ProgressError> {
        let len = self.checked.len();
        let slot = self
            .checked
            .get_mut(id.value())
            .ok_or(ProgressError::OutOfRange {
                id: id.value(),
                len,
            })?;
        *slot = !*slot;
        Ok(*slot)
    }

    /// The raw flag sequence, in id order, for persistence and rendering.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.checked
    }
}

/// Completed-question counts per difficulty, derived from a `ProgressState`
/// and its dataset. Not independently persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyTally {
    easy: u32,
    medium: u32,
    hard: u32,
}

impl DifficultyTally {
    /// Full recomputation from dataset and state.
    ///
    /// Questions beyond the state's length count as not done; the two are
    /// always equal in length after reconciliation.
    #[must_use]
    pub fn compute(dataset: &QuestionDataset, state: &ProgressState) -> Self {
        let mut tally = Self::default();
        for question in dataset.iter() {
            if state.is_done(question.id()) {
                tally.bump(question.difficulty(), 1);
            }
        }
        tally
    }

    /// O(1) update after a toggle: the bucket for the toggled question's
    /// difficulty moves by ±1 depending on the new flag value.
    pub fn apply_toggle(&mut self, difficulty: Difficulty, now_done: bool) {
        self.bump(difficulty, if now_done { 1 } else { -1 });
    }

    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }

    fn bump(&mut self, difficulty: Difficulty, delta: i32) {
        let bucket = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };
        *bucket = bucket.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::small_dataset;

    #[test]
    fn reconcile_absent_yields_all_false() {
        let (state, resized) = ProgressState::reconcile(3, None);
        assert_eq!(state.flags(), &[false, false, false]);
        assert!(!resized);
    }

    #[test]
    fn reconcile_matching_length_keeps_flags() {
        let (state, resized) = ProgressState::reconcile(2, Some(vec![true, false]));
        assert_eq!(state.flags(), &[true, false]);
        assert!(!resized);
    }

    #[test]
    fn reconcile_grows_with_false_tail() {
        // Scenario from the persisted layout: stale shorter `checked`.
        let (state, resized) = ProgressState::reconcile(3, Some(vec![true, false]));
        assert_eq!(state.flags(), &[true, false, false]);
        assert!(resized);
    }

    #[test]
    fn reconcile_shrinks_by_dropping_tail() {
        let (state, resized) = ProgressState::reconcile(2, Some(vec![true, false, true, true]));
        assert_eq!(state.flags(), &[true, false]);
        assert!(resized);
    }

    #[test]
    fn toggle_is_self_inverse() {
        let dataset = small_dataset();
        let mut state = ProgressState::empty(dataset.len());
        let before = state.clone();
        let tally_before = DifficultyTally::compute(&dataset, &state);

        let id = QuestionId::new(1);
        assert!(state.toggle(id).unwrap());
        assert!(!state.toggle(id).unwrap());

        assert_eq!(state, before);
        assert_eq!(DifficultyTally::compute(&dataset, &state), tally_before);
    }

    #[test]
    fn toggle_out_of_range_is_guarded() {
        let mut state = ProgressState::empty(2);
        let err = state.toggle(QuestionId::new(2)).unwrap_err();
        assert_eq!(err, ProgressError::OutOfRange { id: 2, len: 2 });
    }

    #[test]
    fn incremental_tally_matches_recomputation() {
        let dataset = small_dataset();
        let mut state = ProgressState::empty(dataset.len());
        let mut tally = DifficultyTally::compute(&dataset, &state);

        // Arbitrary toggle sequence, including re-toggles.
        for raw in [0, 2, 1, 2, 0, 0, 2] {
            let id = QuestionId::new(raw);
            let now_done = state.toggle(id).unwrap();
            let difficulty = dataset.get(id).unwrap().difficulty();
            tally.apply_toggle(difficulty, now_done);
            assert_eq!(tally, DifficultyTally::compute(&dataset, &state));
        }
    }

    #[test]
    fn tally_scenario_from_stale_state() {
        // Dataset of 3 (Easy, Easy, Hard); persisted [true, false].
        let dataset = small_dataset();
        let (state, _) = ProgressState::reconcile(dataset.len(), Some(vec![true, false]));
        let tally = DifficultyTally::compute(&dataset, &state);
        assert_eq!(tally.get(Difficulty::Easy), 1);
        assert_eq!(tally.get(Difficulty::Medium), 0);
        assert_eq!(tally.get(Difficulty::Hard), 0);
    }

    #[test]
    fn tally_scenario_after_toggle() {
        let dataset = small_dataset();
        let (mut state, _) = ProgressState::reconcile(dataset.len(), Some(vec![true, false]));
        let mut tally = DifficultyTally::compute(&dataset, &state);

        let id = QuestionId::new(2);
        let now_done = state.toggle(id).unwrap();
        tally.apply_toggle(dataset.get(id).unwrap().difficulty(), now_done);

        assert_eq!(state.flags(), &[true, false, true]);
        assert_eq!(tally.get(Difficulty::Easy), 1);
        assert_eq!(tally.get(Difficulty::Medium), 0);
        assert_eq!(tally.get(Difficulty::Hard), 1);
    }
}
