use thiserror::Error;

use crate::model::{Question, QuestionDraft, QuestionError, QuestionId};

/// The question list bundled with the application.
const BUNDLED_QUESTIONS: &str = include_str!("../data/questions.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Question(#[from] QuestionError),

    /// Reconciliation and tally math index state by id, so ids must form a
    /// dense `0..N-1` range in order.
    #[error("question at position {position} has id {found}, expected {position}")]
    NonDenseIds { position: usize, found: usize },
}

/// Ordered, read-only question collection with dense ids.
///
/// The dataset may grow between versions (new ids appended) but existing
/// ids never move, which is what makes persisted completion flags portable
/// across versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDataset {
    questions: Vec<Question>,
}

impl QuestionDataset {
    /// Validates drafts into a dataset, rejecting sparse or out-of-order ids.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Question` if any draft fails validation, or
    /// `DatasetError::NonDenseIds` if ids do not form `0..N-1` in order.
    pub fn new(drafts: Vec<QuestionDraft>) -> Result<Self, DatasetError> {
        let mut questions = Vec::with_capacity(drafts.len());
        for (position, draft) in drafts.into_iter().enumerate() {
            if draft.id != position {
                return Err(DatasetError::NonDenseIds {
                    position,
                    found: draft.id,
                });
            }
            questions.push(draft.validate()?);
        }
        Ok(Self { questions })
    }

    /// Parses a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` for malformed JSON, invalid records, or
    /// non-dense ids.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        Self::new(drafts)
    }

    /// The dataset shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the embedded file is invalid; integration
    /// is covered by tests so this only fires on a broken build.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_QUESTIONS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.value())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use super::QuestionDataset;
    use crate::model::{Difficulty, QuestionDraft};

    fn draft(id: usize, name: &str, difficulty: Difficulty, premium: bool) -> QuestionDraft {
        QuestionDraft {
            id,
            name: name.to_string(),
            url: format!("https://leetcode.com/problems/{id}/"),
            difficulty,
            pattern: "Arrays".to_string(),
            companies: vec!["Google".to_string()],
            premium,
        }
    }

    /// Three questions (Easy, Easy, Hard) with dense ids, matching the
    /// reconciliation and tally scenarios used across the crates. The hard
    /// question is premium so lock rendering is exercised too.
    #[must_use]
    pub fn small_dataset() -> QuestionDataset {
        QuestionDataset::new(vec![
            draft(0, "Contains Duplicate", Difficulty::Easy, false),
            draft(1, "Missing Number", Difficulty::Easy, false),
            draft(2, "First Missing Positive", Difficulty::Hard, true),
        ])
        .expect("test dataset is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, QuestionDraft};

    fn draft(id: usize) -> QuestionDraft {
        QuestionDraft {
            id,
            name: format!("Question {id}"),
            url: "https://leetcode.com/problems/two-sum/".to_string(),
            difficulty: Difficulty::Easy,
            pattern: "Arrays".to_string(),
            companies: vec![],
            premium: false,
        }
    }

    #[test]
    fn dense_ids_accepted() {
        let dataset = QuestionDataset::new(vec![draft(0), draft(1), draft(2)]).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.get(QuestionId::new(1)).unwrap().name(),
            "Question 1"
        );
    }

    #[test]
    fn gap_in_ids_rejected() {
        let err = QuestionDataset::new(vec![draft(0), draft(2)]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::NonDenseIds {
                position: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn out_of_order_ids_rejected() {
        let err = QuestionDataset::new(vec![draft(1), draft(0)]).unwrap_err();
        assert!(matches!(err, DatasetError::NonDenseIds { position: 0, .. }));
    }

    #[test]
    fn from_json_parses_records() {
        let raw = r#"[
            {
                "id": 0,
                "name": "Two Sum",
                "url": "https://leetcode.com/problems/two-sum/",
                "difficulty": "Easy",
                "pattern": "Arrays, Hash Table",
                "companies": ["Google", "Amazon"],
                "premium": false
            }
        ]"#;
        let dataset = QuestionDataset::from_json(raw).unwrap();
        assert_eq!(dataset.len(), 1);
        let question = dataset.get(QuestionId::new(0)).unwrap();
        assert_eq!(question.patterns().len(), 2);
        assert_eq!(question.companies().len(), 2);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            QuestionDataset::from_json("not json").unwrap_err(),
            DatasetError::Json(_)
        ));
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let dataset = QuestionDataset::bundled().unwrap();
        assert!(!dataset.is_empty());
        // Every bundled question must be reachable by its id.
        for (index, question) in dataset.iter().enumerate() {
            assert_eq!(question.id().value(), index);
        }
    }
}
