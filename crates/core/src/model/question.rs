use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::model::{
    ids::QuestionId,
    tag::{CompanyName, PatternTag, TagError},
};

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Ordering rank for column sort: Easy < Medium < Hard.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError {
    raw: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {}", self.raw)
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError {
                raw: other.to_string(),
            }),
        }
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question record as it appears in the dataset file, before validation.
///
/// `pattern` is a comma-separated tag list ("Arrays, Two Pointers"), the
/// shape the dataset has always been authored in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub id: usize,
    pub name: String,
    pub url: String,
    pub difficulty: Difficulty,
    pub pattern: String,
    pub companies: Vec<String>,
    #[serde(default)]
    pub premium: bool,
}

impl QuestionDraft {
    /// Validates the draft into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the name is blank, the URL does not
    /// parse, or any tag is empty.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(QuestionError::EmptyName { id: self.id });
        }

        let url = Url::parse(&self.url).map_err(|source| QuestionError::InvalidUrl {
            id: self.id,
            source,
        })?;

        let patterns = PatternTag::parse_list(&self.pattern)
            .map_err(|_| QuestionError::MissingPatterns { id: self.id })?;

        let companies = self
            .companies
            .into_iter()
            .map(CompanyName::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| QuestionError::InvalidTag {
                id: self.id,
                source,
            })?;

        Ok(Question {
            id: QuestionId::new(self.id),
            name,
            url,
            difficulty: self.difficulty,
            patterns,
            companies,
            premium: self.premium,
        })
    }
}

/// One row of the question dataset. Read-only within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    name: String,
    url: Url,
    difficulty: Difficulty,
    patterns: Vec<PatternTag>,
    companies: Vec<CompanyName>,
    premium: bool,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn patterns(&self) -> &[PatternTag] {
        &self.patterns
    }

    #[must_use]
    pub fn companies(&self) -> &[CompanyName] {
        &self.companies
    }

    #[must_use]
    pub fn premium(&self) -> bool {
        self.premium
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has an empty name")]
    EmptyName { id: usize },

    #[error("question {id} has an invalid url: {source}")]
    InvalidUrl {
        id: usize,
        #[source]
        source: url::ParseError,
    },

    #[error("question {id} has no pattern tags")]
    MissingPatterns { id: usize },

    #[error("question {id} has an invalid tag: {source}")]
    InvalidTag {
        id: usize,
        #[source]
        source: TagError,
    },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
