use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("tag must not be empty")]
    Empty,
}

/// A tag naming the solution technique a question exercises
/// (e.g. "Sliding Window", "Two Pointers").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatternTag(String);

impl PatternTag {
    /// Creates a tag from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TagError::Empty` if the trimmed text is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, TagError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(Self(trimmed))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a comma-separated tag list, skipping empty segments.
    ///
    /// # Errors
    ///
    /// Returns `TagError::Empty` if no non-empty segment remains.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, TagError> {
        let tags: Vec<Self> = raw
            .split(',')
            .filter(|segment| !segment.trim().is_empty())
            .map(Self::new)
            .collect::<Result<_, _>>()?;
        if tags.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(tags)
    }
}

impl TryFrom<String> for PatternTag {
    type Error = TagError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PatternTag> for String {
    fn from(tag: PatternTag) -> Self {
        tag.0
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A company tag attached to a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Creates a company name from raw text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TagError::Empty` if the trimmed text is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, TagError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(Self(trimmed))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyName {
    type Error = TagError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<CompanyName> for String {
    fn from(name: CompanyName) -> Self {
        name.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_tag_trims_whitespace() {
        let tag = PatternTag::new("  Sliding Window ").unwrap();
        assert_eq!(tag.as_str(), "Sliding Window");
    }

    #[test]
    fn pattern_tag_rejects_empty() {
        assert_eq!(PatternTag::new("   "), Err(TagError::Empty));
    }

    #[test]
    fn parse_list_splits_on_commas() {
        let tags = PatternTag::parse_list("Arrays, Two Pointers,Sliding Window").unwrap();
        let names: Vec<&str> = tags.iter().map(PatternTag::as_str).collect();
        assert_eq!(names, vec!["Arrays", "Two Pointers", "Sliding Window"]);
    }

    #[test]
    fn parse_list_skips_empty_segments() {
        let tags = PatternTag::parse_list("Arrays,, DFS").unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn parse_list_rejects_all_empty() {
        assert_eq!(PatternTag::parse_list(" , ,"), Err(TagError::Empty));
    }

    #[test]
    fn company_name_rejects_empty() {
        assert_eq!(CompanyName::new(""), Err(TagError::Empty));
    }
}
