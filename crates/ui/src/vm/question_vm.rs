use patterns_core::model::{CompanyName, Difficulty, PatternTag, Question, QuestionId};

/// Placeholder shown in place of a hidden pattern tag.
pub const MASKED_PATTERN: &str = "***";

/// One renderable table row: the question joined with its completion flag
/// and the masking decision already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRowVm {
    pub id: QuestionId,
    pub name: String,
    pub url: String,
    pub difficulty: Difficulty,
    /// Raw tag names, used for filtering regardless of masking.
    pub patterns: Vec<String>,
    /// What the pattern cell actually shows.
    pub pattern_labels: Vec<String>,
    pub companies: Vec<String>,
    pub premium: bool,
    pub done: bool,
}

/// Maps one question into a row.
///
/// Masking law: the real tag text shows iff patterns are globally visible
/// or the row is already done; marking a question done lifts the mask for
/// that row regardless of the global toggle.
#[must_use]
pub fn map_question_row(question: &Question, done: bool, show_patterns: bool) -> QuestionRowVm {
    let patterns: Vec<String> = question
        .patterns()
        .iter()
        .map(|tag| tag.as_str().to_string())
        .collect();

    let pattern_labels = if show_patterns || done {
        patterns.clone()
    } else {
        patterns.iter().map(|_| MASKED_PATTERN.to_string()).collect()
    };

    QuestionRowVm {
        id: question.id(),
        name: question.name().to_string(),
        url: question.url().as_str().to_string(),
        difficulty: question.difficulty(),
        patterns,
        pattern_labels,
        companies: question
            .companies()
            .iter()
            .map(|company| company.as_str().to_string())
            .collect(),
        premium: question.premium(),
        done,
    }
}

/// Maps the whole dataset against a completion snapshot.
///
/// `checked` is indexed by question id; a missing index counts as not done
/// (lengths always match after reconciliation).
#[must_use]
pub fn map_question_rows<'a>(
    questions: impl Iterator<Item = &'a Question>,
    checked: &[bool],
    show_patterns: bool,
) -> Vec<QuestionRowVm> {
    questions
        .map(|question| {
            let done = checked.get(question.id().value()).copied().unwrap_or(false);
            map_question_row(question, done, show_patterns)
        })
        .collect()
}

impl QuestionRowVm {
    #[must_use]
    pub fn matches_name(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(query)
    }

    #[must_use]
    pub fn has_pattern(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|tag| tag == pattern)
    }

    #[must_use]
    pub fn has_company(&self, company: &str) -> bool {
        self.companies.iter().any(|name| name == company)
    }
}

/// Distinct pattern names across the rows, sorted for filter dropdowns.
#[must_use]
pub fn distinct_patterns(tags: impl Iterator<Item = PatternTag>) -> Vec<String> {
    let mut names: Vec<String> = tags.map(|tag| tag.as_str().to_string()).collect();
    names.sort();
    names.dedup();
    names
}

/// Distinct company names across the rows, sorted for filter dropdowns.
#[must_use]
pub fn distinct_companies(companies: impl Iterator<Item = CompanyName>) -> Vec<String> {
    let mut names: Vec<String> = companies
        .map(|company| company.as_str().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns_core::dataset::test_support::small_dataset;

    #[test]
    fn masking_law_visible_when_toggle_on() {
        let dataset = small_dataset();
        let rows = map_question_rows(dataset.iter(), &[false, false, false], true);
        assert!(rows.iter().all(|row| row.pattern_labels == row.patterns));
    }

    #[test]
    fn masking_law_masks_unfinished_rows_when_toggle_off() {
        let dataset = small_dataset();
        let rows = map_question_rows(dataset.iter(), &[true, false, false], false);

        // Done row keeps real text even with the global toggle off.
        assert_eq!(rows[0].pattern_labels, rows[0].patterns);
        // Unfinished rows are masked.
        assert_eq!(rows[1].pattern_labels, vec![MASKED_PATTERN.to_string()]);
        assert_eq!(rows[2].pattern_labels, vec![MASKED_PATTERN.to_string()]);
    }

    #[test]
    fn masking_preserves_raw_patterns_for_filtering() {
        let dataset = small_dataset();
        let rows = map_question_rows(dataset.iter(), &[false, false, false], false);
        assert!(rows[0].has_pattern("Arrays"));
        assert_eq!(rows[0].pattern_labels[0], MASKED_PATTERN);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let dataset = small_dataset();
        let rows = map_question_rows(dataset.iter(), &[false, false, false], true);
        assert!(rows[0].matches_name("contains"));
        assert!(!rows[0].matches_name("positive"));
        assert!(rows[0].matches_name(""));
    }
}
