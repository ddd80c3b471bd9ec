use std::cmp::Ordering;

use patterns_core::model::Difficulty;

use crate::vm::question_vm::QuestionRowVm;

/// Sortable columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Difficulty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// The direction sorting flips to when the same column is clicked again.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Per-column filter predicates. Empty/`None` fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub difficulty: Option<Difficulty>,
    pub pattern: Option<String>,
    pub company: Option<String>,
}

impl TableQuery {
    #[must_use]
    pub fn matches(&self, row: &QuestionRowVm) -> bool {
        let query = self.search.trim().to_lowercase();
        if !row.matches_name(&query) {
            return false;
        }
        if let Some(difficulty) = self.difficulty
            && row.difficulty != difficulty
        {
            return false;
        }
        if let Some(pattern) = self.pattern.as_deref()
            && !row.has_pattern(pattern)
        {
            return false;
        }
        if let Some(company) = self.company.as_deref()
            && !row.has_company(company)
        {
            return false;
        }
        true
    }
}

/// Keeps only rows matching every active predicate, preserving order.
#[must_use]
pub fn apply_query(rows: &[QuestionRowVm], query: &TableQuery) -> Vec<QuestionRowVm> {
    rows.iter()
        .filter(|row| query.matches(row))
        .cloned()
        .collect()
}

/// Column sort. Ties fall back to id order so sorting is stable across
/// re-renders. Difficulty orders Easy < Medium < Hard.
pub fn sort_rows(rows: &mut [QuestionRowVm], key: SortKey, dir: SortDir) {
    rows.sort_by(|left, right| {
        let ordering = match key {
            SortKey::Name => left.name.to_lowercase().cmp(&right.name.to_lowercase()),
            SortKey::Difficulty => left.difficulty.rank().cmp(&right.difficulty.rank()),
        };
        let ordering = ordering.then_with(|| left.id.cmp(&right.id));
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

/// Direction to show in a column's sort indicator, `None` when another
/// column (or nothing) is sorted.
#[must_use]
pub fn active_dir(current: Option<(SortKey, SortDir)>, key: SortKey) -> Option<SortDir> {
    match current {
        Some((active, dir)) if active == key => Some(dir),
        _ => None,
    }
}
