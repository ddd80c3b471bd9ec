mod question_vm;
mod table_vm;

pub use question_vm::{
    MASKED_PATTERN, QuestionRowVm, distinct_companies, distinct_patterns, map_question_row,
    map_question_rows,
};
pub use table_vm::{SortDir, SortKey, TableQuery, active_dir, apply_query, sort_rows};
