mod ids;
mod question;
mod tag;

pub use ids::{ParseIdError, QuestionId};
pub use question::{Difficulty, ParseDifficultyError, Question, QuestionDraft, QuestionError};
pub use tag::{CompanyName, PatternTag, TagError};
