#![forbid(unsafe_code)]

pub mod dataset;
pub mod model;
pub mod progress;
pub mod time;

pub use dataset::{DatasetError, QuestionDataset};
pub use progress::{DifficultyTally, ProgressError, ProgressState};
pub use time::Clock;
