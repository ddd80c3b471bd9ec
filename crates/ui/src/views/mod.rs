mod questions;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use questions::QuestionsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
