//! Shared view components.

pub mod problem_card;
pub mod progress_bar;
pub mod spinner;
pub mod test_case_block;
