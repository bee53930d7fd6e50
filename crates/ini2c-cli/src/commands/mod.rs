pub mod completions;
pub mod generate;
pub mod man;
