//! Command-line workflow, separated from argument parsing.

pub mod orchestration;
