//! Build command orchestration

pub mod command;

pub use command::{execute_build, BuildSummary};
