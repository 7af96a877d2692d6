//! File selection: path normalization, exclusion rules, manifest traversal

pub mod filter;
pub mod path;
pub mod walker;

pub use filter::{ExclusionRules, RESERVED_LICENSE, RESERVED_README};
pub use walker::{select_files, SelectedFile};
