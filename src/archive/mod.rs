//! Archive artifact writing

pub mod writer;

pub use writer::write_archive;
