//! Build error taxonomy
//!
//! Two fatal classes: configuration errors abort before any write and map to
//! the refusal exit code; write failures abort mid-build, may leave a partial
//! artifact behind, and map to the failure exit code. Everything non-fatal
//! (missing manifest entries, unreadable subtrees, duplicate selections) is a
//! warning routed through the reporter, never an error.

use std::path::{Path, PathBuf};

use crate::cli::ExitCode;

/// Fatal errors raised by the build pipeline.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Bad configuration: manifest entry escapes the root, missing output
    /// directory, unreadable plan file. Nothing has been written yet.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The archive could not be produced: a selected file vanished or became
    /// unreadable, or the sink itself failed. A partial artifact may remain
    /// at the output path; rerunning the build is the recovery path.
    #[error("write failure on {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl BuildError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn write(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config { .. } => ExitCode::Refusal,
            Self::Write { .. } => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_refusal() {
        let err = BuildError::config("entry escapes root");
        assert_eq!(err.exit_code(), ExitCode::Refusal);
        assert!(err.to_string().contains("entry escapes root"));
    }

    #[test]
    fn write_errors_map_to_failure_and_name_the_path() {
        let err = BuildError::write("src/gone.txt", "No such file or directory");
        assert_eq!(err.exit_code(), ExitCode::Failure);
        let text = err.to_string();
        assert!(text.contains("src/gone.txt"));
        assert!(text.contains("No such file"));
    }
}
