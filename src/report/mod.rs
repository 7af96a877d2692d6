//! Human-readable progress and summary reporting
//!
//! The reporter owns the output stream for one build. It is strictly
//! observational: nothing it prints feeds back into selection or archiving.
//! Warnings are echoed as they happen and retained so the summary can state
//! how many occurred.

use std::io::{self, Write};
use std::path::Path;

/// Every selected file is echoed up to this many, then only milestones.
pub const PROGRESS_HEAD: usize = 10;

/// After the head, echo every Nth added file.
pub const PROGRESS_STRIDE: usize = 50;

/// Progress lines truncate member paths beyond this width.
const PROGRESS_PATH_WIDTH: usize = 70;

/// Streams progress, warnings, and the final summary for one build.
pub struct Reporter<W: Write> {
    out: W,
    added: usize,
    warnings: Vec<String>,
}

impl Reporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            added: 0,
            warnings: Vec::new(),
        }
    }

    /// Echo and retain a non-fatal warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        let _ = writeln!(self.out, "warning: {message}");
        self.warnings.push(message);
    }

    /// Note that a stale artifact at the output path was deleted.
    pub fn removed_stale(&mut self, artifact: &Path) {
        let _ = writeln!(self.out, "removed existing {}", artifact.display());
    }

    /// Record one file written into the archive, echoing the first
    /// [`PROGRESS_HEAD`] and every [`PROGRESS_STRIDE`]th thereafter.
    pub fn file_added(&mut self, member_path: &str) {
        self.added += 1;
        if self.added <= PROGRESS_HEAD || self.added % PROGRESS_STRIDE == 0 {
            let _ = writeln!(self.out, "added: {}", truncate(member_path));
        }
    }

    /// Number of warnings emitted so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// The retained warning lines, in emission order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Final summary: artifact location, file count, and archive size.
    pub fn summary(&mut self, artifact: &Path, files_added: usize, archive_bytes: u64) {
        let mib = archive_bytes as f64 / (1024.0 * 1024.0);
        let _ = writeln!(self.out, "\narchive created: {}", artifact.display());
        let _ = writeln!(self.out, "files added: {files_added}");
        let _ = writeln!(self.out, "archive size: {mib:.2} MiB ({archive_bytes} bytes)");
        if !self.warnings.is_empty() {
            let _ = writeln!(self.out, "warnings: {}", self.warnings.len());
        }
    }
}

fn truncate(member_path: &str) -> String {
    if member_path.chars().count() > PROGRESS_PATH_WIDTH {
        let head: String = member_path.chars().take(PROGRESS_PATH_WIDTH).collect();
        format!("{head}...")
    } else {
        member_path.to_string()
    }
}
