//! Manifest traversal and file selection

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::report::Reporter;
use crate::select::filter::ExclusionRules;
use crate::select::path::{join_member, normalize_entry};

/// A file confirmed for inclusion after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Normalized root-relative member path, used as the archive entry name.
    pub member_path: String,
    /// Absolute (or root-joined) source location on disk.
    pub source: PathBuf,
}

/// Walk the manifest and produce the ordered selection.
///
/// Entries are visited in manifest order; within a directory entry files are
/// visited in file-name order, so one run's output is stable. Each selected
/// member path appears exactly once.
///
/// - A manifest entry that escapes the project root is fatal (configuration
///   error), surfaced before anything is written.
/// - A manifest entry missing on disk warns and contributes nothing.
/// - An excluded directory is pruned whole: its contents are never visited,
///   even files that would individually pass the filter.
/// - An unreadable subtree warns and contributes nothing beyond what was
///   already read.
pub fn select_files<W: Write>(
    root: &Path,
    manifest: &[String],
    rules: &ExclusionRules,
    reporter: &mut Reporter<W>,
) -> Result<Vec<SelectedFile>, BuildError> {
    let mut walker = Walker {
        rules,
        reporter,
        seen: BTreeSet::new(),
        selected: Vec::new(),
    };

    for entry in manifest {
        let member = normalize_entry(root, Path::new(entry))
            .map_err(|e| BuildError::config(format!("manifest entry {entry:?}: {e}")))?;
        let source = root.join(&member);

        let meta = match fs::symlink_metadata(&source) {
            Ok(meta) => meta,
            Err(_) => {
                walker.reporter.warn(format!("{entry} not found, skipping"));
                continue;
            }
        };

        if meta.is_file() {
            if !rules.is_excluded(&member) {
                walker.push(member, source);
            }
        } else if meta.is_dir() {
            // The entry itself is subject to the same predicate as any
            // discovered subdirectory.
            if !rules.is_excluded(&member) {
                walker.descend(&source, &member);
            }
        } else {
            walker
                .reporter
                .warn(format!("{entry} is not a regular file or directory, skipping"));
        }
    }

    Ok(walker.selected)
}

struct Walker<'a, W: Write> {
    rules: &'a ExclusionRules,
    reporter: &'a mut Reporter<W>,
    seen: BTreeSet<String>,
    selected: Vec<SelectedFile>,
}

impl<W: Write> Walker<'_, W> {
    /// Record a selected file, keeping member paths unique across the run.
    fn push(&mut self, member_path: String, source: PathBuf) {
        if self.seen.insert(member_path.clone()) {
            self.selected.push(SelectedFile {
                member_path,
                source,
            });
        } else {
            self.reporter
                .warn(format!("{member_path} already selected, skipping duplicate"));
        }
    }

    /// Recursively visit one directory, pruning excluded subdirectories
    /// before descending into them.
    fn descend(&mut self, dir: &Path, dir_member: &str) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.reporter
                    .warn(format!("cannot read {}: {e}, skipping subtree", dir.display()));
                return;
            }
        };

        let mut entries: Vec<fs::DirEntry> = match entries.collect() {
            Ok(entries) => entries,
            Err(e) => {
                self.reporter
                    .warn(format!("cannot read {}: {e}, skipping subtree", dir.display()));
                return;
            }
        };
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                self.reporter.warn(format!(
                    "{}: file name is not valid UTF-8, skipping",
                    entry.path().display()
                ));
                continue;
            };
            let child_member = join_member(dir_member, name);

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    self.reporter
                        .warn(format!("cannot stat {}: {e}, skipping", entry.path().display()));
                    continue;
                }
            };

            if file_type.is_dir() {
                if !self.rules.is_excluded(&child_member) {
                    self.descend(&entry.path(), &child_member);
                }
            } else if file_type.is_file() {
                if !self.rules.is_excluded(&child_member) {
                    self.push(child_member, entry.path());
                }
            } else {
                self.reporter.warn(format!(
                    "{}: not a regular file, skipping",
                    entry.path().display()
                ));
            }
        }
    }
}
