//! End-to-end build flow: walk, filter, archive, summarize

use std::io::Write;
use std::path::PathBuf;

use crate::archive::write_archive;
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::report::Reporter;
use crate::select::select_files;

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Where the artifact was written.
    pub artifact: PathBuf,
    /// Number of entries written into it.
    pub files_added: usize,
    /// Final archive size in bytes.
    pub archive_bytes: u64,
}

/// Execute one full packaging run.
///
/// Steps:
/// 1. Walk the manifest and select files per the exclusion rules
/// 2. Seal the selection into a fresh zip artifact
/// 3. Return the summary for the reporter
///
/// Warnings stream through the reporter as they occur and never stop the
/// pipeline; configuration errors abort before the artifact is touched.
pub fn execute_build<W: Write>(
    config: &BuildConfig,
    reporter: &mut Reporter<W>,
) -> Result<BuildSummary, BuildError> {
    let selected = select_files(&config.root, &config.manifest, &config.rules, reporter)?;

    let archive_bytes = write_archive(&config.output, &selected, reporter)?;

    Ok(BuildSummary {
        artifact: config.output.clone(),
        files_added: selected.len(),
        archive_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::ExclusionRules;
    use std::fs::{self, File};
    use std::path::Path;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn config(root: &Path, output: &Path, entries: &[&str], rules: ExclusionRules) -> BuildConfig {
        BuildConfig {
            root: root.to_path_buf(),
            output: output.to_path_buf(),
            manifest: entries.iter().map(|s| s.to_string()).collect(),
            rules,
        }
    }

    fn entry_names(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(String::from).collect();
        names.sort();
        names
    }

    #[test]
    fn builds_archive_from_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("main.txt"), "m").unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/a.py"), "a").unwrap();
        fs::write(tmp.path().join("src/keep.txt"), "k").unwrap();

        let output = tmp.path().join("out.zip");
        let cfg = config(
            tmp.path(),
            &output,
            &["main.txt", "src"],
            ExclusionRules::new([], [".py".to_string()]),
        );

        let mut reporter = Reporter::new(Vec::new());
        let summary = execute_build(&cfg, &mut reporter).unwrap();

        assert_eq!(summary.files_added, 2);
        assert_eq!(summary.artifact, output);
        assert!(summary.archive_bytes > 0);
        assert_eq!(entry_names(&output), vec!["main.txt", "src/keep.txt"]);
    }

    #[test]
    fn missing_entries_warn_but_build_succeeds() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real.txt"), "r").unwrap();

        let output = tmp.path().join("out.zip");
        let cfg = config(
            tmp.path(),
            &output,
            &["ghost", "real.txt"],
            ExclusionRules::default(),
        );

        let mut reporter = Reporter::new(Vec::new());
        let summary = execute_build(&cfg, &mut reporter).unwrap();
        assert_eq!(summary.files_added, 1);
        assert_eq!(reporter.warning_count(), 1);
    }

    #[test]
    fn rerun_selects_identical_entry_sets() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/a.txt"), "a").unwrap();
        fs::write(tmp.path().join("src/b.txt"), "b").unwrap();
        fs::write(tmp.path().join("main.txt"), "m").unwrap();

        let output = tmp.path().join("out.zip");
        let cfg = config(
            tmp.path(),
            &output,
            &["main.txt", "src"],
            ExclusionRules::default(),
        );

        let mut reporter = Reporter::new(Vec::new());
        let first = execute_build(&cfg, &mut reporter).unwrap();
        let first_names = entry_names(&output);

        let mut reporter = Reporter::new(Vec::new());
        let second = execute_build(&cfg, &mut reporter).unwrap();
        let second_names = entry_names(&output);

        assert_eq!(first.files_added, second.files_added);
        assert_eq!(first_names, second_names);
    }

    #[test]
    fn escaping_entry_aborts_before_touching_artifact() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out.zip");
        fs::write(&output, "pre-existing").unwrap();

        let cfg = config(
            tmp.path(),
            &output,
            &["../escape"],
            ExclusionRules::default(),
        );

        let mut reporter = Reporter::new(Vec::new());
        let err = execute_build(&cfg, &mut reporter).unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));
        // The stale artifact is untouched: selection failed before any write.
        assert_eq!(fs::read_to_string(&output).unwrap(), "pre-existing");
    }
}
