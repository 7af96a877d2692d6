//! Build configuration: pack plan file plus CLI overrides

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::BuildArgs;
use crate::error::BuildError;
use crate::select::ExclusionRules;

/// The serialized pack plan, a JSON file naming what to include and what to
/// rule out.
///
/// ```json
/// {
///   "include": ["main.txt", "src"],
///   "exclude": ["node_modules", "/dist/"],
///   "exclude_extensions": [".py", ".zip"],
///   "output": "release.zip"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackPlan {
    /// Top-level files and directories eligible for packaging.
    #[serde(default)]
    pub include: Vec<String>,

    /// Exclusion substrings, matched per the filter rules.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Excluded file extensions, leading dot optional.
    #[serde(default)]
    pub exclude_extensions: Vec<String>,

    /// Artifact path, overridable from the command line.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl PackPlan {
    /// Load a plan from a JSON file. Unreadable or malformed plans are
    /// configuration errors.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path).map_err(|e| {
            BuildError::config(format!("cannot read plan {}: {e}", path.display()))
        })?;
        serde_json::from_str(&text)
            .map_err(|e| BuildError::config(format!("malformed plan {}: {e}", path.display())))
    }
}

/// The fully resolved configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root every manifest entry is resolved against.
    pub root: PathBuf,

    /// Output artifact path.
    pub output: PathBuf,

    /// Ordered manifest of top-level entries to consider.
    pub manifest: Vec<String>,

    /// The exclusion rule set, fixed for the run.
    pub rules: ExclusionRules,
}

impl BuildConfig {
    /// Resolve CLI arguments (and the plan file they may point at) into a
    /// runnable configuration.
    ///
    /// Positional entries replace the plan's `include`; `--exclude` and
    /// `--exclude-ext` append to the plan's lists; `--output` wins over the
    /// plan's. Unless opted out, the conventional junk rules are merged in.
    pub fn resolve(args: &BuildArgs) -> Result<Self, BuildError> {
        if !args.root.is_dir() {
            return Err(BuildError::config(format!(
                "project root {} is not a directory",
                args.root.display()
            )));
        }

        let plan = match &args.plan {
            Some(path) => PackPlan::load(path)?,
            None => PackPlan::default(),
        };

        let manifest = if args.entries.is_empty() {
            plan.include
        } else {
            args.entries.clone()
        };
        if manifest.is_empty() {
            return Err(BuildError::config(
                "nothing to package: give entries on the command line or an include list in the plan",
            ));
        }

        let mut rules = if args.no_default_excludes {
            ExclusionRules::default()
        } else {
            ExclusionRules::conventional()
        };
        rules.extend(plan.exclude, plan.exclude_extensions);
        rules.extend(args.exclude.clone(), args.exclude_ext.clone());

        let output = args
            .output
            .clone()
            .or(plan.output)
            .unwrap_or_else(|| default_output(&args.root));

        // Fatal before any write: the artifact's directory must already exist.
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(BuildError::config(format!(
                    "output directory {} does not exist",
                    parent.display()
                )));
            }
        }

        Ok(Self {
            root: args.root.clone(),
            output,
            manifest,
            rules,
        })
    }
}

/// Default artifact name: the root directory's basename with a `.zip` suffix,
/// written to the working directory.
fn default_output(root: &Path) -> PathBuf {
    let basename = fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "dist".to_string());
    PathBuf::from(format!("{basename}.zip"))
}
