//! Exclusion rule evaluation

use std::collections::BTreeSet;

/// Root-level file name that is always included, regardless of rules.
pub const RESERVED_LICENSE: &str = "license";

/// Root-level readme name that is always included, regardless of rules.
pub const RESERVED_README: &str = "readme.txt";

/// The configured exclusion rule set: literal substrings and file extensions.
///
/// Substrings are matched unanchored against the lowercased member path, so
/// a rule like `"docs"` also matches `docs-readme.md`. For matching, the
/// path is wrapped in `/` on both ends; a slash-anchored rule such as
/// `"/dist/"` therefore matches the `dist` directory at any depth, including
/// the project root, without matching `dist-extra`. Extensions are matched
/// case-insensitively against the final extension of the last path segment,
/// leading dot included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    substrings: Vec<String>,
    extensions: BTreeSet<String>,
}

impl ExclusionRules {
    /// Build a rule set. Substrings are lowercased; extensions are lowercased
    /// and given a leading dot when missing.
    pub fn new<S, E>(substrings: S, extensions: E) -> Self
    where
        S: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        let mut rules = Self::default();
        rules.extend(substrings, extensions);
        rules
    }

    /// The baseline rule set applied unless the caller opts out: OS and VCS
    /// junk plus prior archive artifacts.
    pub fn conventional() -> Self {
        Self::new(
            [".ds_store", ".git", ".gitkeep", "node_modules"]
                .into_iter()
                .map(String::from),
            [".zip".to_string()],
        )
    }

    /// Add further rules to this set.
    pub fn extend<S, E>(&mut self, substrings: S, extensions: E)
    where
        S: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        for s in substrings {
            let s = s.to_lowercase();
            if !s.is_empty() && !self.substrings.contains(&s) {
                self.substrings.push(s);
            }
        }
        for e in extensions {
            let e = e.to_lowercase();
            if e.is_empty() {
                continue;
            }
            let e = if e.starts_with('.') { e } else { format!(".{e}") };
            self.extensions.insert(e);
        }
    }

    /// Decide whether a normalized member path is excluded.
    ///
    /// Evaluation order, first match wins:
    /// 1. Reserved root-level license/readme names are never excluded.
    /// 2. Any configured substring in the lowercased path excludes it.
    /// 3. A final extension in the configured set excludes it.
    /// 4. Otherwise included.
    ///
    /// Applied identically to candidate files, directories considered for
    /// pruning, and files discovered during traversal.
    pub fn is_excluded(&self, member_path: &str) -> bool {
        let lower = member_path.to_lowercase();

        // Root-level override: the reserved names contain no separator.
        if lower == RESERVED_LICENSE || lower == RESERVED_README {
            return false;
        }

        // Slash-wrapped so directory-anchored rules can match segments at
        // either end of the path.
        let wrapped = format!("/{lower}/");
        if self.substrings.iter().any(|s| wrapped.contains(s.as_str())) {
            return true;
        }

        if let Some(ext) = final_extension(&lower) {
            if self.extensions.contains(ext) {
                return true;
            }
        }

        false
    }
}

/// The final extension of the last path segment, leading dot included.
///
/// A leading dot does not start an extension, so dotfiles like `.gitignore`
/// have none and can only be excluded by substring rules.
fn final_extension(member_path: &str) -> Option<&str> {
    let segment = member_path.rsplit('/').next().unwrap_or(member_path);
    match segment.rfind('.') {
        Some(idx) if idx > 0 => Some(&segment[idx..]),
        _ => None,
    }
}
