//! Path normalization for archive member paths

use std::path::{Component, Path};

/// Normalize a manifest entry to a root-relative, POSIX-style member path.
///
/// Accepts either a path relative to `root` or an absolute path that lies
/// under `root`. The result uses `/` separators, has no leading `/`, and
/// contains no `.` or `..` segments. Purely lexical; the filesystem is not
/// consulted.
///
/// Fails when the path escapes the project root, which is a configuration
/// error for the entry that named it.
pub fn normalize_entry(root: &Path, input: &Path) -> anyhow::Result<String> {
    let relative = if input.is_absolute() {
        input.strip_prefix(root).map_err(|_| {
            anyhow::anyhow!(
                "path {} is outside the project root {}",
                input.display(),
                root.display()
            )
        })?
    } else {
        input
    };

    normalize_components(relative)
}

/// Extend a normalized member path with one child name.
pub fn join_member(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// Normalize path components to relative POSIX style.
fn normalize_components(path: &Path) -> anyhow::Result<String> {
    let mut segments: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(name) => {
                let name = name
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("path contains invalid UTF-8"))?;
                segments.push(name.to_string());
            }
            Component::CurDir => continue,
            Component::ParentDir => {
                if segments.pop().is_none() {
                    anyhow::bail!("path escapes above the project root");
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!("absolute path does not lie under the project root");
            }
        }
    }

    if segments.is_empty() {
        anyhow::bail!("path resolves to the project root itself");
    }

    Ok(segments.join("/"))
}
