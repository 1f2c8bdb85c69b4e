use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Allow-list for workspace filenames: word characters, spaces,
/// brackets, hyphens and dots, ending in the workspace extension.
/// Notably excludes path separators and shell metacharacters.
static WORKSPACE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\[\]\-\.]+\.code-workspace$").unwrap());

pub fn is_valid_workspace_name(file_name: &str) -> bool {
    WORKSPACE_NAME.is_match(file_name)
}

/// Resolve `file_name` against `root` and prove the result stays under
/// the root. This is the security boundary in front of the launch
/// dispatcher, not merely a filter: traversal segments and symlink
/// escapes are both rejected.
pub fn resolve_under_root(root: &Path, file_name: &str) -> Result<PathBuf> {
    if !is_valid_workspace_name(file_name) {
        bail!("invalid workspace name: {}", file_name);
    }

    let relative = Path::new(file_name);
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => bail!("workspace name contains traversal segments: {}", file_name),
        }
    }

    let candidate = root.join(relative);

    let canonical_root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve workspace root {}", root.display()))?;
    let canonical = candidate
        .canonicalize()
        .with_context(|| format!("cannot resolve workspace file {}", candidate.display()))?;

    if !canonical.starts_with(&canonical_root) {
        bail!(
            "workspace path escapes its root: {} is not under {}",
            canonical.display(),
            canonical_root.display()
        );
    }

    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ==================== Filename Allow-List ====================

    #[test]
    fn plain_workspace_names_are_valid() {
        assert!(is_valid_workspace_name("Alpha [Win].code-workspace"));
        assert!(is_valid_workspace_name("my-proj_2 [WSL].code-workspace"));
    }

    #[test]
    fn separators_and_metacharacters_are_invalid() {
        assert!(!is_valid_workspace_name("a/b [Win].code-workspace"));
        assert!(!is_valid_workspace_name("a\\b [Win].code-workspace"));
        assert!(!is_valid_workspace_name("a;rm [Win].code-workspace"));
        assert!(!is_valid_workspace_name("a$(x) [Win].code-workspace"));
    }

    #[test]
    fn wrong_extension_is_invalid() {
        assert!(!is_valid_workspace_name("Alpha [Win].workspace"));
        assert!(!is_valid_workspace_name("Alpha [Win]"));
    }

    // ==================== Root Containment ====================

    fn root_with(name: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), "{}").unwrap();
        let root = dir.path().to_path_buf();
        (dir, root)
    }

    #[test]
    fn file_inside_root_resolves() {
        let (_dir, root) = root_with("Proj [Win].code-workspace");
        let path = resolve_under_root(&root, "Proj [Win].code-workspace").unwrap();
        assert!(path.starts_with(&root));
    }

    #[test]
    fn dotdot_segments_are_rejected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(dir.path().join("outside [Win].code-workspace"), "{}").unwrap();

        assert!(resolve_under_root(&root, "../outside [Win].code-workspace").is_err());
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(resolve_under_root(dir.path(), "ghost [Win].code-workspace").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_escape_is_rejected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        let outside = dir.path().join("secret [Win].code-workspace");
        fs::write(&outside, "{}").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("link [Win].code-workspace")).unwrap();

        assert!(resolve_under_root(&root, "link [Win].code-workspace").is_err());
    }
}
