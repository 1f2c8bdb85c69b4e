use crate::path_guard;
use crate::settings::Settings;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use wslaunch_core::{classify, WorkspaceItem};

/// Scan the configured roots for launchable workspace files.
///
/// Classification failures, security rejections and unreadable roots
/// are never fatal: the offending entry (or root) is skipped with a
/// logged warning so the rest of the list still displays.
pub fn discover(settings: &Settings) -> Vec<WorkspaceItem> {
    let mut items = Vec::new();
    let mut seen_roots: Vec<PathBuf> = Vec::new();

    for root in [settings.windows_root(), settings.wsl_root()]
        .into_iter()
        .flatten()
    {
        // Both roots may name the same directory through different
        // mounts; scan it once.
        let canon = root.canonicalize().unwrap_or_else(|_| root.clone());
        if seen_roots.contains(&canon) {
            debug!(root = %root.display(), "root already scanned, skipping");
            continue;
        }
        seen_roots.push(canon);

        scan_root(&root, &mut items);
    }

    items.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
            .then_with(|| a.file_name.cmp(&b.file_name))
    });

    items
}

fn scan_root(root: &Path, items: &mut Vec<WorkspaceItem>) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(root = %root.display(), error = %e, "workspace root unreadable, skipping");
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let name = entry.file_name();
        let Some(file_name) = name.to_str() else {
            warn!(root = %root.display(), "skipping non-UTF-8 filename");
            continue;
        };

        if !file_name.ends_with(wslaunch_core::WORKSPACE_EXTENSION) {
            continue;
        }

        let Some(classified) = classify(file_name) else {
            warn!(
                root = %root.display(),
                file = file_name,
                "workspace file has no unambiguous [Win]/[WSL] marker, excluded"
            );
            continue;
        };

        let path = match path_guard::resolve_under_root(root, file_name) {
            Ok(path) => path,
            Err(e) => {
                warn!(
                    root = %root.display(),
                    file = file_name,
                    error = %e,
                    "workspace file failed path validation, excluded"
                );
                continue;
            }
        };

        items.push(WorkspaceItem {
            display_name: classified.display_name,
            file_name: file_name.to_string(),
            path,
            environment: classified.environment,
        });
    }
}
