use crate::types::Environment;

pub const WORKSPACE_EXTENSION: &str = ".code-workspace";

/// Result of classifying a workspace filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub display_name: String,
    pub environment: Environment,
}

/// Classify a workspace filename by its environment marker.
///
/// A filename maps to exactly one environment: it must contain the
/// case-sensitive marker `[Win]` or `[WSL]`, but not both. Anything
/// else — no marker, both markers, wrong extension — returns `None`
/// and is expected to be excluded (and logged) by the caller.
///
/// The display name is the filename with the marker (and one adjacent
/// space, if present) and the `.code-workspace` extension removed.
pub fn classify(file_name: &str) -> Option<Classified> {
    let stem = file_name.strip_suffix(WORKSPACE_EXTENSION)?;

    let has_win = stem.contains(Environment::Windows.marker());
    let has_wsl = stem.contains(Environment::Wsl.marker());

    let environment = match (has_win, has_wsl) {
        (true, false) => Environment::Windows,
        (false, true) => Environment::Wsl,
        // Ambiguous or unmarked names are not launchable.
        _ => return None,
    };

    let display_name = strip_marker(stem, environment.marker());
    if display_name.is_empty() {
        return None;
    }

    Some(Classified {
        display_name,
        environment,
    })
}

fn strip_marker(stem: &str, marker: &str) -> String {
    let spaced = format!(" {}", marker);
    let stripped = if let Some(idx) = stem.find(&spaced) {
        let mut s = stem.to_string();
        s.replace_range(idx..idx + spaced.len(), "");
        s
    } else {
        stem.replacen(marker, "", 1)
    };
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Marker Classification ====================

    #[test]
    fn win_marker_classifies_as_windows() {
        let c = classify("Alpha [Win].code-workspace").unwrap();
        assert_eq!(c.environment, Environment::Windows);
        assert_eq!(c.display_name, "Alpha");
    }

    #[test]
    fn wsl_marker_classifies_as_wsl() {
        let c = classify("Proj [WSL].code-workspace").unwrap();
        assert_eq!(c.environment, Environment::Wsl);
        assert_eq!(c.display_name, "Proj");
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert!(classify("Alpha [win].code-workspace").is_none());
        assert!(classify("Alpha [wsl].code-workspace").is_none());
    }

    #[test]
    fn unmarked_name_is_excluded() {
        assert!(classify("Alpha.code-workspace").is_none());
    }

    #[test]
    fn both_markers_is_excluded() {
        assert!(classify("Alpha [Win] [WSL].code-workspace").is_none());
    }

    #[test]
    fn wrong_extension_is_excluded() {
        assert!(classify("Alpha [Win].txt").is_none());
        assert!(classify("Alpha [Win]").is_none());
    }

    // ==================== Display Names ====================

    #[test]
    fn marker_in_middle_is_stripped() {
        let c = classify("Alpha [Win] v2.code-workspace").unwrap();
        assert_eq!(c.display_name, "Alpha v2");
    }

    #[test]
    fn marker_without_space_is_stripped() {
        let c = classify("Alpha[Win].code-workspace").unwrap();
        assert_eq!(c.display_name, "Alpha");
    }

    #[test]
    fn marker_only_name_is_excluded() {
        assert!(classify("[Win].code-workspace").is_none());
        assert!(classify(" [WSL].code-workspace").is_none());
    }
}
