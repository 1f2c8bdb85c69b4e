use std::fmt;
use std::path::PathBuf;

/// Execution context a workspace file is intended to be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Windows,
    Wsl,
}

impl Environment {
    /// The literal filename marker for this environment.
    pub fn marker(self) -> &'static str {
        match self {
            Environment::Windows => "[Win]",
            Environment::Wsl => "[WSL]",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Windows => write!(f, "Windows"),
            Environment::Wsl => write!(f, "WSL"),
        }
    }
}

/// Choice between standard VS Code and the Insiders channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorVariant {
    #[default]
    Standard,
    Insiders,
}

impl EditorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorVariant::Standard => "standard",
            EditorVariant::Insiders => "insiders",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        if s.eq_ignore_ascii_case("insiders") {
            EditorVariant::Insiders
        } else {
            EditorVariant::Standard
        }
    }
}

impl fmt::Display for EditorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorVariant::Standard => write!(f, "Standard"),
            EditorVariant::Insiders => write!(f, "Insiders"),
        }
    }
}

/// Key into the `launch_options` table for an environment/variant pair.
pub fn command_key(environment: Environment, variant: EditorVariant) -> &'static str {
    match (environment, variant) {
        (Environment::Windows, EditorVariant::Standard) => "windows_command",
        (Environment::Windows, EditorVariant::Insiders) => "windows_insiders_command",
        (Environment::Wsl, EditorVariant::Standard) => "wsl_command",
        (Environment::Wsl, EditorVariant::Insiders) => "wsl_insiders_command",
    }
}

/// A launchable workspace file, classified and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceItem {
    /// Filename with the marker and extension stripped, for display.
    pub display_name: String,
    /// Original filename, used as the sort tiebreak.
    pub file_name: String,
    /// Absolute path, guaranteed by discovery to resolve under its root.
    pub path: PathBuf,
    pub environment: Environment,
}
