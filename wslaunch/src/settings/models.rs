use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use wslaunch_core::{command_key, EditorVariant, Environment};

/// The four launch templates every config must provide.
pub const REQUIRED_COMMANDS: [&str; 4] = [
    "wsl_command",
    "windows_command",
    "wsl_insiders_command",
    "windows_insiders_command",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub windows_workspaces_path: String,

    #[serde(default)]
    pub wsl_workspaces_path: String,

    #[serde(default)]
    pub launch_options: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            windows_workspaces_path: "H:/Development/VS Code workspaces".to_string(),
            wsl_workspaces_path: "/mnt/h/Development/VS Code workspaces".to_string(),
            launch_options: default_launch_options(),
        }
    }
}

fn default_launch_options() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("wsl_command".to_string(), "wsl code".to_string()),
        ("windows_command".to_string(), "code.cmd".to_string()),
        (
            "wsl_insiders_command".to_string(),
            "wsl code-insiders".to_string(),
        ),
        (
            "windows_insiders_command".to_string(),
            "code-insiders.cmd".to_string(),
        ),
    ])
}

impl Settings {
    /// All four launch commands are required and must be non-empty.
    /// Missing keys are a configuration error, never a silent default.
    pub fn validate(&self) -> Result<()> {
        for key in REQUIRED_COMMANDS {
            match self.launch_options.get(key) {
                None => bail!("config is missing required launch option '{}'", key),
                Some(template) if template.trim().is_empty() => {
                    bail!("launch option '{}' is empty", key)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Launch template for an environment/variant pair, if configured.
    pub fn launch_template(
        &self,
        environment: Environment,
        variant: EditorVariant,
    ) -> Option<&str> {
        self.launch_options
            .get(command_key(environment, variant))
            .map(String::as_str)
    }

    pub fn windows_root(&self) -> Option<PathBuf> {
        expand_root(&self.windows_workspaces_path)
    }

    pub fn wsl_root(&self) -> Option<PathBuf> {
        expand_root(&self.wsl_workspaces_path)
    }
}

/// An empty path disables that environment's root entirely.
fn expand_root(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(shellexpand::tilde(trimmed).as_ref()))
}

/// Mutable runtime state persisted separately from the read-only config:
/// the last-used editor variant and the last observed terminal size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default = "default_variant")]
    pub last_variant: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowSize>,
}

fn default_variant() -> String {
    EditorVariant::Standard.as_str().to_string()
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            last_variant: default_variant(),
            window: None,
        }
    }
}

impl PersistedState {
    pub fn variant(&self) -> EditorVariant {
        EditorVariant::from_str_lossy(&self.last_variant)
    }

    pub fn set_variant(&mut self, variant: EditorVariant) {
        self.last_variant = variant.as_str().to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u16,
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn missing_launch_option_fails_validation() {
        let mut settings = Settings::default();
        settings.launch_options.remove("windows_insiders_command");
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("windows_insiders_command"));
    }

    #[test]
    fn empty_launch_option_fails_validation() {
        let mut settings = Settings::default();
        settings
            .launch_options
            .insert("wsl_command".to_string(), "  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn empty_root_disables_environment() {
        let settings = Settings {
            windows_workspaces_path: String::new(),
            ..Settings::default()
        };
        assert!(settings.windows_root().is_none());
        assert!(settings.wsl_root().is_some());
    }

    #[test]
    fn template_lookup_uses_command_keys() {
        let settings = Settings::default();
        assert_eq!(
            settings.launch_template(Environment::Wsl, EditorVariant::Insiders),
            Some("wsl code-insiders")
        );
        assert_eq!(
            settings.launch_template(Environment::Windows, EditorVariant::Standard),
            Some("code.cmd")
        );
    }

    #[test]
    fn config_json_schema_parses() {
        let json = r#"{
            "windows_workspaces_path": "H:/ws",
            "wsl_workspaces_path": "/mnt/h/ws",
            "launch_options": {
                "wsl_command": "wsl code",
                "windows_command": "code.cmd",
                "wsl_insiders_command": "wsl code-insiders",
                "windows_insiders_command": "code-insiders.cmd"
            }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.windows_workspaces_path, "H:/ws");
    }

    #[test]
    fn state_defaults_to_standard() {
        let state = PersistedState::default();
        assert_eq!(state.variant(), EditorVariant::Standard);
        assert!(state.window.is_none());
    }

    #[test]
    fn state_round_trips_variant() {
        let mut state = PersistedState::default();
        state.set_variant(EditorVariant::Insiders);
        let json = serde_json::to_string(&state).unwrap();
        let reloaded: PersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.variant(), EditorVariant::Insiders);
    }
}
