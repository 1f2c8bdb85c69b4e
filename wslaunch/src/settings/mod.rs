mod models;

pub use models::{PersistedState, Settings, WindowSize, REQUIRED_COMMANDS};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wslaunch_core::EditorVariant;

const CONFIG_FILE: &str = "config.json";
const STATE_FILE: &str = "state.json";

/// Owns the config directory: the read-only `config.json` and the
/// mutable `state.json`.
pub struct SettingsManager {
    config_path: PathBuf,
    state_path: PathBuf,
}

impl SettingsManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir().context("could not find config directory")?;
        Self::with_dir(config_dir.join("wslaunch"))
    }

    /// Use an explicit directory. Tests point this at a tempdir.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;

        Ok(Self {
            config_path: dir.join(CONFIG_FILE),
            state_path: dir.join(STATE_FILE),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load and validate the config, writing the default one on first
    /// run. Any failure here is fatal: without a valid config there is
    /// nothing to launch.
    pub fn load(&self) -> Result<Settings> {
        if !self.config_path.exists() {
            let defaults = Settings::default();
            let json = serde_json::to_string_pretty(&defaults)
                .context("failed to serialize default config")?;
            fs::write(&self.config_path, json).with_context(|| {
                format!("failed to write default config to {}", self.config_path.display())
            })?;
            info!(path = %self.config_path.display(), "wrote default config");
            return Ok(defaults);
        }

        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("failed to read {}", self.config_path.display()))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON in {}", self.config_path.display()))?;

        settings.validate()?;

        info!(path = %self.config_path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load persisted state; a missing or unreadable state file is not
    /// an error, just a fresh default.
    pub fn load_state(&self) -> PersistedState {
        if !self.state_path.exists() {
            return PersistedState::default();
        }

        match fs::read_to_string(&self.state_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    warn!(path = %self.state_path.display(), error = %e, "invalid state file, using defaults");
                    PersistedState::default()
                }
            },
            Err(e) => {
                warn!(path = %self.state_path.display(), error = %e, "unreadable state file, using defaults");
                PersistedState::default()
            }
        }
    }

    pub fn save_state(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).context("failed to serialize state")?;
        fs::write(&self.state_path, json)
            .with_context(|| format!("failed to write {}", self.state_path.display()))?;
        Ok(())
    }

    /// Persist a variant change immediately so the choice survives even
    /// if the process never exits cleanly.
    pub fn save_variant(&self, state: &mut PersistedState, variant: EditorVariant) {
        state.set_variant(variant);
        if let Err(e) = self.save_state(state) {
            warn!(error = %e, "failed to persist editor variant");
        }
    }

    pub fn save_window_size(&self, state: &mut PersistedState, size: WindowSize) {
        if state.window == Some(size) {
            return;
        }
        state.window = Some(size);
        if let Err(e) = self.save_state(state) {
            warn!(error = %e, "failed to persist window size");
        }
    }
}
