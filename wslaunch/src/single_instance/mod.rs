use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use sysinfo::{Pid, System};
use tracing::{info, warn};

/// Capability for the OS-level "only one launcher at a time" guarantee.
/// Abstracted so startup logic can be tested against a fake that
/// simulates an already-held lock.
pub trait InstanceLock {
    /// Returns `Ok(false)` if another live instance holds the lock.
    fn try_acquire(&mut self) -> Result<bool>;
}

/// Lock file containing the holder's PID.
///
/// Acquisition fails only while the recorded PID belongs to a live
/// process; a leftover file from a crashed instance is replaced, so a
/// crash never wedges the launcher.
pub struct PidFileLock {
    path: PathBuf,
    held: bool,
}

impl PidFileLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            held: false,
        }
    }

    pub fn in_config_dir() -> Result<Self> {
        let config_dir = dirs::config_dir().context("could not find config directory")?;
        let dir = config_dir.join("wslaunch");
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        Ok(Self::new(dir.join("wslaunch.pid")))
    }
}

impl InstanceLock for PidFileLock {
    fn try_acquire(&mut self) -> Result<bool> {
        if let Ok(contents) = fs::read_to_string(&self.path) {
            match contents.trim().parse::<u32>() {
                Ok(pid) if process_alive(pid) => {
                    info!(pid, "another instance holds the lock");
                    return Ok(false);
                }
                Ok(pid) => {
                    warn!(pid, "stale lock file from a dead instance, replacing");
                }
                Err(_) => {
                    warn!(path = %self.path.display(), "unparseable lock file, replacing");
                }
            }
        }

        fs::write(&self.path, std::process::id().to_string())
            .with_context(|| format!("failed to write lock file {}", self.path.display()))?;
        self.held = true;
        Ok(true)
    }
}

impl Drop for PidFileLock {
    fn drop(&mut self) {
        if self.held {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "failed to remove lock file");
            }
        }
    }
}

fn process_alive(pid: u32) -> bool {
    let mut sys = System::new();
    sys.refresh_process(Pid::from_u32(pid));
    sys.process(Pid::from_u32(pid)).is_some()
}

#[cfg(test)]
pub struct FakeLock {
    pub already_held: bool,
}

#[cfg(test)]
impl InstanceLock for FakeLock {
    fn try_acquire(&mut self) -> Result<bool> {
        Ok(!self.already_held)
    }
}
